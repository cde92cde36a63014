//! Viewport-Input-Handling: rohe egui-Pointer-Events → AppIntent.
//!
//! Positionen werden relativ zur linken oberen Ecke der Zeichenfläche
//! weitergegeben. Drücken zählt nur innerhalb der Fläche; Bewegen und
//! Loslassen werden immer durchgereicht, damit ein Drag auch außerhalb endet.

use crate::app::AppIntent;
use crate::core::PointerButton;

/// Übersetzt eine egui-Maustaste. Zusatztasten werden ignoriert.
fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        egui::PointerButton::Extra1 | egui::PointerButton::Extra2 => None,
    }
}

/// Rechnet eine Bildschirmposition in Zeichenflächen-Koordinaten um.
pub(crate) fn screen_to_canvas(pos: egui::Pos2, canvas: egui::Rect) -> glam::Vec2 {
    glam::Vec2::new(pos.x - canvas.min.x, pos.y - canvas.min.y)
}

/// Übersetzt ein einzelnes egui-Event in einen Pointer-Intent.
pub(crate) fn pointer_intent(event: &egui::Event, canvas: egui::Rect) -> Option<AppIntent> {
    match event {
        egui::Event::PointerMoved(pos) => Some(AppIntent::PointerMoved {
            pos: screen_to_canvas(*pos, canvas),
        }),
        egui::Event::PointerButton {
            pos,
            button,
            pressed: true,
            ..
        } => {
            if !canvas.contains(*pos) {
                return None;
            }
            map_button(*button).map(|button| AppIntent::PointerPressed {
                button,
                pos: screen_to_canvas(*pos, canvas),
            })
        }
        egui::Event::PointerButton {
            button,
            pressed: false,
            ..
        } => map_button(*button).map(|button| AppIntent::PointerReleased { button }),
        _ => None,
    }
}

/// Sammelt alle Pointer-Events dieses Frames in Ankunftsreihenfolge.
pub fn collect_viewport_events(ui: &egui::Ui, response: &egui::Response) -> Vec<AppIntent> {
    let canvas = response.rect;
    ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| pointer_intent(event, canvas))
            .collect()
    })
}

#[cfg(test)]
mod tests;
