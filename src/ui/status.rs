//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState};
use crate::shared::RenderQuality;

/// Rendert die Status-Bar und gibt ausgelöste Intents zurück.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Curve: {}", state.degree.label()));

            ui.separator();

            ui.label(format!(
                "Points: {} | Selected: {}",
                state.point_count(),
                state.selected_count()
            ));

            ui.separator();

            ui.label(format!("Length: {:.1}", state.curve.length()));

            ui.separator();

            let mut quality = state.view.render_quality;
            egui::ComboBox::from_id_salt("render_quality")
                .selected_text(format!("Quality: {}", quality.label()))
                .show_ui(ui, |ui| {
                    for option in RenderQuality::ALL {
                        ui.selectable_value(&mut quality, option, option.label());
                    }
                });
            if quality != state.view.render_quality {
                events.push(AppIntent::RenderQualityChanged { quality });
            }
        });
    });

    events
}
