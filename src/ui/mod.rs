//! UI-Layer mit egui: Status-Bar, Input-Handling, Start-Abfrage.
//!
//! Übersetzt rohe egui-Events in `AppIntent`s. Keyboard-Shortcuts und
//! Pointer-Events sind in eigene Dateien extrahiert.

pub mod input;
mod keyboard;
/// Kurvengrad aus Kommandozeile oder Textmenü
pub mod startup;
pub mod status;

pub use input::collect_viewport_events;
pub use startup::{prompt_degree, resolve_degree};
pub use status::render_status_bar;

/// Sammelt alle Keyboard-Intents des aktuellen Frames.
pub fn collect_keyboard_events(ui: &egui::Ui) -> Vec<crate::app::AppIntent> {
    keyboard::collect_keyboard_intents(ui)
}
