//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod curve_cache;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Kontrollpunkte, Kurve, Optionen).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use curve_cache::CurveCache;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, ViewState};
