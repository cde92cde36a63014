//! Bezier Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, ViewState};
pub use core::{
    BoxSelector, ControlPoint, ControlPointSet, CurveDegree, Interaction, PointerButton,
    PointerEvent, SelectionMarker,
};
pub use shared::{EditorOptions, RenderQuality, RenderScene};
