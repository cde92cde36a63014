//! Core-Domänentypen: Geometrie, Kurvenauswertung, Kontrollpunkte, Rechteck-Selektion.
//!
//! Dieses Modul hat keine Abhängigkeit auf egui und ist vollständig headless testbar.

pub mod bezier;
pub mod box_selector;
pub mod control_point;
/// Kontrollpunkt-Menge und Interaktions-Zustandsautomat
///
/// Einziger Besitzer der Punkt-Positionen, Selektions-Marker und des
/// Selektions-Rechtecks.
pub mod control_point_set;
pub mod degree;
pub mod geometry;

pub use box_selector::BoxSelector;
pub use control_point::{ControlPoint, SelectionMarker};
pub use control_point_set::{
    ControlPointSet, Interaction, PointerButton, PointerEvent, DEFAULT_HIT_RADIUS,
};
pub use degree::CurveDegree;
pub use geometry::Bounds;
