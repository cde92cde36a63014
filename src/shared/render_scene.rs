//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Bounds, CurveDegree, SelectionMarker};
use std::sync::Arc;

/// Darstellungsdaten eines Kontrollpunkts.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePoint {
    pub position: glam::Vec2,
    pub marker: SelectionMarker,
    pub label: String,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in Index-Reihenfolge
    pub points: Vec<ScenePoint>,
    /// Selektions-Rechteck (nur während Rechteck-Selektion)
    pub selection_bounds: Option<Bounds>,
    /// Abgetastete Kurve (Arc für O(1)-Clone pro Frame)
    pub curve: Arc<Vec<glam::Vec2>>,
    /// Grad der Kurve
    pub degree: CurveDegree,
    /// Näherungsweise Länge der Polylinie
    pub curve_length: f32,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Positionen für die Hilfslinien zwischen aufeinanderfolgenden Punkten.
    pub fn guide_segments(&self) -> impl Iterator<Item = (glam::Vec2, glam::Vec2)> + '_ {
        self.points
            .windows(2)
            .map(|pair| (pair[0].position, pair[1].position))
    }
}
