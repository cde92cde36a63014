//! Zwischengespeicherte Kurven-Polylinie.
//!
//! Wird nur neu abgetastet, wenn sich Kontrollpunkte bewegt haben oder die
//! Abtast-Qualität geändert wurde.

use crate::core::bezier;
use glam::Vec2;
use std::sync::Arc;

/// Abgetastete Kurve plus abgeleitete Kennzahlen.
#[derive(Debug, Clone, Default)]
pub struct CurveCache {
    polyline: Arc<Vec<Vec2>>,
    length: f32,
    stale: bool,
    rebuild_count: u64,
}

impl CurveCache {
    /// Erstellt einen leeren Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tastet die Kurve vollständig neu ab.
    pub fn rebuild(&mut self, control_points: &[Vec2], step: f32) {
        let polyline = bezier::sample_polyline(control_points, step);
        self.length = bezier::approx_length(&polyline);
        self.polyline = Arc::new(polyline);
        self.stale = false;
        self.rebuild_count += 1;
        log::debug!(
            "Kurve neu abgetastet: {} Punkte, Länge {:.1}",
            self.polyline.len(),
            self.length
        );
    }

    /// Erzwingt einen Neuaufbau beim nächsten Refresh (z.B. nach Qualitätswechsel).
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Aktuelle Polylinie (Arc für O(1)-Clone in RenderScene).
    pub fn polyline(&self) -> &Arc<Vec<Vec2>> {
        &self.polyline
    }

    /// Approximierte Länge der aktuellen Polylinie.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Anzahl bisheriger Neuaufbauten.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }
}
