//! Render-Qualitätsstufen für die Kurven-Abtastung (shared zwischen App und UI).

use serde::{Deserialize, Serialize};

/// Qualitätsstufe der Kurven-Polylinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderQuality {
    /// Grobe Abtastung (schnellste Darstellung)
    Low,
    /// Mittlere Abtastung
    Medium,
    /// Feinste Abtastung (beste Darstellung)
    #[default]
    High,
}

impl RenderQuality {
    /// Alle Stufen in aufsteigender Qualität (für Auswahl-Widgets).
    pub const ALL: [RenderQuality; 3] = [Self::Low, Self::Medium, Self::High];

    /// Parameter-Schrittweite `Δt` beim Abtasten der Kurve.
    pub fn sample_step(self) -> f32 {
        match self {
            Self::Low => 0.01,
            Self::Medium => 0.005,
            Self::High => 0.001,
        }
    }

    /// Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}
