//! Application State: zentrale Datenhaltung der Sitzung.

use super::{CommandLog, CurveCache};
use crate::core::{ControlPointSet, CurveDegree};
use crate::shared::{EditorOptions, RenderQuality};

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Abtast-Qualität der Kurve
    pub render_quality: RenderQuality,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Grad der Kurve (fest für die Sitzung)
    pub degree: CurveDegree,
    /// Kontrollpunkte inkl. Selektion und Interaktions-Automat
    pub points: ControlPointSet,
    /// Zwischengespeicherte Kurven-Polylinie
    pub curve: CurveCache,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Beim Start geladene Optionen (Farben, Größen, Layout)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Sitzungszustand: `degree + 1` Punkte auf dem Start-Kreis.
    pub fn new(degree: CurveDegree, options: EditorOptions) -> Self {
        let points =
            ControlPointSet::on_circle(degree, options.layout_center(), options.layout_radius)
                .with_hit_radius(options.hit_radius);

        Self {
            degree,
            points,
            curve: CurveCache::new(),
            view: ViewState {
                render_quality: options.render_quality,
            },
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl der Kontrollpunkte (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der selektierten Kontrollpunkte (für UI-Anzeige)
    pub fn selected_count(&self) -> usize {
        self.points.selected_indices().len()
    }
}
