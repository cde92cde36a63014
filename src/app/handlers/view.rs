//! Handler für Darstellungs-Einstellungen.

use crate::app::AppState;
use crate::shared::RenderQuality;

/// Setzt die Abtast-Qualität und markiert die Kurve zum Neuaufbau.
pub fn set_render_quality(state: &mut AppState, quality: RenderQuality) {
    if state.view.render_quality == quality {
        return;
    }
    log::info!("Render-Qualität: {}", quality.label());
    state.view.render_quality = quality;
    state.curve.invalidate();
}
