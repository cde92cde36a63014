//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderScene, ScenePoint};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let points = state
        .points
        .points()
        .iter()
        .map(|point| ScenePoint {
            position: point.position(),
            marker: point.marker(),
            label: point.label(),
        })
        .collect();

    RenderScene {
        points,
        selection_bounds: state.points.selection_bounds(),
        curve: state.curve.polyline().clone(),
        degree: state.degree,
        curve_length: state.curve.length(),
        options: state.options.clone(),
    }
}
