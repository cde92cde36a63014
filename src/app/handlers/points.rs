//! Handler für Kontrollpunkt-Interaktion und Selektion.

use crate::app::AppState;
use crate::core::PointerEvent;
use anyhow::bail;

/// Reicht ein Pointer-Event an den Kontrollpunkt-Automaten weiter.
///
/// Nicht-endliche Positionen werden abgelehnt, damit keine NaN-Koordinaten
/// in die Punkt-Arena gelangen.
pub fn apply_pointer_event(state: &mut AppState, event: PointerEvent) -> anyhow::Result<()> {
    let pos = match event {
        PointerEvent::Down { pos, .. } | PointerEvent::Move { pos } => Some(pos),
        PointerEvent::Up { .. } => None,
    };
    if let Some(pos) = pos {
        if !pos.is_finite() {
            bail!("Ungültige Pointer-Position: {pos}");
        }
    }

    state.points.handle_event(event);
    Ok(())
}

/// Selektiert alle Kontrollpunkte.
pub fn select_all(state: &mut AppState) {
    state.points.select_all();
}
