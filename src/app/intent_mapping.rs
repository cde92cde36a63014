//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::PointerEvent;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { button, pos } => vec![AppCommand::ApplyPointerEvent {
            event: PointerEvent::Down { button, pos },
        }],
        AppIntent::PointerMoved { pos } => vec![AppCommand::ApplyPointerEvent {
            event: PointerEvent::Move { pos },
        }],
        AppIntent::PointerReleased { button } => vec![AppCommand::ApplyPointerEvent {
            event: PointerEvent::Up { button },
        }],
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAllPoints],
        AppIntent::RenderQualityChanged { quality } => {
            vec![AppCommand::SetRenderQuality { quality }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CurveDegree, PointerButton};
    use crate::shared::{EditorOptions, RenderQuality};

    fn state() -> AppState {
        AppState::new(CurveDegree::QUADRATIC, EditorOptions::default())
    }

    #[test]
    fn pointer_intents_map_to_pointer_events() {
        let state = state();
        let pos = glam::Vec2::new(3.0, 4.0);

        assert_eq!(
            map_intent_to_commands(
                &state,
                AppIntent::PointerPressed {
                    button: PointerButton::Secondary,
                    pos
                }
            ),
            vec![AppCommand::ApplyPointerEvent {
                event: PointerEvent::Down {
                    button: PointerButton::Secondary,
                    pos
                }
            }]
        );
        assert_eq!(
            map_intent_to_commands(&state, AppIntent::PointerMoved { pos }),
            vec![AppCommand::ApplyPointerEvent {
                event: PointerEvent::Move { pos }
            }]
        );
        assert_eq!(
            map_intent_to_commands(
                &state,
                AppIntent::PointerReleased {
                    button: PointerButton::Primary
                }
            ),
            vec![AppCommand::ApplyPointerEvent {
                event: PointerEvent::Up {
                    button: PointerButton::Primary
                }
            }]
        );
    }

    #[test]
    fn control_intents_map_one_to_one() {
        let state = state();
        assert_eq!(
            map_intent_to_commands(&state, AppIntent::SelectAllRequested),
            vec![AppCommand::SelectAllPoints]
        );
        assert_eq!(
            map_intent_to_commands(
                &state,
                AppIntent::RenderQualityChanged {
                    quality: RenderQuality::Low
                }
            ),
            vec![AppCommand::SetRenderQuality {
                quality: RenderQuality::Low
            }]
        );
        assert_eq!(
            map_intent_to_commands(&state, AppIntent::ExitRequested),
            vec![AppCommand::RequestExit]
        );
    }
}
