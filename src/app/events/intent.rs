use crate::core::PointerButton;
use crate::shared::RenderQuality;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Maustaste über der Zeichenfläche gedrückt (Position relativ zur Fläche)
    PointerPressed {
        button: PointerButton,
        pos: glam::Vec2,
    },
    /// Maus bewegt (Position relativ zur Zeichenfläche)
    PointerMoved { pos: glam::Vec2 },
    /// Maustaste losgelassen
    PointerReleased { button: PointerButton },
    /// Alle Kontrollpunkte selektieren (Ctrl+A)
    SelectAllRequested,
    /// Abtast-Qualität der Kurve ändern
    RenderQualityChanged { quality: RenderQuality },
    /// Anwendung beenden (Escape)
    ExitRequested,
}
