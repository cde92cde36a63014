use crate::core::PointerEvent;
use crate::shared::RenderQuality;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Pointer-Event an den Kontrollpunkt-Automaten weiterreichen
    ApplyPointerEvent { event: PointerEvent },
    /// Alle Kontrollpunkte selektieren
    SelectAllPoints,
    /// Abtast-Qualität setzen (erzwingt Neuaufbau der Kurve)
    SetRenderQuality { quality: RenderQuality },
    /// Anwendung kontrolliert beenden
    RequestExit,
}
