//! Zentrale Konfiguration für den Bézier-Editor.
//!
//! `EditorOptions` enthält alle beim Start ladbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::RenderQuality;
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Layout ──────────────────────────────────────────────────────────

/// Zentrum des Start-Kreises (Pixel, relativ zur Zeichenfläche).
pub const LAYOUT_CENTER: [f32; 2] = [400.0, 300.0];
/// Radius des Start-Kreises (Pixel).
pub const LAYOUT_RADIUS: f32 = 200.0;

// ── Kontrollpunkte ─────────────────────────────────────────────────

/// Darstellungs-Radius eines Kontrollpunkts.
pub const POINT_RADIUS: f32 = 10.0;
/// Hitbox-Radius für Klick-Tests.
pub const HIT_RADIUS: f32 = 10.0;
/// Outline-Stärke der Kontrollpunkte.
pub const POINT_OUTLINE: f32 = 2.0;
/// Füllfarbe unselektierter Punkte (RGBA: Weiß).
pub const POINT_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Füllfarbe selektierter Punkte (RGBA: halbtransparentes Grau).
pub const POINT_COLOR_SELECTED: [u8; 4] = [127, 127, 127, 127];
/// Outline-Farbe (RGBA: Schwarz).
pub const POINT_OUTLINE_COLOR: [u8; 4] = [0, 0, 0, 255];

// ── Beschriftung ───────────────────────────────────────────────────

/// Horizontaler Abstand der `P<i>`-Beschriftung vom Punkt-Zentrum.
pub const LABEL_OFFSET_X: f32 = 13.0;
/// Schriftgröße der Beschriftung.
pub const LABEL_FONT_SIZE: f32 = 20.0;
/// Textfarbe (RGBA: Schwarz).
pub const LABEL_COLOR: [u8; 4] = [0, 0, 0, 255];

// ── Hilfslinien & Kurve ────────────────────────────────────────────

/// Stärke der Verbindungslinien zwischen aufeinanderfolgenden Punkten.
pub const GUIDE_THICKNESS: f32 = 6.0;
/// Farbe der Verbindungslinien (RGBA: halbtransparentes Grau).
pub const GUIDE_COLOR: [u8; 4] = [127, 127, 127, 127];
/// Linienstärke der Kurve.
pub const CURVE_THICKNESS: f32 = 4.0;
/// Farbe der Kurve (RGBA: Blau).
pub const CURVE_COLOR: [u8; 4] = [0, 0, 255, 255];

// ── Selektion ───────────────────────────────────────────────────────

/// Füllfarbe des Selektions-Rechtecks (RGBA).
pub const SELECTION_FILL_COLOR: [u8; 4] = [127, 127, 127, 200];

// ── Hintergrund ─────────────────────────────────────────────────────

/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Alle beim Start ladbaren Editor-Optionen.
/// Wird als `bezier_editor.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Layout ──────────────────────────────────────────────────
    /// Zentrum des Start-Kreises
    pub layout_center: [f32; 2],
    /// Radius des Start-Kreises
    pub layout_radius: f32,

    // ── Kontrollpunkte ──────────────────────────────────────────
    /// Darstellungs-Radius
    pub point_radius: f32,
    /// Hitbox-Radius für Klick-Tests
    pub hit_radius: f32,
    /// Outline-Stärke
    pub point_outline: f32,
    pub point_color: [u8; 4],
    pub point_color_selected: [u8; 4],
    pub point_outline_color: [u8; 4],

    // ── Beschriftung ────────────────────────────────────────────
    pub label_offset_x: f32,
    pub label_font_size: f32,
    pub label_color: [u8; 4],

    // ── Hilfslinien & Kurve ─────────────────────────────────────
    pub guide_thickness: f32,
    pub guide_color: [u8; 4],
    pub curve_thickness: f32,
    pub curve_color: [u8; 4],

    // ── Selektion & Hintergrund ─────────────────────────────────
    pub selection_fill_color: [u8; 4],
    pub background_color: [u8; 4],

    /// Start-Qualität der Kurven-Abtastung
    pub render_quality: RenderQuality,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            layout_center: LAYOUT_CENTER,
            layout_radius: LAYOUT_RADIUS,

            point_radius: POINT_RADIUS,
            hit_radius: HIT_RADIUS,
            point_outline: POINT_OUTLINE,
            point_color: POINT_COLOR,
            point_color_selected: POINT_COLOR_SELECTED,
            point_outline_color: POINT_OUTLINE_COLOR,

            label_offset_x: LABEL_OFFSET_X,
            label_font_size: LABEL_FONT_SIZE,
            label_color: LABEL_COLOR,

            guide_thickness: GUIDE_THICKNESS,
            guide_color: GUIDE_COLOR,
            curve_thickness: CURVE_THICKNESS,
            curve_color: CURVE_COLOR,

            selection_fill_color: SELECTION_FILL_COLOR,
            background_color: BACKGROUND_COLOR,

            render_quality: RenderQuality::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_editor.toml")
    }

    /// Zentrum des Start-Kreises als Vektor.
    pub fn layout_center(&self) -> glam::Vec2 {
        glam::Vec2::from(self.layout_center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "bezier_editor_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn save_and_load_preserves_values() {
        let path = temp_path("roundtrip");
        let mut options = EditorOptions::default();
        options.layout_radius = 123.0;
        options.render_quality = RenderQuality::Low;
        options.save_to_file(&path).expect("Speichern muss klappen");

        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, options);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let loaded = EditorOptions::load_from_file(&temp_path("does_not_exist"));
        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let path = temp_path("malformed");
        std::fs::write(&path, "layout_radius = \"kein float\"").expect("Datei schreibbar");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "hit_radius = 14.0\n").expect("Datei schreibbar");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.hit_radius, 14.0);
        assert_eq!(loaded.layout_radius, LAYOUT_RADIUS);
    }
}
