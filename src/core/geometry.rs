//! Geometrie-Primitive: achsenparallele Rechtecke und Kreis-Layout.

use glam::Vec2;

/// Achsenparalleles Rechteck mit normalisierten Grenzen (`min <= max`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Linke obere Ecke (kleinste Koordinaten)
    pub min: Vec2,
    /// Rechte untere Ecke (größte Koordinaten)
    pub max: Vec2,
}

impl Bounds {
    /// Baut ein Rechteck aus zwei beliebigen Ecken (Reihenfolge egal).
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let (min, max) = rect_min_max(a, b);
        Self { min, max }
    }

    /// Breite des Rechtecks (immer >= 0).
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Höhe des Rechtecks (immer >= 0).
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// True wenn das Rechteck keine Fläche hat (Breite oder Höhe = 0).
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Punkt-im-Rechteck-Test inklusive Rand.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Normalisiert zwei Ecken zu (min, max).
pub fn rect_min_max(a: Vec2, b: Vec2) -> (Vec2, Vec2) {
    (a.min(b), a.max(b))
}

/// Verteilt `count` Punkte gleichmäßig auf einem Kreis.
///
/// Punkt `i` liegt bei Winkel `2π·i/count` auf `center + radius·(sin, cos)`,
/// d.h. Punkt 0 liegt direkt unterhalb des Zentrums (Bildschirm-Y nach unten).
pub fn circle_layout(count: usize, center: Vec2, radius: f32) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / count as f32;
            center + radius * Vec2::new(angle.sin(), angle.cos())
        })
        .collect()
}
