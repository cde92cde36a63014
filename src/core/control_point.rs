//! Einzelner Kontrollpunkt mit stabiler Ordnungsnummer.

use glam::Vec2;

/// Visueller Selektions-Marker eines Kontrollpunkts (beeinflusst die Kurve nicht).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMarker {
    #[default]
    Unselected,
    Selected,
}

/// Kontrollpunkt einer Bézier-Kurve.
///
/// Der Index legt die Reihenfolge in der Kurven-Parametrisierung fest und
/// ändert sich nie. Mutiert wird ausschließlich über `ControlPointSet`.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    position: Vec2,
    index: usize,
    marker: SelectionMarker,
}

impl ControlPoint {
    /// Erstellt einen unselektierten Kontrollpunkt.
    pub fn new(index: usize, position: Vec2) -> Self {
        Self {
            position,
            index,
            marker: SelectionMarker::Unselected,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn marker(&self) -> SelectionMarker {
        self.marker
    }

    pub fn is_selected(&self) -> bool {
        self.marker == SelectionMarker::Selected
    }

    /// Beschriftung für das Overlay (`P0`, `P1`, ...).
    pub fn label(&self) -> String {
        format!("P{}", self.index)
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub(crate) fn set_marker(&mut self, marker: SelectionMarker) {
        self.marker = marker;
    }
}
