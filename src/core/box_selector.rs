//! Rechteck-Selektion (Gummiband) mit Anker und vorzeichenbehafteter Ausdehnung.

use super::geometry::Bounds;
use glam::Vec2;

/// Verfolgt ein Selektions-Rechteck vom Klickpunkt bis zur aktuellen Mausposition.
///
/// Die Ausdehnung darf in beiden Achsen negativ sein; Containment-Tests
/// arbeiten immer auf normalisierten Grenzen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxSelector {
    anchor: Vec2,
    extent: Vec2,
}

impl BoxSelector {
    /// Erstellt einen leeren Selektor am Ursprung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine neue Selektion am gegebenen Punkt (Ausdehnung = 0).
    pub fn start(&mut self, point: Vec2) {
        self.anchor = point;
        self.extent = Vec2::ZERO;
    }

    /// Zieht das Rechteck bis zum gegebenen Punkt auf.
    pub fn update(&mut self, point: Vec2) {
        self.extent = point - self.anchor;
    }

    /// Anker der aktuellen Selektion.
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Vorzeichenbehaftete Ausdehnung vom Anker zur aktuellen Position.
    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    /// Normalisierte Grenzen des Rechtecks.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.anchor, self.anchor + self.extent)
    }

    /// True wenn das Rechteck keine Fläche hat.
    pub fn is_empty(&self) -> bool {
        self.bounds().is_degenerate()
    }

    /// Schließt die Selektion ab und gibt die Indizes aller enthaltenen Kandidaten zurück.
    ///
    /// Die Reihenfolge folgt der Kandidaten-Reihenfolge. Ein Rechteck ohne Fläche
    /// selektiert nichts. Danach ist die Ausdehnung wieder 0.
    pub fn finish(&mut self, candidates: impl IntoIterator<Item = (usize, Vec2)>) -> Vec<usize> {
        let bounds = self.bounds();
        let hits = if bounds.is_degenerate() {
            Vec::new()
        } else {
            candidates
                .into_iter()
                .filter(|(_, position)| bounds.contains(*position))
                .map(|(index, _)| index)
                .collect()
        };
        self.extent = Vec2::ZERO;
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<(usize, Vec2)> {
        vec![(0, Vec2::new(5.0, 5.0)), (1, Vec2::new(50.0, 50.0))]
    }

    #[test]
    fn small_box_selects_only_inner_point() {
        let mut selector = BoxSelector::new();
        selector.start(Vec2::ZERO);
        selector.update(Vec2::new(10.0, 10.0));
        assert_eq!(selector.finish(candidates()), vec![0]);
    }

    #[test]
    fn growing_box_selects_both_points() {
        let mut selector = BoxSelector::new();
        selector.start(Vec2::ZERO);
        selector.update(Vec2::new(10.0, 10.0));
        selector.update(Vec2::new(60.0, 60.0));
        assert_eq!(selector.finish(candidates()), vec![0, 1]);
    }

    #[test]
    fn zero_size_box_selects_nothing() {
        let mut selector = BoxSelector::new();
        selector.start(Vec2::ZERO);
        assert!(selector.is_empty());
        assert!(selector.finish(candidates()).is_empty());

        // Auch ein Punkt exakt auf dem Anker wird nicht erfasst
        selector.start(Vec2::new(5.0, 5.0));
        assert!(selector.finish(candidates()).is_empty());
    }

    #[test]
    fn negative_extent_still_contains_points() {
        let mut selector = BoxSelector::new();
        selector.start(Vec2::new(50.0, 50.0));
        selector.update(Vec2::ZERO);
        assert_eq!(selector.extent(), Vec2::new(-50.0, -50.0));

        let hits = selector.finish(vec![(3, Vec2::new(10.0, 10.0))]);
        assert_eq!(hits, vec![3]);
    }

    #[test]
    fn mixed_sign_extent_is_normalized() {
        let mut selector = BoxSelector::new();
        selector.start(Vec2::new(20.0, 0.0));
        selector.update(Vec2::new(0.0, 20.0));
        let bounds = selector.bounds();
        assert_eq!(bounds.min, Vec2::new(0.0, 0.0));
        assert_eq!(bounds.max, Vec2::new(20.0, 20.0));
        assert_eq!(selector.finish(vec![(0, Vec2::new(10.0, 10.0))]), vec![0]);
    }

    #[test]
    fn boundary_points_are_included() {
        let mut selector = BoxSelector::new();
        selector.start(Vec2::ZERO);
        selector.update(Vec2::new(50.0, 50.0));
        assert_eq!(selector.finish(candidates()), vec![0, 1]);
    }

    #[test]
    fn finish_resets_extent_but_keeps_anchor() {
        let mut selector = BoxSelector::new();
        selector.start(Vec2::new(1.0, 2.0));
        selector.update(Vec2::new(30.0, 40.0));
        let _ = selector.finish(candidates());
        assert_eq!(selector.extent(), Vec2::ZERO);
        assert_eq!(selector.anchor(), Vec2::new(1.0, 2.0));
        assert!(selector.is_empty());
    }

    #[test]
    fn result_follows_candidate_order() {
        let mut selector = BoxSelector::new();
        selector.start(Vec2::new(-100.0, -100.0));
        selector.update(Vec2::new(100.0, 100.0));
        let hits = selector.finish((0..5).map(|i| (i, Vec2::splat(i as f32))));
        assert_eq!(hits, vec![0, 1, 2, 3, 4]);
    }
}
