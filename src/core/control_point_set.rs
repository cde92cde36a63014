//! Kontrollpunkt-Menge mit Interaktions-Zustandsautomat.
//!
//! Verarbeitet Pointer-Events in Ankunftsreihenfolge:
//! - Linksklick auf Punkt → Einzel-Drag (unselektiert) oder Gruppen-Drag (selektiert)
//! - Linksklick ins Leere → Rechteck-Selektion bis zum Loslassen
//! - Rechtsklick → Selektion aufheben (nicht während Rechteck-Selektion)
//!
//! Die Punkt-Arena hat feste Länge; Indizes entstehen nur durch Iteration über sie.

use super::box_selector::BoxSelector;
use super::control_point::{ControlPoint, SelectionMarker};
use super::degree::CurveDegree;
use super::geometry::{circle_layout, Bounds};
use anyhow::bail;
use glam::Vec2;
use indexmap::IndexSet;

/// Standard-Hitbox-Radius eines Kontrollpunkts (Pixel).
pub const DEFAULT_HIT_RADIUS: f32 = 10.0;

/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Eingabe-Event für den Zustandsautomaten (Geräte-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Taste gedrückt an Position
    Down { button: PointerButton, pos: Vec2 },
    /// Maus bewegt
    Move { pos: Vec2 },
    /// Taste losgelassen
    Up { button: PointerButton },
}

/// Zustand der laufenden Interaktion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Ein unselektierter Punkt wird allein gezogen
    DraggingSingle { active: usize },
    /// Ein selektierter Punkt zieht die ganze Gruppe starr mit
    DraggingGroup { active: usize, members: Vec<usize> },
    /// Gummiband-Rechteck wird aufgezogen
    BoxSelecting,
}

/// Besitzt alle Kontrollpunkte, die Selektion und den Interaktions-Zustand.
#[derive(Debug, Clone)]
pub struct ControlPointSet {
    points: Vec<ControlPoint>,
    selected: IndexSet<usize>,
    interaction: Interaction,
    box_selector: BoxSelector,
    hit_radius: f32,
    changed: bool,
}

impl ControlPointSet {
    /// Verteilt `degree + 1` Punkte gleichmäßig auf einem Kreis.
    pub fn on_circle(degree: CurveDegree, center: Vec2, radius: f32) -> Self {
        let positions = circle_layout(degree.control_point_count(), center, radius);
        Self::build(positions)
    }

    /// Erstellt die Menge aus expliziten Positionen (mindestens zwei).
    pub fn from_positions(positions: impl IntoIterator<Item = Vec2>) -> anyhow::Result<Self> {
        let positions: Vec<Vec2> = positions.into_iter().collect();
        if positions.len() < 2 {
            bail!(
                "Eine Bézier-Kurve braucht mindestens 2 Kontrollpunkte (erhalten: {})",
                positions.len()
            );
        }
        Ok(Self::build(positions))
    }

    fn build(positions: Vec<Vec2>) -> Self {
        let points = positions
            .into_iter()
            .enumerate()
            .map(|(index, position)| ControlPoint::new(index, position))
            .collect();
        Self {
            points,
            selected: IndexSet::new(),
            interaction: Interaction::Idle,
            box_selector: BoxSelector::new(),
            hit_radius: DEFAULT_HIT_RADIUS,
            // Erster Frame soll die Kurve aufbauen
            changed: true,
        }
    }

    /// Setzt den Hitbox-Radius für Klick-Tests.
    pub fn with_hit_radius(mut self, hit_radius: f32) -> Self {
        self.hit_radius = hit_radius.max(0.0);
        self
    }

    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }

    /// Alle Kontrollpunkte in Index-Reihenfolge.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Aktuelle Positionen in Index-Reihenfolge (Eingabe für die Kurvenauswertung).
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(ControlPoint::position).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Persistente Selektion (aufsteigend sortiert).
    pub fn selected_indices(&self) -> &IndexSet<usize> {
        &self.selected
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Grenzen des Selektions-Rechtecks, solange eine Rechteck-Selektion läuft.
    pub fn selection_bounds(&self) -> Option<Bounds> {
        (self.interaction == Interaction::BoxSelecting).then(|| self.box_selector.bounds())
    }

    /// Einmal-Abfrage: wurde seit dem letzten Aufruf ein Punkt bewegt?
    ///
    /// Setzt das Flag zurück. Es darf nur einen Konsumenten geben.
    pub fn was_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Erster Punkt (aufsteigender Index), dessen Hitbox die Position enthält.
    pub fn hit_test(&self, pos: Vec2) -> Option<usize> {
        self.points
            .iter()
            .find(|point| point.position().distance(pos) <= self.hit_radius)
            .map(ControlPoint::index)
    }

    /// Selektiert alle Punkte.
    pub fn select_all(&mut self) {
        for point in &mut self.points {
            point.set_marker(SelectionMarker::Selected);
            self.selected.insert(point.index());
        }
        self.selected.sort();
    }

    /// Verarbeitet ein einzelnes Pointer-Event.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                button: PointerButton::Primary,
                pos,
            } => self.on_primary_down(pos),
            PointerEvent::Down {
                button: PointerButton::Secondary,
                ..
            } => self.on_secondary_down(),
            PointerEvent::Move { pos } => self.on_move(pos),
            PointerEvent::Up {
                button: PointerButton::Primary,
            } => self.on_primary_up(),
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => {}
        }
    }

    fn on_primary_down(&mut self, pos: Vec2) {
        if self.interaction != Interaction::Idle {
            return;
        }

        self.interaction = match self.hit_test(pos) {
            Some(active) if self.selected.contains(&active) => {
                let members: Vec<usize> = self.selected.iter().copied().collect();
                log::debug!(
                    "Gruppen-Drag gestartet: P{} mit {} Punkten",
                    active,
                    members.len()
                );
                Interaction::DraggingGroup { active, members }
            }
            Some(active) => {
                log::debug!("Einzel-Drag gestartet: P{}", active);
                Interaction::DraggingSingle { active }
            }
            None => {
                self.box_selector.start(pos);
                Interaction::BoxSelecting
            }
        };
    }

    fn on_secondary_down(&mut self) {
        if self.interaction == Interaction::BoxSelecting {
            return;
        }
        self.clear_selection();
    }

    fn on_move(&mut self, pos: Vec2) {
        match &self.interaction {
            Interaction::Idle => {}
            Interaction::BoxSelecting => self.box_selector.update(pos),
            Interaction::DraggingSingle { active } => {
                self.points[*active].set_position(pos);
                self.changed = true;
            }
            Interaction::DraggingGroup { active, members } => {
                let active = *active;
                let delta = pos - self.points[active].position();
                for &member in members.iter().filter(|&&m| m != active) {
                    self.points[member].translate(delta);
                }
                self.points[active].set_position(pos);
                self.changed = true;
            }
        }
    }

    fn on_primary_up(&mut self) {
        if self.interaction == Interaction::BoxSelecting {
            let hits = self
                .box_selector
                .finish(self.points.iter().map(|p| (p.index(), p.position())));
            log::debug!("Rechteck-Selektion: {} Punkte getroffen", hits.len());
            for index in hits {
                self.points[index].set_marker(SelectionMarker::Selected);
                self.selected.insert(index);
            }
            self.selected.sort();
        }
        self.interaction = Interaction::Idle;
    }

    fn clear_selection(&mut self) {
        self.selected.clear();
        for point in &mut self.points {
            point.set_marker(SelectionMarker::Unselected);
        }
    }
}
