//! Zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Reihenfolge: Hintergrund, Hilfslinien, Kurve, Kontrollpunkte, Beschriftungen,
//! Selektions-Rechteck. Alle Szenen-Koordinaten sind relativ zu `origin`.

use eframe::egui;
use glam::Vec2;

pub use crate::shared::RenderScene;
use crate::core::SelectionMarker;

/// Abstand der Info-Zeile zur linken oberen Ecke der Zeichenfläche.
const CAPTION_MARGIN: f32 = 8.0;
/// Schriftgröße der Info-Zeile.
const CAPTION_FONT_SIZE: f32 = 14.0;

/// Wandelt eine RGBA-Option in eine egui-Farbe.
pub fn to_color32(rgba: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn to_screen(origin: egui::Pos2, pos: Vec2) -> egui::Pos2 {
    egui::pos2(origin.x + pos.x, origin.y + pos.y)
}

/// Baut alle Geometrie-Shapes der Szene (ohne Text).
pub fn scene_shapes(origin: egui::Pos2, canvas: egui::Rect, scene: &RenderScene) -> Vec<egui::Shape> {
    let opts = &scene.options;
    let mut shapes = Vec::with_capacity(scene.points.len() * 3 + 3);

    shapes.push(egui::Shape::rect_filled(
        canvas,
        0.0,
        to_color32(opts.background_color),
    ));

    let guide_stroke = egui::Stroke::new(opts.guide_thickness, to_color32(opts.guide_color));
    for (a, b) in scene.guide_segments() {
        shapes.push(egui::Shape::line_segment(
            [to_screen(origin, a), to_screen(origin, b)],
            guide_stroke,
        ));
    }

    if scene.curve.len() >= 2 {
        let polyline = scene
            .curve
            .iter()
            .map(|&p| to_screen(origin, p))
            .collect::<Vec<_>>();
        shapes.push(egui::Shape::line(
            polyline,
            egui::Stroke::new(opts.curve_thickness, to_color32(opts.curve_color)),
        ));
    }

    let outline = egui::Stroke::new(opts.point_outline, to_color32(opts.point_outline_color));
    for point in &scene.points {
        let fill = match point.marker {
            SelectionMarker::Unselected => opts.point_color,
            SelectionMarker::Selected => opts.point_color_selected,
        };
        let center = to_screen(origin, point.position);
        shapes.push(egui::Shape::circle_filled(
            center,
            opts.point_radius,
            to_color32(fill),
        ));
        shapes.push(egui::Shape::circle_stroke(center, opts.point_radius, outline));
    }

    if let Some(bounds) = scene.selection_bounds {
        let rect = egui::Rect::from_min_max(
            to_screen(origin, bounds.min),
            to_screen(origin, bounds.max),
        );
        shapes.push(egui::Shape::rect_filled(
            rect,
            0.0,
            to_color32(opts.selection_fill_color),
        ));
    }

    shapes
}

/// Ankerpunkte der `P<i>`-Beschriftungen (rechts neben dem Punkt).
pub fn label_anchors(origin: egui::Pos2, scene: &RenderScene) -> Vec<(egui::Pos2, &str)> {
    let offset = Vec2::new(scene.options.label_offset_x, 0.0);
    scene
        .points
        .iter()
        .map(|point| (to_screen(origin, point.position + offset), point.label.as_str()))
        .collect()
}

/// Zeichnet die komplette Szene in den Painter.
pub fn paint_scene(
    painter: &egui::Painter,
    origin: egui::Pos2,
    canvas: egui::Rect,
    scene: &RenderScene,
) {
    let mut shapes = scene_shapes(origin, canvas, scene);
    // Selektions-Rechteck liegt über den Beschriftungen
    let overlay = scene.selection_bounds.and_then(|_| shapes.pop());

    painter.extend(shapes);

    let font = egui::FontId::monospace(scene.options.label_font_size);
    let label_color = to_color32(scene.options.label_color);
    for (anchor, label) in label_anchors(origin, scene) {
        painter.text(
            anchor,
            egui::Align2::LEFT_CENTER,
            label,
            font.clone(),
            label_color,
        );
    }

    painter.text(
        canvas.left_top() + egui::vec2(CAPTION_MARGIN, CAPTION_MARGIN),
        egui::Align2::LEFT_TOP,
        format!(
            "{} Bezier | length {:.1}",
            scene.degree.label(),
            scene.curve_length
        ),
        egui::FontId::proportional(CAPTION_FONT_SIZE),
        label_color,
    );

    if let Some(overlay) = overlay {
        painter.add(overlay);
    }

    log::trace!(
        "Szene gezeichnet: {} Punkte, {} Kurvenpunkte",
        scene.points.len(),
        scene.curve.len()
    );
}
