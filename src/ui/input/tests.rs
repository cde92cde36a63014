use super::*;

fn canvas() -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(800.0, 600.0))
}

fn button_event(x: f32, y: f32, button: egui::PointerButton, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos: egui::pos2(x, y),
        button,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

#[test]
fn press_inside_canvas_is_translated_to_canvas_coordinates() {
    let intent = pointer_intent(
        &button_event(110.0, 220.0, egui::PointerButton::Primary, true),
        canvas(),
    );
    assert_eq!(
        intent,
        Some(AppIntent::PointerPressed {
            button: PointerButton::Primary,
            pos: glam::Vec2::new(100.0, 200.0),
        })
    );
}

#[test]
fn press_outside_canvas_is_dropped() {
    let intent = pointer_intent(
        &button_event(5.0, 5.0, egui::PointerButton::Primary, true),
        canvas(),
    );
    assert_eq!(intent, None);
}

#[test]
fn release_outside_canvas_is_still_forwarded() {
    let intent = pointer_intent(
        &button_event(5.0, 5.0, egui::PointerButton::Primary, false),
        canvas(),
    );
    assert_eq!(
        intent,
        Some(AppIntent::PointerReleased {
            button: PointerButton::Primary
        })
    );
}

#[test]
fn move_is_forwarded_in_canvas_coordinates() {
    let intent = pointer_intent(&egui::Event::PointerMoved(egui::pos2(0.0, 0.0)), canvas());
    assert_eq!(
        intent,
        Some(AppIntent::PointerMoved {
            pos: glam::Vec2::new(-10.0, -20.0)
        })
    );
}

#[test]
fn extra_buttons_and_other_events_are_ignored() {
    assert_eq!(
        pointer_intent(
            &button_event(100.0, 100.0, egui::PointerButton::Extra1, true),
            canvas()
        ),
        None
    );
    assert_eq!(pointer_intent(&egui::Event::PointerGone, canvas()), None);
}

#[test]
fn collect_viewport_events_keeps_arrival_order() {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(800.0, 600.0),
    ));
    raw_input.events = vec![
        button_event(100.0, 100.0, egui::PointerButton::Primary, true),
        egui::Event::PointerMoved(egui::pos2(150.0, 120.0)),
        button_event(150.0, 120.0, egui::PointerButton::Primary, false),
    ];

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (_rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                events = collect_viewport_events(ui, &response);
            });
    });

    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], AppIntent::PointerPressed { .. }));
    assert!(matches!(events[1], AppIntent::PointerMoved { .. }));
    assert!(matches!(events[2], AppIntent::PointerReleased { .. }));
}
