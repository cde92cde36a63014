//! Bezier Editor.
//!
//! Interaktiver Editor für Bézier-Kurven beliebigen Grades: Kontrollpunkte
//! ziehen, per Rechteck auswählen und als Gruppe verschieben.

use bezier_editor::{
    render, shared, ui, AppController, AppIntent, AppState, CurveDegree, EditorOptions,
};
use eframe::egui;
use std::io;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        shared::logging::init();

        log::info!("Bezier Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let degree = ui::resolve_degree(
            std::env::args().skip(1),
            &mut io::stdin().lock(),
            &mut io::stdout(),
        )?;
        log::info!("Kurvengrad: {} ({})", degree, degree.label());

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let title = format!("Bezier Editor ({})", degree.label());
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([800.0, 600.0])
                .with_title(title.clone()),
            ..Default::default()
        };

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(EditorApp::new(degree, editor_options)))),
        )
        .map_err(|e| anyhow::anyhow!("Fenster konnte nicht gestartet werden: {e}"))
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
}

impl EditorApp {
    fn new(degree: CurveDegree, options: EditorOptions) -> Self {
        Self {
            state: AppState::new(degree, options),
            controller: AppController::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let status_events = ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let mut events = status_events;
                events.extend(ui::collect_viewport_events(ui, &response));
                events.extend(ui::collect_keyboard_events(ui));

                // Alle Events vor dem Neuabtasten anwenden
                self.process_events(events);
                self.controller.refresh_curve(&mut self.state);

                let scene = self.controller.build_render_scene(&self.state);
                render::paint_scene(ui.painter(), rect.min, rect, &scene);
            });

        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl EditorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
