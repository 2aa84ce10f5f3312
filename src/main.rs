//! Family Tree Canvas.
//!
//! Desktop-Canvas für Familienmitglieder: Bubbles platzieren, ziehen,
//! anlegen und löschen. Daten liegen lokal als JSON neben der Binary.

use eframe::egui;
use family_tree_canvas::gateway::{AuthGateway, JsonFileStore, LocalAuthGateway};
use family_tree_canvas::{ui, AppController, AppIntent, AppOptions, AppState};
use std::sync::mpsc;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Family Tree Canvas v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let app_options = AppOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Standardwerte als editierbare Vorlage ablegen
            if let Err(e) = app_options.save_to_file(&config_path) {
                log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
            }
        }

        // Defekte Datendatei ist nicht fatal: gesichert, leer gestartet, gemeldet
        let (store, load_error) = JsonFileStore::open_or_recover(app_options.data_path());
        let load_notice = load_error.map(|e| format!("Error loading: {e}"));
        let auth = LocalAuthGateway::new(
            app_options.profile.uid.clone(),
            app_options.profile.display_name.clone(),
        );

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Family Tree Canvas"),
            ..Default::default()
        };

        eframe::run_native(
            "Family Tree Canvas",
            native_options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(FamilyTreeApp::new(
                    app_options,
                    store,
                    auth,
                    load_notice,
                )))
            }),
        )
        .map_err(|e| anyhow::anyhow!("eframe beendet mit Fehler: {e}"))
    }
}

/// Haupt-Anwendungsstruktur
struct FamilyTreeApp {
    state: AppState,
    controller: AppController<JsonFileStore, LocalAuthGateway>,
    auth_events: mpsc::Receiver<AppIntent>,
    canvas: ui::CanvasView,
    photos: ui::PhotoCache,
}

impl FamilyTreeApp {
    fn new(
        options: AppOptions,
        store: JsonFileStore,
        auth: LocalAuthGateway,
        load_notice: Option<String>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        auth.on_state_change(Box::new(move |identity| {
            if tx.send(AppIntent::AuthStateChanged { identity }).is_err() {
                log::warn!("Auth-Event verworfen: Empfänger beendet");
            }
        }));

        let mut state = AppState::with_options(options);
        if let Some(message) = load_notice {
            state.ui.notify(message);
        }

        Self {
            state,
            controller: AppController::new(store, auth),
            auth_events: rx,
            canvas: ui::CanvasView::new(),
            photos: ui::PhotoCache::new(),
        }
    }
}

impl eframe::App for FamilyTreeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events: Vec<AppIntent> = self.auth_events.try_iter().collect();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::CanvasResized { .. }));

        self.process_events(events);

        self.prune_photo_cache();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl FamilyTreeApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let blocked = self.state.ui.pending_delete.is_some()
            || self.state.ui.current_notification().is_some();

        events.extend(ui::render_top_bar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_member_form(
            ctx,
            &mut self.state,
            &mut self.photos,
        ));
        events.extend(ui::handle_photo_dialog(&mut self.state.ui));
        events.extend(ui::show_delete_confirm(ctx, &self.state.ui));
        events.extend(ui::show_notification(ctx, &self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if blocked {
                    ui.disable();
                }
                events.extend(self.canvas.show(ui, &self.state, &mut self.photos));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            let result =
                pollster::block_on(self.controller.handle_intent(&mut self.state, event));
            if let Err(e) = result {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn prune_photo_cache(&mut self) {
        let scene_photos = self
            .state
            .canvas
            .scene
            .bubbles()
            .iter()
            .filter_map(|b| b.photo.as_ref());
        self.photos
            .retain(scene_photos.chain(self.state.photo.selected_photo()));
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.canvas.drag.is_dragging()
            || self.state.should_exit
        {
            ctx.request_repaint();
        }
    }
}
