//! Sitzungsleiste am oberen Bildschirmrand.

use crate::app::{AppIntent, AppState, LoadStatus};

/// Rendert Titel, Anmeldestatus und Sitzungs-Aktionen.
pub fn render_top_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Family Tree");
            ui.separator();

            match &state.session {
                Some(identity) => {
                    if let Some(url) = &identity.photo_url {
                        ui.add(
                            egui::Image::new(url.clone())
                                .fit_to_exact_size(egui::vec2(24.0, 24.0))
                                .corner_radius(12.0),
                        );
                    }
                    ui.label(format!("Signed in as {}", identity.display_name));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Exit").clicked() {
                            events.push(AppIntent::ExitRequested);
                        }
                        if ui.button("Sign out").clicked() {
                            events.push(AppIntent::SignOutRequested);
                        }
                        let loading = state.canvas.load_status == LoadStatus::Loading;
                        if ui
                            .add_enabled(!loading, egui::Button::new("⟳ Reload"))
                            .clicked()
                        {
                            events.push(AppIntent::ReloadRequested);
                        }
                    });
                }
                None => {
                    ui.label("Not signed in");

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Exit").clicked() {
                            events.push(AppIntent::ExitRequested);
                        }
                        if ui.button("Sign in").clicked() {
                            events.push(AppIntent::SignInRequested);
                        }
                    });
                }
            }
        });
    });

    events
}
