//! Seitenpanel zum Hinzufügen eines Familienmitglieds.

use super::PhotoCache;
use crate::app::{AppIntent, AppState};

const PREVIEW_SIZE: f32 = 96.0;

/// Rendert das Formular. Texteingaben schreiben direkt in `state.form`.
pub fn render_member_form(
    ctx: &egui::Context,
    state: &mut AppState,
    photos: &mut PhotoCache,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.is_signed_in() {
        return events;
    }

    egui::SidePanel::left("member_form")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Add Family Member");
            ui.add_space(8.0);

            ui.label("Name *");
            ui.text_edit_singleline(&mut state.form.name);
            ui.add_space(4.0);

            ui.label("Relation *");
            let selected_text = if state.form.relation.is_empty() {
                "Select relation"
            } else {
                state.form.relation.as_str()
            };
            egui::ComboBox::from_id_salt("member_relation")
                .selected_text(selected_text.to_string())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for relation in &state.options.relations {
                        ui.selectable_value(
                            &mut state.form.relation,
                            relation.clone(),
                            relation.as_str(),
                        );
                    }
                });
            ui.add_space(4.0);

            ui.label("Birth year");
            ui.text_edit_singleline(&mut state.form.birth_year);
            ui.add_space(4.0);

            ui.label("Notes");
            ui.add(
                egui::TextEdit::multiline(&mut state.form.notes)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label("Photo");
            ui.horizontal(|ui| {
                if ui.button("📷 Take Photo").clicked() {
                    // Desktop-Host ohne Kamera-Anbindung
                    events.push(AppIntent::CameraUnavailable);
                }
                if ui.button("🖼 Upload from Gallery").clicked() {
                    events.push(AppIntent::PhotoUploadRequested);
                }
            });

            if let Some(payload) = state.photo.selected_photo() {
                ui.add_space(4.0);
                if let Some(source) = photos.source(payload) {
                    ui.add(
                        egui::Image::new(source)
                            .fit_to_exact_size(egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE))
                            .corner_radius(PREVIEW_SIZE / 2.0),
                    );
                }
                if ui.small_button("Remove photo").clicked() {
                    events.push(AppIntent::PhotoRemoved);
                }
            }

            ui.add_space(12.0);
            if ui.button("Add Member").clicked() {
                events.push(AppIntent::AddMemberRequested);
            }
        });

    events
}
