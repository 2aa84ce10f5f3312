//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, LoadStatus};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.is_signed_in() {
                ui.label(format!("Members: {}", state.member_count()));
            } else {
                ui.label("Signed out");
            }

            ui.separator();

            let load = match &state.canvas.load_status {
                LoadStatus::Idle => "Idle",
                LoadStatus::Loading => "Loading…",
                LoadStatus::Empty => "Empty",
                LoadStatus::Loaded => "Loaded",
                LoadStatus::Failed(_) => "Load failed",
            };
            ui.label(format!("Status: {}", load));

            ui.separator();

            ui.label(format!(
                "Canvas: {:.0} × {:.0}",
                state.canvas.size.x, state.canvas.size.y
            ));

            if let Some(id) = state.canvas.drag.dragged_member() {
                ui.separator();
                ui.label(format!("Dragging: {}", id));
            }

            if let LoadStatus::Failed(message) = &state.canvas.load_status {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("⚠ Error loading: {}", message))
                        .color(egui::Color32::YELLOW),
                );
            }
        });
    });
}
