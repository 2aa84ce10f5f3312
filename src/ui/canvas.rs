//! Familien-Canvas: zeichnet die Bubble-Szene und sammelt Pointer-Intents.
//!
//! Alle Positionen in Intents sind Canvas-Koordinaten (relativ zur linken
//! oberen Ecke der Canvas), passend zu den gespeicherten Mitgliederpositionen.

use super::{color32, PhotoCache};
use crate::app::{AppIntent, AppState, LoadStatus};
use crate::shared::BubbleView;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

const BACKGROUND: Color32 = Color32::from_rgb(245, 240, 232);
const PHOTO_SIZE: f32 = 72.0;
const DELETE_BUTTON_SIZE: f32 = 20.0;
const CORNER_RADIUS: f32 = 14.0;

/// Zeichenzustand der Canvas (zuletzt gemeldete Groesse).
#[derive(Default)]
pub struct CanvasView {
    last_size: Option<Vec2>,
}

impl CanvasView {
    /// Erstellt eine neue Canvas-Ansicht.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet die Canvas in den verfuegbaren Platz.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        photos: &mut PhotoCache,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let origin = rect.min;

        if self.last_size != Some(rect.size()) {
            self.last_size = Some(rect.size());
            events.push(AppIntent::CanvasResized {
                size: glam::Vec2::new(rect.width(), rect.height()),
            });
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);

        if let Some(text) = status_text(state) {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                text,
                FontId::proportional(18.0),
                Color32::from_gray(110),
            );
        }

        let bubble_size = state.options.bubble_size();
        let bubble_size = Vec2::new(bubble_size.x, bubble_size.y);

        let mut pressed_this_frame = false;

        for bubble in state.canvas.scene.paint_order() {
            let min = origin + Vec2::new(bubble.position.x, bubble.position.y);
            let bubble_rect = Rect::from_min_size(min, bubble_size);
            let id = ui.id().with(("bubble", bubble.member_id.as_str()));

            let body = ui.interact(bubble_rect, id, Sense::drag());
            let delete_rect = Rect::from_center_size(
                bubble_rect.right_top() + Vec2::new(-DELETE_BUTTON_SIZE, DELETE_BUTTON_SIZE),
                Vec2::splat(DELETE_BUTTON_SIZE),
            );
            let delete = ui.interact(delete_rect, id.with("delete"), Sense::click());

            let fill = color32(state.options.relation_color(&bubble.relation_key));
            paint_bubble(ui, &painter, bubble, bubble_rect, fill, photos);
            paint_delete_button(&painter, delete_rect, delete.hovered());

            if delete.clicked() {
                events.push(AppIntent::DeleteMemberRequested {
                    member_id: bubble.member_id.clone(),
                });
            } else if body.drag_started() {
                let pressed_at = ui
                    .input(|i| i.pointer.press_origin())
                    .or_else(|| body.interact_pointer_pos());
                if let Some(pos) = drag_start_pointer(pressed_at, delete_rect) {
                    pressed_this_frame = true;
                    events.push(AppIntent::BubblePressed {
                        member_id: bubble.member_id.clone(),
                        pointer: to_canvas(pos, origin),
                    });
                }
            }
        }

        let (latest, released) = ui.input(|i| (i.pointer.latest_pos(), i.pointer.any_released()));
        events.extend(pointer_follow_up(
            state.canvas.drag.is_dragging() || pressed_this_frame,
            latest.map(|pos| to_canvas(pos, origin)),
            released,
        ));

        events
    }
}

/// Startpunkt eines Drags; Druecke auf den Loeschknopf starten keinen.
fn drag_start_pointer(pressed_at: Option<Pos2>, delete_rect: Rect) -> Option<Pos2> {
    pressed_at.filter(|pos| !delete_rect.contains(*pos))
}

/// Move/Release fuer einen laufenden oder in diesem Frame begonnenen Drag.
///
/// Ein Release im selben Frame wie der Druck muss den Drag ebenfalls beenden.
fn pointer_follow_up(
    tracking: bool,
    latest: Option<glam::Vec2>,
    released: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !tracking {
        return events;
    }
    if let Some(pointer) = latest {
        events.push(AppIntent::PointerMoved { pointer });
    }
    if released {
        events.push(AppIntent::PointerReleased);
    }
    events
}

fn to_canvas(pos: Pos2, origin: Pos2) -> glam::Vec2 {
    glam::Vec2::new(pos.x - origin.x, pos.y - origin.y)
}

fn status_text(state: &AppState) -> Option<String> {
    if !state.is_signed_in() {
        return Some("Sign in to see your family tree".into());
    }
    match &state.canvas.load_status {
        LoadStatus::Loading if state.canvas.scene.is_empty() => {
            Some("Loading family members...".into())
        }
        LoadStatus::Empty => Some("No family members yet. Add one!".into()),
        LoadStatus::Failed(message) if state.canvas.scene.is_empty() => {
            Some(format!("Error loading: {message}"))
        }
        _ => None,
    }
}

fn paint_bubble(
    ui: &egui::Ui,
    painter: &egui::Painter,
    bubble: &BubbleView,
    rect: Rect,
    fill: Color32,
    photos: &mut PhotoCache,
) {
    if bubble.elevated {
        painter.rect_filled(
            rect.translate(Vec2::new(4.0, 6.0)),
            CORNER_RADIUS,
            Color32::from_black_alpha(60),
        );
    }
    let stroke = if bubble.elevated {
        Stroke::new(3.0, Color32::WHITE)
    } else {
        Stroke::new(1.0, Color32::from_black_alpha(40))
    };
    painter.rect(rect, CORNER_RADIUS, fill, stroke, egui::StrokeKind::Inside);

    let photo_rect = Rect::from_center_size(
        Pos2::new(rect.center().x, rect.top() + 12.0 + PHOTO_SIZE / 2.0),
        Vec2::splat(PHOTO_SIZE),
    );
    let photo_source = bubble.photo.as_ref().and_then(|p| photos.source(p));
    match photo_source {
        Some(source) => {
            egui::Image::new(source)
                .corner_radius(PHOTO_SIZE / 2.0)
                .paint_at(ui, photo_rect);
        }
        None => {
            painter.circle_filled(
                photo_rect.center(),
                PHOTO_SIZE / 2.0,
                Color32::from_white_alpha(90),
            );
            let initial = bubble
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string());
            painter.text(
                photo_rect.center(),
                Align2::CENTER_CENTER,
                initial.unwrap_or_default(),
                FontId::proportional(28.0),
                Color32::WHITE,
            );
        }
    }

    let mut y = photo_rect.bottom() + 8.0;
    painter.text(
        Pos2::new(rect.center().x, y),
        Align2::CENTER_TOP,
        &bubble.name,
        FontId::proportional(14.0),
        Color32::WHITE,
    );
    y += 18.0;
    painter.text(
        Pos2::new(rect.center().x, y),
        Align2::CENTER_TOP,
        &bubble.relation,
        FontId::proportional(11.0),
        Color32::from_white_alpha(220),
    );
    if let Some(label) = &bubble.birth_label {
        y += 15.0;
        painter.text(
            Pos2::new(rect.center().x, y),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(11.0),
            Color32::from_white_alpha(200),
        );
    }
}

fn paint_delete_button(painter: &egui::Painter, rect: Rect, hovered: bool) {
    let fill = if hovered {
        Color32::from_rgb(220, 53, 69)
    } else {
        Color32::from_black_alpha(90)
    };
    painter.circle_filled(rect.center(), rect.width() / 2.0, fill);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "×",
        FontId::proportional(14.0),
        Color32::WHITE,
    );
}
