use super::support::*;
use family_tree_canvas::gateway::MemberStore;
use family_tree_canvas::{
    AppCommand, AppIntent, AppState, MemberId, MemberPatch, NewMember, OwnerId,
};
use std::sync::atomic::Ordering;

/// Angemeldeter State mit einem Mitglied bei (50,50) auf einer Canvas mit
/// maximaler Bubble-Position (300,300).
fn state_with_member_at_50(controller: &mut TestController) -> (AppState, MemberId) {
    let mut state = signed_in_state(controller);
    let id = pollster::block_on(controller.store().inner().create(NewMember {
        owner_id: OwnerId::new(OWNER),
        name: "Lea".into(),
        relation: "Cousin".into(),
        birth_year: None,
        notes: None,
        photo: None,
        position: glam::Vec2::new(50.0, 50.0),
        created_at: chrono::Utc::now(),
    }))
    .expect("Anlage im Store");

    run(
        controller,
        &mut state,
        AppIntent::CanvasResized {
            size: glam::Vec2::new(420.0, 450.0),
        },
    );
    run(controller, &mut state, AppIntent::ReloadRequested);
    (state, id)
}

fn drag(controller: &mut TestController, state: &mut AppState, id: &MemberId, delta: glam::Vec2) {
    let start = glam::Vec2::new(60.0, 70.0);
    run(
        controller,
        state,
        AppIntent::BubblePressed {
            member_id: id.clone(),
            pointer: start,
        },
    );
    run(
        controller,
        state,
        AppIntent::PointerMoved {
            pointer: start + delta,
        },
    );
}

#[test]
fn test_drag_beyond_canvas_clamps_and_persists_final_position() {
    let mut controller = controller();
    let (mut state, id) = state_with_member_at_50(&mut controller);

    drag(&mut controller, &mut state, &id, glam::Vec2::new(1000.0, 1000.0));
    let bubble = state.canvas.scene.get(&id).expect("Bubble vorhanden");
    assert_eq!(bubble.position, glam::Vec2::new(300.0, 300.0));
    assert!(bubble.elevated, "gezogene Bubble liegt oben");
    assert!(controller.store().updates().is_empty(), "noch nichts gespeichert");

    run(&mut controller, &mut state, AppIntent::PointerReleased);

    assert!(!state.canvas.drag.is_dragging());
    assert_eq!(
        controller.store().updates(),
        vec![(id.clone(), MemberPatch::position(glam::Vec2::new(300.0, 300.0)))]
    );
    let stored = controller.store().inner().get(&id).expect("im Store");
    assert_eq!(stored.position, glam::Vec2::new(300.0, 300.0));
    // Die Mitgliederliste aendert sich erst mit dem naechsten Reload
    assert_eq!(state.members[0].position, glam::Vec2::new(50.0, 50.0));
    assert!(!state.canvas.scene.get(&id).expect("Bubble").elevated);

    run(&mut controller, &mut state, AppIntent::ReloadRequested);
    assert_eq!(state.members[0].position, glam::Vec2::new(300.0, 300.0));
}

#[test]
fn test_drag_into_negative_space_clamps_to_origin() {
    let mut controller = controller();
    let (mut state, id) = state_with_member_at_50(&mut controller);

    drag(&mut controller, &mut state, &id, glam::Vec2::new(-500.0, -20.0));

    let bubble = state.canvas.scene.get(&id).expect("Bubble vorhanden");
    assert_eq!(bubble.position, glam::Vec2::new(0.0, 30.0));
}

#[test]
fn test_failed_position_save_is_silent_and_keeps_visual_position() {
    let mut controller = controller();
    let (mut state, id) = state_with_member_at_50(&mut controller);
    controller.store().fail_update.store(true, Ordering::SeqCst);

    drag(&mut controller, &mut state, &id, glam::Vec2::new(100.0, 40.0));
    run(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(state.ui.notification_count(), 0);
    let bubble = state.canvas.scene.get(&id).expect("Bubble vorhanden");
    assert_eq!(bubble.position, glam::Vec2::new(150.0, 90.0));
    let stored = controller.store().inner().get(&id).expect("im Store");
    assert_eq!(stored.position, glam::Vec2::new(50.0, 50.0));
}

#[test]
fn test_release_without_move_persists_start_position() {
    let mut controller = controller();
    let (mut state, id) = state_with_member_at_50(&mut controller);

    run(
        &mut controller,
        &mut state,
        AppIntent::BubblePressed {
            member_id: id.clone(),
            pointer: glam::Vec2::new(80.0, 80.0),
        },
    );
    run(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(
        controller.store().updates(),
        vec![(id, MemberPatch::position(glam::Vec2::new(50.0, 50.0)))]
    );
}

#[test]
fn test_pointer_events_without_drag_are_ignored() {
    let mut controller = controller();
    let (mut state, _id) = state_with_member_at_50(&mut controller);
    let logged_before = state.command_log.len();

    run(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pointer: glam::Vec2::new(10.0, 10.0),
        },
    );
    run(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(state.command_log.len(), logged_before);
    assert!(controller.store().updates().is_empty());
}

#[test]
fn test_second_press_during_drag_is_ignored() {
    let mut controller = controller();
    let (mut state, id) = state_with_member_at_50(&mut controller);
    add_member(&mut controller, &mut state, "Karl");
    let karl = state
        .members
        .iter()
        .find(|m| m.name == "Karl")
        .map(|m| m.id.clone())
        .expect("Karl geladen");

    drag(&mut controller, &mut state, &id, glam::Vec2::new(10.0, 10.0));
    run(
        &mut controller,
        &mut state,
        AppIntent::BubblePressed {
            member_id: karl.clone(),
            pointer: glam::Vec2::new(200.0, 200.0),
        },
    );

    assert_eq!(state.canvas.drag.dragged_member(), Some(&id));
    assert!(!state.canvas.scene.get(&karl).expect("Bubble").elevated);
}

#[test]
fn test_reload_during_drag_discards_gesture_without_saving() {
    let mut controller = controller();
    let (mut state, id) = state_with_member_at_50(&mut controller);

    drag(&mut controller, &mut state, &id, glam::Vec2::new(30.0, 30.0));
    run(&mut controller, &mut state, AppIntent::ReloadRequested);

    assert!(!state.canvas.drag.is_dragging());
    let bubble = state.canvas.scene.get(&id).expect("Bubble vorhanden");
    assert_eq!(bubble.position, glam::Vec2::new(50.0, 50.0));
    assert!(!bubble.elevated);

    run(&mut controller, &mut state, AppIntent::PointerReleased);
    assert!(controller.store().updates().is_empty());
    assert!(!matches!(
        state.command_log.entries().last(),
        Some(AppCommand::EndDrag)
    ));
}

#[test]
fn test_press_move_release_in_one_frame_ends_drag() {
    let mut controller = controller();
    let (mut state, id) = state_with_member_at_50(&mut controller);

    // Ein Frame liefert Druck, Bewegung und Loslassen gemeinsam
    let frame = [
        AppIntent::BubblePressed {
            member_id: id.clone(),
            pointer: glam::Vec2::new(60.0, 60.0),
        },
        AppIntent::PointerMoved {
            pointer: glam::Vec2::new(70.0, 65.0),
        },
        AppIntent::PointerReleased,
    ];
    for intent in frame {
        run(&mut controller, &mut state, intent);
    }

    assert!(!state.canvas.drag.is_dragging());
    assert_eq!(
        controller.store().updates(),
        vec![(id, MemberPatch::position(glam::Vec2::new(60.0, 55.0)))]
    );
}
