use super::support::*;
use family_tree_canvas::gateway::{AuthError, AuthGateway, InMemoryStore, MemberStore};
use family_tree_canvas::{AppCommand, AppController, AppIntent, AppState, LoadStatus};
use std::sync::mpsc;

/// Leitet Listener-Benachrichtigungen wie der Host als Intents weiter.
fn forward_auth_events<S: MemberStore, A: AuthGateway>(
    controller: &AppController<S, A>,
) -> mpsc::Receiver<AppIntent> {
    let (tx, rx) = mpsc::channel();
    controller.auth().on_state_change(Box::new(move |identity| {
        tx.send(AppIntent::AuthStateChanged { identity })
            .expect("Empfaenger lebt");
    }));
    rx
}

fn drain(
    controller: &mut TestController,
    state: &mut AppState,
    events: &mpsc::Receiver<AppIntent>,
) {
    for intent in events.try_iter() {
        run(controller, state, intent);
    }
}

#[test]
fn test_sign_in_via_listener_loads_members() {
    let mut controller = controller();
    let events = forward_auth_events(&controller);
    let mut state = AppState::new();
    drain(&mut controller, &mut state, &events);
    assert!(!state.is_signed_in());

    run(&mut controller, &mut state, AppIntent::SignInRequested);
    drain(&mut controller, &mut state, &events);

    let session = state.session.as_ref().expect("angemeldet");
    assert_eq!(session.uid.as_str(), OWNER);
    assert_eq!(session.display_name, "Mara");
    assert_eq!(state.canvas.load_status, LoadStatus::Empty);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::ReloadMembers)
    ));
}

#[test]
fn test_sign_out_clears_members_and_scene() {
    let mut controller = controller();
    let events = forward_auth_events(&controller);
    let mut state = AppState::new();
    run(&mut controller, &mut state, AppIntent::SignInRequested);
    drain(&mut controller, &mut state, &events);
    add_member(&mut controller, &mut state, "Ida");
    assert_eq!(state.canvas.scene.len(), 1);

    run(&mut controller, &mut state, AppIntent::SignOutRequested);
    drain(&mut controller, &mut state, &events);

    assert!(state.session.is_none());
    assert!(state.members.is_empty());
    assert!(state.canvas.scene.is_empty());
    assert_eq!(controller.store().inner().len(), 1, "Store bleibt unberuehrt");
}

#[test]
fn test_add_member_while_signed_out_is_rejected() {
    let mut controller = controller();
    let mut state = AppState::new();
    fill_form(&mut state, "Ida", "Parent");

    run(&mut controller, &mut state, AppIntent::AddMemberRequested);

    assert_eq!(state.ui.current_notification(), Some("Please sign in first"));
    assert_eq!(controller.store().calls(), 0);
}

#[test]
fn test_reload_while_signed_out_does_nothing() {
    let mut controller = controller();
    let mut state = AppState::new();

    run(&mut controller, &mut state, AppIntent::ReloadRequested);

    assert!(state.command_log.is_empty());
    assert_eq!(controller.store().calls(), 0);
}

#[test]
fn test_cancelled_sign_in_is_silent() {
    let mut controller =
        AppController::new(InMemoryStore::new(), RejectingAuth(AuthError::Cancelled));
    let mut state = AppState::new();

    run(&mut controller, &mut state, AppIntent::SignInRequested);

    assert_eq!(state.ui.notification_count(), 0);
    assert!(!state.is_signed_in());
}

#[test]
fn test_failed_sign_in_is_reported() {
    let mut controller = AppController::new(
        InMemoryStore::new(),
        RejectingAuth(AuthError::Failed("network down".into())),
    );
    let mut state = AppState::new();

    run(&mut controller, &mut state, AppIntent::SignInRequested);

    let message = state
        .ui
        .current_notification()
        .expect("Fehlermeldung erwartet");
    assert!(message.starts_with("Login failed:"), "{message}");
    assert!(message.contains("network down"), "{message}");
}

#[test]
fn test_owner_switch_drops_previous_owners_members() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);
    add_member(&mut controller, &mut state, "Ida");

    run(
        &mut controller,
        &mut state,
        AppIntent::AuthStateChanged {
            identity: Some(identity("someone-else")),
        },
    );

    assert!(state.members.is_empty());
    assert_eq!(state.canvas.load_status, LoadStatus::Empty);
}
