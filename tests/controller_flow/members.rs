use super::support::*;
use family_tree_canvas::{AppIntent, LoadStatus, PhotoCapture, PhotoPayload};
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Schlecht komprimierbarer Kamera-Frame (deterministisches Rauschen).
fn noisy_frame(size: u32) -> image::RgbaImage {
    let mut seed: u32 = 0x9e37_79b9;
    image::RgbaImage::from_fn(size, size, |_, _| {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let [r, g, b, _] = seed.to_le_bytes();
        image::Rgba([r, g, b, 255])
    })
}

fn select_photo_file(
    controller: &mut TestController,
    state: &mut family_tree_canvas::AppState,
    name: &str,
    bytes: &[u8],
) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("Datei schreibbar");
    run(
        controller,
        state,
        AppIntent::PhotoFileSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );
    dir
}

#[test]
fn test_add_member_round_trips_all_fields_through_reload() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);

    state.form.name = "  Ida  ".into();
    state.form.relation = "Grandparent".into();
    state.form.birth_year = "1920".into();
    state.form.notes = "Loved gardening".into();
    let png = tiny_png();
    state
        .photo
        .select_from_bytes(&png)
        .expect("PNG sollte akzeptiert werden");

    run(&mut controller, &mut state, AppIntent::AddMemberRequested);

    assert_eq!(state.members.len(), 1);
    let member = &state.members[0];
    assert_eq!(member.name, "Ida");
    assert_eq!(member.relation, "Grandparent");
    assert_eq!(member.birth_year.as_deref(), Some("1920"));
    assert_eq!(member.notes.as_deref(), Some("Loved gardening"));
    assert_eq!(member.owner_id.as_str(), OWNER);
    assert_eq!(member.position, glam::Vec2::new(100.0, 100.0));
    assert_eq!(
        member.photo,
        Some(PhotoPayload::from_bytes("image/png", &png))
    );

    let stored = controller
        .store()
        .inner()
        .get(&member.id)
        .expect("Datensatz sollte im Store liegen");
    assert_eq!(&stored, member);

    assert_eq!(state.canvas.load_status, LoadStatus::Loaded);
    assert_eq!(state.canvas.scene.len(), 1);
    assert!(state.form.name.is_empty(), "Formular sollte geleert sein");
    assert!(state.photo.selected_photo().is_none());
    assert_eq!(state.ui.notification_count(), 0);
}

#[test]
fn test_fourth_member_lands_in_second_row_second_column() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);

    for name in ["Anna", "Ben", "Carl"] {
        add_member(&mut controller, &mut state, name);
    }
    add_member(&mut controller, &mut state, "Dora");

    let dora = state
        .members
        .iter()
        .find(|m| m.name == "Dora")
        .expect("Dora sollte geladen sein");
    // Zeichenflaeche 800×600 abzueglich Rand 150 → 650×450, 2×2-Raster
    assert_eq!(dora.position, glam::Vec2::new(425.0, 325.0));
}

#[test]
fn test_missing_required_fields_notifies_without_gateway_call() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);
    let calls_before = controller.store().calls();

    fill_form(&mut state, "   ", "Parent");
    run(&mut controller, &mut state, AppIntent::AddMemberRequested);

    assert_eq!(controller.store().calls(), calls_before);
    assert_eq!(
        state.ui.current_notification(),
        Some("Please fill in required fields")
    );
    assert_eq!(state.form.relation, "Parent", "Eingaben bleiben erhalten");
}

#[test]
fn test_create_failure_is_reported_and_form_kept() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);
    controller.store().fail_create.store(true, Ordering::SeqCst);

    fill_form(&mut state, "Ida", "Parent");
    run(&mut controller, &mut state, AppIntent::AddMemberRequested);

    let message = state
        .ui
        .current_notification()
        .expect("Fehlermeldung erwartet");
    assert!(message.starts_with("Failed to add member:"), "{message}");
    assert_eq!(state.form.name, "Ida");
    assert!(state.members.is_empty());
}

#[test]
fn test_declined_delete_leaves_members_and_scene_unchanged() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);
    add_member(&mut controller, &mut state, "Ida");
    let members_before = state.members.clone();
    let scene_before = state.canvas.scene.clone();
    let id = members_before[0].id.clone();

    run(
        &mut controller,
        &mut state,
        AppIntent::DeleteMemberRequested { member_id: id },
    );
    let pending = state
        .ui
        .pending_delete
        .as_ref()
        .expect("Rueckfrage sollte offen sein");
    assert_eq!(pending.prompt, "Delete Ida?");

    run(&mut controller, &mut state, AppIntent::DeleteCancelled);

    assert!(state.ui.pending_delete.is_none());
    assert_eq!(state.members, members_before);
    assert_eq!(state.canvas.scene, scene_before);
    assert_eq!(controller.store().inner().len(), 1);
}

#[test]
fn test_confirmed_delete_removes_member_after_reload() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);
    add_member(&mut controller, &mut state, "Ida");
    add_member(&mut controller, &mut state, "Karl");
    let ida = state.members[0].id.clone();

    run(
        &mut controller,
        &mut state,
        AppIntent::DeleteMemberRequested { member_id: ida.clone() },
    );
    run(&mut controller, &mut state, AppIntent::DeleteConfirmed);

    assert_eq!(state.members.len(), 1);
    assert_eq!(state.members[0].name, "Karl");
    assert!(state.canvas.scene.get(&ida).is_none());
    assert!(controller.store().inner().get(&ida).is_none());
}

#[test]
fn test_delete_failure_is_reported() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);
    add_member(&mut controller, &mut state, "Ida");
    controller.store().fail_delete.store(true, Ordering::SeqCst);
    let id = state.members[0].id.clone();

    run(
        &mut controller,
        &mut state,
        AppIntent::DeleteMemberRequested { member_id: id },
    );
    run(&mut controller, &mut state, AppIntent::DeleteConfirmed);

    assert_eq!(state.members.len(), 1);
    let message = state
        .ui
        .current_notification()
        .expect("Fehlermeldung erwartet");
    assert!(message.starts_with("Failed to delete member:"), "{message}");
}

#[test]
fn test_reload_failure_keeps_previous_scene() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);
    add_member(&mut controller, &mut state, "Ida");
    let scene_before = state.canvas.scene.clone();
    controller.store().fail_query.store(true, Ordering::SeqCst);

    run(&mut controller, &mut state, AppIntent::ReloadRequested);

    assert_eq!(state.canvas.scene, scene_before);
    assert_eq!(state.members.len(), 1);
    assert!(matches!(state.canvas.load_status, LoadStatus::Failed(_)));
}

#[test]
fn test_empty_query_marks_canvas_empty() {
    let mut controller = controller();
    let state = signed_in_state(&mut controller);

    assert!(state.members.is_empty());
    assert!(state.canvas.scene.is_empty());
    assert_eq!(state.canvas.load_status, LoadStatus::Empty);
}

#[test]
fn test_reload_replaces_scene_from_scratch() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);
    add_member(&mut controller, &mut state, "Ida");
    add_member(&mut controller, &mut state, "Karl");
    let first = state.canvas.scene.clone();

    run(&mut controller, &mut state, AppIntent::ReloadRequested);
    run(&mut controller, &mut state, AppIntent::ReloadRequested);

    assert_eq!(state.canvas.scene, first);
    assert_eq!(state.canvas.scene.len(), state.members.len());
}

#[test]
fn test_camera_unavailable_shows_gallery_hint() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);

    run(&mut controller, &mut state, AppIntent::CameraUnavailable);

    let message = state
        .ui
        .current_notification()
        .expect("Hinweis erwartet");
    assert!(message.contains("Upload from Gallery"), "{message}");
}

#[test]
fn test_oversized_photo_file_is_rejected_with_notification() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = dir.path().join("huge.png");
    std::fs::write(&path, vec![0u8; state.options.photo_max_bytes + 1])
        .expect("Datei schreibbar");

    run(
        &mut controller,
        &mut state,
        AppIntent::PhotoFileSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );

    assert!(state.photo.selected_photo().is_none());
    assert_eq!(
        state.ui.current_notification(),
        Some("Photo is too large. Please choose a photo under 1MB.")
    );
}

#[test]
fn test_photo_file_selection_and_removal() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = dir.path().join("ida.png");
    std::fs::write(&path, tiny_png()).expect("Datei schreibbar");

    run(&mut controller, &mut state, AppIntent::PhotoUploadRequested);
    assert!(state.ui.show_photo_file_dialog);

    run(
        &mut controller,
        &mut state,
        AppIntent::PhotoFileSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );
    assert!(state.photo.selected_photo().is_some());

    run(&mut controller, &mut state, AppIntent::PhotoRemoved);
    assert!(state.photo.selected_photo().is_none());
}

#[test]
fn test_camera_frame_becomes_jpeg_selection() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);

    run(
        &mut controller,
        &mut state,
        AppIntent::CameraFrameCaptured {
            frame: Arc::new(noisy_frame(32)),
        },
    );

    assert_eq!(state.ui.notification_count(), 0);
    let selected = state.photo.selected_photo().expect("Kamera-Foto ausgewaehlt");
    assert_eq!(selected.mime_type(), Some("image/jpeg"));
}

#[test]
fn test_oversized_camera_frame_is_rejected_and_keeps_selection() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);
    state.photo = PhotoCapture::new(200, 80);
    let _dir = select_photo_file(&mut controller, &mut state, "ida.png", &tiny_png());
    let before = state.photo.selected_photo().cloned();
    assert!(before.is_some(), "kleines PNG passt unter 200 Bytes");

    run(
        &mut controller,
        &mut state,
        AppIntent::CameraFrameCaptured {
            frame: Arc::new(noisy_frame(64)),
        },
    );

    assert_eq!(
        state.ui.current_notification(),
        Some("Photo is too large. Try again with better lighting or closer subject.")
    );
    assert_eq!(state.photo.selected_photo().cloned(), before);
}

#[test]
fn test_gif_file_is_rejected_with_notification() {
    let mut controller = controller();
    let mut state = signed_in_state(&mut controller);

    let _dir = select_photo_file(
        &mut controller,
        &mut state,
        "anim.gif",
        b"GIF89a\x01\0\x01\0rest-of-file",
    );

    assert!(state.photo.selected_photo().is_none());
    let message = state
        .ui
        .current_notification()
        .expect("Hinweis erwartet");
    assert!(message.contains("PNG or JPEG"), "{message}");
}
