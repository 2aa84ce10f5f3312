//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::photo::PhotoError;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasResized { size } => vec![AppCommand::SetCanvasSize { size }],

        AppIntent::SignInRequested => vec![AppCommand::SignIn],
        AppIntent::SignOutRequested => vec![AppCommand::SignOut],
        AppIntent::AuthStateChanged { identity } => {
            let signed_in = identity.is_some();
            let mut commands = vec![AppCommand::ApplySession { identity }];
            if signed_in {
                commands.push(AppCommand::ReloadMembers);
            }
            commands
        }
        AppIntent::ReloadRequested => {
            if state.is_signed_in() {
                vec![AppCommand::ReloadMembers]
            } else {
                Vec::new()
            }
        }

        AppIntent::AddMemberRequested => vec![AppCommand::CreateMember],
        AppIntent::PhotoUploadRequested => vec![AppCommand::RequestPhotoFileDialog],
        AppIntent::PhotoFileSelected { path } => vec![AppCommand::SelectPhotoFromFile { path }],
        AppIntent::CameraFrameCaptured { frame } => {
            vec![AppCommand::SelectPhotoFromFrame { frame }]
        }
        AppIntent::CameraUnavailable => vec![AppCommand::ShowNotification {
            message: PhotoError::CameraUnsupported.to_string(),
        }],
        AppIntent::PhotoRemoved => vec![AppCommand::ClearSelectedPhoto],

        AppIntent::DeleteMemberRequested { member_id } => {
            vec![AppCommand::OpenDeleteConfirm { member_id }]
        }
        AppIntent::DeleteConfirmed => vec![AppCommand::DeletePendingMember],
        AppIntent::DeleteCancelled => vec![AppCommand::CloseDeleteConfirm],

        AppIntent::BubblePressed { member_id, pointer } => {
            vec![AppCommand::BeginDrag { member_id, pointer }]
        }
        // Ohne aktiven Drag sind Move und Release No-ops
        AppIntent::PointerMoved { pointer } => {
            if state.canvas.drag.is_dragging() {
                vec![AppCommand::UpdateDrag { pointer }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased => {
            if state.canvas.drag.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }

        AppIntent::NotificationDismissed => vec![AppCommand::DismissNotification],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
