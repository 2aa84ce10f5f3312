//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::gateway::{AuthGateway, MemberStore};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Besitzt die Gateways; der AppState wird pro Aufruf hereingereicht.
pub struct AppController<S, A> {
    store: S,
    auth: A,
}

impl<S: MemberStore, A: AuthGateway> AppController<S, A> {
    /// Erstellt einen neuen Controller.
    pub fn new(store: S, auth: A) -> Self {
        Self { store, auth }
    }

    /// Dokument-Store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Auth-Gateway.
    pub fn auth(&self) -> &A {
        &self.auth
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub async fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command).await?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub async fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Canvas ===
            AppCommand::SetCanvasSize { size } => handlers::dialog::set_canvas_size(state, size),

            // === Sitzung ===
            AppCommand::SignIn => handlers::session::sign_in(state, &self.auth).await,
            AppCommand::SignOut => handlers::session::sign_out(state, &self.auth).await,
            AppCommand::ApplySession { identity } => handlers::session::apply(state, identity),
            AppCommand::ReloadMembers => handlers::members::reload(state, &self.store).await,

            // === Mitglieder ===
            AppCommand::CreateMember => handlers::members::create(state, &self.store).await,
            AppCommand::OpenDeleteConfirm { member_id } => {
                handlers::members::request_delete(state, member_id)
            }
            AppCommand::DeletePendingMember => {
                handlers::members::delete_pending(state, &self.store).await
            }
            AppCommand::CloseDeleteConfirm => handlers::members::cancel_delete(state),

            // === Foto ===
            AppCommand::RequestPhotoFileDialog => handlers::photo::request_file_dialog(state),
            AppCommand::SelectPhotoFromFile { path } => {
                handlers::photo::select_from_file(state, &path)
            }
            AppCommand::SelectPhotoFromFrame { frame } => {
                handlers::photo::select_from_frame(state, &frame)
            }
            AppCommand::ClearSelectedPhoto => handlers::photo::clear(state),

            // === Drag ===
            AppCommand::BeginDrag { member_id, pointer } => {
                handlers::drag::begin(state, member_id, pointer)
            }
            AppCommand::UpdateDrag { pointer } => handlers::drag::update(state, pointer),
            AppCommand::EndDrag => handlers::drag::end(state, &self.store).await,

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::ShowNotification { message } => {
                handlers::dialog::show_notification(state, message)
            }
            AppCommand::DismissNotification => handlers::dialog::dismiss_notification(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
