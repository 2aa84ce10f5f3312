//! Gemeinsame Test-Doubles und Helfer fuer die Controller-Flow-Tests.

use family_tree_canvas::gateway::{
    AuthError, AuthGateway, AuthListener, Identity, InMemoryStore, LocalAuthGateway, MemberStore,
    StoreError,
};
use family_tree_canvas::{
    AppController, AppIntent, AppState, MemberId, MemberPatch, MemberRecord, NewMember, OwnerId,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub const OWNER: &str = "owner-1";

/// In-Memory-Store mit schaltbaren Fehlern und Aufrufzaehler.
#[derive(Default)]
pub struct FlakyStore {
    inner: InMemoryStore,
    pub fail_create: AtomicBool,
    pub fail_query: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_delete: AtomicBool,
    calls: AtomicUsize,
    updates: Mutex<Vec<(MemberId, MemberPatch)>>,
}

impl FlakyStore {
    pub fn inner(&self) -> &InMemoryStore {
        &self.inner
    }

    /// Anzahl aller Gateway-Aufrufe.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Alle angefragten Updates (auch fehlgeschlagene).
    pub fn updates(&self) -> Vec<(MemberId, MemberPatch)> {
        self.updates.lock().expect("Update-Log nicht vergiftet").clone()
    }

    fn attempt(&self, flag: &AtomicBool) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if flag.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("backend offline".into()))
        } else {
            Ok(())
        }
    }
}

impl MemberStore for FlakyStore {
    async fn create(&self, member: NewMember) -> Result<MemberId, StoreError> {
        self.attempt(&self.fail_create)?;
        self.inner.create(member).await
    }

    async fn query_by_owner(&self, owner: &OwnerId) -> Result<Vec<MemberRecord>, StoreError> {
        self.attempt(&self.fail_query)?;
        self.inner.query_by_owner(owner).await
    }

    async fn update(&self, id: &MemberId, patch: MemberPatch) -> Result<(), StoreError> {
        self.updates
            .lock()
            .expect("Update-Log nicht vergiftet")
            .push((id.clone(), patch.clone()));
        self.attempt(&self.fail_update)?;
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: &MemberId) -> Result<(), StoreError> {
        self.attempt(&self.fail_delete)?;
        self.inner.delete(id).await
    }
}

/// Auth-Gateway, dessen Anmeldung immer mit einem festen Fehler endet.
pub struct RejectingAuth(pub AuthError);

impl AuthGateway for RejectingAuth {
    async fn sign_in(&self) -> Result<Identity, AuthError> {
        Err(match &self.0 {
            AuthError::Cancelled => AuthError::Cancelled,
            AuthError::Failed(message) => AuthError::Failed(message.clone()),
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }

    fn on_state_change(&self, listener: AuthListener) {
        listener(None);
    }

    fn current_identity(&self) -> Option<Identity> {
        None
    }
}

pub type TestController = AppController<FlakyStore, LocalAuthGateway>;

pub fn identity(uid: &str) -> Identity {
    Identity {
        uid: OwnerId::new(uid),
        display_name: "Mara".into(),
        photo_url: None,
    }
}

pub fn controller() -> TestController {
    AppController::new(FlakyStore::default(), LocalAuthGateway::new(OWNER, "Mara"))
}

pub fn run<S: MemberStore, A: AuthGateway>(
    controller: &mut AppController<S, A>,
    state: &mut AppState,
    intent: AppIntent,
) {
    pollster::block_on(controller.handle_intent(state, intent))
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// Angemeldeter State mit 800×600-Canvas.
pub fn signed_in_state(controller: &mut TestController) -> AppState {
    let mut state = AppState::new();
    run(
        controller,
        &mut state,
        AppIntent::CanvasResized {
            size: glam::Vec2::new(800.0, 600.0),
        },
    );
    run(
        controller,
        &mut state,
        AppIntent::AuthStateChanged {
            identity: Some(identity(OWNER)),
        },
    );
    state
}

pub fn fill_form(state: &mut AppState, name: &str, relation: &str) {
    state.form.name = name.into();
    state.form.relation = relation.into();
}

/// Legt ein Mitglied ueber das Formular an.
pub fn add_member(controller: &mut TestController, state: &mut AppState, name: &str) {
    fill_form(state, name, "Sibling");
    run(controller, state, AppIntent::AddMemberRequested);
}

pub fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(3, 3, image::Rgba([40, 90, 160, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("PNG kodierbar");
    out.into_inner()
}
