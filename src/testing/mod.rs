use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::auth::{AuthSession, Profile, User};
use crate::config::UiConfig;
use crate::modal::ScriptedResponder;
use crate::router::{NavigationGuard, Router};
use crate::UiContext;

/// Test utilities wiring a UI context to a controllable session
pub struct TestContext {
    pub ui: UiContext,
    pub session: Arc<AuthSession>,
}

impl TestContext {
    /// Anonymous visitor, default configuration
    pub fn new() -> Self {
        Self {
            ui: UiContext::new(&UiConfig::default()),
            session: Arc::new(AuthSession::new()),
        }
    }

    /// Signed-in user, optionally with a profile role
    pub fn signed_in(role: Option<&str>) -> Self {
        let ctx = Self::new();
        let user = Self::generate_test_user();
        let profile = role.map(|r| Profile::new(user.id, r));
        ctx.session.set_user_and_profile(Some(user), profile);
        ctx
    }

    pub fn guard(&self) -> NavigationGuard {
        self.ui.guard(self.session.clone())
    }

    pub fn router(&self) -> Router {
        self.ui.router(self.session.clone())
    }

    pub fn respond_with(&self, responder: ScriptedResponder) -> JoinHandle<()> {
        responder.spawn(&self.ui.modals)
    }

    fn generate_test_user() -> User {
        let id = Uuid::new_v4();
        User {
            id,
            email: format!("test_{}@example.com", id.simple()),
        }
    }
}
