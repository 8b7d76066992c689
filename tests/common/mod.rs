#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use portfolio_ui::auth::{AuthSession, Profile, User};
use portfolio_ui::config::UiConfig;
use portfolio_ui::modal::StaticComponent;
use portfolio_ui::UiContext;
use uuid::Uuid;

pub const MODAL_A: StaticComponent = StaticComponent::new("ModalA");
pub const MODAL_B: StaticComponent = StaticComponent::new("ModalB");

pub fn ui() -> UiContext {
    UiContext::new(&UiConfig::default())
}

/// Sleep just past the modal grace delay on the (paused) test clock
pub async fn past_grace(ui: &UiContext) {
    tokio::time::sleep(ui.modals.grace_delay() + Duration::from_millis(1)).await;
}

pub fn anonymous() -> Arc<AuthSession> {
    Arc::new(AuthSession::new())
}

pub fn signed_in(role: Option<&str>) -> Arc<AuthSession> {
    let user = User {
        id: Uuid::new_v4(),
        email: "owner@example.com".to_string(),
    };
    let profile = role.map(|r| Profile::new(user.id, r));
    Arc::new(AuthSession::signed_in(user, profile))
}
