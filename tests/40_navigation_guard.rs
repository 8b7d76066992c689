mod common;

use anyhow::Result;
use serde_json::json;

use common::{anonymous, signed_in, ui};
use portfolio_ui::auth::ADMIN_ROLE;
use portfolio_ui::modal::{ModalEvent, ReplyKind, ScriptedReply, ScriptedResponder};
use portfolio_ui::router::{
    names, NavigationOutcome, RouteTable, ADMIN_ROLE_REQUIRED_MESSAGE, AUTH_INFO_MODAL,
    NO_AUTH_NEEDED_MODAL, SIGN_IN_REQUIRED_MESSAGE,
};
use portfolio_ui::types::{ModalAction, ToastKind};
use portfolio_ui::UiError;

fn accept() -> ScriptedReply {
    ScriptedReply::new(ReplyKind::Confirm, Some(json!({"accepted": true})))
}

#[tokio::test(start_paused = true)]
async fn public_routes_proceed_without_side_effects() -> Result<()> {
    let ui = ui();
    let guard = ui.guard(anonymous());
    let table = RouteTable::portfolio();

    for path in ["/", "/about", "/proyectos/rust-cli", "/does-not-exist"] {
        let to = table.resolve(path)?;
        assert_eq!(guard.before_each(&to, None).await, NavigationOutcome::Proceed, "{}", path);
    }
    assert!(ui.toasts.is_empty());
    assert!(ui.modals.is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn anonymous_admin_visit_toasts_then_redirects_to_login_on_accept() -> Result<()> {
    let ui = ui();
    let _responder = ScriptedResponder::new()
        .reply_to(AUTH_INFO_MODAL.name(), accept())
        .spawn(&ui.modals);

    let guard = ui.guard(anonymous());
    let to = RouteTable::portfolio().resolve("/admin/projects")?;
    let outcome = guard.before_each(&to, None).await;

    assert_eq!(outcome, NavigationOutcome::Redirect(names::LOGIN.to_string()));

    let toasts = ui.toasts.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Warning);
    assert_eq!(toasts[0].message, SIGN_IN_REQUIRED_MESSAGE);
    assert_eq!(toasts[0].duration_ms, 6000);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn confirm_without_acceptance_goes_home() -> Result<()> {
    let ui = ui();
    let _responder = ScriptedResponder::new()
        .reply_to(AUTH_INFO_MODAL.name(), ScriptedReply::new(ReplyKind::Confirm, None))
        .spawn(&ui.modals);

    let guard = ui.guard(anonymous());
    let to = RouteTable::portfolio().resolve("/admin")?;
    assert_eq!(
        guard.before_each(&to, None).await,
        NavigationOutcome::Redirect(names::HOME.to_string())
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn guard_waits_for_the_modal_decision() -> Result<()> {
    let ui = ui();
    let mut events = ui.modals.subscribe();
    let guard = ui.guard(anonymous());
    let to = RouteTable::portfolio().resolve("/admin")?;

    let navigation = tokio::spawn(async move { guard.before_each(&to, None).await });

    let view = match events.recv().await? {
        ModalEvent::Opened(view) => view,
        other => panic!("expected the auth info modal, got {:?}", other),
    };
    assert_eq!(view.component_name(), AUTH_INFO_MODAL.name());
    assert!(!navigation.is_finished());

    view.callbacks().cancel(None);
    assert_eq!(navigation.await?, NavigationOutcome::Redirect(names::HOME.to_string()));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn preempted_auth_modal_sends_user_home() -> Result<()> {
    let ui = ui();
    let mut events = ui.modals.subscribe();
    let modals = ui.modals.clone();
    let preempt = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            if let ModalEvent::Opened(view) = event {
                modals.force_hide_modal(view.id, ModalAction::ConnectionLostPreempt, None);
                break;
            }
        }
    });

    let guard = ui.guard(anonymous());
    let to = RouteTable::portfolio().resolve("/admin")?;
    assert_eq!(
        guard.before_each(&to, None).await,
        NavigationOutcome::Redirect(names::HOME.to_string())
    );
    preempt.await?;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn signed_in_without_admin_role_is_refused() -> Result<()> {
    let ui = ui();
    let table = RouteTable::portfolio();

    for session in [signed_in(Some("editor")), signed_in(None)] {
        let guard = ui.guard(session);
        let to = table.resolve("/admin")?;
        assert_eq!(
            guard.before_each(&to, None).await,
            NavigationOutcome::Redirect(names::HOME.to_string())
        );
    }

    let toasts = ui.toasts.toasts();
    assert_eq!(toasts.len(), 2);
    assert!(toasts.iter().all(|t| t.kind == ToastKind::Error && t.message == ADMIN_ROLE_REQUIRED_MESSAGE));
    assert!(ui.modals.is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn admin_proceeds() -> Result<()> {
    let ui = ui();
    let guard = ui.guard(signed_in(Some(ADMIN_ROLE)));
    let to = RouteTable::portfolio().resolve("/admin/projects")?;
    assert_eq!(guard.before_each(&to, None).await, NavigationOutcome::Proceed);
    assert!(ui.toasts.is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn signed_in_login_visit_shows_notice_and_goes_home() -> Result<()> {
    let ui = ui();
    let mut events = ui.modals.subscribe();
    let _responder = ScriptedResponder::new()
        .otherwise(ScriptedReply::new(ReplyKind::Close, None))
        .spawn(&ui.modals);

    let router = ui.router(signed_in(Some(ADMIN_ROLE)));
    let report = router.push("/login").await?;

    assert_eq!(report.location.name, names::HOME);
    assert_eq!(report.redirects, vec![names::HOME.to_string()]);
    assert_eq!(router.current().map(|l| l.name), Some(names::HOME.to_string()));

    match events.recv().await? {
        ModalEvent::Opened(view) => assert_eq!(view.component_name(), NO_AUTH_NEEDED_MODAL.name()),
        other => panic!("expected the login notice, got {:?}", other),
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn router_rejects_relative_paths() {
    let ui = ui();
    let router = ui.router(anonymous());
    assert_eq!(
        router.push("admin").await.unwrap_err(),
        UiError::InvalidPath("admin".to_string())
    );
    assert!(router.current().is_none());
}

#[tokio::test(start_paused = true)]
async fn sessions_can_change_between_navigations() -> Result<()> {
    let ui = ui();
    let session = signed_in(Some(ADMIN_ROLE));
    let router = ui.router(session.clone());

    assert_eq!(router.push("/admin").await?.location.name, names::ADMIN_DASHBOARD);

    session.clear();
    let _responder = ScriptedResponder::new()
        .reply_to(AUTH_INFO_MODAL.name(), accept())
        .spawn(&ui.modals);
    let report = router.push("/admin").await?;
    assert_eq!(report.location.name, names::LOGIN);
    assert_eq!(ui.toasts.toasts()[0].message, SIGN_IN_REQUIRED_MESSAGE);
    Ok(())
}
