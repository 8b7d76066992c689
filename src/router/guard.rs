// Navigation guard: decides whether a route transition proceeds, raising toasts
// and awaiting modal decisions on the way

use serde::Serialize;
use serde_json::Map;
use std::sync::{Arc, Mutex, PoisonError};

use crate::auth::SessionProvider;
use crate::config::GuardConfig;
use crate::error::UiError;
use crate::modal::{ModalService, StaticComponent};
use crate::router::routes::{names, RouteLocation, RouteTable};
use crate::toast::ToastQueue;
use crate::types::{ModalOptions, ToastKind};

/// Shown when a signed-in user heads for the login page
pub const NO_AUTH_NEEDED_MODAL: StaticComponent = StaticComponent::new("NoAuthNeededModal");

/// Explains that the admin panel needs a sign-in; confirm with
/// `{"accepted": true}` to go to the login page
pub const AUTH_INFO_MODAL: StaticComponent = StaticComponent::new("AuthInfoModal");

pub const SIGN_IN_REQUIRED_MESSAGE: &str = "You need to sign in to access the admin panel.";
pub const ADMIN_ROLE_REQUIRED_MESSAGE: &str = "You don't have admin permissions to access this section.";

const MAX_REDIRECTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "route", rename_all = "snake_case")]
pub enum NavigationOutcome {
    Proceed,
    Redirect(String),
}

pub struct NavigationGuard {
    modals: ModalService,
    toasts: ToastQueue,
    session: Arc<dyn SessionProvider>,
    notice_duration_ms: u64,
}

impl NavigationGuard {
    pub fn new(
        modals: ModalService,
        toasts: ToastQueue,
        session: Arc<dyn SessionProvider>,
        config: &GuardConfig,
    ) -> Self {
        Self {
            modals,
            toasts,
            session,
            notice_duration_ms: config.notice_duration_ms,
        }
    }

    /// Runs before every transition. Never fails: modal errors fall back to
    /// sending the user home.
    pub async fn before_each(&self, to: &RouteLocation, from: Option<&RouteLocation>) -> NavigationOutcome {
        tracing::debug!(
            "Guard: {} -> {}",
            from.map(|f| f.path.as_str()).unwrap_or("<start>"),
            to.path
        );

        if to.is(names::LOGIN) && self.session.is_authenticated() {
            match self.modals.show(NO_AUTH_NEEDED_MODAL) {
                Ok(pending) => {
                    if let Err(e) = pending.await {
                        tracing::warn!("Guard: login notice modal failed: {}", e);
                    }
                }
                Err(e) => tracing::warn!("Guard: could not show login notice modal: {}", e),
            }
            tracing::info!("Guard: already signed in, redirecting {} to {}", to.path, names::HOME);
            return NavigationOutcome::Redirect(names::HOME.to_string());
        }

        if !to.requires_auth() {
            return NavigationOutcome::Proceed;
        }

        if !self.session.is_authenticated() {
            self.toasts.show_toast(
                SIGN_IN_REQUIRED_MESSAGE,
                ToastKind::Warning,
                Some(self.notice_duration_ms),
                None,
            );

            let decision = match self.modals.show_modal(AUTH_INFO_MODAL, Map::new(), ModalOptions::default()) {
                Ok(pending) => pending.await.map_err(UiError::from),
                Err(e) => Err(UiError::from(e)),
            };

            return match decision {
                Ok(result) if result.is_confirm() && result.payload_flag("accepted") => {
                    tracing::info!("Guard: sign-in accepted for {}, redirecting to {}", to.path, names::LOGIN);
                    NavigationOutcome::Redirect(names::LOGIN.to_string())
                }
                Ok(result) => {
                    tracing::info!("Guard: sign-in declined ({}) for {}", result.action, to.path);
                    NavigationOutcome::Redirect(names::HOME.to_string())
                }
                Err(e) => {
                    tracing::warn!("Guard: auth info modal failed for {}: {}", to.path, e);
                    NavigationOutcome::Redirect(names::HOME.to_string())
                }
            };
        }

        if let Some(role) = to.required_role() {
            let allowed = self.session.profile().map(|p| p.has_role(role)).unwrap_or(false);
            if !allowed {
                self.toasts.show_toast(
                    ADMIN_ROLE_REQUIRED_MESSAGE,
                    ToastKind::Error,
                    Some(self.notice_duration_ms),
                    None,
                );
                tracing::info!("Guard: role '{}' required for {}, redirecting home", role, to.path);
                return NavigationOutcome::Redirect(names::HOME.to_string());
            }
        }

        NavigationOutcome::Proceed
    }
}

/// Where a navigation ended up and the redirects taken on the way
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationReport {
    pub requested: String,
    pub location: RouteLocation,
    pub redirects: Vec<String>,
}

/// Route table plus guard, tracking the current location
pub struct Router {
    table: RouteTable,
    guard: NavigationGuard,
    current: Mutex<Option<RouteLocation>>,
}

impl Router {
    pub fn new(table: RouteTable, guard: NavigationGuard) -> Self {
        Self {
            table,
            guard,
            current: Mutex::new(None),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current(&self) -> Option<RouteLocation> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Navigate to `path`, following guard redirects until one proceeds
    pub async fn push(&self, path: &str) -> Result<NavigationReport, UiError> {
        let mut target = self.table.resolve(path)?;
        let mut redirects = Vec::new();

        loop {
            let from = self.current();
            match self.guard.before_each(&target, from.as_ref()).await {
                NavigationOutcome::Proceed => break,
                NavigationOutcome::Redirect(name) => {
                    if redirects.len() >= MAX_REDIRECTS {
                        return Err(UiError::RedirectLoop {
                            path: path.to_string(),
                            max: MAX_REDIRECTS,
                        });
                    }
                    target = self.table.resolve_name(&name)?;
                    redirects.push(name);
                }
            }
        }

        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(target.clone());

        Ok(NavigationReport {
            requested: path.to_string(),
            location: target,
            redirects,
        })
    }
}
