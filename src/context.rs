use std::sync::Arc;

use crate::auth::SessionProvider;
use crate::config::UiConfig;
use crate::modal::{ModalService, ModalStack};
use crate::router::{NavigationGuard, RouteTable, Router};
use crate::toast::ToastQueue;

/// Composition root: the single modal orchestrator, modal stack and toast
/// queue of the application. Hand clones of the handles to whatever needs them.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub modals: ModalService,
    pub modal_stack: ModalStack,
    pub toasts: ToastQueue,
    config: UiConfig,
}

impl UiContext {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            modals: ModalService::new(&config.modal),
            modal_stack: ModalStack::new(),
            toasts: ToastQueue::new(&config.toast),
            config: config.clone(),
        }
    }

    /// Built from the process-wide configuration
    pub fn from_env() -> Self {
        Self::new(crate::config::config())
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn guard(&self, session: Arc<dyn SessionProvider>) -> NavigationGuard {
        NavigationGuard::new(self.modals.clone(), self.toasts.clone(), session, &self.config.guard)
    }

    pub fn router(&self, session: Arc<dyn SessionProvider>) -> Router {
        Router::new(RouteTable::portfolio(), self.guard(session))
    }
}
