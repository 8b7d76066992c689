use serde_json::Value;
use std::fmt;
use std::sync::Weak;

use crate::modal::service::{ModalService, ServiceInner};
use crate::types::{ModalAction, ModalId, ModalResult};

/// Terminal callbacks injected into every rendered modal.
///
/// Each one funnels into `ModalService::hide_modal`, so calling several of
/// them (or the same one twice) settles the request only once. The handle is
/// weak: content that outlives the orchestrator calls into nothing.
#[derive(Clone)]
pub struct ModalCallbacks {
    id: ModalId,
    service: Weak<ServiceInner>,
}

impl ModalCallbacks {
    pub(crate) fn new(id: ModalId, service: Weak<ServiceInner>) -> Self {
        Self { id, service }
    }

    pub fn id(&self) -> ModalId {
        self.id
    }

    pub fn confirm(&self, payload: Option<Value>) {
        self.settle(ModalAction::Confirm, payload);
    }

    pub fn cancel(&self, payload: Option<Value>) {
        self.settle(ModalAction::Cancel, payload);
    }

    pub fn close(&self, payload: Option<Value>) {
        self.settle(ModalAction::Close, payload);
    }

    /// Backdrop click. Closes only when the modal was opened with
    /// `close_on_click_outside`; returns whether it did.
    pub fn click_outside(&self) -> bool {
        match self.service.upgrade() {
            Some(inner) => ModalService::from_inner(inner).click_outside(self.id),
            None => false,
        }
    }

    fn settle(&self, action: ModalAction, payload: Option<Value>) {
        if let Some(inner) = self.service.upgrade() {
            let result = ModalResult::new(self.id, action, payload);
            ModalService::from_inner(inner).hide_modal(self.id, Some(result));
        } else {
            tracing::debug!("Modal {} callback fired after orchestrator shutdown", self.id);
        }
    }
}

impl fmt::Debug for ModalCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalCallbacks")
            .field("id", &self.id)
            .field("attached", &(self.service.strong_count() > 0))
            .finish()
    }
}
