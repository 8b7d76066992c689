// Id-keyed modal orchestrator
//
// Any caller can request a modal and await the user's decision. Several modals
// may be open at once; each one settles exactly once and is removed only after
// the grace delay that lets the renderer play its exit transition.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, oneshot};

use crate::config::ModalConfig;
use crate::modal::callbacks::ModalCallbacks;
use crate::modal::content::{ModalComponent, ModalContent};
use crate::modal::error::ModalError;
use crate::modal::pending::PendingModal;
use crate::types::{ModalAction, ModalId, ModalOptions, ModalResult};

/// Caller data forwarded to the rendered content, augmented with the
/// request id and the terminal callbacks. Immutable once registered.
#[derive(Debug, Clone)]
pub struct ModalProps {
    pub modal_id: ModalId,
    pub data: Arc<Map<String, Value>>,
    pub callbacks: ModalCallbacks,
}

impl ModalProps {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

/// Read-only snapshot of a live modal, what a renderer works from
#[derive(Clone)]
pub struct ModalView {
    pub id: ModalId,
    pub component: Arc<dyn ModalComponent>,
    pub props: ModalProps,
    pub options: ModalOptions,
    pub visible: bool,
    pub result: Option<ModalResult>,
}

impl ModalView {
    pub fn component_name(&self) -> &str {
        self.component.name()
    }

    pub fn callbacks(&self) -> &ModalCallbacks {
        &self.props.callbacks
    }

    pub fn is_settled(&self) -> bool {
        self.result.is_some()
    }
}

impl fmt::Debug for ModalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalView")
            .field("id", &self.id)
            .field("component", &self.component.name())
            .field("props", &self.props.data)
            .field("options", &self.options)
            .field("visible", &self.visible)
            .field("result", &self.result)
            .finish()
    }
}

/// Changes to the live collection, published for rendering collaborators
#[derive(Debug, Clone)]
pub enum ModalEvent {
    Opened(ModalView),
    /// Settled and invisible; removal follows after the grace delay
    Hiding { id: ModalId, result: ModalResult },
    Removed { id: ModalId, result: ModalResult },
}

struct ActiveModal {
    id: ModalId,
    component: Arc<dyn ModalComponent>,
    props: ModalProps,
    options: ModalOptions,
    visible: bool,
    // Some(..) exactly when the modal has begun closing; never overwritten
    settled: Option<ModalResult>,
    resolver: Option<oneshot::Sender<ModalResult>>,
}

impl ActiveModal {
    fn view(&self) -> ModalView {
        ModalView {
            id: self.id,
            component: Arc::clone(&self.component),
            props: self.props.clone(),
            options: self.options.clone(),
            visible: self.visible,
            result: self.settled.clone(),
        }
    }
}

pub(crate) struct ServiceInner {
    modals: Mutex<BTreeMap<ModalId, ActiveModal>>,
    next_id: AtomicU64,
    grace_delay: Duration,
    default_close_on_click_outside: bool,
    events: broadcast::Sender<ModalEvent>,
    // Runtime current at construction; callbacks may fire from any thread
    runtime: Option<Handle>,
}

impl ServiceInner {
    fn table(&self) -> MutexGuard<'_, BTreeMap<ModalId, ActiveModal>> {
        // The table holds no invariants a panicking holder could half-apply
        self.modals.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: ModalEvent) {
        // No subscribers is the normal headless case
        let _ = self.events.send(event);
    }

    /// Record the terminal result and hide. Returns the result when this call
    /// started the close, `None` when the id is unknown or already closing.
    fn begin_close(
        table: &mut BTreeMap<ModalId, ActiveModal>,
        id: ModalId,
        result: Option<ModalResult>,
    ) -> Option<ModalResult> {
        let Some(modal) = table.get_mut(&id) else {
            tracing::debug!("hide_modal: modal {} is not open, ignoring", id);
            return None;
        };

        if modal.settled.is_some() {
            tracing::debug!("hide_modal: modal {} already settled, ignoring", id);
            return None;
        }

        let mut result = result.unwrap_or_else(|| ModalResult::new(id, ModalAction::Close, None));
        if result.id != id {
            tracing::warn!("hide_modal: result for modal {} carried id {}, correcting", id, result.id);
            result.id = id;
        }

        tracing::debug!(
            "Hiding modal {} (component '{}') with action {}",
            id,
            modal.component.name(),
            result.action
        );

        modal.visible = false;
        modal.settled = Some(result.clone());
        Some(result)
    }

    /// Grace delay elapsed: deliver the result and drop the entry
    fn finish_close(&self, id: ModalId) {
        let Some(mut modal) = self.table().remove(&id) else {
            return;
        };

        let result = modal
            .settled
            .take()
            .unwrap_or_else(|| ModalResult::new(id, ModalAction::Close, None));

        if let Some(resolver) = modal.resolver.take() {
            if resolver.send(result.clone()).is_err() {
                tracing::debug!("Modal {} settled but nobody is awaiting it", id);
            }
        }

        tracing::debug!("Removed modal {} ({})", id, result.action);
        self.emit(ModalEvent::Removed { id, result });
    }
}

/// Handle to the modal orchestrator. Cheap to clone; all clones share one table.
#[derive(Clone)]
pub struct ModalService {
    inner: Arc<ServiceInner>,
}

impl ModalService {
    pub fn new(config: &ModalConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_buffer.max(1));
        Self {
            inner: Arc::new(ServiceInner {
                modals: Mutex::new(BTreeMap::new()),
                next_id: AtomicU64::new(0),
                grace_delay: config.grace_delay(),
                default_close_on_click_outside: config.default_close_on_click_outside,
                events,
                runtime: Handle::try_current().ok(),
            }),
        }
    }

    pub(crate) fn from_inner(inner: Arc<ServiceInner>) -> Self {
        Self { inner }
    }

    pub fn grace_delay(&self) -> Duration {
        self.inner.grace_delay
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ModalEvent> {
        self.inner.events.subscribe()
    }

    /// Request a modal and get back the awaitable decision.
    ///
    /// Bare names are rejected before anything is registered, so a usage
    /// error never leaves a dangling wait behind.
    pub fn show_modal(
        &self,
        content: impl Into<ModalContent>,
        props: Map<String, Value>,
        options: ModalOptions,
    ) -> Result<PendingModal, ModalError> {
        let component = match content.into() {
            ModalContent::Component(component) => component,
            ModalContent::Name(name) => {
                tracing::warn!(
                    "Modal component name ('{}') not supported. Must be a component handle.",
                    name
                );
                return Err(ModalError::UnsupportedContent(name));
            }
        };

        let id = ModalId(self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let (resolver, receiver) = oneshot::channel();

        let mut options = options;
        options
            .close_on_click_outside
            .get_or_insert(self.inner.default_close_on_click_outside);

        let modal = ActiveModal {
            id,
            component,
            props: ModalProps {
                modal_id: id,
                data: Arc::new(props),
                callbacks: ModalCallbacks::new(id, Arc::downgrade(&self.inner)),
            },
            options,
            visible: true,
            settled: None,
            resolver: Some(resolver),
        };
        let view = modal.view();

        self.inner.table().insert(id, modal);
        tracing::debug!("Showing modal {} (component '{}')", id, view.component_name());
        self.inner.emit(ModalEvent::Opened(view));

        Ok(PendingModal::new(id, receiver))
    }

    /// `show_modal` with no props and default options
    pub fn show(&self, content: impl Into<ModalContent>) -> Result<PendingModal, ModalError> {
        self.show_modal(content, Map::new(), ModalOptions::default())
    }

    /// Begin closing a modal. Without a result, settles with `close`.
    /// Unknown or already-closing ids are a silent no-op.
    pub fn hide_modal(&self, id: ModalId, result: Option<ModalResult>) {
        let settled = {
            let mut table = self.inner.table();
            ServiceInner::begin_close(&mut table, id, result)
        };

        if let Some(result) = settled {
            self.inner.emit(ModalEvent::Hiding { id, result });
            self.schedule_removal(id);
        }
    }

    /// System-driven close with an explicit action, e.g. to preempt a modal
    pub fn force_hide_modal(&self, id: ModalId, action: ModalAction, payload: Option<Value>) {
        tracing::debug!("Force-hiding modal {} with action {}", id, action);
        self.hide_modal(id, Some(ModalResult::new(id, action, payload)));
    }

    /// `force_hide_modal` with `programmatic_close` and no payload
    pub fn force_close(&self, id: ModalId) {
        self.force_hide_modal(id, ModalAction::ProgrammaticClose, None);
    }

    /// Settle every open modal with `close_all` and remove them all
    pub fn hide_all_modals(&self) {
        let settled: Vec<(ModalId, ModalResult)> = {
            let mut table = self.inner.table();
            let ids: Vec<ModalId> = table.keys().copied().collect();
            ids.into_iter()
                .filter_map(|id| {
                    let result = ModalResult::new(id, ModalAction::CloseAll, None);
                    ServiceInner::begin_close(&mut table, id, Some(result)).map(|r| (id, r))
                })
                .collect()
        };

        tracing::debug!("hide_all_modals: closing {} modal(s)", settled.len());

        for (id, result) in settled {
            self.inner.emit(ModalEvent::Hiding { id, result });
            self.schedule_removal(id);
        }
    }

    /// Backdrop click on modal `id`; closes only if its options allow it
    pub fn click_outside(&self, id: ModalId) -> bool {
        let allowed = self
            .inner
            .table()
            .get(&id)
            .map(|m| m.settled.is_none() && m.options.close_on_click_outside.unwrap_or(false))
            .unwrap_or(false);

        if allowed {
            self.hide_modal(id, Some(ModalResult::new(id, ModalAction::Close, None)));
        }
        allowed
    }

    pub fn get(&self, id: ModalId) -> Option<ModalView> {
        self.inner.table().get(&id).map(ActiveModal::view)
    }

    /// Live modals in id order, including ones still in their grace delay
    pub fn active_modals(&self) -> Vec<ModalView> {
        self.inner.table().values().map(ActiveModal::view).collect()
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.inner.table().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.inner.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.table().is_empty()
    }

    fn schedule_removal(&self, id: ModalId) {
        let inner = Arc::clone(&self.inner);
        let delay = inner.grace_delay;

        match &self.inner.runtime {
            Some(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    inner.finish_close(id);
                });
            }
            None => {
                tracing::warn!("Modal service built outside a runtime, removing modal {} without grace delay", id);
                inner.finish_close(id);
            }
        }
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new(&ModalConfig::default())
    }
}

impl fmt::Debug for ModalService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalService")
            .field("open", &self.len())
            .field("grace_delay", &self.inner.grace_delay)
            .finish()
    }
}
