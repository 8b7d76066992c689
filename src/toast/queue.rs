// Bounded, self-expiring toast queue
//
// Fire-and-forget: callers add a toast and never hear about it again. Overflow
// evicts the oldest entry; timed expiry and manual dismissal both remove by id,
// so whichever comes second finds nothing and does nothing.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::config::ToastConfig;
use crate::types::{ToastId, ToastKind};

/// What a caller supplies; unset fields take the queue's defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewToast {
    pub message: String,
    pub kind: Option<ToastKind>,
    /// Milliseconds until expiry. `Some(0)` keeps the toast until dismissed.
    pub duration_ms: Option<u64>,
    pub is_closable: Option<bool>,
}

impl NewToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: None,
            duration_ms: None,
            is_closable: None,
        }
    }

    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// No auto-expiry
    pub fn sticky(self) -> Self {
        self.duration_ms(0)
    }

    pub fn closable(mut self, is_closable: bool) -> Self {
        self.is_closable = Some(is_closable);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ToastKind,
    pub duration_ms: u64,
    pub is_closable: bool,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn expires(&self) -> bool {
        self.duration_ms > 0
    }
}

#[derive(Debug, Clone)]
pub enum ToastEvent {
    Added(Toast),
    /// Pushed out by a newer toast when the queue was full
    Evicted(Toast),
    Removed(ToastId),
    Cleared,
}

struct QueueInner {
    toasts: Mutex<VecDeque<Toast>>,
    capacity: usize,
    default_duration_ms: u64,
    events: broadcast::Sender<ToastEvent>,
    runtime: Option<Handle>,
}

impl QueueInner {
    fn toasts(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: ToastEvent) {
        let _ = self.events.send(event);
    }

    fn remove(&self, id: ToastId) -> bool {
        let removed = {
            let mut toasts = self.toasts();
            match toasts.iter().position(|t| t.id == id) {
                Some(pos) => toasts.remove(pos).is_some(),
                None => false,
            }
        };

        if removed {
            tracing::debug!("Removed toast {}", id);
            self.emit(ToastEvent::Removed(id));
        }
        removed
    }
}

/// Handle to the toast queue. Clones share one queue.
#[derive(Clone)]
pub struct ToastQueue {
    inner: Arc<QueueInner>,
}

impl ToastQueue {
    pub fn new(config: &ToastConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_buffer.max(1));
        Self {
            inner: Arc::new(QueueInner {
                toasts: Mutex::new(VecDeque::new()),
                capacity: config.capacity.max(1),
                default_duration_ms: config.default_duration_ms,
                events,
                runtime: Handle::try_current().ok(),
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.inner.default_duration_ms)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.inner.events.subscribe()
    }

    /// Append a toast, evicting the oldest one if the queue overflows, and
    /// schedule its expiry when it has a positive duration
    pub fn add_toast(&self, new_toast: NewToast) -> ToastId {
        let toast = Toast {
            id: Uuid::new_v4(),
            message: new_toast.message,
            kind: new_toast.kind.unwrap_or_default(),
            duration_ms: new_toast.duration_ms.unwrap_or(self.inner.default_duration_ms),
            is_closable: new_toast.is_closable.unwrap_or(true),
            created_at: Utc::now(),
        };
        let id = toast.id;
        let expires_after = toast.expires().then(|| Duration::from_millis(toast.duration_ms));

        let evicted = {
            let mut toasts = self.inner.toasts();
            toasts.push_back(toast.clone());
            if toasts.len() > self.inner.capacity {
                toasts.pop_front()
            } else {
                None
            }
        };

        tracing::debug!("Added {} toast {}: {}", toast.kind, id, toast.message);
        self.inner.emit(ToastEvent::Added(toast));

        if let Some(oldest) = evicted {
            tracing::debug!("Toast queue full, evicted {}", oldest.id);
            self.inner.emit(ToastEvent::Evicted(oldest));
        }

        if let Some(delay) = expires_after {
            self.schedule_expiry(id, delay);
        }

        id
    }

    /// Remove by id; no-op if it already left the queue
    pub fn remove_toast(&self, id: ToastId) -> bool {
        self.inner.remove(id)
    }

    /// Empty the queue; pending expiries find nothing to remove
    pub fn clear_toasts(&self) {
        let cleared = {
            let mut toasts = self.inner.toasts();
            let count = toasts.len();
            toasts.clear();
            count
        };
        tracing::debug!("Cleared {} toast(s)", cleared);
        self.inner.emit(ToastEvent::Cleared);
    }

    /// Oldest first
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.toasts().iter().cloned().collect()
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.inner.toasts().iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.inner.toasts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.toasts().is_empty()
    }

    fn schedule_expiry(&self, id: ToastId, delay: Duration) {
        let inner: Weak<QueueInner> = Arc::downgrade(&self.inner);

        match &self.inner.runtime {
            Some(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    if let Some(inner) = inner.upgrade() {
                        inner.remove(id);
                    }
                });
            }
            None => {
                tracing::warn!("Toast queue built outside a runtime, toast {} will not expire on its own", id);
            }
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(&ToastConfig::default())
    }
}

impl std::fmt::Debug for ToastQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastQueue")
            .field("len", &self.len())
            .field("capacity", &self.inner.capacity)
            .finish()
    }
}
