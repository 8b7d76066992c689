// Name-keyed modal stack
//
// The simpler addressing mode used by call sites that only need "show the
// modal called X". Only the top entry is active; opening a name that is
// already on the stack drops the old entry first, so each name appears at
// most once. There is no awaited decision here; callers that need one use
// ModalService.

use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedModal {
    pub name: String,
    pub props: Map<String, Value>,
    pub close_on_click_outside: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ModalStack {
    entries: Arc<Mutex<Vec<StackedModal>>>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries_mut(&self) -> MutexGuard<'_, Vec<StackedModal>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Push `name` on top, replacing any existing entry with the same name
    pub fn open_modal(&self, name: impl Into<String>, props: Map<String, Value>, close_on_click_outside: bool) {
        let name = name.into();
        let mut entries = self.entries_mut();

        let before = entries.len();
        entries.retain(|modal| modal.name != name);
        if entries.len() != before {
            tracing::debug!("Modal '{}' already on the stack, replacing it", name);
        }

        tracing::debug!("Opening stacked modal '{}' (depth {})", name, entries.len() + 1);
        entries.push(StackedModal {
            name,
            props,
            close_on_click_outside,
        });
    }

    /// Pop the top entry; `None` on an empty stack
    pub fn close_modal(&self) -> Option<StackedModal> {
        let closed = self.entries_mut().pop();
        if let Some(modal) = &closed {
            tracing::debug!("Closed stacked modal '{}'", modal.name);
        }
        closed
    }

    pub fn close_all_modals(&self) {
        let mut entries = self.entries_mut();
        tracing::debug!("Closing all {} stacked modal(s)", entries.len());
        entries.clear();
    }

    /// Backdrop click on the top entry; pops it if it allows that
    pub fn click_outside(&self) -> Option<StackedModal> {
        let mut entries = self.entries_mut();
        match entries.last() {
            Some(top) if top.close_on_click_outside => entries.pop(),
            _ => None,
        }
    }

    pub fn active_modal(&self) -> Option<StackedModal> {
        self.entries_mut().last().cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries_mut().iter().any(|modal| modal.name == name)
    }

    /// Bottom to top
    pub fn entries(&self) -> Vec<StackedModal> {
        self.entries_mut().clone()
    }

    pub fn len(&self) -> usize {
        self.entries_mut().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries_mut().is_empty()
    }
}
