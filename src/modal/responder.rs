use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::modal::service::{ModalEvent, ModalService, ModalView};

/// How a scripted responder answers a modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Confirm,
    Cancel,
    Close,
}

impl std::str::FromStr for ReplyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirm" => Ok(ReplyKind::Confirm),
            "cancel" => Ok(ReplyKind::Cancel),
            "close" => Ok(ReplyKind::Close),
            other => Err(format!("unknown reply '{}', expected confirm|cancel|close", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedReply {
    pub kind: ReplyKind,
    pub payload: Option<Value>,
}

impl ScriptedReply {
    pub fn new(kind: ReplyKind, payload: Option<Value>) -> Self {
        Self { kind, payload }
    }

    fn apply(&self, view: &ModalView) {
        let callbacks = view.callbacks();
        match self.kind {
            ReplyKind::Confirm => callbacks.confirm(self.payload.clone()),
            ReplyKind::Cancel => callbacks.cancel(self.payload.clone()),
            ReplyKind::Close => callbacks.close(self.payload.clone()),
        }
    }
}

/// Headless stand-in for the rendering collaborator.
///
/// Watches the orchestrator's event feed and answers each opened modal through
/// its injected callbacks, picking the reply by component name. Modals with no
/// matching rule and no fallback are left open.
#[derive(Debug, Clone, Default)]
pub struct ScriptedResponder {
    replies: HashMap<String, ScriptedReply>,
    fallback: Option<ScriptedReply>,
}

impl ScriptedResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_to(mut self, component: impl Into<String>, reply: ScriptedReply) -> Self {
        self.replies.insert(component.into(), reply);
        self
    }

    pub fn otherwise(mut self, reply: ScriptedReply) -> Self {
        self.fallback = Some(reply);
        self
    }

    fn reply_for(&self, component: &str) -> Option<&ScriptedReply> {
        self.replies.get(component).or(self.fallback.as_ref())
    }

    /// Subscribe now and answer in the background until the service goes away
    pub fn spawn(self, service: &ModalService) -> JoinHandle<()> {
        let mut events = service.subscribe();

        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(ModalEvent::Opened(view)) => match self.reply_for(view.component_name()) {
                        Some(reply) => {
                            tracing::debug!(
                                "Responder answering modal {} ('{}') with {:?}",
                                view.id,
                                view.component_name(),
                                reply.kind
                            );
                            reply.apply(&view);
                        }
                        None => {
                            tracing::debug!("Responder has no reply for '{}'", view.component_name());
                        }
                    },
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("Responder lagged, {} modal event(s) skipped", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}
