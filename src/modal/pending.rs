use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

use crate::modal::error::ModalError;
use crate::types::{ModalId, ModalResult};

/// The caller's side of a modal request.
///
/// Resolves exactly once with the settled `ModalResult`. Dropping it does not
/// close the modal; the request stays live until something settles it.
#[must_use = "a pending modal does nothing unless awaited"]
#[derive(Debug)]
pub struct PendingModal {
    id: ModalId,
    receiver: oneshot::Receiver<ModalResult>,
}

impl PendingModal {
    pub(crate) fn new(id: ModalId, receiver: oneshot::Receiver<ModalResult>) -> Self {
        Self { id, receiver }
    }

    pub fn id(&self) -> ModalId {
        self.id
    }
}

impl Future for PendingModal {
    type Output = Result<ModalResult, ModalError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let id = self.id;
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.map_err(|_| ModalError::Abandoned(id)))
    }
}
