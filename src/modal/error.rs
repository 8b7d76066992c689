use thiserror::Error;

use crate::types::ModalId;

/// Modal orchestrator errors
///
/// Closing an unknown or already-settled modal is not an error; only
/// usage errors at request time and abandoned waits are surfaced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModalError {
    #[error("Modal component name ('{0}') not supported. Must be a component handle.")]
    UnsupportedContent(String),

    #[error("Modal {0} was dropped before it was settled")]
    Abandoned(ModalId),
}
