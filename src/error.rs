// Crate-level error type
use thiserror::Error;

use crate::modal::ModalError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error(transparent)]
    Modal(#[from] ModalError),

    #[error("Invalid path '{0}': paths must start with '/'")]
    InvalidPath(String),

    #[error("Unknown route name: {0}")]
    UnknownRoute(String),

    #[error("Navigation to '{path}' redirected more than {max} times")]
    RedirectLoop { path: String, max: usize },
}

impl UiError {
    /// Get error code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::Modal(ModalError::UnsupportedContent(_)) => "UNSUPPORTED_CONTENT",
            UiError::Modal(ModalError::Abandoned(_)) => "MODAL_ABANDONED",
            UiError::InvalidPath(_) => "INVALID_PATH",
            UiError::UnknownRoute(_) => "UNKNOWN_ROUTE",
            UiError::RedirectLoop { .. } => "REDIRECT_LOOP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModalId;

    #[test]
    fn modal_errors_convert_and_keep_their_message() {
        let err: UiError = ModalError::Abandoned(ModalId(4)).into();
        assert_eq!(err.error_code(), "MODAL_ABANDONED");
        assert_eq!(err.to_string(), "Modal 4 was dropped before it was settled");
    }

    #[test]
    fn routing_error_codes() {
        assert_eq!(UiError::InvalidPath("admin".into()).error_code(), "INVALID_PATH");
        assert_eq!(
            UiError::RedirectLoop { path: "/a".into(), max: 5 }.error_code(),
            "REDIRECT_LOOP"
        );
    }
}
