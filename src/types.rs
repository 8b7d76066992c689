// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Identity of a modal in the id-keyed orchestrator.
/// Allocated from a monotonically increasing counter, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalId(pub u64);

impl ModalId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal action recorded when a modal request is settled
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModalAction {
    Confirm,
    Cancel,
    Close,
    Duplicate,
    ProgrammaticClose,
    CloseAll,
    // Connectivity preemption actions, only ever applied by callers via force_hide_modal
    ConnectionLostPreempt,
    ConnectionRestoredPreempt,
    BackendDownPreempt,
    BackendUpPreempt,
    Other(String),
}

impl ModalAction {
    pub fn as_str(&self) -> &str {
        match self {
            ModalAction::Confirm => "confirm",
            ModalAction::Cancel => "cancel",
            ModalAction::Close => "close",
            ModalAction::Duplicate => "duplicate",
            ModalAction::ProgrammaticClose => "programmatic_close",
            ModalAction::CloseAll => "close_all",
            ModalAction::ConnectionLostPreempt => "connection_lost_preempt",
            ModalAction::ConnectionRestoredPreempt => "connection_restored_preempt",
            ModalAction::BackendDownPreempt => "backend_down_preempt",
            ModalAction::BackendUpPreempt => "backend_up_preempt",
            ModalAction::Other(action) => action,
        }
    }
}

impl From<String> for ModalAction {
    fn from(action: String) -> Self {
        match action.as_str() {
            "confirm" => ModalAction::Confirm,
            "cancel" => ModalAction::Cancel,
            "close" => ModalAction::Close,
            "duplicate" => ModalAction::Duplicate,
            "programmatic_close" => ModalAction::ProgrammaticClose,
            "close_all" => ModalAction::CloseAll,
            "connection_lost_preempt" => ModalAction::ConnectionLostPreempt,
            "connection_restored_preempt" => ModalAction::ConnectionRestoredPreempt,
            "backend_down_preempt" => ModalAction::BackendDownPreempt,
            "backend_up_preempt" => ModalAction::BackendUpPreempt,
            _ => ModalAction::Other(action),
        }
    }
}

impl From<&str> for ModalAction {
    fn from(action: &str) -> Self {
        ModalAction::from(action.to_string())
    }
}

impl From<ModalAction> for String {
    fn from(action: ModalAction) -> Self {
        action.as_str().to_string()
    }
}

impl fmt::Display for ModalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decision a modal request settles with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalResult {
    pub id: ModalId,
    pub action: ModalAction,
    pub payload: Option<Value>,
}

impl ModalResult {
    pub fn new(id: ModalId, action: ModalAction, payload: Option<Value>) -> Self {
        Self { id, action, payload }
    }

    pub fn is_confirm(&self) -> bool {
        self.action == ModalAction::Confirm
    }

    /// Convenience lookup into an object payload, e.g. `{"accepted": true}`
    pub fn payload_flag(&self, key: &str) -> bool {
        self.payload
            .as_ref()
            .and_then(|p| p.get(key))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// Per-request display options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalOptions {
    pub title: Option<String>,
    /// `None` falls back to the orchestrator's configured default
    pub close_on_click_outside: Option<bool>,
}

impl ModalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn close_on_click_outside(mut self, enabled: bool) -> Self {
        self.close_on_click_outside = Some(enabled);
        self
    }
}

/// Identity of a toast, unique per insertion
pub type ToastId = Uuid;

/// Visual intent of a toast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
    #[default]
    Default,
    Upcoming,
    NewFeature,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
            ToastKind::Default => "default",
            ToastKind::Upcoming => "upcoming",
            ToastKind::NewFeature => "new-feature",
        }
    }
}

impl std::str::FromStr for ToastKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(ToastKind::Success),
            "error" => Ok(ToastKind::Error),
            "info" => Ok(ToastKind::Info),
            "warning" => Ok(ToastKind::Warning),
            "default" => Ok(ToastKind::Default),
            "upcoming" => Ok(ToastKind::Upcoming),
            "new-feature" | "new_feature" => Ok(ToastKind::NewFeature),
            other => Err(format!("unknown toast kind '{}'", other)),
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn modal_action_round_trips_through_strings() {
        assert_eq!(ModalAction::from("programmatic_close"), ModalAction::ProgrammaticClose);
        assert_eq!(ModalAction::from("close_all").as_str(), "close_all");
        assert_eq!(
            ModalAction::from("tour_skipped"),
            ModalAction::Other("tour_skipped".to_string())
        );
    }

    #[test]
    fn modal_result_serializes_action_as_snake_case_string() {
        let result = ModalResult::new(ModalId(1), ModalAction::ProgrammaticClose, None);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({"id": 1, "action": "programmatic_close", "payload": null}));
    }

    #[test]
    fn payload_flag_reads_boolean_fields() {
        let result = ModalResult::new(ModalId(3), ModalAction::Confirm, Some(json!({"accepted": true})));
        assert!(result.payload_flag("accepted"));
        assert!(!result.payload_flag("missing"));

        let bare = ModalResult::new(ModalId(3), ModalAction::Confirm, None);
        assert!(!bare.payload_flag("accepted"));
    }

    #[test]
    fn toast_kind_uses_kebab_case() {
        assert_eq!(serde_json::to_value(ToastKind::NewFeature).unwrap(), json!("new-feature"));
        assert_eq!("new-feature".parse::<ToastKind>().unwrap(), ToastKind::NewFeature);
        assert!("loud".parse::<ToastKind>().is_err());
    }
}
