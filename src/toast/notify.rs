// Shorthand for the common toast kinds

use crate::toast::queue::{NewToast, ToastQueue};
use crate::types::{ToastId, ToastKind};

impl ToastQueue {
    pub fn show_toast(
        &self,
        message: impl Into<String>,
        kind: ToastKind,
        duration_ms: Option<u64>,
        is_closable: Option<bool>,
    ) -> ToastId {
        self.add_toast(NewToast {
            message: message.into(),
            kind: Some(kind),
            duration_ms,
            is_closable,
        })
    }

    pub fn success(&self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.show_toast(message, ToastKind::Success, duration_ms, None)
    }

    pub fn error(&self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.show_toast(message, ToastKind::Error, duration_ms, None)
    }

    pub fn info(&self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.show_toast(message, ToastKind::Info, duration_ms, None)
    }

    pub fn warning(&self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.show_toast(message, ToastKind::Warning, duration_ms, None)
    }

    pub fn upcoming(&self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.show_toast(message, ToastKind::Upcoming, duration_ms, None)
    }

    pub fn new_feature(&self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.show_toast(message, ToastKind::NewFeature, duration_ms, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_set_kind() {
        let queue = ToastQueue::default();
        queue.success("ok", Some(0));
        queue.error("bad", Some(0));
        queue.upcoming("soon", Some(0));
        queue.new_feature("new", Some(0));

        let kinds: Vec<ToastKind> = queue.toasts().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![ToastKind::Success, ToastKind::Error, ToastKind::Upcoming, ToastKind::NewFeature]
        );
    }
}
