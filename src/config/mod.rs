use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub environment: Environment,
    pub modal: ModalConfig,
    pub toast: ToastConfig,
    pub guard: GuardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModalConfig {
    /// Pause between hiding a modal and resolving/removing it (exit transition)
    pub grace_delay_ms: u64,
    pub default_close_on_click_outside: bool,
    pub event_buffer: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    pub capacity: usize,
    pub default_duration_ms: u64,
    pub event_buffer: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Lifetime of the toasts raised when a navigation is refused
    pub notice_duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

impl ModalConfig {
    pub fn grace_delay(&self) -> Duration {
        Duration::from_millis(self.grace_delay_ms)
    }
}

impl ToastConfig {
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }
}

impl GuardConfig {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            grace_delay_ms: 300,
            default_close_on_click_outside: true,
            event_buffer: 64,
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            default_duration_ms: 3000,
            event_buffer: 64,
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self { notice_duration_ms: 6000 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl UiConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Modal overrides
        if let Ok(v) = env::var("MODAL_GRACE_DELAY_MS") {
            self.modal.grace_delay_ms = v.parse().unwrap_or(self.modal.grace_delay_ms);
        }
        if let Ok(v) = env::var("MODAL_DEFAULT_CLOSE_ON_CLICK_OUTSIDE") {
            self.modal.default_close_on_click_outside =
                v.parse().unwrap_or(self.modal.default_close_on_click_outside);
        }

        // Toast overrides
        if let Ok(v) = env::var("TOAST_CAPACITY") {
            self.toast.capacity = v.parse().unwrap_or(self.toast.capacity);
        }
        if let Ok(v) = env::var("TOAST_DEFAULT_DURATION_MS") {
            self.toast.default_duration_ms = v.parse().unwrap_or(self.toast.default_duration_ms);
        }

        // Guard overrides
        if let Ok(v) = env::var("GUARD_NOTICE_DURATION_MS") {
            self.guard.notice_duration_ms = v.parse().unwrap_or(self.guard.notice_duration_ms);
        }

        if let Ok(v) = env::var("LOG_FILTER") {
            if !v.trim().is_empty() {
                self.logging.filter = v;
            }
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            modal: ModalConfig::default(),
            toast: ToastConfig::default(),
            guard: GuardConfig::default(),
            logging: LoggingConfig {
                filter: "portfolio_ui=debug,info".to_string(),
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            modal: ModalConfig::default(),
            toast: ToastConfig::default(),
            guard: GuardConfig::default(),
            logging: LoggingConfig {
                filter: "portfolio_ui=info,warn".to_string(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            modal: ModalConfig::default(),
            toast: ToastConfig::default(),
            guard: GuardConfig::default(),
            logging: LoggingConfig {
                filter: "warn".to_string(),
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<UiConfig> = Lazy::new(UiConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static UiConfig {
    &CONFIG
}
