use std::fmt;
use std::sync::Arc;

/// Renderable modal content.
///
/// The orchestrator never interprets content; it only holds the handle so the
/// rendering collaborator can resolve it. `name` is used for logging and by
/// headless responders that settle modals by component.
pub trait ModalComponent: Send + Sync + 'static {
    fn name(&self) -> &str;
}

/// A component identified by a static name, enough for most call sites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticComponent {
    name: &'static str,
}

impl StaticComponent {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl ModalComponent for StaticComponent {
    fn name(&self) -> &str {
        self.name
    }
}

/// What a caller hands to `show_modal`.
///
/// Only `Component` is renderable by the id-keyed orchestrator. `Name` is the
/// string-lookup form used by the stack-keyed store and is rejected there.
#[derive(Clone)]
pub enum ModalContent {
    Component(Arc<dyn ModalComponent>),
    Name(String),
}

impl ModalContent {
    pub fn component<C: ModalComponent>(component: C) -> Self {
        ModalContent::Component(Arc::new(component))
    }
}

impl fmt::Debug for ModalContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalContent::Component(c) => f.debug_tuple("Component").field(&c.name()).finish(),
            ModalContent::Name(name) => f.debug_tuple("Name").field(name).finish(),
        }
    }
}

impl From<StaticComponent> for ModalContent {
    fn from(component: StaticComponent) -> Self {
        ModalContent::component(component)
    }
}

impl From<Arc<dyn ModalComponent>> for ModalContent {
    fn from(component: Arc<dyn ModalComponent>) -> Self {
        ModalContent::Component(component)
    }
}

impl From<&str> for ModalContent {
    fn from(name: &str) -> Self {
        ModalContent::Name(name.to_string())
    }
}

impl From<String> for ModalContent {
    fn from(name: String) -> Self {
        ModalContent::Name(name)
    }
}
