use crate::component::Component;
use crate::error::WiringError;
use crate::resolver::LabelResolver;
use fxhash::FxHashMap;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::trace;

#[derive(Debug, Default)]
struct RegistryInner {
    components: FxHashMap<String, Arc<dyn Component>>,
    order: Vec<String>,
}

/// Immutable label → component table, resolved once at startup.
///
/// Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    inner: Arc<RegistryInner>,
}

impl ComponentRegistry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Arc<dyn Component>> {
        self.inner.components.get(label)
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.inner.components.contains_key(label)
    }

    /// Labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.inner.order.iter().map(String::as_str)
    }

    /// Components in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Component>> {
        self.inner.order.iter().filter_map(|label| self.inner.components.get(label))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.order.is_empty()
    }
}

impl LabelResolver for ComponentRegistry {
    fn resolve(&self, label: &str) -> Result<Arc<dyn Component>, WiringError> {
        let found = self.get(label).cloned();
        trace!(label, found = found.is_some(), "Label resolved");
        found.ok_or_else(|| WiringError::label_not_found(label))
    }
}

/// Collects components before the registry is frozen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    inner: RegistryInner,
}

impl RegistryBuilder {
    /// Adds `component` under its own label.
    ///
    /// # Errors
    /// Returns [`WiringError::DuplicateLabel`] if the label is taken.
    pub fn register(&mut self, component: Arc<dyn Component>) -> Result<&mut Self, WiringError> {
        let label = component.label().to_owned();
        if self.inner.components.contains_key(&label) {
            return Err(WiringError::DuplicateLabel {
                label: Cow::Owned(label),
                context: Some(Cow::Owned(format!("registering {}", component.kind()))),
            });
        }
        self.inner.order.push(label.clone());
        self.inner.components.insert(label, component);
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> ComponentRegistry {
        ComponentRegistry { inner: Arc::new(self.inner) }
    }
}
