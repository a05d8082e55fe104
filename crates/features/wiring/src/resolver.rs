use crate::component::Component;
use crate::error::WiringError;
use std::borrow::Cow;
use std::sync::Arc;

/// Turns a label into the handle registered under it.
///
/// Implemented by [`ComponentRegistry`](crate::ComponentRegistry); hosts with their own
/// module tables can implement it to reuse [`Process`](crate::Process)-style validation.
pub trait LabelResolver {
    /// # Errors
    /// Returns [`WiringError::LabelNotFound`] if nothing is registered under `label`.
    fn resolve(&self, label: &str) -> Result<Arc<dyn Component>, WiringError>;

    /// Resolves `label` and downcasts the handle to `T`.
    ///
    /// # Errors
    /// [`WiringError::LabelNotFound`], or [`WiringError::TypeMismatch`] if the component
    /// registered under `label` is not a `T`.
    fn resolve_as<T: Component>(&self, label: &str) -> Result<Arc<T>, WiringError>
    where
        Self: Sized,
    {
        self.resolve(label)?.into_any().downcast::<T>().map_err(|_| WiringError::TypeMismatch {
            message: Cow::Owned(format!("'{label}' is not a {}", std::any::type_name::<T>())),
            context: None,
        })
    }
}
