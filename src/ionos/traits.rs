//! Common traits for IONOS resources

use crate::ionos::models::Entity;

/// Properties that may carry a human-readable name
pub trait NamedProperties {
    fn name(&self) -> Option<&str> {
        None
    }
}

/// Common trait for all API resources
///
/// Gives bulk operations and output a uniform way to identify items.
pub trait ApiResource {
    /// Server-assigned id
    fn id(&self) -> &str;

    /// Human-readable name, when the resource has one
    fn name(&self) -> Option<&str>;

    /// Lifecycle state from metadata
    fn state(&self) -> Option<&str>;

    /// Name if present, id otherwise
    fn display_name(&self) -> &str {
        self.name().filter(|n| !n.is_empty()).unwrap_or(self.id())
    }
}

impl<P: NamedProperties> ApiResource for Entity<P> {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        self.properties.name()
    }

    fn state(&self) -> Option<&str> {
        Entity::<P>::state(self)
    }
}
