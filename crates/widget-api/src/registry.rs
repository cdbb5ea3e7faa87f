use std::sync::Arc;

use indexmap::IndexMap;

use crate::ProviderRegistryError;
use crate::ports::{ProviderDescriptor, SearchProvider};

/// Registry of the search providers contributing tabs to the widget.
///
/// Registration order is preserved; the first registered provider supplies
/// the initially active tab.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: IndexMap<&'static str, Arc<dyn SearchProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry without any providers registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its declared id.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderRegistryError::DuplicateId`] when a provider with
    /// the same id is already present.
    pub fn register<P>(&mut self, provider: P) -> Result<(), ProviderRegistryError>
    where
        P: SearchProvider + 'static,
    {
        self.register_arc(Arc::new(provider))
    }

    /// Register an already shared provider handle.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderRegistryError::DuplicateId`] when a provider with
    /// the same id is already present.
    pub fn register_arc(
        &mut self,
        provider: Arc<dyn SearchProvider>,
    ) -> Result<(), ProviderRegistryError> {
        let id = provider.descriptor().id;
        if self.providers.contains_key(id) {
            return Err(ProviderRegistryError::DuplicateId { id });
        }
        self.providers.insert(id, provider);
        Ok(())
    }

    /// Lookup a provider by its identifier.
    #[must_use]
    pub fn provider_by_id(&self, id: &str) -> Option<Arc<dyn SearchProvider>> {
        self.providers.get(id).cloned()
    }

    /// Iterate over registered provider descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static ProviderDescriptor> + '_ {
        self.providers.values().map(|provider| provider.descriptor())
    }

    /// Remove the provider registered under `id`.
    pub fn deregister(&mut self, id: &str) -> Option<Arc<dyn SearchProvider>> {
        self.providers.shift_remove(id)
    }

    /// Return the number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` when no providers have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns `true` if a provider has been registered under `id`.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.providers.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SearchFailure;
    use crate::ports::{ProviderUi, SearchQuery};
    use crate::record::ResultSet;

    static FIRST: ProviderDescriptor = ProviderDescriptor {
        id: "first",
        ui: ProviderUi {
            tab_label: "First",
            hint: "",
        },
    };

    static SECOND: ProviderDescriptor = ProviderDescriptor {
        id: "second",
        ui: ProviderUi {
            tab_label: "Second",
            hint: "",
        },
    };

    struct StubProvider(&'static ProviderDescriptor);

    impl SearchProvider for StubProvider {
        fn descriptor(&self) -> &'static ProviderDescriptor {
            self.0
        }

        fn search(&self, _query: &SearchQuery) -> Result<ResultSet, SearchFailure> {
            Err(SearchFailure::LayerNoMatch)
        }
    }

    #[test]
    fn register_preserves_order_and_rejects_duplicates() {
        let mut registry = ProviderRegistry::new();
        registry.register(StubProvider(&FIRST)).unwrap();
        registry.register(StubProvider(&SECOND)).unwrap();

        let ids: Vec<&str> = registry.descriptors().map(|d| d.id).collect();
        assert_eq!(ids, vec!["first", "second"]);

        let err = registry.register(StubProvider(&FIRST)).unwrap_err();
        assert_eq!(err, ProviderRegistryError::DuplicateId { id: "first" });
    }

    #[test]
    fn deregister_removes_provider() {
        let mut registry = ProviderRegistry::new();
        registry.register(StubProvider(&FIRST)).unwrap();
        assert!(registry.contains_id("first"));
        assert!(registry.deregister("first").is_some());
        assert!(registry.is_empty());
        assert!(registry.deregister("first").is_none());
    }
}
