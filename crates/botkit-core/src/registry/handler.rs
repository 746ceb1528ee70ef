//! Handler registry.
//!
//! Handlers are keyless: identity is the builder reference, and the
//! sequence preserves registration order because downstream dispatch
//! consults handlers in that order. Duplicates are kept on purpose.

use std::sync::Arc;

use parking_lot::RwLock;

use botkit_protocols::handler::HandlerBuilder;

/// Append-only ordered sequence of handler builders.
pub struct HandlerRegistry {
    items: RwLock<Vec<Arc<dyn HandlerBuilder>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Append a builder, regardless of duplicates.
    pub fn register(&self, builder: Arc<dyn HandlerBuilder>) {
        self.items.write().push(builder);
    }

    /// Snapshot of the sequence in registration order.
    pub fn all(&self) -> Vec<Arc<dyn HandlerBuilder>> {
        self.items.read().clone()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.items.write().clear();
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botkit_protocols::handler::Handler;
    use botkit_protocols::robot::RobotHandle;

    struct NullHandler;

    impl Handler for NullHandler {
        fn name(&self) -> &str {
            "null"
        }
    }

    struct NullBuilder;

    impl HandlerBuilder for NullBuilder {
        fn build(&self, _robot: &RobotHandle) -> Box<dyn Handler> {
            Box::new(NullHandler)
        }
    }

    #[test]
    fn test_register_appends_in_order() {
        let registry = HandlerRegistry::new();
        let first: Arc<dyn HandlerBuilder> = Arc::new(NullBuilder);
        let second: Arc<dyn HandlerBuilder> = Arc::new(NullBuilder);

        registry.register(first.clone());
        registry.register(second.clone());

        let all = registry.all();
        assert_eq!(all.len(), 2);
        assert!(Arc::ptr_eq(&all[0], &first));
        assert!(Arc::ptr_eq(&all[1], &second));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let registry = HandlerRegistry::new();
        let builder: Arc<dyn HandlerBuilder> = Arc::new(NullBuilder);

        registry.register(builder.clone());
        registry.register(builder.clone());

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_clear() {
        let registry = HandlerRegistry::new();
        registry.register(Arc::new(NullBuilder));
        assert!(!registry.is_empty());

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.all().is_empty());
    }
}
