use super::*;
use botkit_protocols::adapter::Adapter;
use botkit_protocols::error::AdapterError;
use botkit_protocols::robot::RobotHandle;

struct NullAdapter;

impl Adapter for NullAdapter {
    fn run(&mut self) -> Result<(), AdapterError> {
        Ok(())
    }
}

struct NullBuilder;

impl AdapterBuilder for NullBuilder {
    fn build(&self, _robot: &RobotHandle) -> Box<dyn Adapter> {
        Box::new(NullAdapter)
    }
}

#[test]
fn test_register_and_get() {
    let registry = AdapterRegistry::new();
    registry.register("shell", Arc::new(NullBuilder)).unwrap();

    assert!(registry.get("shell").is_some());
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
}

#[test]
fn test_lookup_normalizes_names() {
    let registry = AdapterRegistry::new();
    registry.register(" Shell ", Arc::new(NullBuilder)).unwrap();

    assert!(registry.get("shell").is_some());
    assert!(registry.get("SHELL").is_some());
    assert_eq!(registry.names(), vec![NormalizedKey::normalize("shell").unwrap()]);
}

#[test]
fn test_duplicate_registration_overwrites() {
    let registry = AdapterRegistry::new();
    let first: Arc<dyn AdapterBuilder> = Arc::new(NullBuilder);
    let second: Arc<dyn AdapterBuilder> = Arc::new(NullBuilder);

    registry.register("irc", first.clone()).unwrap();
    registry.register("IRC", second.clone()).unwrap();

    assert_eq!(registry.len(), 1);
    let stored = registry.get("irc").unwrap();
    assert!(Arc::ptr_eq(&stored, &second));
    assert!(!Arc::ptr_eq(&stored, &first));
}

#[test]
fn test_invalid_name_rejected() {
    let registry = AdapterRegistry::new();
    let result = registry.register("  ", Arc::new(NullBuilder));
    assert!(matches!(result, Err(RegistryError::InvalidKey(_))));
    assert!(registry.is_empty());
}

#[test]
fn test_clear() {
    let registry = AdapterRegistry::new();
    registry.register("shell", Arc::new(NullBuilder)).unwrap();
    registry.register("irc", Arc::new(NullBuilder)).unwrap();

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.get("shell").is_none());
}

#[test]
fn test_get_missing() {
    let registry = AdapterRegistry::new();
    assert!(registry.get("nope").is_none());
    assert!(registry.get("   ").is_none());
}
