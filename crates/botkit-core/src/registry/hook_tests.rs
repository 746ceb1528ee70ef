use super::*;
use serde_json::json;

struct Recorder {
    calls: RwLock<Vec<Value>>,
}

impl Recorder {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: RwLock::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<Value> {
        self.calls.read().clone()
    }
}

impl HookListener for Recorder {
    fn call(&self, payload: &Value) -> Result<(), HookError> {
        self.calls.write().push(payload.clone());
        Ok(())
    }
}

struct Failing;

impl HookListener for Failing {
    fn call(&self, _payload: &Value) -> Result<(), HookError> {
        Err(HookError::ListenerFailed("boom".to_string()))
    }
}

#[test]
fn test_register_dedups_by_identity() {
    let registry = HookRegistry::new();
    let listener = Recorder::new();

    registry.register("Foo ", listener.clone()).unwrap();
    registry.register("foO", listener.clone()).unwrap();

    let key = NormalizedKey::normalize("foo").unwrap();
    let all = registry.all();
    assert_eq!(all.len(), 1);
    assert_eq!(all.get(&key).unwrap().len(), 1);
}

#[test]
fn test_distinct_listeners_both_kept() {
    let registry = HookRegistry::new();
    registry.register("foo", Recorder::new()).unwrap();
    registry.register("foo", Recorder::new()).unwrap();

    assert_eq!(registry.listeners("foo").len(), 2);
}

#[test]
fn test_trigger_invokes_each_listener_once() {
    let registry = HookRegistry::new();
    let listener = Recorder::new();
    registry.register("before_run", listener.clone()).unwrap();

    let payload = json!({"config_path": "path/to/config"});
    registry.trigger("Before_Run", &payload).unwrap();

    assert_eq!(listener.calls(), vec![payload]);
}

#[test]
fn test_trigger_missing_event_is_empty_set() {
    let registry = HookRegistry::new();
    assert!(registry.trigger("nobody_home", &Value::Null).is_ok());
}

#[test]
fn test_trigger_propagates_listener_failure() {
    let registry = HookRegistry::new();
    registry.register("foo", Arc::new(Failing)).unwrap();

    let result = registry.trigger("foo", &Value::Null);
    assert!(matches!(result, Err(CoreError::Hook(_))));
}

#[test]
fn test_trigger_invalid_event_name() {
    let registry = HookRegistry::new();
    let result = registry.trigger("  ", &Value::Null);
    assert!(matches!(result, Err(CoreError::Registry(_))));
}

#[test]
fn test_dispatch_standalone() {
    let listener = Recorder::new();
    let set: Vec<Arc<dyn HookListener>> = vec![listener.clone()];

    dispatch(&set, &json!({"k": 1})).unwrap();
    assert_eq!(listener.calls().len(), 1);
}

#[test]
fn test_dispatch_aborts_on_first_failure() {
    let after = Recorder::new();
    let set: Vec<Arc<dyn HookListener>> = vec![Arc::new(Failing), after.clone()];

    assert!(dispatch(&set, &Value::Null).is_err());
    assert!(after.calls().is_empty());
}

#[test]
fn test_clear() {
    let registry = HookRegistry::new();
    registry.register("foo", Recorder::new()).unwrap();
    assert!(!registry.is_empty());

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.listeners("foo").is_empty());
}
