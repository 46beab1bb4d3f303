//! Tests for the resolution macros and the bracket-style slot handle:
//! - `resolve!` / `maybe_resolve!` against the global container
//! - `resolve_from!` / `maybe_resolve_from!` against a local one
//! - `Container::slot`

use di_registry::{
  global, maybe_resolve, maybe_resolve_from, resolve, resolve_from, Container, Descriptor, Error,
  Service,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

// --- Test Fixtures ---

struct MacroTestService {
  value: i32,
}

trait Greeter: Send + Sync {
  fn greet(&self) -> String;
}

struct EnglishGreeter;
impl Greeter for EnglishGreeter {
  fn greet(&self) -> String {
    "Hello!".to_string()
  }
}

// --- Global Macro Tests ---
// Every test uses its own names: the global container is shared by the
// whole test binary.

#[test]
fn test_resolve_global_typed_and_untyped() {
  global().set_shared(
    "macro_service",
    Descriptor::object_factory(|_| Ok(MacroTestService { value: 42 })),
  );

  let typed = resolve!(MacroTestService, "macro_service");
  let untyped = resolve!("macro_service");

  assert_eq!(typed.value, 42);
  assert_eq!(untyped.downcast_ref::<MacroTestService>().unwrap().value, 42);
}

#[test]
fn test_resolve_trait_object() {
  // Trait objects are registered as `Arc<dyn Trait>` values.
  let greeter: Arc<dyn Greeter> = Arc::new(EnglishGreeter);
  global().set("macro_greeter", Descriptor::instance(greeter));

  let greeter = resolve!(Arc<dyn Greeter>, "macro_greeter");

  assert_eq!(greeter.greet(), "Hello!");
}

#[test]
fn test_resolve_with_computed_name() {
  let name = format!("macro_computed_{}", 1);
  global().set(&name, Descriptor::instance(7_u64));

  assert_eq!(*resolve!(u64, &name), 7);
}

#[test]
fn test_maybe_resolve_global() {
  global().set("macro_maybe", Descriptor::instance(String::from("present")));
  global().set_shared(
    "macro_maybe_failing",
    Descriptor::factory(|_| -> di_registry::Result<String> { Err(Error::factory("boom")) }),
  );

  assert_eq!(*maybe_resolve!(String, "macro_maybe").unwrap(), "present");
  assert!(maybe_resolve!("macro_maybe").is_some());
  assert!(maybe_resolve!(u32, "macro_maybe").is_none());
  assert!(maybe_resolve!("macro_maybe_missing").is_none());
  assert!(maybe_resolve!(String, "macro_maybe_failing").is_none());
}

#[test]
#[should_panic(expected = "Failed to resolve required service 'macro_missing'")]
fn test_resolve_panics_on_missing_service() {
  resolve!("macro_missing");
}

#[test]
#[should_panic(expected = "Failed to resolve required service 'macro_missing_typed'")]
fn test_resolve_panics_on_missing_typed_service() {
  struct MissingService;
  resolve!(MissingService, "macro_missing_typed");
}

#[test]
#[should_panic(expected = "Failed to construct service 'macro_broken': boom")]
fn test_resolve_panics_on_construction_failure() {
  global().set(
    "macro_broken",
    Descriptor::factory(|_| -> di_registry::Result<u8> { Err(Error::factory("boom")) }),
  );
  resolve!("macro_broken");
}

// --- Local Container Macro Tests ---

#[test]
fn test_resolve_from_local_container() {
  let container = Container::new();
  container.set("value", Descriptor::instance(MacroTestService { value: 5 }));

  assert_eq!(resolve_from!(container, MacroTestService, "value").value, 5);
  assert!(resolve_from!(&container, "value").is::<MacroTestService>());
  assert!(maybe_resolve_from!(container, MacroTestService, "other").is_none());
  assert!(maybe_resolve_from!(container, "value").is_some());

  // The global container is a different registry.
  assert!(maybe_resolve!("value").is_none());
}

// --- Slot Tests ---

#[test]
fn test_slot_matches_core_operations() {
  let container = Container::new();
  let slot = container.slot("n");
  assert_eq!(slot.name(), "n");

  // exists == has
  assert_eq!(slot.exists(), container.has("n"));
  assert!(slot.get().unwrap().is_none());

  // set == set (non-shared), get == get
  let value = Service::new(10_u16);
  slot.set(value.clone());
  assert!(slot.exists());
  assert!(container.has("n"));
  assert!(Service::ptr_eq(&slot.get().unwrap().unwrap(), &value));
  assert!(Service::ptr_eq(&container.get("n").unwrap().unwrap(), &value));

  // A factory written through the slot is registered transient.
  slot.set(Descriptor::factory(|_| Ok(11_u16)));
  assert!(!container.is_shared("n"));
  let a = slot.get().unwrap().unwrap();
  let b = slot.get().unwrap().unwrap();
  assert!(!Service::ptr_eq(&a, &b));

  // unset == remove
  slot.unset();
  assert!(!slot.exists());
  assert!(!container.has("n"));
  assert!(container.get("n").unwrap().is_none());
}
