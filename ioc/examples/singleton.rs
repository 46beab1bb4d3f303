use di_registry::{global, resolve, Descriptor};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

// A global, thread-safe counter to generate unique IDs.
static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn new_tracker(kind: &str) -> RequestTracker {
  println!("Creating {} RequestTracker...", kind);
  RequestTracker {
    id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
  }
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter("di_registry=trace")
    .init();

  // --- Shared Registration ---
  // This factory will only be called ONCE.
  global().set_shared(
    "singleton_tracker",
    Descriptor::object_factory(|_| Ok(new_tracker("SHARED"))),
  );

  // --- Transient Registration ---
  // This factory will be called EVERY time the service is resolved.
  global().set(
    "transient_tracker",
    Descriptor::object_factory(|_| Ok(new_tracker("TRANSIENT"))),
  );

  println!("--- Resolving Shared Services ---");
  let s1 = resolve!(RequestTracker, "singleton_tracker");
  let s2 = resolve!(RequestTracker, "singleton_tracker");
  println!("Shared 1 ID: {}, Shared 2 ID: {}", s1.id, s2.id);
  assert_eq!(s1.id, 0);
  assert_eq!(s2.id, 0);
  assert!(Arc::ptr_eq(&s1, &s2), "Shared instances should be identical");
  println!("Shared instances are the same pointer, as expected.\n");

  println!("--- Resolving Transients ---");
  let t1 = resolve!(RequestTracker, "transient_tracker");
  let t2 = resolve!(RequestTracker, "transient_tracker");
  println!("Transient 1 ID: {}, Transient 2 ID: {}", t1.id, t2.id);
  assert_eq!(t1.id, 1);
  assert_eq!(t2.id, 2);
  assert!(!Arc::ptr_eq(&t1, &t2), "Transient instances should be different");
  println!("Transient instances are different pointers, as expected.");
}
