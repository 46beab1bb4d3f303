//! The global container instance and access functions.

use crate::container::Container;
use once_cell::sync::Lazy;

// Created on first access in a thread-safe manner. It has no type registry;
// name-based type construction needs a container built with `with_types`.
static GLOBAL_CONTAINER: Lazy<Container> = Lazy::new(Container::default);

/// Provides a reference to the global container instance.
///
/// # Examples
///
/// ```
/// use di_registry::{global, Descriptor};
///
/// fn register_services() {
///   global().set_shared("motd", Descriptor::instance(String::from("Hello from global!")));
/// }
///
/// register_services();
/// assert!(global().has("motd"));
/// ```
pub fn global() -> &'static Container {
  &GLOBAL_CONTAINER
}
