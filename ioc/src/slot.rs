//! Bracket-style access to a single name of a container.

use crate::container::Container;
use crate::descriptor::Descriptor;
use crate::error::Result;
use crate::service::Service;

/// A handle on one name of a [`Container`].
///
/// Each method forwards to the matching container operation:
/// `get` → [`Container::get`], `set` → [`Container::set`],
/// `exists` → [`Container::has`], `unset` → [`Container::remove`].
///
/// ```
/// use di_registry::{Container, Descriptor};
///
/// let container = Container::new();
/// let slot = container.slot("greeting");
///
/// slot.set(Descriptor::instance(String::from("hello")));
/// assert!(slot.exists());
/// assert_eq!(slot.get().unwrap().unwrap().downcast_ref::<String>().unwrap(), "hello");
///
/// slot.unset();
/// assert!(!container.has("greeting"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
  container: &'a Container,
  name: &'a str,
}

impl<'a> Slot<'a> {
  pub(crate) fn new(container: &'a Container, name: &'a str) -> Self {
    Self { container, name }
  }

  pub fn name(&self) -> &str {
    self.name
  }

  pub fn get(&self) -> Result<Option<Service>> {
    self.container.get(self.name)
  }

  pub fn set(&self, descriptor: impl Into<Descriptor>) {
    self.container.set(self.name, descriptor);
  }

  pub fn exists(&self) -> bool {
    self.container.has(self.name)
  }

  pub fn unset(&self) {
    self.container.remove(self.name);
  }
}
