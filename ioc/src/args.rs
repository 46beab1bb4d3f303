//! Positional arguments handed to factories and type constructors.

use crate::error::{Error, Result};
use std::any::{type_name, Any};
use std::fmt;

/// An ordered list of type-erased arguments.
///
/// Arguments are spread positionally into a factory, so a factory reads
/// them back by index with the type it expects.
///
/// ```
/// use di_registry::Args;
///
/// let args = Args::new().with(8080_u16).with("localhost");
/// assert_eq!(*args.get::<u16>(0).unwrap(), 8080);
/// assert_eq!(*args.get::<&str>(1).unwrap(), "localhost");
/// ```
#[derive(Default)]
pub struct Args {
  values: Vec<Box<dyn Any + Send + Sync>>,
}

impl Args {
  /// Creates an empty argument list.
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends an argument, builder style.
  pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
    self.push(value);
    self
  }

  pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
    self.values.push(Box::new(value));
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// Borrows the argument at `index` as a `T`.
  ///
  /// Fails with [`Error::ArgumentCount`] when fewer arguments were passed
  /// and with [`Error::ArgumentType`] when the argument has another type.
  pub fn get<T: Any>(&self, index: usize) -> Result<&T> {
    let value = self.values.get(index).ok_or(Error::ArgumentCount {
      expected: index + 1,
      found: self.values.len(),
    })?;
    value.downcast_ref::<T>().ok_or(Error::ArgumentType {
      index,
      expected: type_name::<T>(),
    })
  }

  /// Like [`Args::get`], but clones the argument out.
  pub fn cloned<T: Any + Clone>(&self, index: usize) -> Result<T> {
    self.get::<T>(index).cloned()
  }
}

impl fmt::Debug for Args {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Args(len = {})", self.values.len())
  }
}
