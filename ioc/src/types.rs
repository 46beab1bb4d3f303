//! Construction of concrete types by name.

use crate::args::Args;
use crate::descriptor::Produced;
use crate::error::{Error, Result};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Constructor = Arc<dyn Fn(&Args) -> Result<Produced> + Send + Sync>;

#[derive(Clone, Default)]
struct TypeEntry {
  default: Option<Constructor>,
  with_args: Option<Constructor>,
}

/// Maps type names to their constructors.
///
/// A type may have a default constructor (used when a lookup passes no
/// arguments), a parameterized one (used otherwise), or both. The registry
/// is populated at startup and handed to
/// [`Container::with_types`](crate::Container::with_types).
///
/// ```
/// use di_registry::{Args, TypeRegistry};
///
/// #[derive(Default)]
/// struct Mailer {
///   host: String,
/// }
///
/// let mut types = TypeRegistry::new();
/// types
///   .register_default::<Mailer>("Mailer")
///   .register_with_args("Mailer", |args: &Args| {
///     Ok(Mailer { host: args.cloned::<String>(0)? })
///   });
/// assert!(types.contains("Mailer"));
/// ```
#[derive(Clone, Default)]
pub struct TypeRegistry {
  entries: HashMap<String, TypeEntry>,
}

impl TypeRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `T::default()` as the no-argument constructor of `name`.
  pub fn register_default<T: Default + Any + Send + Sync>(&mut self, name: &str) -> &mut Self {
    self.register(name, T::default)
  }

  /// Registers the no-argument constructor of `name`.
  pub fn register<T, F>(&mut self, name: &str, constructor: F) -> &mut Self
  where
    T: Any + Send + Sync,
    F: Fn() -> T + Send + Sync + 'static,
  {
    let constructor: Constructor = Arc::new(move |_: &Args| Ok(Produced::object(constructor())));
    self.entry(name).default = Some(constructor);
    self
  }

  /// Registers the constructor of `name` used when arguments are passed.
  pub fn register_with_args<T, F>(&mut self, name: &str, constructor: F) -> &mut Self
  where
    T: Any + Send + Sync,
    F: Fn(&Args) -> Result<T> + Send + Sync + 'static,
  {
    let constructor: Constructor =
      Arc::new(move |args: &Args| constructor(args).map(Produced::object));
    self.entry(name).with_args = Some(constructor);
    self
  }

  pub fn contains(&self, name: &str) -> bool {
    self.entries.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  fn entry(&mut self, name: &str) -> &mut TypeEntry {
    self.entries.entry(name.to_owned()).or_default()
  }

  /// Builds `name`, picking the constructor by whether `args` is empty.
  pub(crate) fn construct(&self, name: &str, args: &Args) -> Result<Produced> {
    let entry = self
      .entries
      .get(name)
      .ok_or_else(|| Error::UnknownType(name.to_owned()))?;

    if args.is_empty() {
      let constructor = entry
        .default
        .as_ref()
        .ok_or_else(|| Error::NoDefaultConstructor(name.to_owned()))?;
      constructor(args)
    } else {
      let constructor = entry
        .with_args
        .as_ref()
        .ok_or_else(|| Error::NoArgumentConstructor(name.to_owned()))?;
      constructor(args)
    }
  }
}

impl fmt::Debug for TypeRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.entries.keys()).finish()
  }
}
