//! What gets registered under a name.

use crate::args::Args;
use crate::error::Result;
use crate::service::{Service, Truthy};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A value produced by a factory, together with whether it counts as
/// "something" for the shared-caching rule.
#[derive(Debug)]
pub(crate) struct Produced {
  pub(crate) service: Service,
  pub(crate) truthy: bool,
}

impl Produced {
  pub(crate) fn object<T: Any + Send + Sync>(value: T) -> Self {
    Produced {
      service: Service::new(value),
      truthy: true,
    }
  }
}

type FactoryFn = dyn Fn(&Args) -> Result<Option<Produced>> + Send + Sync;

/// An opaque, callable factory.
#[derive(Clone)]
pub struct Factory(Arc<FactoryFn>);

impl Factory {
  pub(crate) fn call(&self, args: &Args) -> Result<Option<Produced>> {
    (self.0)(args)
  }
}

impl fmt::Debug for Factory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Factory(..)")
  }
}

/// The means of producing a service, chosen at registration time.
#[derive(Debug, Clone)]
pub enum Descriptor {
  /// A callable invoked with the lookup's arguments.
  Factory(Factory),
  /// A type constructed by name through the container's
  /// [`TypeRegistry`](crate::TypeRegistry).
  TypeName(String),
  /// A pre-built object. Always cached, whether registered shared or not.
  Instance(Service),
}

impl Descriptor {
  /// A factory whose result is checked with [`Truthy`]: a falsy result
  /// (zero, `"0"`, empty string, empty collection...) is returned but never
  /// cached, so a shared binding keeps retrying until it yields something.
  ///
  /// ```
  /// use di_registry::{Container, Descriptor};
  ///
  /// let container = Container::new();
  /// container.set("port", Descriptor::factory(|args| args.cloned::<u16>(0)));
  ///
  /// let port = container.get_as_with::<u16>("port", &di_registry::args![8080_u16]);
  /// assert_eq!(*port.unwrap().unwrap(), 8080);
  /// ```
  pub fn factory<T, F>(factory: F) -> Self
  where
    T: Truthy + Any + Send + Sync,
    F: Fn(&Args) -> Result<T> + Send + Sync + 'static,
  {
    Descriptor::Factory(Factory(Arc::new(move |args: &Args| {
      factory(args).map(|value| {
        let truthy = value.is_truthy();
        Some(Produced {
          service: Service::new(value),
          truthy,
        })
      })
    })))
  }

  /// A factory for objects, which are always truthy.
  ///
  /// Use it for service structs that have no notion of emptiness.
  pub fn object_factory<T, F>(factory: F) -> Self
  where
    T: Any + Send + Sync,
    F: Fn(&Args) -> Result<T> + Send + Sync + 'static,
  {
    Descriptor::Factory(Factory(Arc::new(move |args: &Args| {
      factory(args).map(|value| Some(Produced::object(value)))
    })))
  }

  /// A factory that may produce nothing. `Ok(None)` surfaces as an absent
  /// service and is never cached.
  pub fn optional_factory<T, F>(factory: F) -> Self
  where
    T: Any + Send + Sync,
    F: Fn(&Args) -> Result<Option<T>> + Send + Sync + 'static,
  {
    Descriptor::Factory(Factory(Arc::new(move |args: &Args| {
      factory(args).map(|value| value.map(Produced::object))
    })))
  }

  pub fn type_name(name: impl Into<String>) -> Self {
    Descriptor::TypeName(name.into())
  }

  pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
    Descriptor::Instance(Service::new(value))
  }

  /// Registers an already shared object, keeping its pointer identity.
  pub fn instance_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
    Descriptor::Instance(Service::from_arc(value))
  }
}

impl From<Service> for Descriptor {
  fn from(service: Service) -> Self {
    Descriptor::Instance(service)
  }
}

impl From<Factory> for Descriptor {
  fn from(factory: Factory) -> Self {
    Descriptor::Factory(factory)
  }
}
