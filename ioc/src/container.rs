//! The main `Container` struct and its associated methods.

use crate::args::Args;
use crate::config::ContainerConfig;
use crate::core::{Provider, Recipe};
use crate::descriptor::Descriptor;
use crate::error::{Error, Result};
use crate::service::Service;
use crate::slot::Slot;
use crate::types::TypeRegistry;
use dashmap::DashMap;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A registry resolving symbolic names to services.
///
/// Each name is either absent, bound to a factory or type name that has not
/// produced a cached value yet, or cached. The container is thread-safe and
/// every operation takes `&self`, so factories may look up other names from
/// the same container while they run.
#[derive(Default)]
pub struct Container {
  providers: DashMap<String, Arc<Provider>>,
  types: TypeRegistry,
  config: ContainerConfig,
}

impl Container {
  /// Creates a new, empty `Container`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a container from `config`. An invalid `shard_amount` is logged
  /// and dropped, so [`Container::config`] reports the map actually built.
  pub fn with_config(mut config: ContainerConfig) -> Self {
    let providers = match (config.shard_amount, config.valid_shard_amount()) {
      (_, Some(amount)) => DashMap::with_capacity_and_shard_amount(config.capacity, amount),
      (Some(invalid), None) => {
        warn!(
          shard_amount = invalid,
          "shard amount must be a power of two greater than one, using the default"
        );
        config.shard_amount = None;
        DashMap::with_capacity(config.capacity)
      }
      (None, None) => DashMap::with_capacity(config.capacity),
    };
    Self {
      providers,
      types: TypeRegistry::default(),
      config,
    }
  }

  /// Installs the registry used to build [`Descriptor::TypeName`] bindings.
  pub fn with_types(mut self, types: TypeRegistry) -> Self {
    self.types = types;
    self
  }

  pub fn config(&self) -> &ContainerConfig {
    &self.config
  }

  pub fn types(&self) -> &TypeRegistry {
    &self.types
  }

  // --- PRIVATE HELPERS ---

  fn register(&self, name: &str, descriptor: Descriptor, shared: bool) {
    let provider = match descriptor {
      Descriptor::Instance(service) => Provider::Instance(service),
      Descriptor::Factory(factory) => Provider::bound(Recipe::Factory(factory), shared),
      Descriptor::TypeName(type_name) => Provider::bound(Recipe::TypeName(type_name), shared),
    };
    debug!(service = name, kind = provider.kind(), "registering service");
    // Inserting a fresh provider drops any previous binding and cached value.
    self.providers.insert(name.to_owned(), Arc::new(provider));
  }

  fn provider(&self, name: &str) -> Option<Arc<Provider>> {
    self
      .providers
      .get(name)
      .map(|entry| Arc::clone(entry.value()))
  }

  // --- Registration ---

  /// Registers `descriptor` under `name` as a transient service.
  ///
  /// A [`Descriptor::Instance`] is cached as is, since there is nothing
  /// left to build.
  pub fn set(&self, name: &str, descriptor: impl Into<Descriptor>) {
    self.register(name, descriptor.into(), false);
  }

  /// Registers `descriptor` under `name` as a shared service: the first
  /// truthy value it produces is cached and returned from then on.
  pub fn set_shared(&self, name: &str, descriptor: impl Into<Descriptor>) {
    self.register(name, descriptor.into(), true);
  }

  /// Forgets `name` entirely. Removing an unknown name is a no-op.
  pub fn remove(&self, name: &str) {
    if self.providers.remove(name).is_some() {
      debug!(service = name, "removed service");
    }
  }

  pub fn clear(&self) {
    self.providers.clear();
  }

  // --- Resolution ---

  /// Resolves `name` without arguments.
  pub fn get(&self, name: &str) -> Result<Option<Service>> {
    self.get_with(name, &Args::new())
  }

  /// Resolves `name`, spreading `args` into its factory or constructor.
  ///
  /// Returns `Ok(None)` when `name` is not registered or its factory
  /// produced nothing. Construction errors are returned unchanged. A cached
  /// value is returned as is and `args` are ignored.
  pub fn get_with(&self, name: &str, args: &Args) -> Result<Option<Service>> {
    let Some(provider) = self.provider(name) else {
      trace!(service = name, "service not found");
      return Ok(None);
    };
    // The map guard is released here, so the factory can use the container.
    provider.resolve(name, &self.types, args, self.config.cache_policy)
  }

  /// Resolves `name` and downcasts it to `T`.
  pub fn get_as<T: Any + Send + Sync>(&self, name: &str) -> Result<Option<Arc<T>>> {
    self.get_as_with(name, &Args::new())
  }

  pub fn get_as_with<T: Any + Send + Sync>(
    &self,
    name: &str,
    args: &Args,
  ) -> Result<Option<Arc<T>>> {
    match self.get_with(name, args)? {
      Some(service) => service
        .downcast::<T>()
        .map(Some)
        .ok_or_else(|| Error::TypeMismatch {
          name: name.to_owned(),
          expected: type_name::<T>(),
        }),
      None => Ok(None),
    }
  }

  // --- Introspection ---

  /// Whether `name` is bound or cached.
  pub fn has(&self, name: &str) -> bool {
    self.providers.contains_key(name)
  }

  /// Whether `name` was registered shared (pre-built instances count).
  pub fn is_shared(&self, name: &str) -> bool {
    self.provider(name).is_some_and(|p| p.is_shared())
  }

  /// Whether `name` currently holds a cached value.
  pub fn is_cached(&self, name: &str) -> bool {
    self
      .provider(name)
      .is_some_and(|p| p.cached().is_some())
  }

  pub fn names(&self) -> Vec<String> {
    self.providers.iter().map(|entry| entry.key().clone()).collect()
  }

  pub fn len(&self) -> usize {
    self.providers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.providers.is_empty()
  }

  /// Bracket-style access to a single name.
  pub fn slot<'a>(&'a self, name: &'a str) -> Slot<'a> {
    Slot::new(self, name)
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Container")
      .field("services", &self.providers.len())
      .field("types", &self.types)
      .field("config", &self.config)
      .finish()
  }
}

impl<K: AsRef<str>> Extend<(K, Descriptor)> for Container {
  fn extend<I: IntoIterator<Item = (K, Descriptor)>>(&mut self, iter: I) {
    for (name, descriptor) in iter {
      self.set(name.as_ref(), descriptor);
    }
  }
}

impl<K: AsRef<str>> FromIterator<(K, Descriptor)> for Container {
  fn from_iter<I: IntoIterator<Item = (K, Descriptor)>>(iter: I) -> Self {
    let mut container = Container::new();
    container.extend(iter);
    container
  }
}
