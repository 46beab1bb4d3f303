//! Core, non-public data structures for the container.

use crate::args::Args;
use crate::config::CachePolicy;
use crate::descriptor::{Factory, Produced};
use crate::error::{Error, Result};
use crate::service::Service;
use crate::types::TypeRegistry;
use once_cell::sync::OnceCell;
use tracing::{debug, trace};

/// How a bound name produces its value.
pub(crate) enum Recipe {
  Factory(Factory),
  TypeName(String),
}

impl Recipe {
  fn produce(&self, types: &TypeRegistry, args: &Args) -> Result<Option<Produced>> {
    match self {
      Recipe::Factory(factory) => factory.call(args),
      Recipe::TypeName(type_name) => types.construct(type_name, args).map(Some),
    }
  }
}

/// Everything the container knows about one name.
///
/// `Instance` and a filled `Shared` cell are the "cached" state; `Transient`
/// and an empty `Shared` cell are "bound, unresolved". Replacing the whole
/// provider on registration is what clears both at once.
pub(crate) enum Provider {
  Instance(Service),
  Shared { recipe: Recipe, cell: OnceCell<Service> },
  Transient { recipe: Recipe },
}

// Why a shared cell was left empty after an attempt.
enum Skipped {
  Failed(Error),
  Uncached(Option<Service>),
}

impl Provider {
  pub(crate) fn bound(recipe: Recipe, shared: bool) -> Self {
    if shared {
      Provider::Shared {
        recipe,
        cell: OnceCell::new(),
      }
    } else {
      Provider::Transient { recipe }
    }
  }

  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Provider::Instance(_) => "instance",
      Provider::Shared { .. } => "shared",
      Provider::Transient { .. } => "transient",
    }
  }

  pub(crate) fn is_shared(&self) -> bool {
    !matches!(self, Provider::Transient { .. })
  }

  pub(crate) fn cached(&self) -> Option<&Service> {
    match self {
      Provider::Instance(service) => Some(service),
      Provider::Shared { cell, .. } => cell.get(),
      Provider::Transient { .. } => None,
    }
  }

  /// Produces the value for `name`.
  ///
  /// For a shared binding the whole check-produce-cache sequence runs
  /// inside the cell's initializer, so concurrent callers on the same name
  /// wait for one construction instead of racing.
  pub(crate) fn resolve(
    &self,
    name: &str,
    types: &TypeRegistry,
    args: &Args,
    policy: CachePolicy,
  ) -> Result<Option<Service>> {
    if let Some(service) = self.cached() {
      trace!(service = name, "cache hit");
      return Ok(Some(service.clone()));
    }

    match self {
      Provider::Instance(service) => Ok(Some(service.clone())),
      Provider::Transient { recipe } => {
        trace!(service = name, args = args.len(), "building transient service");
        Ok(recipe.produce(types, args)?.map(|produced| produced.service))
      }
      Provider::Shared { recipe, cell } => {
        let outcome = cell.get_or_try_init(|| {
          trace!(service = name, args = args.len(), "building shared service");
          match recipe.produce(types, args) {
            Ok(Some(produced)) if produced.truthy || policy == CachePolicy::Always => {
              debug!(service = name, "caching shared service");
              Ok(produced.service)
            }
            Ok(produced) => {
              debug!(service = name, "shared service produced nothing cacheable");
              Err(Skipped::Uncached(produced.map(|p| p.service)))
            }
            Err(err) => Err(Skipped::Failed(err)),
          }
        });

        match outcome {
          Ok(service) => Ok(Some(service.clone())),
          Err(Skipped::Uncached(service)) => Ok(service),
          Err(Skipped::Failed(err)) => Err(err),
        }
      }
    }
  }
}
