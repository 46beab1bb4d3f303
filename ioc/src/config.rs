//! Container configuration.

use serde::{Deserialize, Serialize};

/// Decides which results of a shared binding are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
  /// Only truthy results are cached; a falsy result is handed back and the
  /// factory runs again on the next lookup.
  #[default]
  Truthy,
  /// Every produced value is cached, falsy or not.
  Always,
}

/// Tunables for a [`Container`](crate::Container).
///
/// Deserializable so it can live in an application's config file:
///
/// ```
/// use di_registry::{CachePolicy, ContainerConfig};
///
/// let config: ContainerConfig =
///   serde_json::from_str(r#"{ "cache_policy": "always", "capacity": 64 }"#).unwrap();
/// assert_eq!(config.cache_policy, CachePolicy::Always);
/// assert_eq!(config.shard_amount, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
  pub cache_policy: CachePolicy,
  /// Initial number of names the container can hold without reallocating.
  pub capacity: usize,
  /// Shard count of the underlying map. Must be a power of two greater
  /// than one; anything else falls back to the default.
  pub shard_amount: Option<usize>,
}

impl ContainerConfig {
  pub(crate) fn valid_shard_amount(&self) -> Option<usize> {
    self
      .shard_amount
      .filter(|&amount| amount > 1 && amount.is_power_of_two())
  }
}
