//! Error types returned while constructing services.

use thiserror::Error;

/// A specialized `Result` for container operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures raised while producing a service.
///
/// A name that is simply not registered is *not* an error: lookups return
/// `Ok(None)` for that case. Everything here describes a construction that
/// was attempted and failed. The container hands these back to the caller
/// exactly as the factory or type registry produced them.
#[derive(Debug, Error)]
pub enum Error {
  #[error("No type named '{0}' is registered")]
  UnknownType(String),

  #[error("Type '{0}' has no default constructor")]
  NoDefaultConstructor(String),

  #[error("Type '{0}' has no constructor accepting arguments")]
  NoArgumentConstructor(String),

  #[error("Expected at least {expected} argument(s), got {found}")]
  ArgumentCount { expected: usize, found: usize },

  #[error("Argument {index} is not a `{expected}`")]
  ArgumentType { index: usize, expected: &'static str },

  #[error("Service '{name}' is not a `{expected}`")]
  TypeMismatch { name: String, expected: &'static str },

  /// An application error raised from inside a factory.
  #[error(transparent)]
  Factory(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wraps any application error so a factory can return it.
  ///
  /// ```
  /// use di_registry::Error;
  ///
  /// let err = Error::factory("database is unreachable");
  /// assert_eq!(err.to_string(), "database is unreachable");
  /// ```
  pub fn factory(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
    Error::Factory(err.into())
  }
}
