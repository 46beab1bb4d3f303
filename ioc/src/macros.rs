//! Public macros for ergonomic argument building and service resolution.

/// Builds an [`Args`](crate::Args) list from positional values.
///
/// ```
/// use di_registry::args;
///
/// let args = args![1_u8, String::from("two")];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
  () => {
    $crate::Args::new()
  };
  ($($value:expr),+ $(,)?) => {
    $crate::Args::new()$(.with($value))+
  };
}

/// Resolves a service from the global container.
///
/// `resolve!(name)` yields a [`Service`](crate::Service);
/// `resolve!(Type, name)` yields an `Arc<Type>`.
///
/// # Panics
///
/// Panics if the name is not registered, its factory produced nothing or
/// failed, or (typed form) the service has another type. For a
/// non-panicking version, use [`maybe_resolve!`] or `global().get(...)`.
///
/// # Examples
///
/// ```
/// use di_registry::{global, resolve, Descriptor};
///
/// global().set_shared("answer", Descriptor::factory(|_| Ok(42_u32)));
///
/// let answer = resolve!(u32, "answer");
/// assert_eq!(*answer, 42);
/// assert!(resolve!("answer").is::<u32>());
/// ```
#[macro_export]
macro_rules! resolve {
  ($type:ty, $name:expr) => {
    $crate::resolve_from!(@typed $crate::global(), $type, $name)
  };
  ($name:expr) => {
    $crate::resolve_from!(@untyped $crate::global(), $name)
  };
}

/// Like [`resolve!`], but against an explicit container.
#[macro_export]
macro_rules! resolve_from {
  (@typed $container:expr, $type:ty, $name:expr) => {{
    let name: &str = $name;
    match $container.get_as::<$type>(name) {
      Ok(Some(service)) => service,
      Ok(None) => panic!(
        "Failed to resolve required service '{}': {}",
        name,
        std::any::type_name::<$type>()
      ),
      Err(err) => panic!("Failed to construct service '{}': {}", name, err),
    }
  }};
  (@untyped $container:expr, $name:expr) => {{
    let name: &str = $name;
    match $container.get(name) {
      Ok(Some(service)) => service,
      Ok(None) => panic!("Failed to resolve required service '{}'", name),
      Err(err) => panic!("Failed to construct service '{}': {}", name, err),
    }
  }};
  ($container:expr, $type:ty, $name:expr) => {
    $crate::resolve_from!(@typed $container, $type, $name)
  };
  ($container:expr, $name:expr) => {
    $crate::resolve_from!(@untyped $container, $name)
  };
}

/// Resolves a service from the global container, returning `None` when it
/// is missing, produced nothing, failed, or has another type.
#[macro_export]
macro_rules! maybe_resolve {
  ($type:ty, $name:expr) => {
    $crate::maybe_resolve_from!(@typed $crate::global(), $type, $name)
  };
  ($name:expr) => {
    $crate::maybe_resolve_from!(@untyped $crate::global(), $name)
  };
}

/// Like [`maybe_resolve!`], but against an explicit container.
#[macro_export]
macro_rules! maybe_resolve_from {
  (@typed $container:expr, $type:ty, $name:expr) => {
    $container.get_as::<$type>($name).ok().flatten()
  };
  (@untyped $container:expr, $name:expr) => {
    $container.get($name).ok().flatten()
  };
  ($container:expr, $type:ty, $name:expr) => {
    $crate::maybe_resolve_from!(@typed $container, $type, $name)
  };
  ($container:expr, $name:expr) => {
    $crate::maybe_resolve_from!(@untyped $container, $name)
  };
}
