//! The type-erased handle the container hands out, and the truthiness rule
//! that decides whether a shared result may be cached.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;

/// A resolved service.
///
/// Cloning a `Service` is cheap and yields a handle to the same object, so
/// two handles to a cached shared service are [`Service::ptr_eq`].
#[derive(Clone)]
pub struct Service(Arc<dyn Any + Send + Sync>);

impl Service {
  pub fn new<T: Any + Send + Sync>(value: T) -> Self {
    Service(Arc::new(value))
  }

  /// Wraps an existing `Arc` without re-allocating, so the caller keeps
  /// pointer identity with the registered object.
  pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
    Service(value)
  }

  pub fn is<T: Any>(&self) -> bool {
    self.0.is::<T>()
  }

  pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
    self.0.downcast_ref::<T>()
  }

  /// Returns a typed `Arc` to the same object, or `None` on a type mismatch.
  pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
    Arc::clone(&self.0).downcast::<T>().ok()
  }

  pub fn ptr_eq(a: &Service, b: &Service) -> bool {
    Arc::ptr_eq(&a.0, &b.0)
  }
}

impl fmt::Debug for Service {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Service({:p})", Arc::as_ptr(&self.0))
  }
}

/// Whether a produced value counts as "something" for caching purposes.
///
/// A shared factory whose result is not truthy is invoked again on the next
/// lookup instead of being cached. Zero, `false`, empty strings, the string
/// `"0"`, empty collections, `()` and `None` are falsy.
pub trait Truthy {
  fn is_truthy(&self) -> bool;
}

macro_rules! truthy_numbers {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl Truthy for $ty {
        fn is_truthy(&self) -> bool {
          *self != (0 as $ty)
        }
      }
    )+
  };
}

truthy_numbers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Truthy for bool {
  fn is_truthy(&self) -> bool {
    *self
  }
}

impl Truthy for () {
  fn is_truthy(&self) -> bool {
    false
  }
}

// "0" is falsy, like the empty string.
impl Truthy for str {
  fn is_truthy(&self) -> bool {
    !self.is_empty() && self != "0"
  }
}

impl Truthy for &str {
  fn is_truthy(&self) -> bool {
    (**self).is_truthy()
  }
}

impl Truthy for String {
  fn is_truthy(&self) -> bool {
    self.as_str().is_truthy()
  }
}

impl<T> Truthy for Vec<T> {
  fn is_truthy(&self) -> bool {
    !self.is_empty()
  }
}

impl<T> Truthy for VecDeque<T> {
  fn is_truthy(&self) -> bool {
    !self.is_empty()
  }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
  fn is_truthy(&self) -> bool {
    !self.is_empty()
  }
}

impl<T, S> Truthy for HashSet<T, S> {
  fn is_truthy(&self) -> bool {
    !self.is_empty()
  }
}

impl<K, V> Truthy for BTreeMap<K, V> {
  fn is_truthy(&self) -> bool {
    !self.is_empty()
  }
}

impl<T> Truthy for BTreeSet<T> {
  fn is_truthy(&self) -> bool {
    !self.is_empty()
  }
}

impl<T: Truthy> Truthy for Option<T> {
  fn is_truthy(&self) -> bool {
    self.as_ref().is_some_and(Truthy::is_truthy)
  }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
  fn is_truthy(&self) -> bool {
    (**self).is_truthy()
  }
}

impl<T: Truthy + ?Sized> Truthy for Arc<T> {
  fn is_truthy(&self) -> bool {
    (**self).is_truthy()
  }
}
