//! # DI Registry
//!
//! A small, thread-safe service-locator container for Rust.
//!
//! The container maps symbolic names to the means of producing a service:
//! a factory closure, the name of a type to construct, or a pre-built
//! object. Services are built lazily on lookup, either fresh on every
//! lookup (transient) or once and then cached (shared).
//!
//! ## Core Concepts
//!
//! - **Container**: the registry. `set`, `set_shared`, `get`, `has` and
//!   `remove` are the whole surface; `slot(name)` offers the same operations
//!   bracket-style on a single name.
//! - **Descriptor**: what gets registered. A factory, a type name, or an
//!   instance. Instances are always cached.
//! - **Args**: positional arguments spread into a factory or constructor.
//! - **TypeRegistry**: constructors looked up by type name at startup, so
//!   `Descriptor::TypeName` needs no reflection.
//! - **Absence**: an unknown name resolves to `Ok(None)`. Only a failed
//!   construction is an `Err`.
//!
//! ## Quick Start
//!
//! ```
//! use di_registry::{args, Args, Container, Descriptor, TypeRegistry};
//! use std::sync::Arc;
//!
//! struct Database {
//!   url: String,
//! }
//!
//! let mut types = TypeRegistry::new();
//! types.register_with_args("Database", |args: &Args| {
//!   Ok(Database { url: args.cloned::<String>(0)? })
//! });
//!
//! let container = Container::new().with_types(types);
//!
//! // Built once, on first lookup, with the first lookup's arguments.
//! container.set_shared("db", Descriptor::type_name("Database"));
//! let db = container
//!   .get_as_with::<Database>("db", &args![String::from("postgres://localhost")])
//!   .unwrap()
//!   .unwrap();
//! assert_eq!(db.url, "postgres://localhost");
//!
//! // Later lookups return the cached object and ignore their arguments.
//! let again = container.get_as::<Database>("db").unwrap().unwrap();
//! assert!(Arc::ptr_eq(&db, &again));
//!
//! // Unknown names are simply absent.
//! assert!(container.get("cache").unwrap().is_none());
//! ```

mod args;
mod config;
mod container;
mod core;
mod descriptor;
mod error;
mod global;
mod macros;
mod service;
mod slot;
mod types;

pub use args::Args;
pub use config::{CachePolicy, ContainerConfig};
pub use container::Container;
pub use descriptor::{Descriptor, Factory};
pub use error::{Error, Result};
pub use global::global;
pub use service::{Service, Truthy};
pub use slot::Slot;
pub use types::TypeRegistry;
