use di_registry::{args, Args, Container, Descriptor, TypeRegistry};
use std::sync::Arc;

#[derive(Debug)]
struct HttpClient {
  base_url: String,
  timeout_secs: u64,
}

impl Default for HttpClient {
  fn default() -> Self {
    Self {
      base_url: "http://localhost".to_string(),
      timeout_secs: 30,
    }
  }
}

fn main() {
  // Constructors are looked up by name, so there is no reflection involved.
  let mut types = TypeRegistry::new();
  types
    .register_default::<HttpClient>("HttpClient")
    .register_with_args("HttpClient", |args: &Args| {
      Ok(HttpClient {
        base_url: args.cloned(0)?,
        timeout_secs: args.cloned(1)?,
      })
    });

  let container = Container::new().with_types(types);
  container.set("client", Descriptor::type_name("HttpClient"));
  container.set_shared("api", Descriptor::type_name("HttpClient"));

  // A transient type name builds a fresh client per lookup.
  let local = container.get_as::<HttpClient>("client").unwrap().unwrap();
  println!("Default client: {:?}", local);

  // A shared one is built once, with the first lookup's arguments.
  let api = container
    .get_as_with::<HttpClient>("api", &args!["https://api.example.com".to_string(), 5_u64])
    .unwrap()
    .unwrap();
  let again = container.get_as::<HttpClient>("api").unwrap().unwrap();
  println!("Shared client: {:?}", api);
  assert!(Arc::ptr_eq(&api, &again));
  assert_eq!(again.timeout_secs, 5);

  // Bracket-style access through a slot.
  let slot = container.slot("client");
  assert!(slot.exists());
  slot.unset();
  assert!(!container.has("client"));
}
