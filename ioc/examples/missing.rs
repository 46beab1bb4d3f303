use di_registry::{global, resolve, Descriptor, Error};
use std::panic;

fn main() {
  // --- Using the panicking `resolve!` macro ---
  println!("Attempting to resolve a service that was never registered...");

  let result = panic::catch_unwind(|| {
    // This line will panic!
    let _service = resolve!("unregistered");
  });

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the non-panicking `get()` method ---
  println!("\nNow, attempting to resolve using the fallible `get()` method...");

  match global().get("unregistered") {
    Ok(Some(_)) => panic!("Should not have found the service!"),
    Ok(None) => println!("Correctly received `None` for the missing service."),
    Err(err) => panic!("A missing service is not an error: {}", err),
  }

  // --- A registered service whose construction fails ---
  global().set(
    "mailer",
    Descriptor::factory(|_| -> di_registry::Result<String> {
      Err(Error::factory("SMTP host is not configured"))
    }),
  );

  match global().get("mailer") {
    Err(err) => println!("Construction failed and was handed back: {}", err),
    Ok(_) => panic!("The factory should have failed!"),
  }
}
