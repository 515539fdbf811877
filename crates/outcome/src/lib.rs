//! A tagged success/failure value, and adapters that turn panicking code
//! into [`Outcome`]-returning code.
//!
//! ```
//! use outcome::{wrap, Outcome};
//!
//! fn divide(a: f64, b: f64) -> Outcome<f64, String> {
//!     if b == 0.0 {
//!         return Outcome::Err(String::from("Cannot divide by 0"));
//!     }
//!     Outcome::Ok(a / b)
//! }
//!
//! assert_eq!(divide(1.0, 2.0).unwrap(), 0.5);
//! assert_eq!(divide(1.0, 0.0).unwrap_or(0.0), 0.0);
//!
//! let result = wrap(|| -> u32 { panic!("no!") });
//! assert_eq!(result.expect_err("must have panicked").message(), Some("no!"));
//! ```

mod outcome;
pub use outcome::{err, ok, Outcome, UNWRAP_PREFIX};

mod error;
pub use error::AccessError;

mod panic;
pub use panic::Panic;

mod wrap;
pub use wrap::wrap;
#[cfg(feature = "async")]
pub use wrap::wrap_async;

mod stringify;
pub use stringify::stringify;
