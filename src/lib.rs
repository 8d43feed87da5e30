//! Opaque handle registry for a managed-to-foreign callback boundary.
//!
//! C-style callback APIs carry a `void *user_data` context pointer that the
//! foreign side stores and later hands back. Passing an address into Rust
//! memory across that boundary is off limits: the foreign side must never
//! receive anything it could dereference, and the payload has to stay alive
//! until the callback is done with it. A [`Registry`] solves both: it owns
//! one reference to the value and issues an opaque [`Token`] whose bits say
//! nothing about where the value lives.
//!
//! The foreign side's only valid operations on a token are store, copy, and
//! pass back unmodified. Looking up a token that is not currently mapped is
//! treated as a boundary-integrity bug and panics rather than returning a
//! default; removing one is an idempotent no-op.
//!
//! ```
//! use moor::{Registry, Token};
//!
//! let registry = Registry::new();
//! let token = registry.insert(String::from("alpha"));
//!
//! // Hand the foreign side an opaque pointer-sized value.
//! let user_data = token.as_ffi();
//!
//! // ...later, the callback arrives with `user_data`...
//! let token = Token::from_ffi(user_data);
//! let value = registry.get(token);
//! assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("alpha"));
//!
//! registry.remove(token);
//! ```
//!
//! [`Registry::global`] is a process-wide shared instance for callers that
//! do not care about lock contention; independent instances built with
//! [`Registry::new`] are fully isolated from it and from each other.

mod registry;
mod token;

pub use registry::Registry;
pub use token::Token;
