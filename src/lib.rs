//! Reportfn: a catalog of text functions for document rendering.
//!
//! A rendering engine evaluating template expressions resolves a
//! function name plus an argument list and calls into this library;
//! the returned string is substituted into the generated document.
//! Every function is pure and synchronous; the single exception is
//! the counter pair, which mutates only the caller-supplied per-render
//! scope.
//!
//! # Architecture
//!
//! ```text
//! Template Expression
//!        │
//!        ▼
//!    ┌───────────────┐
//!    │   Rendering   │  (external collaborator)
//!    │    Engine     │
//!    └───────────────┘
//!        │  name + args
//!        ▼
//!    ┌───────────────┐
//!    │   Registry    │  (this crate)
//!    │   Dispatch    │
//!    └───────────────┘
//!        │
//!        ▼
//!    Function Families
//!    numeric · datetime · plural · mask · strings · counter
//!        │
//!        ▼
//!    Display String
//! ```
//!
//! # Example
//!
//! ```
//! use reportfn::{call_function, CallResult, Value, Variables};
//!
//! let mut vars = Variables::new();
//! let result = call_function(
//!     "getRussianPhone",
//!     vec![Value::Str("89161234567".into())],
//!     &mut vars,
//! );
//! match result {
//!     CallResult::Ok(value) => assert_eq!(value.display(), "+7 916 123-45-67"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

pub mod functions;
pub mod locale;
pub mod registry;
pub mod value;

pub use locale::{resolve_locale, NumericSymbols, BASE_LOCALE};
pub use registry::{call_function, lookup, signatures, CallResult, Signature};
pub use value::{RenderError, RenderErrorKind, RenderResult, ValType, Value, Variables};
