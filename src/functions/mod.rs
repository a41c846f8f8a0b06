//! The report-function families.
//!
//! Every function here is pure and synchronous; the counter pair is
//! the single exception, mutating only the caller-supplied scope.

pub mod counter;
pub mod datetime;
pub mod mask;
pub mod numeric;
pub mod plural;
pub mod strings;
