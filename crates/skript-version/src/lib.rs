//! Version numbers of the form `major.minor[.patch][ postfix]`
//!
//! A [`Version`] holds three numbers and an optional free-text postfix such as
//! `"alpha"` or `"rc 1"`. Versions order by their numbers first; at equal
//! numbers a version without postfix (a final release) sorts after any version
//! with one, and two postfixes compare lexically.

mod comparator;
mod error;
mod operator;
mod version;

pub use comparator::{compare, Comparator};
pub use error::VersionError;
pub use operator::{InvalidOperatorError, Operator};
pub use version::Version;
