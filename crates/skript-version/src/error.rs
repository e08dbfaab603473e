//! Error type for version construction

use thiserror::Error;

/// Raised when a version cannot be built from the given input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Versions must have a minimum of 1 and a maximum of 3 numbers ({0} numbers given)")]
    ComponentCount(usize),
    #[error("'{0}' is not a valid version string")]
    InvalidVersion(String),
    #[error("'{version}' is not a valid version string: {component} is out of range")]
    InvalidNumber { version: String, component: String },
}
