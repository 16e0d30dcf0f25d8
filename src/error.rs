//! Error type shared by both periodic interpolants.

use thiserror::Error;

/// Failure modes of construction and evaluation.
///
/// Every variant is a deterministic function of the inputs;
/// there is nothing transient to retry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Samples or buffers that violate the interpolant's preconditions
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
    /// The assembled linear system has no numerically stable solution
    #[error("Singular linear system")]
    SingularSystem,
    /// A query point that is NaN or infinite
    #[error("Non-finite observation point at index {index}")]
    MalformedQuery { index: usize },
}
