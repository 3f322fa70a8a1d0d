use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by the mutating list operations.
///
/// Both kinds leave the list exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required input was absent or had zero length
    #[error("input is absent or has zero length")]
    NullInput,

    /// Storage for the payload copy could not be obtained
    #[error("could not allocate storage for {len} elements")]
    Allocation { len: usize },
}
