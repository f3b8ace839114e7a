use thiserror::Error;

pub type Result<T> = core::result::Result<T, DArrayError>;

/// Error types for `DArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DArrayError {
    /// Invalid parameters provided to a constructor
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of why construction was rejected
        reason: &'static str,
    },
    /// The allocator could not provide the requested storage
    #[error("Allocation failure: unable to obtain storage for {requested} elements")]
    AllocationFailure {
        /// Number of element slots requested
        requested: usize,
    },
    /// Index is beyond the current array length
    #[error("Index out of range: index {index} is beyond array length {length}")]
    IndexOutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// Operation requires at least one live element
    #[error("Operation on empty array")]
    Empty,
    /// No element compares equal to the requested value
    #[error("Element not found")]
    NotFound,
    /// Shrink requested while capacity already equals length
    #[error("Array is already minimal: capacity {capacity} equals length")]
    AlreadyMinimal {
        /// Current capacity (and length)
        capacity: usize,
    },
    /// The handle no longer refers to a live array
    #[error("Invalid handle: the array has already been destroyed")]
    InvalidHandle,
}
