//! Error definitions for the `seqvec` crate.
//!
//! Exactly two operations are fallible: checked element access (`OutOfRange`)
//! and storage allocation (`AllocationFailure`). Everything else either cannot
//! fail or treats misuse as a caller contract violation (panic).

use thiserror::Error;

/// The error type returned by fallible `seqvec` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

/// A specialized `Result` type for `seqvec` operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the underlying error kind.
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    /// Consumes the error, returning the underlying error kind.
    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    #[cold]
    pub(crate) fn out_of_range(index: usize, len: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, len }.into())
    }

    #[cold]
    pub(crate) fn allocation_failure(capacity: usize) -> Error {
        Error(ErrorKind::AllocationFailure { capacity }.into())
    }
}

/// Enumeration of the failure modes of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Checked access with an index at or beyond the logical length.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The requested element index.
        index: usize,
        /// The logical length of the vector at the time of access.
        len: usize,
    },

    /// The system could not provide storage of the requested capacity,
    /// either because the layout overflows the address space or because
    /// the global allocator returned null.
    #[error("failed to allocate storage for {capacity} elements")]
    AllocationFailure {
        /// The requested capacity, in elements.
        capacity: usize,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_accessors() {
        let err = Error::out_of_range(5, 3);
        assert_eq!(err.kind(), &ErrorKind::OutOfRange { index: 5, len: 3 });
        assert_eq!(err.into_kind(), ErrorKind::OutOfRange { index: 5, len: 3 });

        let err = Error::allocation_failure(usize::MAX);
        assert!(matches!(
            err.kind(),
            ErrorKind::AllocationFailure { capacity } if *capacity == usize::MAX
        ));
    }

    #[test]
    fn test_error_display() {
        let err = Error::out_of_range(5, 3);
        assert_eq!(err.to_string(), "index 5 out of range for length 3");

        let err = Error::allocation_failure(64);
        assert_eq!(
            err.to_string(),
            "failed to allocate storage for 64 elements"
        );
    }
}
