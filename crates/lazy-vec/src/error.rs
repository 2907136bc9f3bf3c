use core::fmt;

use crate::alloc::AllocError;

/// An error raised by a fallible operation of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Error due to the computed capacity exceeding the collection's maximum
    /// (usually `isize::MAX` bytes).
    #[doc(hidden)]
    CapacityOverflow,

    /// The memory allocator returned an error.
    AllocError {
        /// The layout of the allocation request that failed.
        error: AllocError,
    },

    /// A checked access was made outside of the bounds of the collection.
    OutOfRange {
        /// The index which was accessed.
        index: usize,
        /// The length of the collection at the time of the access.
        len: usize,
    },
}

impl From<AllocError> for Error {
    #[inline]
    fn from(error: AllocError) -> Self {
        Error::AllocError { error }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CapacityOverflow => write!(f, "Capacity overflow"),
            Error::AllocError { error } => error.fmt(f),
            Error::OutOfRange { index, len } => {
                write!(f, "Index {index} out of range for length {len}")
            }
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::AllocError { error } => Some(error),
            _ => None,
        }
    }
}
