//! Helpers for the infallible trait implementations used in tests.

use core::fmt;

pub(crate) trait TestExt<T> {
    /// Unwrap the value, panicking with the error if there is one.
    fn abort(self) -> T;
}

impl<T, E> TestExt<T> for Result<T, E>
where
    E: fmt::Display,
{
    #[track_caller]
    fn abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
