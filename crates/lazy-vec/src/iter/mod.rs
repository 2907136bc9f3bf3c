//! Composable external iteration with fallible collection.

pub use self::try_extend::TryExtend;
mod try_extend;

pub use self::try_from_iterator::{TryFromIterator, TryFromIteratorIn};
mod try_from_iterator;
