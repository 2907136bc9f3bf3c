use crate::error::Error;

/// Extend a collection with the contents of an iterator.
///
/// This is the fallible counterpart of [`Extend`]: collections which may
/// allocate while being extended report allocation failures as an [`Error`].
/// Elements which have been inserted before the failure are kept.
///
/// # Examples
///
/// ```
/// use lazy_vec::{try_lazy_vec, LazyVec};
/// use lazy_vec::prelude::*;
///
/// let mut vec: LazyVec<u32> = try_lazy_vec![1, 2];
/// vec.try_extend([3, 4, 5])?;
/// assert_eq!(vec, [1, 2, 3, 4, 5]);
/// # Ok::<_, lazy_vec::Error>(())
/// ```
pub trait TryExtend<T> {
    /// Extends a collection with the contents of an iterator.
    fn try_extend<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>;
}
