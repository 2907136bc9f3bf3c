/// Construct a [`LazyVec`] in the [`Global`] allocator, propagating allocation
/// errors with `?`.
///
/// * `try_lazy_vec![]` constructs an empty vector with the default capacity.
/// * `try_lazy_vec![elem; n]` constructs `n` clones of `elem`.
/// * `try_lazy_vec![a, b, c]` constructs a vector from the listed values.
///
/// # Examples
///
/// ```
/// use lazy_vec::{try_lazy_vec, LazyVec};
///
/// let vec: LazyVec<u32> = try_lazy_vec![1, 2, 3];
/// assert_eq!(vec, [1, 2, 3]);
///
/// let vec: LazyVec<u32> = try_lazy_vec![1; 3];
/// assert_eq!(vec, [1, 1, 1]);
///
/// let vec: LazyVec<u32> = try_lazy_vec![];
/// assert!(vec.is_empty());
/// # Ok::<_, lazy_vec::Error>(())
/// ```
///
/// [`LazyVec`]: crate::LazyVec
/// [`Global`]: crate::Global
#[macro_export]
macro_rules! try_lazy_vec {
    () => (
        $crate::LazyVec::try_new()?
    );

    ($elem:expr; $n:expr) => (
        $crate::lazy_vec::try_from_elem($elem, $n)?
    );

    ($($x:expr),+ $(,)?) => (
        $crate::LazyVec::try_from([$($x),+])?
    );
}
