//! Memory limits for the [`Global`] allocator.
//!
//! This module contains methods which allows for limiting the memory that is
//! allocated through [`Global`] on the current thread. Allocations which would
//! exceed the budget fail with an [`AllocError`], which surfaces from the
//! fallible APIs of [`LazyVec`] as [`Error::AllocError`].
//!
//! By default the budget is unlimited, but can be bounded by wrapping your
//! function call in [`with`].
//!
//! [`Global`]: crate::Global
//! [`AllocError`]: crate::AllocError
//! [`LazyVec`]: crate::LazyVec
//! [`Error::AllocError`]: crate::Error::AllocError

#[cfg_attr(feature = "std", path = "std.rs")]
mod no_std;

/// Something which can be called once with a memory budget in place.
pub trait Callable {
    /// Output of the call.
    type Output;

    /// Call and consume the callable.
    fn call(self) -> Self::Output;
}

impl<T, O> Callable for T
where
    T: FnOnce() -> O,
{
    type Output = O;

    #[inline]
    fn call(self) -> Self::Output {
        self()
    }
}

/// Wrapper for something being [memory limited].
///
/// See [`with`].
///
/// [memory limited]: self
pub struct Memory<T> {
    /// Memory budget in bytes.
    memory: usize,
    /// The thing being limited.
    value: T,
}

/// Wrap the given value with a memory limit of `memory` bytes.
///
/// The budget applies to allocations made through [`Global`] while the
/// wrapped value is being called. Memory released during the call is returned
/// to the budget. Once the call completes the previous budget is restored.
///
/// # Examples
///
/// ```
/// use lazy_vec::{limit, LazyVec};
///
/// let f = limit::with(64, || {
///     assert!(LazyVec::<u8>::try_with_capacity(64).is_ok());
///     assert!(LazyVec::<u8>::try_with_capacity(128).is_err());
/// });
///
/// f.call();
/// ```
///
/// Limits can be nested, in which case the innermost budget applies:
///
/// ```
/// use lazy_vec::limit;
///
/// limit::with(1024, || {
///     assert_eq!(limit::get(), 1024);
///
///     limit::with(16, || {
///         assert_eq!(limit::get(), 16);
///     })
///     .call();
///
///     assert_eq!(limit::get(), 1024);
/// })
/// .call();
/// ```
///
/// [`Global`]: crate::Global
pub fn with<T>(memory: usize, value: T) -> Memory<T> {
    tracing::trace!(memory, "memory limit");
    Memory { memory, value }
}

/// Get remaining memory that may be allocated on the current thread.
///
/// This is `usize::MAX` unless a limit is in place through [`with`].
pub fn get() -> usize {
    self::no_std::memory_get()
}

/// Take memory from the current budget.
#[inline(never)]
pub(crate) fn take(amount: usize) -> bool {
    self::no_std::memory_take(amount)
}

/// Release memory from the current budget.
#[inline(never)]
pub(crate) fn release(amount: usize) {
    self::no_std::memory_release(amount);
}

#[repr(transparent)]
struct MemoryGuard(usize);

impl Drop for MemoryGuard {
    fn drop(&mut self) {
        let _ = self::no_std::memory_replace(self.0);
    }
}

impl<T> Memory<T>
where
    T: Callable,
{
    /// Call the wrapped function, replacing the current budget and restoring
    /// it once the function call completes.
    pub fn call(self) -> T::Output {
        Callable::call(self)
    }
}

impl<T> Callable for Memory<T>
where
    T: Callable,
{
    type Output = T::Output;

    #[inline]
    fn call(self) -> Self::Output {
        let _guard = MemoryGuard(self::no_std::memory_replace(self.memory));
        self.value.call()
    }
}
