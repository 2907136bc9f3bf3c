use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;

/// An implementation of `Allocator` can allocate and deallocate arbitrary
/// blocks of data described via [`Layout`].
///
/// This is a reduced form of the unstable `core::alloc::Allocator` trait,
/// covering exactly what a vector which never reallocates in place needs.
///
/// # Safety
///
/// Memory blocks returned from an allocator must point to valid memory and
/// retain their validity until they are deallocated, or the allocator is
/// dropped. Clones of an allocator must behave like the same allocator, so
/// that a block allocated through one clone may be deallocated through
/// another.
pub unsafe trait Allocator {
    /// Attempts to allocate a block of memory.
    ///
    /// On success, returns a [`NonNull<[u8]>`][NonNull] meeting the size and
    /// alignment guarantees of `layout`. The contents of the block are
    /// uninitialized.
    ///
    /// # Errors
    ///
    /// Returning `Err` indicates that either memory is exhausted or `layout`
    /// does not meet the allocator's size or alignment constraints.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Deallocates the memory referenced by `ptr`.
    ///
    /// # Safety
    ///
    /// * `ptr` must denote a block of memory currently allocated via this
    ///   allocator, and
    /// * `layout` must be the same layout that was used to allocate that block
    ///   of memory.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

unsafe impl<A> Allocator for &A
where
    A: Allocator + ?Sized,
{
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).deallocate(ptr, layout)
    }
}
