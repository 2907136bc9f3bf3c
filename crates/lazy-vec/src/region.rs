use core::alloc::Layout;
use core::marker::PhantomData;
use core::ops::Range;
use core::ptr::{self, NonNull};
use core::slice;

use crate::alloc::Allocator;
use crate::error::Error;

/// An owned block of uninitialized slots for values of type `T`.
///
/// A region only tracks how many of its slots are live, not which ones. Which
/// slots hold constructed values is decided by the owner, which is also
/// responsible for constructing and dropping them. A region with a capacity of
/// zero owns no memory.
///
/// Dropping a region releases its memory but never drops any elements, so the
/// owner must have dropped or moved out all live values and reset the live
/// count to zero by then.
pub(crate) struct Region<T, A: Allocator> {
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

unsafe impl<T, A> Send for Region<T, A>
where
    T: Send,
    A: Allocator + Send,
{
}

unsafe impl<T, A> Sync for Region<T, A>
where
    T: Sync,
    A: Allocator + Sync,
{
}

impl<T, A: Allocator> Region<T, A> {
    /// Construct an empty region which owns no memory.
    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Allocate a region with room for exactly `capacity` values.
    pub(crate) fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, Error> {
        if capacity == 0 {
            return Ok(Self::new_in(alloc));
        }

        let layout = Self::layout(capacity)?;
        let ptr = alloc.allocate(layout)?;

        Ok(Self {
            ptr: ptr.cast(),
            len: 0,
            cap: capacity,
            alloc,
            _marker: PhantomData,
        })
    }

    fn layout(capacity: usize) -> Result<Layout, Error> {
        match Layout::array::<T>(capacity) {
            Ok(layout) => Ok(layout),
            Err(..) => Err(Error::CapacityOverflow),
        }
    }

    /// The number of live values in the region.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Set the number of live values in the region.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `len` matches the number of slots that hold
    /// constructed values, and that `len <= capacity`.
    #[inline]
    pub(crate) unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.cap);
        self.len = len;
    }

    /// The total number of slots in the region.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Pointer to the given slot.
    ///
    /// # Safety
    ///
    /// `slot` must be within the capacity of the region, or exactly one past
    /// it.
    #[inline]
    pub(crate) unsafe fn slot(&self, slot: usize) -> *mut T {
        debug_assert!(slot <= self.cap);
        self.ptr.as_ptr().add(slot)
    }

    /// Construct a value in the given slot.
    ///
    /// # Safety
    ///
    /// `slot` must be within capacity and must not hold a live value.
    #[inline]
    pub(crate) unsafe fn write(&mut self, slot: usize, value: T) {
        ptr::write(self.slot(slot), value);
    }

    /// Move a value out of the given slot, leaving it uninitialized.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live value.
    #[inline]
    pub(crate) unsafe fn read(&mut self, slot: usize) -> T {
        ptr::read(self.slot(slot))
    }

    /// Move the value in `slot` into `to_slot` of region `to`.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live value and `to_slot` must be an unused slot of
    /// `to`. Live counts of both regions are left untouched.
    #[inline]
    pub(crate) unsafe fn move_to(&mut self, slot: usize, to: &mut Self, to_slot: usize) {
        debug_assert!(slot < self.cap && to_slot < to.cap);
        ptr::copy_nonoverlapping(self.slot(slot), to.slot(to_slot), 1);
    }

    /// Borrow the given range of slots.
    ///
    /// # Safety
    ///
    /// All slots in `range` must hold live values.
    #[inline]
    pub(crate) unsafe fn slice(&self, range: Range<usize>) -> &[T] {
        slice::from_raw_parts(self.slot(range.start), range.len())
    }

    /// Mutably borrow the given range of slots.
    ///
    /// # Safety
    ///
    /// All slots in `range` must hold live values.
    #[inline]
    pub(crate) unsafe fn slice_mut(&mut self, range: Range<usize>) -> &mut [T] {
        slice::from_raw_parts_mut(self.slot(range.start), range.len())
    }

    /// Drop the values in the given range of slots in place.
    ///
    /// # Safety
    ///
    /// All slots in `range` must hold live values, which are uninitialized
    /// afterwards.
    #[inline]
    pub(crate) unsafe fn drop_range(&mut self, range: Range<usize>) {
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
            self.slot(range.start),
            range.len(),
        ));
    }
}

impl<T, A: Allocator> Drop for Region<T, A> {
    fn drop(&mut self) {
        debug_assert_eq!(self.len, 0, "region released with live values");

        if self.cap == 0 {
            return;
        }

        if let Ok(layout) = Self::layout(self.cap) {
            // SAFETY: the memory was allocated in `try_with_capacity_in` with
            // the same layout.
            unsafe {
                self.alloc.deallocate(self.ptr.cast(), layout);
            }
        }
    }
}
