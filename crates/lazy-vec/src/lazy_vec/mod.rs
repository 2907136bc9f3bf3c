//! A growable array type which reallocates incrementally, written
//! `LazyVec<T>`.
//!
//! A [`LazyVec`] stores its elements in two buffers. The *tail* buffer receives
//! new elements and always holds the elements with the highest indices. The
//! *head* buffer, when present, is the previous tail which is being emptied
//! into the tail one element at a time.
//!
//! When the tail fills up it becomes the new head and a tail twice its size is
//! allocated. Each following push moves one element from head into the slot
//! of the tail reserved for it, so that by the time the new tail is full the
//! head has been emptied and can be released. Pops run the same process in
//! reverse, migrating elements back into head until the tail has drained and
//! the head takes over its role.
//!
//! No push or pop ever moves more than one element in addition to the one
//! being pushed or popped.
//!
//! # Examples
//!
//! ```
//! use lazy_vec::LazyVec;
//!
//! let mut vec = LazyVec::try_new()?;
//! assert_eq!(vec.capacity(), 16);
//!
//! for n in 0..16 {
//!     vec.try_push(n)?;
//! }
//!
//! assert_eq!(vec.capacity(), 16);
//!
//! // Allocates a new buffer, but only moves one of the existing elements.
//! vec.try_push(16)?;
//! assert_eq!(vec.capacity(), 32);
//! assert!(vec.iter().copied().eq(0..17));
//! # Ok::<_, lazy_vec::Error>(())
//! ```

pub use self::cursor::Cursor;
mod cursor;

pub use self::iter::{IntoIter, Iter, IterMut};
mod iter;

mod partial_eq;

use core::cmp::Ordering;
use core::fmt;
use core::mem::{self, ManuallyDrop};
use core::ops::{Index, IndexMut};
use core::ptr;

use crate::alloc::{Allocator, Global};
use crate::clone::TryClone;
use crate::error::Error;
use crate::iter::{TryExtend, TryFromIteratorIn};
use crate::region::Region;
#[cfg(test)]
use crate::testing::*;

/// The capacity of a vector constructed through [`LazyVec::try_new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Construct a vector of `n` clones of `elem`.
#[doc(hidden)]
pub fn try_from_elem<T: TryClone>(elem: T, n: usize) -> Result<LazyVec<T>, Error> {
    LazyVec::try_from_elem_in(elem, n, Global)
}

/// A growable array which spreads the cost of reallocation over the pushes
/// and pops that follow it.
///
/// The capacity of a `LazyVec` is always a power of two which is at least its
/// length.
///
/// # Examples
///
/// ```
/// use lazy_vec::LazyVec;
/// use lazy_vec::prelude::*;
///
/// let mut vec = LazyVec::try_new()?;
/// vec.try_push(1)?;
/// vec.try_push(2)?;
///
/// assert_eq!(vec.len(), 2);
/// assert_eq!(vec[0], 1);
///
/// assert_eq!(vec.pop(), Some(2));
/// assert_eq!(vec.len(), 1);
///
/// vec[0] = 7;
/// assert_eq!(vec[0], 7);
///
/// vec.try_extend([1, 2, 3])?;
///
/// for x in &vec {
///     println!("{x}");
/// }
///
/// assert_eq!(vec, [7, 1, 2, 3]);
/// # Ok::<_, lazy_vec::Error>(())
/// ```
pub struct LazyVec<T, A: Allocator = Global> {
    // Invariants:
    //
    // * `2 * head.len() + tail.len() <= tail.capacity()`.
    // * Logical index `i < head.len()` lives in slot `i` of head, every other
    //   index `i` lives in slot `i` of tail. Tail slots `0..head.len()` are
    //   reserved for the elements still in head.
    // * A non-empty vector has at least one element in tail.
    head: Region<T, A>,
    tail: Region<T, A>,
}

impl<T> LazyVec<T> {
    /// Constructs a new, empty `LazyVec<T>` with a capacity of
    /// [`DEFAULT_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    ///
    /// let vec = LazyVec::<u32>::try_new()?;
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 16);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn try_new() -> Result<Self, Error> {
        Self::try_new_in(Global)
    }

    /// Constructs a new, empty `LazyVec<T>` which can hold at least `capacity`
    /// elements before it has to grow.
    ///
    /// The capacity is rounded up to the next power of two.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    ///
    /// let vec = LazyVec::<u32>::try_with_capacity(100)?;
    /// assert_eq!(vec.capacity(), 128);
    ///
    /// let vec = LazyVec::<u32>::try_with_capacity(0)?;
    /// assert_eq!(vec.capacity(), 1);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::try_with_capacity_in(capacity, Global)
    }

    /// Constructs a vector of `len` default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    ///
    /// let vec = LazyVec::<u32>::try_with_len(42)?;
    /// assert_eq!(vec.len(), 42);
    /// assert_eq!(vec.capacity(), 64);
    /// assert!(vec.iter().all(|&n| n == 0));
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    pub fn try_with_len(len: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        let mut vec = Self::try_with_capacity(len)?;
        vec.try_resize_with(len, T::default)?;
        Ok(vec)
    }
}

impl<T, A: Allocator + Clone> LazyVec<T, A> {
    /// Constructs a new, empty `LazyVec<T, A>` with a capacity of
    /// [`DEFAULT_CAPACITY`] in the provided allocator.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::{Global, LazyVec};
    ///
    /// let vec = LazyVec::<u32, Global>::try_new_in(Global)?;
    /// assert_eq!(vec.capacity(), 16);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn try_new_in(alloc: A) -> Result<Self, Error> {
        Self::try_with_capacity_in(DEFAULT_CAPACITY, alloc)
    }

    /// Constructs a new, empty `LazyVec<T, A>` which can hold at least
    /// `capacity` elements before it has to grow, in the provided allocator.
    ///
    /// # Errors
    ///
    /// Errors with [`Error::CapacityOverflow`] if the rounded up capacity
    /// exceeds `isize::MAX` bytes, or [`Error::AllocError`] if the allocator
    /// fails.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, Error> {
        let Some(capacity) = capacity.checked_next_power_of_two() else {
            return Err(Error::CapacityOverflow);
        };

        Ok(Self {
            head: Region::new_in(alloc.clone()),
            tail: Region::try_with_capacity_in(capacity, alloc)?,
        })
    }

    /// Constructs a vector holding `n` clones of `elem` in the provided
    /// allocator. The last element is `elem` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::{Global, LazyVec};
    ///
    /// let vec = LazyVec::try_from_elem_in(84, 42, Global)?;
    /// assert_eq!(vec.len(), 42);
    /// assert_eq!(vec[0], 84);
    /// assert_eq!(vec[41], 84);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    pub fn try_from_elem_in(elem: T, n: usize, alloc: A) -> Result<Self, Error>
    where
        T: TryClone,
    {
        let mut vec = Self::try_with_capacity_in(n, alloc)?;

        if n > 0 {
            for _ in 1..n {
                vec.try_push(elem.try_clone()?)?;
            }

            vec.try_push(elem)?;
        }

        Ok(vec)
    }

    /// Appends an element to the back of the vector.
    ///
    /// If the vector is full a buffer of twice the capacity is allocated. The
    /// existing elements are not moved all at once, instead this and every
    /// following push moves one of them into the new buffer.
    ///
    /// # Errors
    ///
    /// If allocating the new buffer fails, `value` is dropped and the vector is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    ///
    /// let mut vec = LazyVec::try_with_capacity(2)?;
    /// vec.try_push(1)?;
    /// vec.try_push(2)?;
    /// vec.try_push(3)?;
    /// assert_eq!(vec, [1, 2, 3]);
    /// assert_eq!(vec.capacity(), 4);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<(), Error> {
        if self.len() >= self.capacity() {
            self.try_grow()?;
        }

        // SAFETY: the invariants of the vector ensure that slot `len` of the
        // tail is unused and within capacity once migration has been advanced.
        unsafe {
            if self.migration_due() {
                self.migrate_forward();
            }

            let len = self.len();
            self.tail.write(len, value);
            self.tail.set_len(self.tail.len() + 1);
        }

        Ok(())
    }

    /// Removes the last element from a vector and returns it, or [`None`] if it
    /// is empty.
    ///
    /// Once the current buffer has been drained, the vector returns to the
    /// previous buffer and releases the current one.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    /// use lazy_vec::prelude::*;
    ///
    /// let mut vec = LazyVec::try_from_iter([1, 2, 3])?;
    /// assert_eq!(vec.pop(), Some(3));
    /// assert_eq!(vec, [1, 2]);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: the vector is non-empty, so the last element lives in the
        // tail. Reverse migration only moves the first element of the tail,
        // which precedes the last one since a due migration implies an even
        // number of tail elements.
        unsafe {
            if self.migration_due() && self.head.len() < self.head.capacity() {
                self.migrate_backward();
            }

            let last = self.len() - 1;
            let value = self.tail.read(last);
            self.tail.set_len(self.tail.len() - 1);

            if self.tail.len() == 0 && self.head.capacity() > 0 {
                self.shrink();
            }

            Some(value)
        }
    }

    /// Reserves capacity for at least `capacity` elements in total.
    ///
    /// Unlike [`try_push`], this operation is eager: any elements still waiting
    /// to be migrated are moved immediately before the new buffer is
    /// installed. Does nothing if the capacity is already sufficient.
    ///
    /// [`try_push`]: LazyVec::try_push
    ///
    /// # Errors
    ///
    /// If the capacity overflows or the allocator reports a failure the vector
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    /// use lazy_vec::prelude::*;
    ///
    /// let mut vec = LazyVec::try_from_iter([1])?;
    /// vec.try_reserve(1000)?;
    /// assert_eq!(vec.capacity(), 1024);
    /// assert_eq!(vec, [1]);
    ///
    /// vec.try_reserve(10)?;
    /// assert_eq!(vec.capacity(), 1024);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), Error> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        let Some(capacity) = capacity.checked_next_power_of_two() else {
            return Err(Error::CapacityOverflow);
        };

        let tail = Region::try_with_capacity_in(capacity, self.tail.allocator().clone())?;

        // SAFETY: every forward migration moves the last element of the head
        // into its reserved slot, which keeps the invariants.
        unsafe {
            while self.head.len() > 0 {
                self.migrate_forward();
            }

            self.rotate(tail);

            if self.head.len() > 0 {
                self.migrate_forward();
            }
        }

        tracing::trace!(capacity, len = self.len(), "reserve");
        Ok(())
    }

    /// Resizes the vector in-place so that `len()` is equal to `new_len`.
    ///
    /// If `new_len` is greater than `len()` the vector is extended by the
    /// difference, with each new slot filled with a clone of `value`. If
    /// `new_len` is less than `len()` the vector is truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let mut vec = try_lazy_vec![0; 116];
    /// vec.try_resize(76, 0)?;
    /// assert_eq!(vec.len(), 76);
    ///
    /// let mut vec = try_lazy_vec!["hello"];
    /// vec.try_resize(3, "world")?;
    /// assert_eq!(vec, ["hello", "world", "world"]);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    pub fn try_resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: TryClone,
    {
        let len = self.len();

        if new_len <= len {
            self.truncate(new_len);
            return Ok(());
        }

        for _ in len + 1..new_len {
            self.try_push(value.try_clone()?)?;
        }

        self.try_push(value)
    }

    /// Resizes the vector in-place so that `len()` is equal to `new_len`,
    /// filling new slots with the values returned by calling `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    ///
    /// let mut vec = LazyVec::try_new()?;
    /// let mut n = 0;
    ///
    /// vec.try_resize_with(4, || {
    ///     n += 1;
    ///     n
    /// })?;
    ///
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    pub fn try_resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        self.truncate(new_len);

        while self.len() < new_len {
            self.try_push(f())?;
        }

        Ok(())
    }

    /// Shortens the vector, keeping the first `len` elements and dropping the
    /// rest.
    ///
    /// If `len` is greater than the vector's current length, this has no
    /// effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let mut vec = try_lazy_vec![1, 2, 3, 4, 5];
    /// vec.truncate(2);
    /// assert_eq!(vec, [1, 2]);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    pub fn truncate(&mut self, len: usize) {
        while self.len() > len {
            drop(self.pop());
        }
    }

    /// Allocate a tail of twice the current capacity and rotate it in.
    fn try_grow(&mut self) -> Result<(), Error> {
        let Some(capacity) = self.capacity().checked_mul(2) else {
            return Err(Error::CapacityOverflow);
        };

        let tail = Region::try_with_capacity_in(capacity, self.tail.allocator().clone())?;

        // SAFETY: a full vector has no elements left in its head.
        unsafe {
            self.rotate(tail);
        }

        tracing::trace!(capacity, len = self.len(), "extend");
        Ok(())
    }

    /// Release the drained tail and let head take its place.
    ///
    /// # Safety
    ///
    /// The tail must not hold any elements.
    unsafe fn shrink(&mut self) {
        debug_assert_eq!(self.tail.len(), 0);
        let alloc = self.head.allocator().clone();
        let head = mem::replace(&mut self.head, Region::new_in(alloc));
        drop(mem::replace(&mut self.tail, head));
        tracing::trace!(capacity = self.capacity(), len = self.len(), "shrink");
    }
}

impl<T, A: Allocator> LazyVec<T, A> {
    /// Returns a reference to the underlying allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.tail.allocator()
    }

    /// Returns the number of elements in the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let vec = try_lazy_vec![1, 2, 3];
    /// assert_eq!(vec.len(), 3);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the vector can hold before it has to
    /// allocate a new buffer.
    ///
    /// This is always a power of two.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.tail.capacity()
    }

    /// Test if an element is due to be migrated between the two buffers.
    #[inline]
    fn migration_due(&self) -> bool {
        self.head.capacity() > 0
            && 2 * self.head.len() + self.tail.len() == self.tail.capacity()
    }

    /// Move the last element of the head into the tail slot reserved for it.
    ///
    /// # Safety
    ///
    /// The head must not be empty.
    #[inline]
    unsafe fn migrate_forward(&mut self) {
        let slot = self.head.len() - 1;
        self.head.move_to(slot, &mut self.tail, slot);
        self.head.set_len(slot);
        self.tail.set_len(self.tail.len() + 1);
    }

    /// Move the first element of the tail back into the head.
    ///
    /// # Safety
    ///
    /// The tail must not be empty and the head must have a free slot.
    #[inline]
    unsafe fn migrate_backward(&mut self) {
        let slot = self.head.len();
        self.tail.move_to(slot, &mut self.head, slot);
        self.head.set_len(slot + 1);
        self.tail.set_len(self.tail.len() - 1);
    }

    /// Install `tail` as the new tail, demote the current tail to head and
    /// release the current head.
    ///
    /// # Safety
    ///
    /// The head must not hold any elements.
    unsafe fn rotate(&mut self, tail: Region<T, A>) {
        debug_assert_eq!(self.head.len(), 0);
        let head = mem::replace(&mut self.tail, tail);
        drop(mem::replace(&mut self.head, head));
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// vector.
    ///
    /// The first slice holds the elements which are still waiting to be
    /// migrated and is empty unless the vector is in the middle of a resize.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    /// use lazy_vec::prelude::*;
    ///
    /// let mut vec = LazyVec::try_new()?;
    /// vec.try_extend(0..17)?;
    ///
    /// let (head, tail) = vec.as_slices();
    /// assert_eq!(head.len(), 15);
    /// assert_eq!(tail, [15, 16]);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let split = self.head.len();

        // SAFETY: the ranges are exactly the live slots of the two regions.
        unsafe {
            (
                self.head.slice(0..split),
                self.tail.slice(split..split + self.tail.len()),
            )
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the vector.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let split = self.head.len();
        let end = split + self.tail.len();

        // SAFETY: the ranges are exactly the live slots of the two regions,
        // which never overlap.
        unsafe { (self.head.slice_mut(0..split), self.tail.slice_mut(split..end)) }
    }

    /// Pointer to the slot holding logical `index`.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[inline]
    unsafe fn slot(&self, index: usize) -> *mut T {
        if index < self.head.len() {
            self.head.slot(index)
        } else {
            self.tail.slot(index)
        }
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let vec = try_lazy_vec![10, 40, 30];
    /// assert_eq!(vec.get(1), Some(&40));
    /// assert_eq!(vec.get(3), None);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        let (head, tail) = self.as_slices();

        match index.checked_sub(head.len()) {
            Some(index) => tail.get(index),
            None => head.get(index),
        }
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let (head, tail) = self.as_mut_slices();

        match index.checked_sub(head.len()) {
            Some(index) => tail.get_mut(index),
            None => head.get_mut(index),
        }
    }

    /// Returns a reference to the element at `index` without doing bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// Calling this method with an out-of-bounds index is *[undefined
    /// behavior]*.
    ///
    /// [undefined behavior]: https://doc.rust-lang.org/reference/behavior-considered-undefined.html
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        &*self.slot(index)
    }

    /// Returns a mutable reference to the element at `index` without doing
    /// bounds checking.
    ///
    /// # Safety
    ///
    /// Calling this method with an out-of-bounds index is *[undefined
    /// behavior]*.
    ///
    /// [undefined behavior]: https://doc.rust-lang.org/reference/behavior-considered-undefined.html
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        &mut *self.slot(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Errors with [`Error::OutOfRange`] if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::{try_lazy_vec, Error};
    ///
    /// let vec = try_lazy_vec![1, 11, 19, 25, 43];
    /// assert_eq!(vec.at(2), Ok(&19));
    /// assert_eq!(vec.at(5), Err(Error::OutOfRange { index: 5, len: 5 }));
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len();

        match self.get(index) {
            Some(value) => Ok(value),
            None => Err(Error::OutOfRange { index, len }),
        }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Errors with [`Error::OutOfRange`] if `index` is out of bounds.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len();

        match self.get_mut(index) {
            Some(value) => Ok(value),
            None => Err(Error::OutOfRange { index, len }),
        }
    }

    /// Returns the first element, or `None` if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let vec = try_lazy_vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    /// assert_eq!(vec.front(), Some(&9));
    /// assert_eq!(vec.back(), Some(&0));
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.begin().get()
    }

    /// Returns the last element, or `None` if the vector is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        (self.end() - 1).get()
    }

    /// Returns a mutable reference to the first element, or `None` if the
    /// vector is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a mutable reference to the last element, or `None` if the
    /// vector is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len().checked_sub(1)?;
        self.get_mut(last)
    }

    /// Returns a cursor positioned at the first element.
    ///
    /// For an empty vector this is equal to [`end`].
    ///
    /// [`end`]: LazyVec::end
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let vec = try_lazy_vec![1, 5, 9];
    /// assert_eq!(vec.begin().get(), Some(&1));
    /// assert_eq!((vec.end() - 1).get(), Some(&9));
    /// assert_eq!(vec.end() - vec.begin(), 3);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        let (head, tail) = self.as_slices();
        Cursor::new(head, tail, 0)
    }

    /// Returns a cursor positioned one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        let (head, tail) = self.as_slices();
        Cursor::new(head, tail, head.len() + tail.len())
    }

    /// Returns an iterator over the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    /// use lazy_vec::prelude::*;
    ///
    /// let vec = LazyVec::try_from_iter(0..20)?;
    /// assert!(vec.iter().rev().copied().eq((0..20).rev()));
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (head, tail) = self.as_slices();
        Iter::new(head.iter(), tail.iter())
    }

    /// Returns an iterator that allows modifying each value.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let mut vec = try_lazy_vec![1, 2, 4];
    ///
    /// for n in vec.iter_mut() {
    ///     *n *= 2;
    /// }
    ///
    /// assert_eq!(vec, [2, 4, 8]);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (head, tail) = self.as_mut_slices();
        IterMut::new(head.iter_mut(), tail.iter_mut())
    }

    /// Clears the vector, removing all values.
    ///
    /// The capacity and the buffers of the vector are retained, so pushing up
    /// to the old capacity does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let mut vec = try_lazy_vec![1, 2, 3];
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 4);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    pub fn clear(&mut self) {
        let split = self.head.len();
        let end = split + self.tail.len();

        // SAFETY: live counts are reset before dropping, so a panicking
        // destructor leaks the remaining elements instead of dropping them
        // twice.
        unsafe {
            self.head.set_len(0);
            self.tail.set_len(0);
            self.head.drop_range(0..split);
            self.tail.drop_range(split..end);
        }
    }

    /// Exchanges the contents of two vectors without touching any element.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let mut a = try_lazy_vec![1];
    /// let mut b = try_lazy_vec![2, 3];
    /// a.swap_with(&mut b);
    /// assert_eq!(a, [2, 3]);
    /// assert_eq!(b, [1]);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.tail, &mut other.tail);
    }

    /// Swaps two elements in the vector.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` are out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let mut vec = try_lazy_vec!["a", "b", "c", "d", "e"];
    /// vec.swap(2, 4);
    /// assert_eq!(vec, ["a", "b", "e", "d", "c"]);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        let len = self.len();
        assert!(a < len, "swap index a ({a}) out of range for length {len}");
        assert!(b < len, "swap index b ({b}) out of range for length {len}");

        // SAFETY: both indexes are in bounds, `ptr::swap` permits them to be
        // equal.
        unsafe {
            ptr::swap(self.slot(a), self.slot(b));
        }
    }

    /// Reverses the order of elements in the vector, in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let mut vec = try_lazy_vec![1, 2, 3];
    /// vec.reverse();
    /// assert_eq!(vec, [3, 2, 1]);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    pub fn reverse(&mut self) {
        let len = self.len();

        for n in 0..len / 2 {
            self.swap(n, len - n - 1);
        }
    }

    /// Returns `true` if the vector contains an element with the given value.
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let (head, tail) = self.as_slices();
        head.contains(x) || tail.contains(x)
    }

    /// Binary searches this sorted vector for a given element.
    ///
    /// If the value is found then [`Ok`] is returned, containing the index of
    /// the matching element. If there are multiple matches, then any one of
    /// the matches could be returned. If the value is not found then [`Err`] is
    /// returned, containing the index where a matching element could be
    /// inserted while maintaining sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    /// use lazy_vec::prelude::*;
    ///
    /// let vec = LazyVec::try_from_iter((0..40).map(|n| n * 2))?;
    /// assert_eq!(vec.binary_search(&14), Ok(7));
    /// assert_eq!(vec.binary_search(&15), Err(8));
    /// assert_eq!(vec.binary_search(&100), Err(40));
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn binary_search(&self, x: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        self.binary_search_by(|e| e.cmp(x))
    }

    /// Binary searches this sorted vector with a comparator function.
    ///
    /// The comparator function should return an order code that indicates
    /// whether its argument is `Less`, `Equal` or `Greater` the desired target.
    pub fn binary_search_by<F>(&self, mut f: F) -> Result<usize, usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut lo = self.begin();
        let mut hi = self.end();

        while lo < hi {
            let mid = lo + (hi - lo).unsigned_abs() / 2;

            let Some(value) = mid.get() else {
                break;
            };

            match f(value) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Ok(mid.index()),
            }
        }

        Err(lo.index())
    }

    /// Binary searches this sorted vector with a key extraction function.
    #[inline]
    pub fn binary_search_by_key<B, F>(&self, b: &B, mut f: F) -> Result<usize, usize>
    where
        F: FnMut(&T) -> B,
        B: Ord,
    {
        self.binary_search_by(|k| f(k).cmp(b))
    }

    /// Sorts the vector without preserving the initial order of equal
    /// elements.
    ///
    /// This sort is in-place, allocates nothing, and runs in
    /// *O*(*n* \* log(*n*)) worst-case.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let mut vec = try_lazy_vec![-5, 4, 1, -3, 2];
    /// vec.sort_unstable();
    /// assert_eq!(vec, [-5, -3, 1, 2, 4]);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn sort_unstable(&mut self)
    where
        T: Ord,
    {
        self.sort_unstable_by(T::cmp);
    }

    /// Sorts the vector with a key extraction function, without preserving
    /// the initial order of equal elements.
    #[inline]
    pub fn sort_unstable_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.sort_unstable_by(|a, b| f(a).cmp(&f(b)));
    }

    /// Sorts the vector with a comparator function, without preserving the
    /// initial order of equal elements.
    ///
    /// Elements are sorted in place through their logical indexes, so the
    /// sort is unaffected by how they are split across the two buffers.
    pub fn sort_unstable_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.len();

        if len < 2 {
            return;
        }

        let mut sift_down = |this: &mut Self, mut node: usize, end: usize| loop {
            let mut child = 2 * node + 1;

            if child >= end {
                break;
            }

            if child + 1 < end && compare(&this[child], &this[child + 1]) == Ordering::Less {
                child += 1;
            }

            if compare(&this[node], &this[child]) != Ordering::Less {
                break;
            }

            this.swap(node, child);
            node = child;
        };

        for node in (0..len / 2).rev() {
            sift_down(self, node, len);
        }

        for end in (1..len).rev() {
            self.swap(0, end);
            sift_down(self, 0, end);
        }
    }
}

impl<T, A: Allocator + Clone> TryClone for LazyVec<T, A>
where
    T: TryClone,
{
    /// Clone the vector into buffers of the same capacities.
    ///
    /// If cloning an element fails, the elements cloned so far are dropped and
    /// the new buffers released before the error is returned.
    fn try_clone(&self) -> Result<Self, Error> {
        let head = Region::try_with_capacity_in(self.head.capacity(), self.head.allocator().clone())?;
        let tail = Region::try_with_capacity_in(self.tail.capacity(), self.tail.allocator().clone())?;

        // Whatever has been cloned when an error is propagated is dropped
        // together with `out`, which is a valid vector at every step.
        let mut out = LazyVec { head, tail };

        let (head, tail) = self.as_slices();

        for (slot, value) in head.iter().enumerate() {
            let value = value.try_clone()?;

            // SAFETY: the new head has the same capacity as ours.
            unsafe {
                out.head.write(slot, value);
                out.head.set_len(slot + 1);
            }
        }

        for (n, value) in tail.iter().enumerate() {
            let value = value.try_clone()?;

            // SAFETY: the new tail has the same capacity as ours, and tail
            // elements keep their absolute slots.
            unsafe {
                out.tail.write(head.len() + n, value);
                out.tail.set_len(n + 1);
            }
        }

        Ok(out)
    }

    /// Copy-assign from `source`.
    ///
    /// A clone of `source` is constructed first and then swapped into place,
    /// so `self` is left unchanged if cloning fails.
    fn try_clone_from(&mut self, source: &Self) -> Result<(), Error> {
        let mut temporary = source.try_clone()?;
        self.swap_with(&mut temporary);
        Ok(())
    }
}

#[cfg(test)]
impl<T, A: Allocator + Clone> Clone for LazyVec<T, A>
where
    T: TryClone,
{
    fn clone(&self) -> Self {
        self.try_clone().abort()
    }
}

impl<T, A: Allocator> Drop for LazyVec<T, A> {
    fn drop(&mut self) {
        self.clear();
        // Regions release their memory.
    }
}

impl<T, A: Allocator> Index<usize> for LazyVec<T, A> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        let len = self.len();

        match self.get(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, len),
        }
    }
}

impl<T, A: Allocator> IndexMut<usize> for LazyVec<T, A> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len();

        match self.get_mut(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, len),
        }
    }
}

#[cold]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for LazyVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Implements comparison of vectors, [lexicographically](Ord#lexicographical-comparison).
impl<T, A1, A2> PartialOrd<LazyVec<T, A2>> for LazyVec<T, A1>
where
    T: PartialOrd,
    A1: Allocator,
    A2: Allocator,
{
    #[inline]
    fn partial_cmp(&self, other: &LazyVec<T, A2>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Eq, A: Allocator> Eq for LazyVec<T, A> {}

/// Implements ordering of vectors, [lexicographically](Ord#lexicographical-comparison).
impl<T: Ord, A: Allocator> Ord for LazyVec<T, A> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, A: Allocator> IntoIterator for LazyVec<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    /// Creates a consuming iterator, that is, one that moves each value out of
    /// the vector (from start to end). The vector cannot be used after calling
    /// this.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let vec = try_lazy_vec!["a".to_string(), "b".to_string()];
    /// let mut iter = vec.into_iter();
    ///
    /// assert_eq!(iter.next().as_deref(), Some("a"));
    /// assert_eq!(iter.next_back().as_deref(), Some("b"));
    /// assert_eq!(iter.next(), None);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);

        // SAFETY: `this` is never dropped, so ownership of the regions moves
        // into the iterator.
        unsafe {
            let head = ptr::read(&this.head);
            let tail = ptr::read(&this.tail);
            IntoIter::new(head, tail)
        }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a LazyVec<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut LazyVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> TryFrom<&[T]> for LazyVec<T>
where
    T: TryClone,
{
    type Error = Error;

    /// Converts a `&[T]` into a [`LazyVec<T>`] by cloning each element.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    ///
    /// let vec = LazyVec::try_from(&[1, 2, 3][..])?;
    /// assert_eq!(vec, [1, 2, 3]);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    fn try_from(values: &[T]) -> Result<Self, Error> {
        let mut out = LazyVec::try_with_capacity(values.len())?;

        for value in values {
            out.try_push(value.try_clone()?)?;
        }

        Ok(out)
    }
}

impl<T, const N: usize> TryFrom<[T; N]> for LazyVec<T> {
    type Error = Error;

    /// Converts a `[T; N]` into a [`LazyVec<T>`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    ///
    /// let vec = LazyVec::try_from([9, 8, 7, 6, 5, 4, 3, 2, 1, 0])?;
    /// assert_eq!(vec.capacity(), 16);
    /// assert_eq!(vec[2], 7);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    fn try_from(values: [T; N]) -> Result<Self, Error> {
        let mut out = LazyVec::try_with_capacity(N)?;

        for value in values {
            out.try_push(value)?;
        }

        Ok(out)
    }
}

impl<T> TryFrom<::rust_alloc::vec::Vec<T>> for LazyVec<T> {
    type Error = Error;

    /// Converts a std `Vec<T>` into a [`LazyVec<T>`], moving its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::LazyVec;
    ///
    /// let vec = LazyVec::try_from(vec![1, 2, 3])?;
    /// assert_eq!(vec, [1, 2, 3]);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    fn try_from(values: ::rust_alloc::vec::Vec<T>) -> Result<Self, Error> {
        let mut out = LazyVec::try_with_capacity(values.len())?;

        for value in values {
            out.try_push(value)?;
        }

        Ok(out)
    }
}

impl<T, A: Allocator + Clone> TryFromIteratorIn<T, A> for LazyVec<T, A> {
    fn try_from_iter_in<I>(iter: I, alloc: A) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut this = LazyVec::try_with_capacity_in(lower, alloc)?;
        this.try_extend(iter)?;
        Ok(this)
    }
}

#[cfg(test)]
impl<T> FromIterator<T> for LazyVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::try_from_iter_in(iter, Global).abort()
    }
}

impl<T, A: Allocator + Clone> TryExtend<T> for LazyVec<T, A> {
    #[inline]
    fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        for value in iter {
            self.try_push(value)?;
        }

        Ok(())
    }
}
