use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// The buffer a [`Cursor`] currently points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Head,
    Tail,
}

/// A random-access cursor over the elements of a [`LazyVec`].
///
/// The elements of a vector which is in the middle of a resize live in two
/// separate buffers. A cursor hides this by walking the elements still waiting
/// to be migrated first and then the remaining ones, which together form the
/// logical order of the vector.
///
/// Cursors are created through [`LazyVec::begin`] and [`LazyVec::end`], and
/// support the arithmetic of a random-access position: stepping, offsetting,
/// distance and comparison.
///
/// # Examples
///
/// ```
/// use lazy_vec::LazyVec;
/// use lazy_vec::prelude::*;
///
/// let mut vec = LazyVec::try_new()?;
/// vec.try_extend(0..20u32)?;
///
/// let mut cursor = vec.begin();
/// assert_eq!(cursor.get(), Some(&0));
///
/// cursor += 17;
/// assert_eq!(cursor.get(), Some(&17));
///
/// cursor.move_prev();
/// assert_eq!(cursor.get(), Some(&16));
///
/// assert_eq!(vec.end() - cursor, 4);
/// assert_eq!(cursor - vec.end(), -4);
/// # Ok::<_, lazy_vec::Error>(())
/// ```
///
/// [`LazyVec`]: super::LazyVec
/// [`LazyVec::begin`]: super::LazyVec::begin
/// [`LazyVec::end`]: super::LazyVec::end
pub struct Cursor<'a, T> {
    head: &'a [T],
    tail: &'a [T],
    segment: Segment,
    offset: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Construct a cursor at the given logical index of the two live ranges.
    pub(super) fn new(head: &'a [T], tail: &'a [T], index: usize) -> Self {
        let (segment, offset) = match index.checked_sub(head.len()) {
            Some(offset) => (Segment::Tail, offset),
            None => (Segment::Head, index),
        };

        Self {
            head,
            tail,
            segment,
            offset,
        }
    }

    /// The logical index the cursor points to.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_vec::try_lazy_vec;
    ///
    /// let vec = try_lazy_vec![1, 2, 3];
    /// assert_eq!((vec.begin() + 2).index(), 2);
    /// assert_eq!(vec.end().index(), 3);
    /// # Ok::<_, lazy_vec::Error>(())
    /// ```
    #[inline]
    pub fn index(&self) -> usize {
        match self.segment {
            Segment::Head => self.offset,
            Segment::Tail => self.head.len() + self.offset,
        }
    }

    /// Dereference the cursor, returning `None` if it points past the last
    /// element.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        match self.segment {
            Segment::Head => self.head.get(self.offset),
            Segment::Tail => self.tail.get(self.offset),
        }
    }

    /// Step to the next element.
    ///
    /// Stepping past the last element waiting to be migrated continues at the
    /// first element of the current buffer.
    #[inline]
    pub fn move_next(&mut self) {
        match self.segment {
            Segment::Head if self.offset + 1 == self.head.len() => {
                self.segment = Segment::Tail;
                self.offset = 0;
            }
            _ => {
                self.offset += 1;
            }
        }

        debug_assert!(
            self.index() <= self.len(),
            "cursor moved past the end of the vector"
        );
    }

    /// Step to the previous element.
    #[inline]
    pub fn move_prev(&mut self) {
        match self.segment {
            Segment::Tail if self.offset == 0 => {
                debug_assert!(
                    !self.head.is_empty(),
                    "cursor moved before the start of the vector"
                );
                self.segment = Segment::Head;
                self.offset = self.head.len().wrapping_sub(1);
            }
            _ => {
                debug_assert!(
                    self.offset > 0,
                    "cursor moved before the start of the vector"
                );
                self.offset = self.offset.wrapping_sub(1);
            }
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    fn forward(&mut self, n: usize) {
        if let Segment::Head = self.segment {
            // Steps needed to reach the last element of head.
            let remaining = self.head.len() - 1 - self.offset;

            if n <= remaining {
                self.offset += n;
                return;
            }

            let overshoot = n - remaining;
            self.segment = Segment::Tail;
            self.offset = overshoot - 1;
        } else {
            self.offset += n;
        }

        debug_assert!(
            self.index() <= self.len(),
            "cursor moved past the end of the vector"
        );
    }

    fn backward(&mut self, n: usize) {
        if let Segment::Tail = self.segment {
            if n <= self.offset {
                self.offset -= n;
                return;
            }

            let overshoot = n - self.offset;

            debug_assert!(
                overshoot <= self.head.len(),
                "cursor moved before the start of the vector"
            );

            self.segment = Segment::Head;
            self.offset = self.head.len().wrapping_sub(overshoot);
        } else {
            debug_assert!(
                n <= self.offset,
                "cursor moved before the start of the vector"
            );

            self.offset = self.offset.wrapping_sub(n);
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("segment", &self.segment)
            .field("offset", &self.offset)
            .field("index", &self.index())
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.segment == other.segment && self.offset == other.offset
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (self.segment, self.offset).cmp(&(other.segment, other.offset))
    }
}

impl<T> Add<usize> for Cursor<'_, T> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: usize) -> Self::Output {
        self.forward(n);
        self
    }
}

impl<T> AddAssign<usize> for Cursor<'_, T> {
    #[inline]
    fn add_assign(&mut self, n: usize) {
        self.forward(n);
    }
}

impl<T> Sub<usize> for Cursor<'_, T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: usize) -> Self::Output {
        self.backward(n);
        self
    }
}

impl<T> SubAssign<usize> for Cursor<'_, T> {
    #[inline]
    fn sub_assign(&mut self, n: usize) {
        self.backward(n);
    }
}

/// The signed number of steps from `other` to `self`.
impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    fn sub(self, other: Self) -> Self::Output {
        match (self.segment, other.segment) {
            (Segment::Head, Segment::Head) | (Segment::Tail, Segment::Tail) => {
                self.offset as isize - other.offset as isize
            }
            (Segment::Tail, Segment::Head) => crossing(self.head, other.offset, self.offset),
            (Segment::Head, Segment::Tail) => -crossing(self.head, self.offset, other.offset),
        }
    }
}

/// Distance from head offset `from` to tail offset `to`.
#[inline]
fn crossing<T>(head: &[T], from: usize, to: usize) -> isize {
    ((head.len() - 1 - from) + to + 1) as isize
}
