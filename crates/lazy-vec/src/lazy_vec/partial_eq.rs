use crate::alloc::Allocator;

use super::LazyVec;

// A vector is split across two buffers, so comparisons walk both sides in
// logical order instead of comparing contiguous slices.
macro_rules! __impl_slice_eq1 {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }
    }
}

__impl_slice_eq1! { [A: Allocator] LazyVec<T, A>, ::rust_alloc::vec::Vec<U> }
__impl_slice_eq1! { [A: Allocator] ::rust_alloc::vec::Vec<T>, LazyVec<U, A> }
__impl_slice_eq1! { [A1: Allocator, A2: Allocator] LazyVec<T, A1>, LazyVec<U, A2> }
__impl_slice_eq1! { [A: Allocator] LazyVec<T, A>, &[U] }
__impl_slice_eq1! { [A: Allocator] LazyVec<T, A>, &mut [U] }
__impl_slice_eq1! { [A: Allocator] &[T], LazyVec<U, A> }
__impl_slice_eq1! { [A: Allocator] &mut [T], LazyVec<U, A> }
__impl_slice_eq1! { [A: Allocator] LazyVec<T, A>, [U] }
__impl_slice_eq1! { [A: Allocator] [T], LazyVec<U, A> }
__impl_slice_eq1! { [A: Allocator, const N: usize] LazyVec<T, A>, [U; N] }
__impl_slice_eq1! { [A: Allocator, const N: usize] LazyVec<T, A>, &[U; N] }
