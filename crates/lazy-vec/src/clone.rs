//! The `TryClone` trait for types that cannot be 'implicitly copied'.
//!
//! Cloning a collection allocates, and allocation may fail. [`TryClone`] is
//! the fallible counterpart of [`Clone`] which reports such failures as an
//! [`Error`] instead of aborting.
//!
//! ```
//! use lazy_vec::{try_lazy_vec, LazyVec};
//! use lazy_vec::prelude::*;
//!
//! let a: LazyVec<u32> = try_lazy_vec![1, 2, 3];
//! let b = a.try_clone()?;
//! assert_eq!(a, b);
//! # Ok::<_, lazy_vec::Error>(())
//! ```

use crate::error::Error;

/// Fallible `Clone` trait.
pub trait TryClone: Sized {
    /// Try to clone the current value, raising an allocation error if it's
    /// unsuccessful.
    fn try_clone(&self) -> Result<Self, Error>;

    /// Performs copy-assignment from `source`.
    ///
    /// `a.try_clone_from(&b)` is equivalent to `a = b.try_clone()?` in
    /// functionality, but can be overridden to reuse the resources of `a` or to
    /// provide stronger guarantees.
    #[inline]
    fn try_clone_from(&mut self, source: &Self) -> Result<(), Error> {
        *self = source.try_clone()?;
        Ok(())
    }
}

impl<T> TryClone for &T
where
    T: ?Sized,
{
    #[inline]
    fn try_clone(&self) -> Result<Self, Error> {
        Ok(*self)
    }
}

impl<T> TryClone for Option<T>
where
    T: TryClone,
{
    #[inline]
    fn try_clone(&self) -> Result<Self, Error> {
        Ok(match self {
            Some(value) => Some(value.try_clone()?),
            None => None,
        })
    }
}

impl<T, E> TryClone for Result<T, E>
where
    T: TryClone,
    E: TryClone,
{
    #[inline]
    fn try_clone(&self) -> Result<Self, Error> {
        Ok(match self {
            Ok(value) => Ok(value.try_clone()?),
            Err(value) => Err(value.try_clone()?),
        })
    }
}

macro_rules! tuple_impl {
    ($($ty:ident),* $(,)?) => {
        impl<$($ty,)*> TryClone for ($($ty,)*) where $($ty: TryClone,)* {
            #[inline]
            fn try_clone(&self) -> Result<Self, Error> {
                #[allow(non_snake_case)]
                let ($($ty,)*) = self;
                Ok(($($ty.try_clone()?,)*))
            }
        }
    }
}

tuple_impl!(A);
tuple_impl!(A, B);
tuple_impl!(A, B, C);
tuple_impl!(A, B, C, D);
tuple_impl!(A, B, C, D, E);
tuple_impl!(A, B, C, D, E, F);

macro_rules! impl_copy {
    ($ty:ty) => {
        impl TryClone for $ty {
            #[inline]
            fn try_clone(&self) -> Result<Self, Error> {
                Ok(*self)
            }
        }
    };
}

impl_copy!(());
impl_copy!(usize);
impl_copy!(isize);
impl_copy!(u8);
impl_copy!(u16);
impl_copy!(u32);
impl_copy!(u64);
impl_copy!(u128);
impl_copy!(i8);
impl_copy!(i16);
impl_copy!(i32);
impl_copy!(i64);
impl_copy!(i128);
impl_copy!(f32);
impl_copy!(f64);
impl_copy!(bool);
impl_copy!(char);
impl_copy!(core::num::NonZeroUsize);
impl_copy!(core::num::NonZeroU32);
impl_copy!(core::num::NonZeroU64);

impl<T, const N: usize> TryClone for [T; N]
where
    T: TryClone,
{
    fn try_clone(&self) -> Result<Self, Error> {
        let mut out = [const { None::<T> }; N];

        for (slot, value) in out.iter_mut().zip(self.iter()) {
            *slot = Some(value.try_clone()?);
        }

        Ok(out.map(|value| match value {
            Some(value) => value,
            None => unreachable!(),
        }))
    }
}

impl TryClone for ::rust_alloc::string::String {
    #[inline]
    fn try_clone(&self) -> Result<Self, Error> {
        Ok(self.clone())
    }
}

impl<T> TryClone for ::rust_alloc::rc::Rc<T>
where
    T: ?Sized,
{
    #[inline]
    fn try_clone(&self) -> Result<Self, Error> {
        Ok(self.clone())
    }
}

impl<T> TryClone for ::rust_alloc::sync::Arc<T>
where
    T: ?Sized,
{
    #[inline]
    fn try_clone(&self) -> Result<Self, Error> {
        Ok(self.clone())
    }
}
