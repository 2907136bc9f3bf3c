use crate::tests::prelude::*;

#[test]
fn checked_access() -> Result<(), Error> {
    let vec = LazyVec::try_from([1u32, 11, 19, 25, 43])?;
    assert_eq!(vec.at(0), Ok(&1));
    assert_eq!(vec.at(4), Ok(&43));
    assert_eq!(vec.at(5), Err(Error::OutOfRange { index: 5, len: 5 }));
    assert_eq!(vec.get(5), None);
    Ok(())
}

#[test]
fn access_across_buffers() -> Result<(), Error> {
    let mut vec = migrating(20)?;
    let (head, tail) = vec.as_slices();
    assert_eq!(head.len(), 12);
    assert_eq!(tail.len(), 8);

    for n in 0..20u32 {
        assert_eq!(vec[n as usize], n);
        assert_eq!(vec.get(n as usize), Some(&n));
        assert_eq!(vec.at(n as usize), Ok(&n));
    }

    *vec.at_mut(3)? += 100;
    vec[12] += 100;

    if let Some(value) = vec.get_mut(19) {
        *value += 100;
    }

    assert_eq!(vec[3], 103);
    assert_eq!(vec[12], 112);
    assert_eq!(vec[19], 119);
    assert_eq!(
        vec.at_mut(20).err(),
        Some(Error::OutOfRange { index: 20, len: 20 })
    );

    // SAFETY: both indexes are in bounds.
    unsafe {
        assert_eq!(*vec.get_unchecked(11), 11);
        *vec.get_unchecked_mut(13) = 0;
    }

    assert_eq!(vec[13], 0);
    Ok(())
}

#[test]
#[should_panic = "index out of bounds: the len is 3 but the index is 3"]
fn index_out_of_bounds() {
    let vec = LazyVec::try_from([1u32, 2, 3]).unwrap();
    let _ = vec[3];
}

#[test]
fn front_and_back() -> Result<(), Error> {
    let mut vec = LazyVec::<u32>::try_new()?;
    assert_eq!(vec.front(), None);
    assert_eq!(vec.back(), None);
    assert_eq!(vec.front_mut(), None);
    assert_eq!(vec.back_mut(), None);

    vec.try_extend(0..17)?;
    assert_eq!(vec.front(), Some(&0));
    assert_eq!(vec.back(), Some(&16));

    if let Some(front) = vec.front_mut() {
        *front = 42;
    }

    if let Some(back) = vec.back_mut() {
        *back = 43;
    }

    assert_eq!(vec.front(), Some(&42));
    assert_eq!(vec.back(), Some(&43));
    Ok(())
}

#[test]
fn iteration_matches_indexing() -> Result<(), Error> {
    let mut vec = migrating(20)?;

    assert_eq!(vec.iter().len(), 20);

    for (n, value) in vec.iter().enumerate() {
        assert_eq!(*value, vec[n]);
    }

    assert!(vec.iter().rev().copied().eq((0..20).rev()));
    assert_eq!(vec.iter().last(), Some(&19));

    for value in &mut vec {
        *value *= 2;
    }

    assert!(vec.iter().copied().eq((0..20).map(|n| n * 2)));

    let mut iter = vec.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&38));
    assert_eq!(iter.len(), 18);
    assert!(iter.clone().copied().eq((1..19).map(|n| n * 2)));
    Ok(())
}

#[test]
fn into_iter_order() -> Result<(), Error> {
    let vec = migrating(20)?;
    assert!(vec.into_iter().eq(0..20));

    let vec = migrating(20)?;
    assert!(vec.into_iter().rev().eq((0..20).rev()));

    let vec = migrating(20)?;
    let mut iter = vec.into_iter();
    assert_eq!(iter.len(), 20);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(19));
    assert_eq!(iter.len(), 18);
    assert!(iter.eq(1..19));
    Ok(())
}

#[test]
fn comparisons() -> Result<(), Error> {
    let a = migrating(20)?;
    let b = LazyVec::try_from_iter(0..20u32)?;
    let c = LazyVec::try_from_iter(0..19u32)?;

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(c < a);
    assert_eq!(a.cmp(&b), core::cmp::Ordering::Equal);

    let expected = (0..20).collect::<Vec<u32>>();
    assert_eq!(a, expected);
    assert_eq!(expected, a);
    assert_eq!(a, &expected[..]);
    assert_eq!(&expected[..], a);
    assert_eq!(a, expected[..]);
    Ok(())
}

#[test]
fn debug_lists_in_order() -> Result<(), Error> {
    let mut vec = migrating(16)?;
    vec.truncate(3);
    assert_eq!(rust_alloc::format!("{vec:?}"), "[0, 1, 2]");

    let vec = migrating(18)?;
    let expected = rust_alloc::format!("{:?}", (0..18).collect::<Vec<u32>>());
    assert_eq!(rust_alloc::format!("{vec:?}"), expected);
    Ok(())
}

#[test]
fn contains_values() -> Result<(), Error> {
    let vec = migrating(20)?;
    assert!(vec.contains(&0));
    assert!(vec.contains(&19));
    assert!(!vec.contains(&20));
    Ok(())
}
