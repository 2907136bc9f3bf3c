use crate::tests::prelude::*;

#[test]
fn push_over_default_capacity() -> Result<(), Error> {
    let mut vec = LazyVec::try_new()?;
    assert_eq!(vec.capacity(), DEFAULT_CAPACITY);

    for n in 0..16u32 {
        vec.try_push(n)?;
    }

    assert_eq!(vec.len(), 16);
    assert_eq!(vec.capacity(), 16);
    assert!(vec.as_slices().0.is_empty());

    vec.try_push(16)?;
    assert_eq!(vec.capacity(), 32);

    // Exactly one element has been migrated besides the new one.
    let (head, tail) = vec.as_slices();
    assert_eq!(head.len(), 15);
    assert_eq!(tail, [15, 16]);
    assert!(vec.iter().copied().eq(0..17));

    for n in (0..17).rev() {
        assert_eq!(vec.pop(), Some(n));

        if n == 16 {
            // The new buffer has drained, so the vector is back in the old
            // one.
            assert_eq!(vec.capacity(), 16);
        }
    }

    assert_eq!(vec.len(), 0);
    assert_eq!(vec.pop(), None);
    Ok(())
}

#[test]
fn migration_finishes_when_full() -> Result<(), Error> {
    let mut vec = migrating(17)?;

    for n in 17..32 {
        let (head, _) = vec.as_slices();
        assert_eq!(head.len(), 32 - n as usize);
        vec.try_push(n)?;
    }

    assert_eq!(vec.capacity(), 32);
    assert!(vec.as_slices().0.is_empty());
    assert!(vec.iter().copied().eq(0..32));
    Ok(())
}

#[test]
fn lifo_order() -> Result<(), Error> {
    let mut vec = LazyVec::try_new()?;

    for n in 0..1000u32 {
        vec.try_push(n)?;
        assert!(vec.capacity().is_power_of_two());
        assert!(vec.capacity() >= vec.len());
    }

    for n in (0..1000u32).rev() {
        assert_eq!(vec.pop(), Some(n));
        assert!(vec.capacity().is_power_of_two());
        assert!(vec.capacity() >= vec.len());
    }

    assert!(vec.is_empty());
    Ok(())
}

#[test]
fn alternating_at_boundary() -> Result<(), Error> {
    let mut vec = migrating(16)?;

    for _ in 0..10 {
        vec.try_push(16)?;
        assert_eq!(vec.capacity(), 32);
        assert_eq!(vec.pop(), Some(16));
        assert_eq!(vec.capacity(), 16);
    }

    assert!(vec.iter().copied().eq(0..16));
    Ok(())
}

#[test]
fn from_array() -> Result<(), Error> {
    let vec = LazyVec::try_from([9u32, 8, 7, 6, 5, 4, 3, 2, 1, 0])?;
    assert_eq!(vec.len(), 10);
    assert_eq!(vec.capacity(), 16);
    assert_eq!(vec[2], 7);
    assert_eq!(vec.front(), Some(&9));
    assert_eq!(vec.back(), Some(&0));
    Ok(())
}

#[test]
fn with_capacity_rounds_up() -> Result<(), Error> {
    assert_eq!(LazyVec::<u32>::try_with_capacity(0)?.capacity(), 1);
    assert_eq!(LazyVec::<u32>::try_with_capacity(1)?.capacity(), 1);
    assert_eq!(LazyVec::<u32>::try_with_capacity(17)?.capacity(), 32);
    assert_eq!(LazyVec::<u32>::try_with_capacity(64)?.capacity(), 64);

    let mut vec = LazyVec::try_with_capacity(0)?;

    for n in 0..5u32 {
        vec.try_push(n)?;
    }

    assert_eq!(vec.capacity(), 8);
    assert_eq!(vec, [0, 1, 2, 3, 4]);

    assert_eq!(
        LazyVec::<u32>::try_with_capacity(usize::MAX).err(),
        Some(Error::CapacityOverflow)
    );
    Ok(())
}

#[test]
fn zero_sized_values() -> Result<(), Error> {
    let mut vec = LazyVec::try_new()?;

    for _ in 0..100 {
        vec.try_push(())?;
    }

    assert_eq!(vec.len(), 100);
    assert_eq!(vec.capacity(), 128);

    for _ in 0..100 {
        assert_eq!(vec.pop(), Some(()));
    }

    assert!(vec.is_empty());
    Ok(())
}

#[test]
fn reserve() -> Result<(), Error> {
    let mut vec = LazyVec::try_from_iter([1u32, 2, 3])?;
    vec.try_reserve(1000)?;
    assert_eq!(vec.capacity(), 1024);
    assert!(vec.capacity().is_power_of_two());
    assert_eq!(vec, [1, 2, 3]);

    let capacity = vec.capacity();
    vec.try_reserve(10)?;
    assert_eq!(vec.capacity(), capacity);
    Ok(())
}

#[test]
fn reserve_while_migrating() -> Result<(), Error> {
    let mut vec = migrating(17)?;
    vec.try_reserve(100)?;

    assert_eq!(vec.capacity(), 128);
    assert!(vec.iter().copied().eq(0..17));

    // The last element always sits in the current buffer.
    assert_eq!(vec.as_slices().1, [16]);

    for n in 17..200 {
        vec.try_push(n)?;
    }

    assert!(vec.iter().copied().eq(0..200));

    for n in (0..200).rev() {
        assert_eq!(vec.pop(), Some(n));
        assert!(vec.capacity().is_power_of_two());
    }

    Ok(())
}

#[test]
fn reserve_overflow() -> Result<(), Error> {
    let mut vec = migrating(17)?;
    assert_eq!(vec.try_reserve(usize::MAX), Err(Error::CapacityOverflow));
    assert_eq!(vec.capacity(), 32);
    assert_eq!(vec.as_slices().0.len(), 15);
    assert!(vec.iter().copied().eq(0..17));
    Ok(())
}

#[test]
fn clear_keeps_capacity() -> Result<(), Error> {
    let mut vec = migrating(20)?;
    vec.clear();

    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 32);

    // The retained buffer takes every push up to its capacity.
    limit::with(0, || -> Result<(), Error> {
        for n in 0..32u32 {
            vec.try_push(n)?;
        }

        Ok(())
    })
    .call()?;

    assert!(vec.iter().copied().eq(0..32));
    Ok(())
}

#[test]
fn swap_with() -> Result<(), Error> {
    let mut a = migrating(20)?;
    let mut b = LazyVec::try_from([1u32, 2])?;
    a.swap_with(&mut b);

    assert_eq!(a, [1, 2]);
    assert_eq!(a.capacity(), 2);
    assert!(b.iter().copied().eq(0..20));
    assert_eq!(b.capacity(), 32);
    Ok(())
}

#[test]
fn move_vector() -> Result<(), Error> {
    let vec = migrating(20)?;
    let moved = vec;
    assert!(moved.iter().copied().eq(0..20));
    assert_eq!(moved.capacity(), 32);
    Ok(())
}

#[test]
fn oversized_layout_is_capacity_overflow() -> Result<(), Error> {
    assert_eq!(
        LazyVec::<u64>::try_with_capacity(1 << (usize::BITS - 2)).err(),
        Some(Error::CapacityOverflow)
    );

    let mut vec = migrating(17)?;
    assert_eq!(
        vec.try_reserve(1 << (usize::BITS - 2)),
        Err(Error::CapacityOverflow)
    );
    assert!(vec.iter().copied().eq(0..17));

    assert_eq!(
        rust_alloc::format!("{}", Error::CapacityOverflow),
        "Capacity overflow"
    );
    Ok(())
}
