use crate::tests::prelude::*;

#[test]
fn clone_is_independent() -> Result<(), Error> {
    let vec = migrating(20)?;
    let mut copy = vec.try_clone()?;

    assert_eq!(copy, vec);
    assert_eq!(copy.len(), vec.len());
    assert_eq!(copy.capacity(), vec.capacity());
    assert_eq!(copy.as_slices().0.len(), vec.as_slices().0.len());

    copy[0] = 100;
    copy.try_push(20)?;

    assert_eq!(vec[0], 0);
    assert_eq!(vec.len(), 20);
    assert!(vec.iter().copied().eq(0..20));
    Ok(())
}

#[test]
fn clone_empty() -> Result<(), Error> {
    let vec = LazyVec::<u32>::try_with_capacity(4)?;
    let copy = vec.try_clone()?;
    assert!(copy.is_empty());
    assert_eq!(copy.capacity(), 4);
    Ok(())
}

#[test]
fn clone_from() -> Result<(), Error> {
    let source = migrating(20)?;
    let mut target = LazyVec::try_from([7u32])?;
    target.try_clone_from(&source)?;

    assert_eq!(target, source);
    assert_eq!(target.capacity(), 32);
    Ok(())
}

#[test]
fn failed_clone_leaks_nothing() -> Result<(), Error> {
    let drops = Rc::new(Cell::new(0));

    {
        let mut vec = counted(10, &drops)?;
        vec[6].fail = true;

        assert_eq!(vec.try_clone().err(), Some(Error::CapacityOverflow));
        // The six clones made before the failure are gone.
        assert_eq!(drops.get(), 6);
    }

    assert_eq!(drops.get(), 16);

    drops.set(0);

    {
        // Fail while cloning the elements waiting to be migrated.
        let mut vec = counted(17, &drops)?;
        assert_eq!(vec.as_slices().0.len(), 15);
        vec[3].fail = true;

        assert_eq!(vec.try_clone().err(), Some(Error::CapacityOverflow));
        assert_eq!(drops.get(), 3);
    }

    assert_eq!(drops.get(), 20);
    Ok(())
}

#[test]
fn failed_clone_from_keeps_target() -> Result<(), Error> {
    let drops = Rc::new(Cell::new(0));
    let mut source = counted(17, &drops)?;
    source[16].fail = true;

    let mut target = counted(3, &drops)?;
    assert_eq!(
        target.try_clone_from(&source),
        Err(Error::CapacityOverflow)
    );

    assert_eq!(target.len(), 3);
    assert!(target.iter().map(|c| c.value).eq(0..3));
    // All sixteen clones made of the source were dropped.
    assert_eq!(drops.get(), 16);
    Ok(())
}

#[test]
fn clone_failure_from_allocation() -> Result<(), Error> {
    let vec = migrating(20)?;

    // Enough for the head buffer, but not for the tail.
    let result = limit::with(16 * 4, || vec.try_clone()).call();

    assert!(matches!(result, Err(Error::AllocError { .. })));
    assert!(vec.iter().copied().eq(0..20));
    Ok(())
}

#[test]
fn array_and_slice_sources() -> Result<(), Error> {
    let values = [1u32, 2, 3, 4, 5];
    let vec = LazyVec::try_from(&values[..])?;
    assert_eq!(vec, values);

    let vec = LazyVec::try_from(rust_alloc::vec![1u32, 2, 3])?;
    assert_eq!(vec, [1, 2, 3]);

    let vec = LazyVec::try_from_elem_in(5u32, 3, Global)?;
    assert_eq!(vec, [5, 5, 5]);
    Ok(())
}
