use crate::tests::prelude::*;

#[test]
fn push_failure_leaves_vector_unchanged() -> Result<(), Error> {
    let mut vec = migrating(16)?;

    let result = limit::with(0, || vec.try_push(16)).call();
    assert!(matches!(result, Err(Error::AllocError { .. })));

    assert_eq!(vec.capacity(), 16);
    assert!(vec.as_slices().0.is_empty());
    assert!(vec.iter().copied().eq(0..16));

    // Without a limit the same push succeeds.
    vec.try_push(16)?;
    assert!(vec.iter().copied().eq(0..17));
    Ok(())
}

#[test]
fn reserve_failure_leaves_vector_unchanged() -> Result<(), Error> {
    let mut vec = migrating(20)?;
    let before = vec.as_slices().0.len();

    let result = limit::with(1024, || vec.try_reserve(1000)).call();
    assert!(matches!(result, Err(Error::AllocError { .. })));

    assert_eq!(vec.capacity(), 32);
    assert_eq!(vec.as_slices().0.len(), before);
    assert!(vec.iter().copied().eq(0..20));
    Ok(())
}

#[test]
fn construction_failure() {
    let result = limit::with(63, LazyVec::<u32>::try_new).call();
    assert!(matches!(result, Err(Error::AllocError { .. })));

    let result = limit::with(64, LazyVec::<u32>::try_new).call();
    assert!(result.is_ok());
}

#[test]
fn budget_is_returned() -> Result<(), Error> {
    limit::with(1024, || -> Result<(), Error> {
        let mut vec = LazyVec::<u64>::try_with_capacity(8)?;
        assert_eq!(limit::get(), 1024 - 64);

        for n in 0..9 {
            vec.try_push(n)?;
        }

        // Both buffers are alive while migrating.
        assert_eq!(limit::get(), 1024 - 64 - 128);

        for _ in 0..9 {
            vec.pop();
        }

        // The larger buffer was released when it drained.
        assert_eq!(limit::get(), 1024 - 64);
        drop(vec);
        assert_eq!(limit::get(), 1024);
        Ok(())
    })
    .call()?;

    assert_eq!(limit::get(), usize::MAX);
    Ok(())
}

#[test]
fn pushes_fit_in_budget() -> Result<(), Error> {
    // Capacities 16 and 32 of u32 together with the final 64.
    let budget = (16 + 32 + 64) * 4;

    limit::with(budget, || -> Result<(), Error> {
        let mut vec = LazyVec::<u32>::try_new()?;

        for n in 0..64 {
            vec.try_push(n)?;
        }

        assert!(vec.iter().copied().eq(0..64));
        assert!(vec.try_push(64).is_err());
        assert_eq!(vec.len(), 64);
        Ok(())
    })
    .call()
}

#[test]
fn global_allocator_accounting() -> Result<(), Error> {
    use core::alloc::Layout;

    use crate::alloc::Allocator;

    limit::with(256, || -> Result<(), Error> {
        let layout = Layout::array::<u64>(16).map_err(|_| Error::CapacityOverflow)?;
        let ptr = Global.allocate(layout)?;
        assert_eq!(ptr.len(), 128);
        assert_eq!(limit::get(), 128);

        // A zero-sized block needs no memory.
        let empty = Global.allocate(Layout::new::<()>())?;
        assert_eq!(empty.len(), 0);
        assert_eq!(limit::get(), 128);

        let large = Layout::array::<u64>(32).map_err(|_| Error::CapacityOverflow)?;
        assert!(Global.allocate(large).is_err());
        assert_eq!(limit::get(), 128);

        // SAFETY: both blocks were allocated above with the same layouts.
        unsafe {
            Global.deallocate(ptr.cast(), layout);
            Global.deallocate(empty.cast(), Layout::new::<()>());
        }

        assert_eq!(limit::get(), 256);
        Ok(())
    })
    .call()
}
