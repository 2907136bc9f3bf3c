use crate::tests::prelude::*;

#[test]
fn dropped_exactly_once() -> Result<(), Error> {
    let drops = Rc::new(Cell::new(0));

    {
        let mut vec = counted(100, &drops)?;

        for n in (70..100).rev() {
            let value = vec.pop();
            assert!(matches!(value, Some(ref c) if c.value == n));
        }

        assert_eq!(drops.get(), 30);
    }

    assert_eq!(drops.get(), 100);
    Ok(())
}

#[test]
fn clear_and_truncate() -> Result<(), Error> {
    let drops = Rc::new(Cell::new(0));
    let mut vec = counted(20, &drops)?;

    vec.truncate(25);
    assert_eq!(drops.get(), 0);

    vec.truncate(14);
    assert_eq!(drops.get(), 6);
    assert_eq!(vec.len(), 14);

    vec.clear();
    assert_eq!(drops.get(), 20);
    assert!(vec.is_empty());

    drop(vec);
    assert_eq!(drops.get(), 20);
    Ok(())
}

#[test]
fn into_iter_drops_remaining() -> Result<(), Error> {
    let drops = Rc::new(Cell::new(0));
    let vec = counted(20, &drops)?;
    assert_eq!(vec.as_slices().0.len(), 12);

    let mut iter = vec.into_iter();

    for n in 0..3 {
        assert!(matches!(iter.next(), Some(c) if c.value == n));
    }

    for n in (17..20).rev() {
        assert!(matches!(iter.next_back(), Some(c) if c.value == n));
    }

    assert_eq!(drops.get(), 6);
    assert_eq!(iter.len(), 14);

    drop(iter);
    assert_eq!(drops.get(), 20);
    Ok(())
}

#[test]
fn into_iter_drains_head_only() -> Result<(), Error> {
    let drops = Rc::new(Cell::new(0));
    let vec = counted(20, &drops)?;
    let mut iter = vec.into_iter();

    // Consume every element of the current buffer from the back, leaving
    // only elements waiting to be migrated.
    for _ in 0..8 {
        drop(iter.next_back());
    }

    assert_eq!(drops.get(), 8);
    assert_eq!(iter.len(), 12);
    drop(iter);
    assert_eq!(drops.get(), 20);
    Ok(())
}

#[test]
fn resize_drops() -> Result<(), Error> {
    let drops = Rc::new(Cell::new(0));
    let mut vec = counted(4, &drops)?;

    vec.try_resize(20, Counted::new(99, &drops))?;
    assert_eq!(vec.len(), 20);
    assert!(vec.iter().skip(4).all(|c| *c == 99));
    assert_eq!(drops.get(), 0);

    vec.try_resize(2, Counted::new(0, &drops))?;
    // 18 truncated, plus the unused fill value.
    assert_eq!(drops.get(), 19);

    drop(vec);
    assert_eq!(drops.get(), 21);
    Ok(())
}

#[test]
fn failed_push_drops_value() -> Result<(), Error> {
    let drops = Rc::new(Cell::new(0));
    let mut vec = counted(16, &drops)?;
    assert_eq!(vec.len(), vec.capacity());

    let value = Counted::new(16, &drops);
    let result = limit::with(0, || vec.try_push(value)).call();

    assert!(matches!(result, Err(Error::AllocError { .. })));
    assert_eq!(drops.get(), 1);
    assert_eq!(vec.len(), 16);
    Ok(())
}
