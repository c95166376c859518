use fieldplan::{ZoneMask, ZoneSet, ZoneSetError};

#[test]
fn test_try_new_sizes() {
    // Success for a set that fits
    let ok = ZoneMask::<u16, 12>::try_new();
    assert!(ok.is_ok());

    // Failure when the capacity exceeds the backing integer
    let err = ZoneMask::<u8, 9>::try_new();
    assert!(matches!(err, Err(ZoneSetError::SizeTooLarge { .. })));
}

#[test]
fn test_insert_remove_contains() {
    let mut set = ZoneMask::<u16, 12>::new();
    assert!(set.is_empty());

    set.insert(3).unwrap();
    assert!(set.contains(3));
    assert_eq!(set.len(), 1);

    set.remove(3).unwrap();
    assert!(!set.contains(3));

    assert_eq!(
        set.insert(12).unwrap_err(),
        ZoneSetError::IndexOutOfBounds { index: 12, capacity: 12 }
    );
    assert!(!set.contains(40));
}

#[test]
fn test_from_iter_and_iter() {
    let set = ZoneSet::from_iter([7, 0, 3]).unwrap();
    let members: Vec<_> = set.iter().collect();
    assert_eq!(members, vec![0, 3, 7]);
}

#[test]
fn test_insertion_order_does_not_matter() {
    let a = ZoneSet::from_iter([1, 4, 9]).unwrap();
    let b = ZoneSet::from_iter([9, 1, 4]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
}

#[test]
fn test_first_and_with() {
    let set = ZoneSet::first(4);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

    let grown = set.with(10).unwrap();
    assert_eq!(grown.len(), 5);
    // source set untouched
    assert_eq!(set.len(), 4);

    let a = ZoneSet::from_iter([0, 1]).unwrap();
    let b = ZoneSet::from_iter([1, 2]).unwrap();
    assert_eq!((a | b).len(), 3);
    assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_from_raw_masks_upper_bits() {
    let set = ZoneMask::<u16, 4>::from_raw(0xFFFF);
    assert_eq!(set.len(), 4);
    assert_eq!(set.into_raw(), 0b1111);
}

#[test]
fn test_insert_unchecked() {
    let mut set = ZoneSet::new();
    set.insert_unchecked(3);
    set.insert_unchecked(63);
    set.insert_unchecked(3);
    assert_eq!(set.len(), 2);
    assert!(set.contains(3));
    assert!(set.contains(63));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out of range")]
fn test_insert_unchecked_out_of_range() {
    let mut set = ZoneMask::<u16, 12>::new();
    set.insert_unchecked(12);
}
