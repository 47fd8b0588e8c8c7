//! Contract tests for the growable array container.

use std::rc::Rc;

use jot_core::Array;

#[test]
fn new_array_is_empty() {
    let array: Array<i32> = Array::new();
    assert_eq!(array.len(), 0);
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 0);
}

#[test]
fn push_and_pop_round_trip() {
    let mut array = Array::new();
    array.push(1);
    array.push(2);
    array.push(3);

    assert_eq!(array.len(), 3);
    assert_eq!(array.pop(), Some(3));
    assert_eq!(array.pop(), Some(2));
    assert_eq!(array.pop(), Some(1));
    assert_eq!(array.pop(), None);
    assert!(array.is_empty());
}

#[test]
fn capacity_doubles_on_growth() {
    let mut array = Array::new();
    let mut observed = Vec::new();

    for i in 0..17 {
        array.push(i);
        observed.push(array.capacity());
    }

    // 0 -> 1, then doubling: pushes land in capacities 1,2,4,4,8,...,32.
    assert_eq!(array.capacity(), 32);
    assert!(observed.windows(2).all(|w| w[0] <= w[1]));
    for cap in observed {
        assert!(cap.is_power_of_two());
    }
}

#[test]
fn checked_access_is_absent_out_of_bounds() {
    let mut array = Array::new();
    array.push(10);
    array.push(20);

    assert!(array.at(0).has_value());
    assert_eq!(array.at(1).copied(), Some(20));
    assert!(!array.at(2).has_value());
    assert_eq!(array.at(100).value(), None);
}

#[test]
fn indexing_reads_and_writes() {
    let mut array = Array::new();
    array.push(5);
    array.push(6);

    array[0] = 50;
    assert_eq!(array[0], 50);
    assert_eq!(array[1], 6);
}

#[test]
#[should_panic]
fn indexing_out_of_bounds_panics() {
    let array: Array<i32> = Array::new();
    let _ = array[0];
}

#[test]
fn front_and_back() {
    let mut array = Array::new();
    assert!(!array.front().has_value());
    assert!(!array.back().has_value());

    array.push("a");
    array.push("b");
    assert_eq!(array.front().copied(), Some("a"));
    assert_eq!(array.back().copied(), Some("b"));

    *array.back_mut().get() = "c";
    assert_eq!(array[1], "c");
}

#[test]
fn resize_grows_with_fill_and_shrinks() {
    let mut array = Array::new();
    array.push(1);
    array.resize(4, 9);
    assert_eq!(array, [1, 9, 9, 9]);

    array.resize(2, 0);
    assert_eq!(array, [1, 9]);

    // Resizing to the current length is a no-op.
    array.resize(2, 7);
    assert_eq!(array, [1, 9]);
}

#[test]
fn reserve_and_shrink_to_fit() {
    let mut array: Array<u8> = Array::new();
    array.reserve(100);
    assert!(array.capacity() >= 100);
    assert_eq!(array.len(), 0);

    array.push(1);
    array.push(2);
    array.shrink_to_fit();
    assert_eq!(array.capacity(), 2);
    assert_eq!(array, [1, 2]);

    // reserve never shrinks
    array.reserve(1);
    assert_eq!(array.capacity(), 2);
}

#[test]
fn clear_drops_elements_and_keeps_capacity() {
    let marker = Rc::new(());
    let mut array = Array::new();
    for _ in 0..5 {
        array.push(Rc::clone(&marker));
    }
    assert_eq!(Rc::strong_count(&marker), 6);

    let capacity = array.capacity();
    array.clear();
    assert_eq!(Rc::strong_count(&marker), 1);
    assert!(array.is_empty());
    assert_eq!(array.capacity(), capacity);
}

#[test]
fn drop_releases_all_elements() {
    let marker = Rc::new(());
    {
        let mut array = Array::new();
        for _ in 0..8 {
            array.push(Rc::clone(&marker));
        }
        assert_eq!(Rc::strong_count(&marker), 9);
    }
    assert_eq!(Rc::strong_count(&marker), 1);
}

#[test]
fn shrinking_resize_drops_the_tail() {
    let marker = Rc::new(());
    let mut array = Array::new();
    for _ in 0..6 {
        array.push(Rc::clone(&marker));
    }

    array.resize(2, Rc::clone(&marker));
    assert_eq!(Rc::strong_count(&marker), 3);
}

#[test]
fn iteration_is_bidirectional() {
    let array: Array<i32> = (0..5).collect();

    let forward: Vec<i32> = array.iter().copied().collect();
    assert_eq!(forward, vec![0, 1, 2, 3, 4]);

    let backward: Vec<i32> = array.iter().rev().copied().collect();
    assert_eq!(backward, vec![4, 3, 2, 1, 0]);
}

#[test]
fn into_iter_consumes_from_both_ends() {
    let array: Array<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();

    let mut it = array.into_iter();
    assert_eq!(it.next().as_deref(), Some("a"));
    assert_eq!(it.next_back().as_deref(), Some("d"));
    assert_eq!(it.next().as_deref(), Some("b"));
    assert_eq!(it.next_back().as_deref(), Some("c"));
    assert_eq!(it.next(), None);
}

#[test]
fn partially_consumed_into_iter_drops_the_rest() {
    let marker = Rc::new(());
    let mut array = Array::new();
    for _ in 0..4 {
        array.push(Rc::clone(&marker));
    }

    let mut it = array.into_iter();
    let first = it.next();
    assert_eq!(Rc::strong_count(&marker), 5);
    drop(it);
    assert_eq!(Rc::strong_count(&marker), 2);
    drop(first);
    assert_eq!(Rc::strong_count(&marker), 1);
}

#[test]
fn extend_and_from_iterator() {
    let mut array: Array<i32> = (0..3).collect();
    array.extend(3..5);
    assert_eq!(array, [0, 1, 2, 3, 4]);
}

#[test]
fn equality_and_clone() {
    let a: Array<i32> = (0..4).collect();
    let b = a.clone();
    assert_eq!(a, b);

    let mut c = b.clone();
    c.push(99);
    assert_ne!(a, c);
}

#[test]
fn swap_exchanges_contents() {
    let mut a: Array<i32> = (0..3).collect();
    let mut b: Array<i32> = (10..12).collect();

    a.swap(&mut b);
    assert_eq!(a, [10, 11]);
    assert_eq!(b, [0, 1, 2]);
}

#[test]
fn moved_elements_survive_reallocation() {
    // Strings force the reallocation path to relocate owned heap data.
    let mut array = Array::with_capacity(1);
    for i in 0..50 {
        array.push(format!("value-{i}"));
    }
    for i in 0..50 {
        assert_eq!(array[i], format!("value-{i}"));
    }
}

#[test]
fn zero_sized_elements() {
    let mut array = Array::new();
    for _ in 0..1000 {
        array.push(());
    }
    assert_eq!(array.len(), 1000);
    assert_eq!(array.pop(), Some(()));
    assert_eq!(array.len(), 999);
}
