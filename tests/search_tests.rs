use darray::{DArray, DArrayError};

#[test]
fn test_find_first_match() {
    let array = DArray::from_slice(&[7, 8, 7, 9]).unwrap();

    assert_eq!(array.find(7), Ok(0));
    assert_eq!(array.find(9), Ok(3));
    assert_eq!(array.find(1), Err(DArrayError::NotFound));
}

#[test]
fn test_find_ignores_stale_slots() {
    let mut array = DArray::from_slice(&[1, 2, 3]).unwrap();
    array.pop().unwrap();

    assert_eq!(array.find(3), Err(DArrayError::NotFound));
}

#[test]
fn test_sort_integers() {
    let mut array = DArray::from_slice(&[4, -2, 9, 0, -2, 7]).unwrap();

    array.sort();

    assert_eq!(array.as_slice(), &[-2, -2, 0, 4, 7, 9]);
}

#[test]
fn test_sort_doubles() {
    let mut array = DArray::from_slice(&[2.5f64, -1.0, 10.25, 0.0]).unwrap();

    array.sort();

    assert_eq!(array.as_slice(), &[-1.0, 0.0, 2.5, 10.25]);
}

#[test]
fn test_sort_idempotent() {
    let mut array = DArray::from_slice(&[3.0f32, 1.0, 2.0]).unwrap();

    array.sort();
    let once: Vec<f32> = array.iter().collect();
    array.sort();

    assert_eq!(array.as_slice(), once.as_slice());
}

#[test]
fn test_sort_only_touches_live_elements() {
    let mut array = DArray::from_slice(&[9, 8, 7, 1]).unwrap();
    array.pop().unwrap();

    array.sort();

    assert_eq!(array.as_slice(), &[7, 8, 9]);
}

#[test]
fn test_reverse_even_and_odd() {
    let mut even = DArray::from_slice(&[1, 2, 3, 4]).unwrap();
    even.reverse();
    assert_eq!(even.as_slice(), &[4, 3, 2, 1]);

    let mut odd = DArray::from_slice(&[1, 2, 3, 4, 5]).unwrap();
    odd.reverse();
    assert_eq!(odd.as_slice(), &[5, 4, 3, 2, 1]);

    let mut pair = DArray::from_slice(&[1.5f64, 2.5]).unwrap();
    pair.reverse();
    assert_eq!(pair.as_slice(), &[2.5, 1.5]);
}

#[test]
fn test_reverse_short_arrays() {
    let mut empty = DArray::<i32>::new(2).unwrap();
    empty.reverse();
    assert!(empty.is_empty());

    let mut single = DArray::from_slice(&[42]).unwrap();
    single.reverse();
    assert_eq!(single.as_slice(), &[42]);
}

#[test]
fn test_binary_search_sorted() {
    let mut array = DArray::from_slice(&[1, 3, 5, 7, 9, 11]).unwrap();

    for (index, value) in [1, 3, 5, 7, 9, 11].into_iter().enumerate() {
        assert_eq!(array.binary_search(value, true), Ok(index));
    }
    assert_eq!(array.binary_search(0, true), Err(DArrayError::NotFound));
    assert_eq!(array.binary_search(6, true), Err(DArrayError::NotFound));
    assert_eq!(array.binary_search(12, true), Err(DArrayError::NotFound));
}

#[test]
fn test_binary_search_sorts_first() {
    let mut array = DArray::from_slice(&[30, 10, 20]).unwrap();

    assert_eq!(array.binary_search(30, false), Ok(2));

    // The search left the array sorted
    assert_eq!(array.as_slice(), &[10, 20, 30]);
}

#[test]
fn test_binary_search_already_sorted_does_not_reorder() {
    let mut array = DArray::from_slice(&[30, 10, 20]).unwrap();

    let _ = array.binary_search(10, true);

    assert_eq!(array.as_slice(), &[30, 10, 20]);
}

#[test]
fn test_binary_search_floats() {
    let mut array = DArray::from_slice(&[0.5f32, -3.5, 2.25, 8.0]).unwrap();

    assert_eq!(array.binary_search(2.25, false), Ok(2));
    assert_eq!(array.binary_search(2.0, true), Err(DArrayError::NotFound));
}

#[test]
fn test_binary_search_single_element() {
    let mut array = DArray::from_slice(&[5]).unwrap();

    assert_eq!(array.binary_search(5, true), Ok(0));
    assert_eq!(array.binary_search(4, true), Err(DArrayError::NotFound));
}
