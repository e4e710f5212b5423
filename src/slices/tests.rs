#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_make() {
    let vec: Vec<String> = make(0, 0, 0);
    assert_eq!(vec.capacity(), 0, "With no hints and no length, nothing should be allocated.");

    let vec: Vec<String> = make(0, 0, 1);
    assert!(vec.is_empty());
    assert!(vec.capacity() >= 1, "The default capacity should be used when cap is 0.");

    let vec: Vec<String> = make(1, 0, 0);
    assert_eq!(vec, [String::new()], "The Vec should be filled with default values.");
    assert!(vec.capacity() >= 1, "The capacity should fall back to the length.");

    let vec: Vec<u32> = make(2, 5, 1);
    assert_eq!(vec, [0, 0]);
    assert!(vec.capacity() >= 5, "A nonzero cap should take priority over the default.");
}

#[test]
fn test_make_cap_less_than_len() {
    assert_eq!(
        try_make::<u8>(3, 2, 0),
        Err(CapacityLessThanLen { len: 3, cap: 2 })
    );
    assert_eq!(
        try_make::<u8>(3, 0, 2),
        Err(CapacityLessThanLen { len: 3, cap: 2 }),
        "A default capacity that's too small should be rejected too."
    );
    assert!(try_make::<u8>(3, 0, 0).is_ok(), "No hints should never be an error.");

    assert_panics!({ make::<u8>(3, 2, 0) }, contains "the cap (2) is less than len (3)");
}

#[test]
fn test_convert() {
    assert_eq!(convert(&[1_i32, 2, 3], |v| i64::from(*v)), [1_i64, 2, 3]);
    assert_eq!(convert(&["a", "bb"], |s| s.len()), [1, 2]);

    let converted = convert(&[] as &[u8], |b| *b);
    assert!(converted.is_empty(), "An empty slice should convert to an empty Vec.");
}

#[test]
fn test_interfaces() {
    let boxed = interfaces(&["a", "b", "c"]);
    assert_eq!(boxed.len(), 3);
    let strs: Vec<&str> = boxed.iter()
        .filter_map(|value| value.downcast_ref::<&str>().copied())
        .collect();
    assert_eq!(strs, ["a", "b", "c"], "Order should be preserved.");

    let boxed = interfaces(&[1_i32, 2, 3]);
    assert_eq!(boxed[2].downcast_ref::<i32>(), Some(&3));
    assert!(boxed[0].downcast_ref::<i64>().is_none());
}

#[test]
fn test_merge_nil_and_empty() {
    assert_eq!(merge::<i32>(vec![]), None, "No arguments should merge to None.");
    assert_eq!(merge::<i32>(vec![None]), None);

    assert_eq!(merge::<i32>(vec![None, None]), None, "Two Nones should return the second.");
    assert_eq!(merge::<i32>(vec![None, Some(vec![])]), Some(vec![]));
    assert_eq!(merge::<i32>(vec![Some(vec![]), None]), None);

    assert_eq!(merge::<i32>(vec![None, None, None]), None, "All Nones should merge to None.");

    let merged = merge::<i32>(vec![None, None, Some(vec![])])
        .expect("Merging an empty Vec should return Some");
    assert!(merged.is_empty());
    assert_eq!(merged.capacity(), 0);
}

#[test]
fn test_merge_returns_unchanged() {
    let single = Vec::with_capacity(10);
    let ptr = single.as_ptr();
    let merged = merge::<i32>(vec![Some(single)]).expect("A single Some should be returned");
    assert_eq!(merged.as_ptr(), ptr, "A single argument should be returned as is.");
    assert_eq!(merged.capacity(), 10);

    let s1 = vec![1, 2];
    let ptr = s1.as_ptr();
    let merged = merge(vec![Some(s1), None]).expect("A non-empty Vec should be returned");
    assert_eq!(merged, [1, 2]);
    assert_eq!(merged.as_ptr(), ptr, "The non-empty argument should be returned as is.");

    let s1 = vec![1, 2];
    let ptr = s1.as_ptr();
    let merged = merge(vec![Some(vec![]), Some(s1)]).expect("A non-empty Vec should be returned");
    assert_eq!(merged.as_ptr(), ptr);
}

#[test]
fn test_merge() {
    let s1 = vec![1, 2];
    let s2 = vec![3, 4];

    let merged = merge(vec![Some(s1.clone()), Some(s2.clone())])
        .expect("Two non-empty Vecs should merge to Some");
    assert_eq!(merged, [1, 2, 3, 4]);
    assert_eq!(merged.capacity(), 4, "The capacity should be exactly the combined length.");

    assert_eq!(merge(vec![Some(s2.clone()), Some(s1.clone())]), Some(vec![3, 4, 1, 2]));

    let merged = merge(vec![Some(s2), None, Some(s1), Some(vec![]), Some(vec![5, 6])])
        .expect("Non-empty Vecs should merge to Some");
    assert_eq!(merged, [3, 4, 1, 2, 5, 6], "Missing and empty Vecs should be skipped.");
    assert_eq!(merged.capacity(), 6);
}

#[test]
fn test_set_equal() {
    assert!(set_equal(&["a", "b", "c"], &["b", "c", "a"]));
    assert!(!set_equal(&["a", "b", "c"], &["a", "b", "b"]));
    assert!(!set_equal(&["a", "b"], &["a", "b", "b"]), "Lengths should be compared.");
    assert!(set_equal::<u8>(&[], &[]));

    assert!(
        set_equal(&["a", "b", "b"], &["a", "a", "b"]),
        "Only containment is checked, not how many times an element appears."
    );
}
