use std::any::Any;

use super::CapacityLessThanLen;
use crate::util::result::ResultExtension;

/// Creates a new Vec of `len` default values, with space for `cap` elements.
///
/// If `cap` is 0, `default_cap` is used instead. If both are 0, the capacity is just `len`.
///
/// # Panics
/// Panics if the capacity used is less than `len`. See [`try_make`] for a non-panicking version.
///
/// # Examples
/// ```
/// # use container_utils::slices;
/// let vec: Vec<u8> = slices::make(2, 0, 8);
/// assert_eq!(vec, [0, 0]);
/// assert!(vec.capacity() >= 8);
/// ```
#[track_caller]
pub fn make<E: Default>(len: usize, cap: usize, default_cap: usize) -> Vec<E> {
    try_make(len, cap, default_cap).throw()
}

/// Creates a new Vec of `len` default values, with space for `cap` elements, returning an error if
/// that capacity would be less than `len`.
///
/// The capacity is resolved in the same way as [`make`].
pub fn try_make<E: Default>(
    len: usize,
    cap: usize,
    default_cap: usize,
) -> Result<Vec<E>, CapacityLessThanLen> {
    let cap = match (cap, default_cap) {
        (0, 0) => len,
        (0, default_cap) => default_cap,
        (cap, _) => cap,
    };

    if cap < len {
        return Err(CapacityLessThanLen { len, cap });
    }

    let mut vec = Vec::with_capacity(cap);
    vec.resize_with(len, E::default);
    Ok(vec)
}

/// Converts each element of the slice with `convert`, returning a Vec of the results in the same
/// order. The returned Vec always has the same length as `items`.
pub fn convert<E1, E2>(items: &[E1], convert: impl FnMut(&E1) -> E2) -> Vec<E2> {
    let mut converted = Vec::with_capacity(items.len());
    converted.extend(items.iter().map(convert));
    converted
}

/// Boxes a copy of every element as a [`dyn Any`](Any), preserving order.
pub fn interfaces<E: Any + Clone>(items: &[E]) -> Vec<Box<dyn Any>> {
    items.iter()
        .map(|item| Box::new(item.clone()) as Box<dyn Any>)
        .collect()
}

/// Concatenates the provided Vecs, in order.
///
/// Missing (`None`) and empty Vecs are handled as follows:
/// - With no arguments, the result is `None`.
/// - With one argument, it is returned as is.
/// - With two arguments, if one of them is missing or empty, the other one is returned as is.
///   (The first is checked before the second, so two empty arguments return the second.)
/// - With more arguments, if they are all `None` the result is `None`. If they are all empty, but
///   not all `None`, the result is an empty Vec with no capacity.
///
/// Otherwise, the result is a new Vec with capacity for exactly the combined elements.
///
/// # Examples
/// ```
/// # use container_utils::slices;
/// assert_eq!(slices::merge::<u8>(vec![]), None);
/// assert_eq!(slices::merge(vec![Some(vec![1, 2]), None]), Some(vec![1, 2]));
/// assert_eq!(
///     slices::merge(vec![Some(vec![3, 4]), Some(vec![1, 2]), Some(vec![5, 6])]),
///     Some(vec![3, 4, 1, 2, 5, 6])
/// );
/// ```
pub fn merge<E>(seqs: Vec<Option<Vec<E>>>) -> Option<Vec<E>> {
    let mut seqs = match <[Option<Vec<E>>; 2]>::try_from(seqs) {
        Ok([first, second]) => return merge_two(first, second),
        Err(seqs) => seqs,
    };

    match seqs.len() {
        0 => None,
        1 => seqs.pop().flatten(),
        _ => merge_many(seqs),
    }
}

fn merge_two<E>(first: Option<Vec<E>>, second: Option<Vec<E>>) -> Option<Vec<E>> {
    if len_of(&first) == 0 {
        return second;
    }
    if len_of(&second) == 0 {
        return first;
    }

    // Both are non-empty at this point.
    let (first, second) = (first.unwrap_or_default(), second.unwrap_or_default());
    let mut merged = Vec::with_capacity(first.len() + second.len());
    merged.extend(first);
    merged.extend(second);
    Some(merged)
}

fn merge_many<E>(seqs: Vec<Option<Vec<E>>>) -> Option<Vec<E>> {
    if seqs.iter().all(Option::is_none) {
        return None;
    }

    let total = seqs.iter().map(len_of).sum();
    let mut merged = Vec::with_capacity(total);
    for seq in seqs.into_iter().flatten() {
        merged.extend(seq);
    }
    Some(merged)
}

fn len_of<E>(seq: &Option<Vec<E>>) -> usize {
    seq.as_ref().map_or(0, Vec::len)
}

/// Returns true if both slices have the same length and every element of each is contained in the
/// other.
///
/// This is a containment check rather than multiset equality: the number of times an element
/// appears isn't compared, so `["a", "b", "b"]` and `["a", "a", "b"]` are considered equal.
///
/// # Examples
/// ```
/// # use container_utils::slices;
/// assert!(slices::set_equal(&["a", "b", "c"], &["b", "c", "a"]));
/// assert!(!slices::set_equal(&["a", "b", "c"], &["a", "b", "b"]));
/// ```
pub fn set_equal<E: PartialEq>(a: &[E], b: &[E]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(from_a, from_b)| a.contains(from_b) && b.contains(from_a))
}
