use std::error::Error;

use crate::util::result::ResultExtension;

/// Compares `left` and `right`, returning:
/// - `-1` if `left < right`,
/// - `0` if `left == right`,
/// - `1` otherwise.
///
/// Values which are neither less than nor equal to each other, such as [`f64::NAN`], compare as
/// `1`.
///
/// # Examples
/// ```
/// # use container_utils::funcs::compare;
/// assert_eq!(compare(1, 2), -1);
/// assert_eq!(compare("b", "b"), 0);
/// assert_eq!(compare(2.5, 1.0), 1);
/// ```
pub fn compare<T: PartialOrd>(left: T, right: T) -> i32 {
    if left < right {
        -1
    } else if left == right {
        0
    } else {
        1
    }
}

/// Returns the value held by `result`, for call sites where an error can only be the result of a
/// programming mistake.
///
/// # Panics
/// Panics with the error's message if `result` is an [`Err`].
///
/// # Examples
/// ```
/// # use container_utils::funcs::must;
/// let port: u16 = must("8080".parse());
/// assert_eq!(port, 8080);
/// ```
#[track_caller]
pub fn must<T, E: Error>(result: Result<T, E>) -> T {
    result.throw()
}
