use std::any::{self, Any, TypeId};

use super::{TypeMismatch, Value};
use crate::util::result::ResultExtension;

/// Unwraps one layer of `value` as a `T`, returning the inner value and true if `value` was a
/// wrapper.
///
/// The [`get`](Value::get) capability is checked first, followed by [`unwrap`](Value::unwrap). The
/// first one which is supported and returns a `T` is used. If neither does, `value` is assumed to
/// be a `T` itself and is returned with false.
///
/// `T` may also be `Box<dyn Value>`, in which case any inner value is accepted.
///
/// # Panics
/// Panics if `value` isn't a wrapper around a `T` and isn't a `T` either. See [`try_unwrap`] for a
/// non-panicking version.
///
/// # Examples
/// ```
/// # use container_utils::funcs;
/// let (inner, wrapped) = funcs::unwrap::<i32>(Box::new(5_i32));
/// assert_eq!(inner, 5);
/// assert!(!wrapped);
/// ```
#[track_caller]
pub fn unwrap<T: 'static>(value: Box<dyn Value>) -> (T, bool) {
    try_unwrap(value).throw()
}

/// Unwraps one layer of `value` as a `T` in the same way as [`unwrap`], returning an error instead
/// of panicking if `value` is neither a wrapper around a `T` nor a `T`.
pub fn try_unwrap<T: 'static>(value: Box<dyn Value>) -> Result<(T, bool), TypeMismatch> {
    match inner_as::<T>(&*value) {
        Some(inner) => cast(inner).map(|inner| (inner, true)),
        None => cast(value).map(|value| (value, false)),
    }
}

/// Repeatedly unwraps `value` as a `T`, returning the first `T` which doesn't wrap another `T`.
///
/// Each step behaves like [`unwrap`]: if a capability returns a `T`, unwrapping continues from
/// there, and if `value` is a `T` without one, it is returned. Layers which aren't `T`s and don't
/// wrap one are peeled off through whichever capability they support, so a `T` nested under other
/// wrapper types is still found.
///
/// # Panics
/// Panics if no `T` is reached before a value which supports neither capability. See
/// [`try_unwrap_all`] for a non-panicking version.
///
/// # Examples
/// ```
/// # use container_utils::funcs::{self, Value};
/// #[derive(Clone)]
/// struct Layer<T>(T);
///
/// impl<T: Value + Clone> Value for Layer<T> {
///     fn unwrap(&self) -> Option<Box<dyn Value>> {
///         Some(Box::new(self.0.clone()))
///     }
/// }
///
/// let value = Layer(Layer(Layer(String::from("core"))));
/// assert_eq!(funcs::unwrap_all::<String>(Box::new(value)), "core");
/// ```
#[track_caller]
pub fn unwrap_all<T: 'static>(value: Box<dyn Value>) -> T {
    try_unwrap_all(value).throw()
}

/// Unwraps `value` in the same way as [`unwrap_all`], returning an error instead of panicking if
/// no `T` is reached.
pub fn try_unwrap_all<T: 'static>(mut value: Box<dyn Value>) -> Result<T, TypeMismatch> {
    loop {
        if let Some(inner) = inner_as::<T>(&*value) {
            value = inner;
            continue;
        }

        if accepts::<T>(&*value) {
            return cast(value);
        }

        match inner_as::<Box<dyn Value>>(&*value) {
            Some(inner) => value = inner,
            None => return cast(value),
        }
    }
}

/// Returns the inner value from the first capability (`get`, then `unwrap`) which produces a `T`.
fn inner_as<T: 'static>(value: &dyn Value) -> Option<Box<dyn Value>> {
    value.get()
        .filter(|inner| accepts::<T>(&**inner))
        .or_else(|| value.unwrap().filter(|inner| accepts::<T>(&**inner)))
}

/// Returns true if `value` can be cast into a `T`.
fn accepts<T: 'static>(value: &dyn Value) -> bool {
    TypeId::of::<T>() == TypeId::of::<Box<dyn Value>>() || (value as &dyn Any).is::<T>()
}

/// Casts `value` into a `T`, either by downcasting it or, if `T` is `Box<dyn Value>`, by returning
/// it unchanged.
fn cast<T: 'static>(value: Box<dyn Value>) -> Result<T, TypeMismatch> {
    let found = value.type_name();

    let value: Box<dyn Any> = if (&*value as &dyn Any).is::<T>() {
        value
    } else {
        Box::new(value)
    };

    value.downcast::<T>()
        .map(|value| *value)
        .map_err(|_| TypeMismatch {
            expected: any::type_name::<T>(),
            found,
        })
}
