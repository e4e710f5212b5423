use derive_more::{Display, Error};

/// An error returned when an opaque value isn't of the type it was expected to be unwrapped as.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to unwrap a value of type {found} as {expected}!")]
pub struct TypeMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}
