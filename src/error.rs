//! A union of the errors returned by the `try_` functions in this crate, for callers which use
//! more than one of them behind a single `?`.

use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::funcs::TypeMismatch;
use crate::slices::CapacityLessThanLen;

#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum ContainerError {
    CapacityLessThanLen(CapacityLessThanLen),
    TypeMismatch(TypeMismatch),
}
