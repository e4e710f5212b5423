//! A module of helpers for slices and [`Vec`]s.
//!
//! Where a helper cares about the difference between a missing Vec and an empty one (currently
//! only [`merge`]), the missing case is represented by `None`.

mod error;
mod slices;
mod tests;

pub use error::*;
pub use slices::*;
