//! A module of small, general-purpose functions which don't belong to any particular container.
//!
//! The largest part of this module is unwrapping: [`Value`] is implemented by types which may wrap
//! another value, and [`unwrap`] / [`unwrap_all`] peel those layers off again. The rest is
//! [`compare`] and [`must`].

mod error;
mod funcs;
mod unwrap;
mod value;

pub use error::*;
pub use funcs::*;
pub use unwrap::*;
pub use value::*;
