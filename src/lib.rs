//! A small set of generic helpers for the containers I reach for most: maps, slices and the odd
//! boxed value.
//!
//! # Purpose
//! None of these functions do anything clever. They exist because the same handful of loops keep
//! showing up: insert-if-absent, delete a batch of keys, turn a slice into a set, concatenate a few
//! vectors, peel a value out of its wrappers. Writing them once, with the edge cases pinned down,
//! is nicer than writing them slightly differently every time.
//!
//! # Nil vs Empty
//! A few of these helpers distinguish between a container that doesn't exist and one that is
//! empty. Rust doesn't have a nil map or vector, so wherever that distinction matters the
//! container is wrapped in an [`Option`]: `None` is "nil" and `Some` of an empty container is
//! "empty". Functions where it doesn't matter just take the container directly.
//!
//! # Error Handling
//! There are only two ways for something here to fail:
//! - A missing key (or a key that is already present) is reported through a [`bool`] or an
//!   [`Option`]. It's never a panic.
//! - A broken precondition, like asking for a capacity smaller than the length or unwrapping a
//!   value into the wrong type, panics. Where it's reasonable to check up front, there is a `try_`
//!   version which returns a [`Result`] with a concrete error type instead.
//!
//! # Features
//! Each module sits behind a feature of the same name (`maps`, `slices` and `funcs`), all of which
//! are enabled by default through `all`. With both `slices` and `funcs` enabled, [`error`] adds a
//! single error type covering every `try_` function.
// #![warn(missing_docs)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(all(feature = "slices", feature = "funcs"))]
pub mod error;
#[cfg(feature = "funcs")]
pub mod funcs;
#[cfg(feature = "maps")]
pub mod maps;
#[cfg(feature = "slices")]
pub mod slices;

pub(crate) mod util;
