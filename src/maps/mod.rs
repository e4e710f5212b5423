//! A module of helpers for [`HashMap`](std::collections::HashMap)s.
//!
//! Most functions here mutate a map in place (adding or removing entries in bulk) or build a new
//! one out of a slice. The rest pull the keys or values back out, or convert a whole map from one
//! set of key and value types to another.
//!
//! Sets are represented as maps to a marker, either [`()`](unit) through [`SetMap`] or `true`
//! through [`BoolMap`], for the places that want to index with `map[&key]`.
//!
//! As a note, nothing here makes any promises about iteration order. Any function returning a
//! [`Vec`] of keys or values returns them in whatever order the map happens to yield them.

mod maps;

pub use maps::*;
