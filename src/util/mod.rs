pub mod panic;
#[cfg(any(feature = "slices", feature = "funcs"))]
pub mod result;
