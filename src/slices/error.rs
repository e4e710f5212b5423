use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An error returned when a capacity smaller than the requested length is provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityLessThanLen {
    pub len: usize,
    pub cap: usize,
}

impl Display for CapacityLessThanLen {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "slices::make: the cap ({}) is less than len ({})!", self.cap, self.len)
    }
}

impl Error for CapacityLessThanLen {}
