use std::any::{self, Any};

/// A value which may wrap another, inner value.
///
/// A wrapper exposes its inner value through one (or both) of two capabilities: [`get`] and
/// [`unwrap`]. Both return `None` by default, meaning that the capability isn't supported and the
/// value isn't a wrapper at all. Each call to a capability peels off exactly one layer, the inner
/// value may be a wrapper itself.
///
/// Plain values, like integers and [`String`]s, already implement this trait with neither
/// capability.
///
/// It is a logic error for a value to (directly or indirectly) return itself from one of its
/// capabilities. Doing so will cause [`unwrap_all`](super::unwrap_all) to loop forever.
///
/// # Examples
/// ```
/// # use container_utils::funcs::{self, Value};
/// #[derive(Clone)]
/// struct Meters(f64);
///
/// impl Value for Meters {
///     fn get(&self) -> Option<Box<dyn Value>> {
///         Some(Box::new(self.0))
///     }
/// }
///
/// let (inner, wrapped) = funcs::unwrap::<f64>(Box::new(Meters(2.5)));
/// assert_eq!(inner, 2.5);
/// assert!(wrapped);
/// ```
///
/// [`get`]: Value::get
/// [`unwrap`]: Value::unwrap
pub trait Value: Any {
    /// Returns a copy of the inner value, if this value supports the "get" capability.
    fn get(&self) -> Option<Box<dyn Value>> {
        None
    }

    /// Returns the inner value, if this value supports the "unwrap" capability. Only checked when
    /// [`get`](Value::get) isn't supported or returns a value of the wrong type.
    fn unwrap(&self) -> Option<Box<dyn Value>> {
        None
    }

    /// Returns the name of the concrete type of this value, for error messages.
    fn type_name(&self) -> &'static str {
        any::type_name::<Self>()
    }
}

macro_rules! impl_plain_value {
    ($($ty:ty),* $(,)?) => {
        $(impl Value for $ty {})*
    };
}

impl_plain_value!(
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    String, &'static str,
);

impl<T: 'static> Value for Vec<T> {}

impl<T: 'static> Value for Option<T> {}
