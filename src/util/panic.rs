use std::any::Any;

/// Extracts the message from a caught panic payload, which is either a `&'static str` or a
/// `String` depending on whether the panic was formatted.
#[allow(unused)]
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload.downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block, contains $expected:expr) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = $crate::util::panic::panic_message(&*payload).unwrap_or_default();
                assert!(
                    message.contains($expected),
                    "panic message {:?} doesn't contain {:?}",
                    message,
                    $expected
                );
                println!("^ panic caught");
            },
        }
    };
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
