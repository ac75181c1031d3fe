/// Asserts that running `$run` panics. When `$expected` is given, the panic message must also
/// contain it.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $expected:literal) => {{
        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run))
            .err()
            .expect("assertion failed to panic");
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(
            message.contains($expected),
            "panic message {message:?} doesn't contain {:?}",
            $expected
        );
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
