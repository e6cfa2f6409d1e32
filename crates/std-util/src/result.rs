/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps an `Ok`, panicking with the error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={:?}", e),
        }
    };
}
