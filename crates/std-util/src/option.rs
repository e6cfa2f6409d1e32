/// Asserts that an `Option` is `None`.
#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        match $e {
            None => {}
            Some(v) => panic!("expected `None`; actual=Some({:?})", v),
        }
    };
}
