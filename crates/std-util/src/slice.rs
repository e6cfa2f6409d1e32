/// Asserts that a collection exposing `is_empty` and `Debug` holds no items.
#[macro_export]
macro_rules! assert_empty {
    ($e:expr) => {{
        let value = $e;
        if !value.is_empty() {
            panic!("expected empty; actual={:?}", value);
        }
    }};
}
