/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
///
/// With a second argument, also asserts that the error answers `true` to the
/// named predicate method, e.g. `assert_err!(res, is_record_not_found)`.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            actual => panic!("expected `Err`; actual={:?}", actual),
        }
    };
    ($e:expr, $predicate:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$predicate(),
            "expected error matching `{}`; actual={}",
            stringify!($predicate),
            err
        );
        err
    }};
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; actual error={}", e),
        }
    };
}
