use std::cell::Cell;

use status_rail::{bind, chain, compose, of, some, Chain, Error, Result};

fn divide_4_by(x: f64) -> Result<f64> {
    if x == 0.0 {
        return Err(Error::invalid_argument("divide by 0"));
    }
    Ok(4.0 / x)
}

fn safe_sqrt(x: f64) -> Result<f64> {
    if x < 0.0 {
        return Err(Error::invalid_argument(format!("sqrt of value < 0.0 is undefined: {x}")));
    }
    Ok(x.sqrt())
}

fn non_zero(x: i32) -> Option<i32> {
    (x != 0).then_some(x)
}

fn lt_3_round(x: f64) -> Option<i32> {
    (x < 3.0).then(|| x.round() as i32)
}

#[test]
fn chain_equals_nested_bind_and_compose() {
    for input in [1.0, 0.0, -1.0, 16.0] {
        let chained = (chain(of(input)) | divide_4_by | safe_sqrt).into_inner();
        let nested = bind(bind(of(input), divide_4_by), safe_sqrt);
        let composed = bind(of(input), compose!(divide_4_by, safe_sqrt));

        assert_eq!(chained, nested, "input {input}");
        assert_eq!(chained, composed, "input {input}");
    }
}

#[test]
fn chain_stops_at_first_failure() {
    let calls = Cell::new(0);
    let spy = |x: f64| {
        calls.set(calls.get() + 1);
        Ok(x)
    };

    let failed = chain(of(0.0)) | divide_4_by | spy | spy;
    assert_eq!(failed.into_inner(), Err(Error::invalid_argument("divide by 0")));
    assert_eq!(calls.get(), 0);

    let ok = chain(of(2.0)) | divide_4_by | spy | spy;
    assert_eq!(ok.into_inner(), Ok(2.0));
    assert_eq!(calls.get(), 2);
}

#[test]
fn chain_changes_value_type() {
    let parse = |s: &str| s.parse::<i32>().map_err(|e| Error::invalid_argument(e.to_string()));
    let result = chain(of("42")) | parse | (|x: i32| Ok(x > 40));
    assert_eq!(result.into_inner(), Ok(true));
}

#[test]
fn option_chain() {
    assert_eq!((chain(some(-4.0)) | lt_3_round | non_zero).into_inner(), Some(-4));
    assert_eq!((chain(some(0.1)) | lt_3_round | non_zero).into_inner(), None);
    assert_eq!((chain(some(7.0)) | lt_3_round | non_zero).into_inner(), None);
    assert_eq!((chain(None::<f64>) | lt_3_round).into_inner(), None);
}

#[test]
fn then_is_named_pipe() {
    let piped = chain(of(4.0)).then(divide_4_by).then(safe_sqrt);
    assert_eq!(piped.into_inner(), Ok(1.0));
}

#[test]
fn chain_displays_like_result() {
    let ok = chain(of(2.0)) | divide_4_by;
    assert_eq!(ok.to_string(), "[Result: value=2]");

    let failed = chain(of(-1.0)) | safe_sqrt;
    assert_eq!(
        failed.to_string(),
        "[Result: [Error: [InvalidArgument] sqrt of value < 0.0 is undefined: -1]]"
    );
}

#[test]
fn chain_derefs_to_inner() {
    let wrapped: Chain<Result<i32>> = Chain::from(of(3));
    assert!(wrapped.is_ok());
    assert_eq!(*wrapped, Ok(3));
}
