use std::cell::Cell;

use status_rail::{all_errors, bind, compose, maybe_error, of, Error, ErrorVec, Result};

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

#[test]
fn compose_macro_matches_nested_binds() {
    let f = compose!(divide_4_by, safe_sqrt, divide_4_by);
    for input in [1.0, 0.0, -4.0, 4.0] {
        let nested = bind(bind(bind(of(input), divide_4_by), safe_sqrt), divide_4_by);
        assert_eq!(f(input), nested, "input {input}");
    }
}

#[test]
fn compose_macro_accepts_trailing_comma() {
    let f = compose!(divide_4_by, safe_sqrt,);
    assert_eq!(f(1.0), Ok(2.0));
}

#[test]
fn maybe_error_macro_picks_first_failure() {
    let a: Result<f64> = Ok(6.5);
    let b: Result<i32> = Ok(1);
    let c: Result<&str> = Err(Error::not_found("E1"));
    let d: Result<u8> = Err(Error::timeout("E2"));

    assert_eq!(maybe_error!(a, b, c, d), Some(Error::not_found("E1")));
    assert_eq!(maybe_error!(a, b), None);
}

#[test]
fn maybe_error_macro_evaluates_lazily() {
    let evaluated = Cell::new(0);
    let probe = |r: Result<i32>| {
        evaluated.set(evaluated.get() + 1);
        r
    };

    let found = maybe_error!(
        probe(Ok(1)),
        probe(Err(Error::aborted("stop"))),
        probe(Err(Error::internal("late")))
    );
    assert_eq!(found, Some(Error::aborted("stop")));
    assert_eq!(evaluated.get(), 2);
}

#[test]
fn all_errors_macro_keeps_every_failure() {
    let a: Result<u8> = Err(Error::aborted("a"));
    let b: Result<&str> = Ok("b");
    let c: Result<f64> = Err(Error::internal("c"));

    let errors: ErrorVec = all_errors!(a, b, c);
    assert_eq!(errors.as_slice(), &[Error::aborted("a"), Error::internal("c")]);

    let none: ErrorVec = all_errors!(b);
    assert!(none.is_empty());
}
