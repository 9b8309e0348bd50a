use std::cell::Cell;

use status_rail::convert::{all_errors, has_error, maybe_error, panic_message, try_catch};
use status_rail::{chain, of, some, try_to_result, Error, ErrorKind, HasError, Result};

fn divide_4_by(x: f64) -> Result<f64> {
    if x == 0.0 {
        return Err(Error::invalid_argument("divide by 0"));
    }
    Ok(4.0 / x)
}

#[test]
fn of_and_some_lift_values() {
    assert_eq!(of("x"), Ok("x"));
    assert_eq!(some(3u8), Some(3));
}

#[test]
fn try_to_result_returns_value() {
    assert_eq!(try_to_result(|| 10 / 2), Ok(5));
}

#[test]
fn try_to_result_captures_str_panic() {
    let result = try_to_result(|| -> i32 { panic!("divide by zero") });
    let error = result.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Exception);
    assert_eq!(error.detail(), "divide by zero");
}

#[test]
fn try_to_result_captures_formatted_panic() {
    let limit = 3;
    let result = try_to_result(|| -> () { panic!("limit {limit} exceeded") });
    assert_eq!(result, Err(Error::exception("limit 3 exceeded")));
}

#[test]
fn try_to_result_handles_opaque_payload() {
    let result = try_to_result(|| -> u8 { std::panic::panic_any(42_i32) });
    assert_eq!(result, Err(Error::exception("unknown panic")));
}

#[test]
fn try_to_result_feeds_a_chain() {
    let parsed = chain(try_to_result(|| "0".parse::<f64>().unwrap_or_default())) | divide_4_by;
    assert_eq!(parsed.into_inner().unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn try_catch_keeps_payload() {
    let payload = try_catch(|| -> () { panic!("raw") }).unwrap_err();
    assert_eq!(panic_message(payload.as_ref()), "raw");
    assert!(try_catch(|| 1).is_ok());
}

#[test]
fn has_error_matches_is_err() {
    assert!(!has_error(&of(1)));
    assert!(has_error::<(), _>(&Err(Error::unknown(""))));
}

#[test]
fn maybe_error_returns_first_failure() {
    let a: Result<f64> = Ok(1.0);
    let b: Result<i32> = Ok(2);
    let c: Result<&str> = Err(Error::not_found("E1"));
    let d: Result<f64> = Err(Error::timeout("E2"));

    let found = maybe_error(&[&a as &dyn HasError<Error>, &b, &c, &d]);
    assert_eq!(found, Some(Error::not_found("E1")));
}

#[test]
fn maybe_error_is_none_when_all_succeed() {
    let a: Result<f64> = Ok(1.0);
    let b: Result<String> = Ok("two".to_string());

    assert_eq!(maybe_error(&[&a as &dyn HasError<Error>, &b]), None);
    assert_eq!(maybe_error::<Error>(&[]), None);
}

#[test]
fn maybe_error_joins_independent_chains() {
    let calls = Cell::new(0);
    let combine = |a: Result<f64>, b: Result<f64>| -> Result<f64> {
        if let Some(error) = maybe_error(&[&a as &dyn HasError<Error>, &b]) {
            return Err(error);
        }
        calls.set(calls.get() + 1);
        Ok(a? + b?)
    };

    let a = (chain(of(2.0)) | divide_4_by | divide_4_by).into_inner();
    let b = (chain(of(0.0)) | divide_4_by).into_inner();
    assert_eq!(combine(a.clone(), b), Err(Error::invalid_argument("divide by 0")));
    assert_eq!(calls.get(), 0);

    assert_eq!(combine(a.clone(), a), Ok(4.0));
    assert_eq!(calls.get(), 1);
}

#[test]
fn all_errors_collects_in_order() {
    let a: Result<u8> = Err(Error::aborted("a"));
    let b: Result<()> = Ok(());
    let c: Result<u8> = Err(Error::internal("c"));

    let errors = all_errors(&[&a as &dyn HasError<Error>, &b, &c]);
    assert_eq!(errors.as_slice(), &[Error::aborted("a"), Error::internal("c")]);
    assert!(all_errors(&[&b as &dyn HasError<Error>]).is_empty());
}
