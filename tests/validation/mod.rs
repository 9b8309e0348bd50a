use status_rail::{chain, of, one_of, validate_in, ErrorKind, Range, ResultExt, Validator};


#[test]
fn validators_plug_into_a_chain() {
    let percent = Range::between(0, 100);
    let result = chain(of(40)) | percent.as_fn() | (|x: i32| Ok(x * 3)) | percent.as_fn();

    let error = result.into_inner().named("ratio").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    assert_eq!(error.detail(), "ratio: 120 is outside of the range [0, 100]");
}

#[test]
fn closures_are_validators() {
    let colors = one_of(["red", "green"]);
    let check = |value: &'static str| validate_in(colors.valid_values(), value);

    assert_eq!(check.validate("red"), Ok("red"));
    assert!(check.validate_named("blue", "color").is_err_kind(ErrorKind::OutOfRange));
}
