use status_rail::{Error, Result, TraceResultExt};
use tracing::Level;

#[test]
fn trace_err_returns_result_unchanged() {
    let failed: Result<i32> = Err(Error::internal("boom"));
    assert_eq!(failed.clone().trace_err(), failed);
    assert_eq!(failed.clone().trace_err_at(Level::DEBUG), failed);

    let ok: Result<i32> = Ok(3);
    assert_eq!(ok.trace_err(), Ok(3));
}

#[test]
fn with_span_prefixes_span_name() {
    let span = tracing::info_span!("load_config");
    let failed: Result<i32> = Err(Error::not_found("config.toml"));

    let detail = failed.with_span(&span).unwrap_err().detail().to_string();
    assert!(detail.starts_with("in span '"));
    assert!(detail.ends_with("': config.toml"));
}

#[test]
fn with_current_span_leaves_success_alone() {
    let ok: Result<&str> = Ok("fine");
    assert_eq!(ok.with_current_span(), Ok("fine"));
}
