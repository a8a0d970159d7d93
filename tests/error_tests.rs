//! Tests for the error type.

use std::error::Error as _;

use pollkit::error::PollkitError;

#[test]
fn display_messages_are_stable() {
    assert_eq!(
        PollkitError::InvalidOptions("backoff_factor must be >= 0, got -1".to_string()).to_string(),
        "Invalid polling options: backoff_factor must be >= 0, got -1"
    );
    assert_eq!(
        PollkitError::UnknownPreset("eager".to_string()).to_string(),
        "Unknown polling preset: eager"
    );
    assert_eq!(
        PollkitError::producer("status 503").to_string(),
        "Producer error: status 503"
    );
}

#[test]
fn non_error_faults_are_normalized_to_their_string_form() {
    let from_string = PollkitError::from("not ready".to_string());
    let from_str = PollkitError::from("not ready");
    let from_number = PollkitError::producer(404);

    for err in [&from_string, &from_str] {
        assert!(err.is_producer_fault());
        assert_eq!(err.to_string(), "Producer error: not ready");
        assert!(err.source().is_none());
    }
    assert_eq!(from_number.to_string(), "Producer error: 404");
}

#[test]
fn from_source_keeps_the_wrapped_error() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err = PollkitError::from_source(io);

    assert!(err.is_producer_fault());
    assert_eq!(err.to_string(), "Producer error: refused");
    let source = err.source().expect("source should be kept");
    assert_eq!(source.to_string(), "refused");
}

#[test]
fn toml_errors_convert_into_config_errors() {
    let toml_error = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
    let err = PollkitError::from(toml_error);

    assert!(matches!(err, PollkitError::Config(_)));
    assert!(!err.is_producer_fault());
    assert!(err.to_string().starts_with("Configuration error:"));
}
