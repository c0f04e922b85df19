use crate::*;
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Write;

fn ts(h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_micro_opt(h, m, s, micro)
        .unwrap()
}

// ========== Severity ==========

#[test]
fn test_severity_from_str() {
    assert_eq!("ERROR".parse::<Severity>().unwrap(), Severity::Error);
    assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("FATAL".parse::<Severity>().unwrap(), Severity::Fatal);
}

#[test]
fn test_severity_case_sensitive() {
    assert!("error".parse::<Severity>().is_err());
    assert!("Warning".parse::<Severity>().is_err());
}

#[test]
fn test_severity_unknown() {
    let err = "NOTICE".parse::<Severity>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown severity: NOTICE");
}

#[test]
fn test_severity_display_roundtrip() {
    for sev in [Severity::Debug, Severity::Info, Severity::Critical] {
        assert_eq!(sev.to_string().parse::<Severity>().unwrap(), sev);
    }
}

#[test]
fn test_severity_serde_uppercase() {
    let json = serde_json::to_string(&Severity::Critical).unwrap();
    assert_eq!(json, "\"CRITICAL\"");
    let sev: Severity = serde_json::from_str("\"WARNING\"").unwrap();
    assert_eq!(sev, Severity::Warning);
}

#[test]
fn test_actionable_defaults() {
    assert_eq!(Severity::ACTIONABLE.len(), 4);
    assert!(!Severity::ACTIONABLE.contains(&Severity::Info));
    assert!(!Severity::ACTIONABLE.contains(&Severity::Debug));
}

// ========== Timestamps ==========

#[test]
fn test_parse_timestamp_micro() {
    assert_eq!(
        parse_timestamp("2025-01-01 10:00:00.000123"),
        Some(ts(10, 0, 0, 123))
    );
}

#[test]
fn test_parse_timestamp_short_fraction() {
    assert_eq!(parse_timestamp("2025-01-01 10:00:00.5"), Some(ts(10, 0, 0, 500_000)));
}

#[test]
fn test_parse_timestamp_too_many_digits() {
    assert_eq!(parse_timestamp("2025-01-01 10:00:00.1234567"), None);
}

#[test]
fn test_parse_timestamp_missing_fraction() {
    assert_eq!(parse_timestamp("2025-01-01 10:00:00"), None);
    assert_eq!(parse_timestamp("2025-01-01 10:00:00."), None);
}

#[test]
fn test_parse_timestamp_invalid_date() {
    assert_eq!(parse_timestamp("2025-13-01 10:00:00.000000"), None);
    assert_eq!(parse_timestamp("2025-02-30 10:00:00.000000"), None);
    assert_eq!(parse_timestamp("2025-01-01 25:00:00.000000"), None);
}

#[test]
fn test_parse_timestamp_leap_second_rejected() {
    assert_eq!(parse_timestamp("2025-01-01 23:59:60.000000"), None);
}

#[test]
fn test_parse_timestamp_year_zero_rejected() {
    assert_eq!(parse_timestamp("0000-01-01 10:00:00.000000"), None);
    assert!(parse_timestamp("0001-01-01 10:00:00.000000").is_some());
}

// ========== TimeRange ==========

#[test]
fn test_time_range_describe() {
    let r = TimeRange::new(ts(9, 0, 0, 999_999), ts(10, 30, 15, 1));
    assert_eq!(
        TimeRange::describe(Some(&r)),
        "Analyzing logs from: 2025-01-01 09:00:00 to 2025-01-01 10:30:15"
    );
}

#[test]
fn test_time_range_describe_absent() {
    assert_eq!(
        TimeRange::describe(None),
        "No valid timestamps found in filtered logs."
    );
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let c = DigestConfig::default();
    assert_eq!(c.reducer.max_lines, 100);
    assert_eq!(c.reducer.hours_back, 24);
    assert_eq!(c.reducer.severities, Severity::ACTIONABLE.to_vec());
    assert_eq!(c.summary.model, "gpt-4o-mini");
    assert_eq!(c.summary.max_tokens, 800);
    assert_eq!(c.server.port, 8080);
    assert!(c.validate().is_ok());
}

#[test]
fn test_config_partial_json() {
    let c = DigestConfig::from_json_str(r#"{"reducer": {"hours_back": 6}}"#).unwrap();
    assert_eq!(c.reducer.hours_back, 6);
    assert_eq!(c.reducer.max_lines, 100);
    assert_eq!(c.source.allowed_root.to_str(), Some("/config"));
}

#[test]
fn test_config_severities_override() {
    let c = DigestConfig::from_json_str(r#"{"reducer": {"severities": ["INFO", "ERROR"]}}"#)
        .unwrap();
    assert_eq!(c.reducer.severities, vec![Severity::Info, Severity::Error]);
}

#[test]
fn test_config_unknown_severity_rejected() {
    let err = DigestConfig::from_json_str(r#"{"reducer": {"severities": ["LOUD"]}}"#).unwrap_err();
    assert!(matches!(err, DigestError::Serialization(_)));
}

#[test]
fn test_config_zero_max_lines_rejected() {
    let err = DigestConfig::from_json_str(r#"{"reducer": {"max_lines": 0}}"#).unwrap_err();
    assert!(matches!(err, DigestError::InvalidConfig(_)));
}

#[test]
fn test_config_zero_hours_rejected() {
    let err = DigestConfig::from_json_str(r#"{"reducer": {"hours_back": 0}}"#).unwrap_err();
    assert!(err.to_string().contains("hours_back"));
}

#[test]
fn test_config_empty_severities_rejected() {
    assert!(DigestConfig::from_json_str(r#"{"reducer": {"severities": []}}"#).is_err());
}

#[test]
fn test_config_bad_temperature() {
    let err = DigestConfig::from_json_str(r#"{"summary": {"temperature": 3.5}}"#).unwrap_err();
    assert!(err.to_string().contains("temperature"));
}

#[test]
fn test_config_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"server": {{"port": 9123}}}}"#).unwrap();
    let c = DigestConfig::load(file.path()).unwrap();
    assert_eq!(c.server.port, 9123);
    assert_eq!(c.server.host, "0.0.0.0");
}

#[test]
fn test_config_load_missing_file() {
    let err = DigestConfig::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, DigestError::Io(_)));
}

// ========== Errors ==========

#[test]
fn test_error_display() {
    let err = DigestError::PathNotAllowed { path: "/etc/passwd".into() };
    assert_eq!(err.to_string(), "Access to /etc/passwd is not allowed");
    let err = DigestError::LogNotFound { path: "/config/x.log".into() };
    assert_eq!(err.to_string(), "Log file not found: /config/x.log");
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DigestError>();
}
