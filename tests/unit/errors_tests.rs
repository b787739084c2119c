/*!
 * Tests for error types
 */

use voscript::errors::{AppError, ConfigError, ScriptError};

#[test]
fn test_configError_display_shouldDescribeProblem() {
    let err = ConfigError::WpmOutOfRange { wpm: 300, min: 75, max: 200 };
    assert_eq!(
        err.to_string(),
        "Reading speed 300 WPM is outside the supported range 75-200"
    );

    let err = ConfigError::InvalidPricing { field: "project_rate", value: -5.0 };
    assert_eq!(err.to_string(), "Invalid pricing value for 'project_rate': -5");
}

#[test]
fn test_appError_fromConfigError_shouldWrap() {
    let app_err: AppError = ConfigError::Parse("bad".to_string()).into();
    assert!(matches!(app_err, AppError::Config(_)));
    assert_eq!(app_err.to_string(), "Config error: Failed to parse config: bad");
}

#[test]
fn test_appError_fromScriptError_shouldWrap() {
    let app_err: AppError = ScriptError::Empty("blank.txt".to_string()).into();
    assert!(matches!(app_err, AppError::Script(ScriptError::Empty(_))));
    assert_eq!(app_err.to_string(), "Script error: Script is empty: blank.txt");
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let app_err: AppError = io_err.into();
    assert!(matches!(app_err, AppError::File(_)));
    assert_eq!(app_err.to_string(), "File error: missing");
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let app_err: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_err, AppError::Unknown(_)));
}

#[test]
fn test_configError_fromSerdeError_shouldBecomeParse() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ConfigError = serde_err.into();
    assert!(matches!(err, ConfigError::Parse(_)));
}
