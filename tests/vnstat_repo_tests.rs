// vnStat invocation tests

use netbwm::models::PeriodKind;
use netbwm::parser::RawFormat;
use netbwm::vnstat_repo::{ExternalToolError, VnstatRepo, command_args};

#[test]
fn text_reports_use_short_period_flags() {
    assert_eq!(
        command_args(PeriodKind::Hour, RawFormat::Whitespace, None),
        vec!["-h"]
    );
    assert_eq!(
        command_args(PeriodKind::Month, RawFormat::Whitespace, Some("eth0")),
        vec!["-i", "eth0", "-m"]
    );
}

#[test]
fn json_reports_use_json_mode() {
    assert_eq!(
        command_args(PeriodKind::Day, RawFormat::Json, Some("wlan0")),
        vec!["-i", "wlan0", "--json", "d"]
    );
}

#[tokio::test]
async fn missing_binary_is_an_external_tool_error() {
    let repo = VnstatRepo::new("/nonexistent/netbwm-test-vnstat", None);
    let err = repo
        .fetch(PeriodKind::Day, RawFormat::Json)
        .await
        .unwrap_err();
    assert!(matches!(err, ExternalToolError::Spawn { .. }));
}

#[cfg(unix)]
#[tokio::test]
async fn failing_binary_is_an_external_tool_error() {
    let repo = VnstatRepo::new("false", None);
    let err = repo
        .fetch(PeriodKind::Day, RawFormat::Whitespace)
        .await
        .unwrap_err();
    assert!(matches!(err, ExternalToolError::ExitStatus { .. }));
}

#[cfg(unix)]
#[tokio::test]
async fn silent_binary_is_an_external_tool_error() {
    let repo = VnstatRepo::new("true", None);
    let err = repo
        .fetch(PeriodKind::Month, RawFormat::Whitespace)
        .await
        .unwrap_err();
    assert!(matches!(err, ExternalToolError::EmptyOutput { .. }));
}
