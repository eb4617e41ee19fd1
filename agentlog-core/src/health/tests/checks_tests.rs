use crate::conf::{AgentlogConfig, LogPaths};
use crate::health::{CheckStatus, HealthStatus, check_file_size, check_health};
use pretty_assertions::assert_eq;
use std::fs::{self, File};
use tempfile::tempdir;

const VALID: &str =
    r#"{"timestamp":"2025-01-01T00:00:00Z","source":"frontend","error_type":"UNCAUGHT_ERROR","message":"x"}"#;

fn statuses(report: &crate::health::HealthReport) -> Vec<(&str, CheckStatus)> {
    report.checks.iter().map(|c| (c.name, c.status)).collect()
}

#[test]
fn missing_directory_runs_exactly_one_check() {
    let dir = tempdir().unwrap();

    let report = check_health(&LogPaths::new(dir.path()), &AgentlogConfig::default());

    assert_eq!(report.status, HealthStatus::Unhealthy);
    assert_eq!(report.checks.len(), 1);
    assert_eq!(report.checks[0].name, "Directory");
    assert!(report.checks[0].message.contains("agentlog init"));
    assert!(report.summary.contains("not initialized"));
}

#[test]
fn agentlog_path_that_is_a_file_is_unhealthy() {
    let dir = tempdir().unwrap();
    let paths = LogPaths::new(dir.path());
    fs::write(&paths.dir, "").unwrap();

    let report = check_health(&paths, &AgentlogConfig::default());

    assert_eq!(report.status, HealthStatus::Unhealthy);
    assert_eq!(report.checks.len(), 1);
    assert_eq!(
        report.checks[0].message,
        ".agentlog exists but is not a directory"
    );
}

#[test]
fn directory_without_log_file_is_healthy() {
    let dir = tempdir().unwrap();
    let paths = LogPaths::new(dir.path());
    fs::create_dir_all(&paths.dir).unwrap();

    let report = check_health(&paths, &AgentlogConfig::default());

    assert_eq!(report.status, HealthStatus::Healthy);
    assert_eq!(
        statuses(&report),
        vec![
            ("Directory", CheckStatus::Ok),
            ("Errors file", CheckStatus::Ok)
        ]
    );
    assert!(report.checks[1].message.contains("not yet created"));
}

#[test]
fn valid_log_passes_every_check() {
    let dir = tempdir().unwrap();
    let paths = LogPaths::new(dir.path());
    fs::create_dir_all(&paths.dir).unwrap();
    fs::write(&paths.errors_file, format!("{VALID}\n{VALID}\n")).unwrap();

    let report = check_health(&paths, &AgentlogConfig::default());

    assert_eq!(report.status, HealthStatus::Healthy);
    assert_eq!(report.checks.len(), 4);
    assert_eq!(report.checks[2].message, "All 2 entries are valid JSON");
    assert_eq!(report.summary, "All checks passed. agentlog is healthy.");
}

#[test]
fn malformed_lines_are_counted_and_sampled() {
    // Arrange
    let dir = tempdir().unwrap();
    let paths = LogPaths::new(dir.path());
    fs::create_dir_all(&paths.dir).unwrap();
    let contents = [
        VALID,
        "not json",
        VALID,
        r#"{"timestamp":"t"}"#,
        "",
        "[]",
    ]
    .join("\n");
    fs::write(&paths.errors_file, contents).unwrap();

    // Act
    let report = check_health(&paths, &AgentlogConfig::default());

    // Assert
    assert_eq!(report.status, HealthStatus::Warning);
    let jsonl = &report.checks[2];
    assert_eq!(jsonl.name, "JSONL format");
    assert_eq!(jsonl.status, CheckStatus::Warning);
    assert_eq!(
        jsonl.message,
        "3 malformed/invalid JSON lines (lines: 2, 4, 6). 2 valid entries."
    );
    assert_eq!(report.summary, "All checks passed with 1 warning(s).");
}

#[test]
fn malformed_sample_is_bounded() {
    let dir = tempdir().unwrap();
    let paths = LogPaths::new(dir.path());
    fs::create_dir_all(&paths.dir).unwrap();
    fs::write(&paths.errors_file, "x\n".repeat(8)).unwrap();
    let cfg = AgentlogConfig {
        malformed_sample_size: 3,
        ..AgentlogConfig::default()
    };

    let report = check_health(&paths, &cfg);

    assert_eq!(
        report.checks[2].message,
        "8 malformed/invalid JSON lines (lines: 1, 2, 3...). 0 valid entries."
    );
}

#[test]
fn log_path_that_is_a_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let paths = LogPaths::new(dir.path());
    fs::create_dir_all(&paths.errors_file).unwrap();

    let report = check_health(&paths, &AgentlogConfig::default());

    assert_eq!(report.status, HealthStatus::Unhealthy);
    assert_eq!(report.checks.len(), 2);
    assert_eq!(
        report.checks[1].message,
        "errors.jsonl is a directory (expected file)"
    );
    assert_eq!(report.summary, "1 issues found. See details above.");
}

#[test]
fn large_file_warns_then_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("errors.jsonl");
    let file = File::create(&path).unwrap();

    file.set_len(9 * 1024 * 1024).unwrap();
    let warn = check_file_size(&path, 8 * 1024 * 1024, 10 * 1024 * 1024);

    file.set_len(11 * 1024 * 1024).unwrap();
    let error = check_file_size(&path, 8 * 1024 * 1024, 10 * 1024 * 1024);

    file.set_len(1024).unwrap();
    let ok = check_file_size(&path, 8 * 1024 * 1024, 10 * 1024 * 1024);

    assert_eq!(warn.status, CheckStatus::Warning);
    assert_eq!(
        warn.message,
        "File is large (9.0MB). Approaching 10MB limit. Consider rotation."
    );
    assert_eq!(error.status, CheckStatus::Error);
    assert_eq!(
        error.message,
        "File size (11.0MB) exceeds 10MB limit. Rotation needed."
    );
    assert_eq!(ok.status, CheckStatus::Ok);
    assert_eq!(ok.message, "File size OK (0.00MB)");
}

#[test]
fn oversized_log_makes_report_unhealthy() {
    let dir = tempdir().unwrap();
    let paths = LogPaths::new(dir.path());
    fs::create_dir_all(&paths.dir).unwrap();
    fs::write(&paths.errors_file, format!("{VALID}\n")).unwrap();
    let cfg = AgentlogConfig {
        warn_file_size: 10,
        max_file_size: 20,
        ..AgentlogConfig::default()
    };

    let report = check_health(&paths, &cfg);

    assert_eq!(report.status, HealthStatus::Unhealthy);
    assert_eq!(report.checks[3].status, CheckStatus::Error);
}
