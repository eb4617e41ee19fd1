use crate::conf::{AgentlogConfig, LogPaths};
use crate::health::report::{CheckStatus, HealthCheckResult, HealthReport};
use crate::logs::{LogError, read_entries};
use std::fs;
use std::io;
use std::path::Path;

const MIB: f64 = 1024.0 * 1024.0;

/// Run every check against `paths`. Nothing is ever written.
pub fn check_health(paths: &LogPaths, cfg: &AgentlogConfig) -> HealthReport {
    let dir_check = check_directory(&paths.dir);
    if dir_check.status == CheckStatus::Error {
        tracing::debug!(dir = %paths.dir.display(), "agentlog directory unusable; skipping remaining checks");
        return HealthReport::uninitialized(dir_check);
    }

    let mut checks = vec![dir_check];

    let (file_check, file_present) = check_file(&paths.errors_file);
    checks.push(file_check);

    if file_present {
        checks.push(check_jsonl(&paths.errors_file, cfg.malformed_sample_size));
        checks.push(check_file_size(
            &paths.errors_file,
            cfg.warn_file_size,
            cfg.max_file_size,
        ));
    }

    HealthReport::from_checks(checks)
}

pub fn check_directory(dir: &Path) -> HealthCheckResult {
    const NAME: &str = "Directory";

    match fs::metadata(dir) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => HealthCheckResult::error(
            NAME,
            ".agentlog directory NOT FOUND. Run 'agentlog init' to create it.",
        ),
        Err(e) => HealthCheckResult::error(NAME, format!("Cannot access directory: {e}")),
        Ok(meta) if !meta.is_dir() => {
            HealthCheckResult::error(NAME, ".agentlog exists but is not a directory")
        }
        Ok(_) => HealthCheckResult::ok(NAME, ".agentlog directory exists"),
    }
}

/// Returns the check and whether the file is present and readable.
pub fn check_file(path: &Path) -> (HealthCheckResult, bool) {
    const NAME: &str = "Errors file";

    match fs::metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => (
            HealthCheckResult::ok(
                NAME,
                "errors.jsonl not yet created (will be created on first error)",
            ),
            false,
        ),
        Err(e) => (
            HealthCheckResult::error(NAME, format!("Cannot access file: {e}")),
            false,
        ),
        Ok(meta) if meta.is_dir() => (
            HealthCheckResult::error(NAME, "errors.jsonl is a directory (expected file)"),
            false,
        ),
        Ok(_) => match fs::File::open(path) {
            Ok(_) => (
                HealthCheckResult::ok(NAME, "errors.jsonl exists and is readable"),
                true,
            ),
            Err(e) => (
                HealthCheckResult::error(NAME, format!("Cannot open file: {e}")),
                false,
            ),
        },
    }
}

pub fn check_jsonl(path: &Path, sample_size: usize) -> HealthCheckResult {
    const NAME: &str = "JSONL format";

    let batch = match read_entries(path) {
        Ok(batch) => batch,
        Err(LogError::Io { source, .. }) => {
            return HealthCheckResult::error(NAME, format!("Error reading file: {source}"));
        }
        Err(e) => return HealthCheckResult::error(NAME, format!("Cannot open file: {e}")),
    };

    let valid = batch.entries.len();
    let malformed = batch.skipped.len();

    if malformed == 0 {
        return HealthCheckResult::ok(NAME, format!("All {valid} entries are valid JSON"));
    }

    let sample: Vec<String> = batch
        .skipped
        .iter()
        .take(sample_size)
        .map(|s| s.line_number.to_string())
        .collect();
    let mut lines = sample.join(", ");
    if malformed > sample.len() {
        lines.push_str("...");
    }

    HealthCheckResult::warning(
        NAME,
        format!("{malformed} malformed/invalid JSON lines (lines: {lines}). {valid} valid entries."),
    )
}

pub fn check_file_size(path: &Path, warn_size: u64, max_size: u64) -> HealthCheckResult {
    const NAME: &str = "File size";

    let size = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => return HealthCheckResult::error(NAME, format!("Cannot stat file: {e}")),
    };
    let size_mb = size as f64 / MIB;
    let max_mb = max_size as f64 / MIB;

    if size > max_size {
        HealthCheckResult::error(
            NAME,
            format!("File size ({size_mb:.1}MB) exceeds {max_mb:.0}MB limit. Rotation needed."),
        )
    } else if size > warn_size {
        HealthCheckResult::warning(
            NAME,
            format!(
                "File is large ({size_mb:.1}MB). Approaching {max_mb:.0}MB limit. Consider rotation."
            ),
        )
    } else {
        HealthCheckResult::ok(NAME, format!("File size OK ({size_mb:.2}MB)"))
    }
}
