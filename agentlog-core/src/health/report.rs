use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Unhealthy,
}

impl HealthStatus {
    fn from_worst(worst: CheckStatus) -> Self {
        match worst {
            CheckStatus::Ok => HealthStatus::Healthy,
            CheckStatus::Warning => HealthStatus::Warning,
            CheckStatus::Error => HealthStatus::Unhealthy,
        }
    }

    fn label(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "HEALTHY",
            HealthStatus::Warning => "WARNING",
            HealthStatus::Unhealthy => "UNHEALTHY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthCheckResult {
    pub name: &'static str,
    pub status: CheckStatus,
    pub message: String,
}

impl HealthCheckResult {
    pub fn ok(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Ok,
            message: message.into(),
        }
    }

    pub fn warning(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Warning,
            message: message.into(),
        }
    }

    pub fn error(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub checks: Vec<HealthCheckResult>,
    pub summary: String,
}

impl HealthReport {
    /// Roll checks up into one report; overall status is the worst individual status.
    pub fn from_checks(checks: Vec<HealthCheckResult>) -> Self {
        let worst = checks
            .iter()
            .map(|c| c.status)
            .max()
            .unwrap_or(CheckStatus::Ok);

        let mut report = Self {
            status: HealthStatus::from_worst(worst),
            checks,
            summary: String::new(),
        };
        report.summary = report.summary_line();
        report
    }

    /// A report with nothing beyond the failed directory check.
    pub(crate) fn uninitialized(dir_check: HealthCheckResult) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            checks: vec![dir_check],
            summary: "agentlog is not initialized. Run 'agentlog init' to set up.".to_string(),
        }
    }

    pub fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    fn summary_line(&self) -> String {
        let errors = self.count(CheckStatus::Error);
        let warnings = self.count(CheckStatus::Warning);

        if errors > 0 {
            format!("{errors} issues found. See details above.")
        } else if warnings > 0 {
            format!("All checks passed with {warnings} warning(s).")
        } else {
            "All checks passed. agentlog is healthy.".to_string()
        }
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_plain(&self) -> String {
        self.render(false)
    }

    pub fn render_pretty(&self) -> String {
        self.render(true)
    }

    fn render(&self, color: bool) -> String {
        let mut out = String::new();

        out.push_str("agentlog doctor\n");
        out.push_str("===============\n\n");

        for check in &self.checks {
            let _ = writeln!(
                out,
                "{} {}: {}",
                status_icon(check.status, color),
                check.name,
                check.message
            );
        }

        let _ = writeln!(out, "\nStatus: {}", self.status.label());
        let _ = writeln!(out, "{}", self.summary);

        out
    }
}

fn status_icon(status: CheckStatus, color: bool) -> String {
    match (status, color) {
        (CheckStatus::Ok, false) => "[OK]".to_string(),
        (CheckStatus::Warning, false) => "[WARNING]".to_string(),
        (CheckStatus::Error, false) => "[ERROR]".to_string(),
        (CheckStatus::Ok, true) => "[OK]".green().bold().to_string(),
        (CheckStatus::Warning, true) => "[WARNING]".yellow().bold().to_string(),
        (CheckStatus::Error, true) => "[ERROR]".red().bold().to_string(),
    }
}
