use crate::conf::error::ConfigError;
use crate::conf::paths::LogPaths;
use crate::conf::types::AgentlogConfig;
use std::fs;
use std::io;

/// Load `.agentlog/config.toml` over the built-in defaults.
///
/// A missing file is not an error; the defaults apply.
pub fn load_config(paths: &LogPaths) -> Result<AgentlogConfig, ConfigError> {
    let path = &paths.config_file;

    let cfg = match fs::read_to_string(path) {
        Ok(raw) => {
            toml::from_str::<AgentlogConfig>(&raw).map_err(|e| ConfigError::parse(path, e))?
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => AgentlogConfig::default(),
        Err(e) => return Err(ConfigError::read_file(path, e)),
    };

    validate(&cfg)?;
    tracing::debug!(?cfg, "configuration loaded");

    Ok(cfg)
}

pub fn validate(cfg: &AgentlogConfig) -> Result<(), ConfigError> {
    if cfg.poll_interval_ms == 0 {
        return Err(ConfigError::invalid(
            "poll_interval_ms",
            "must be greater than zero",
        ));
    }

    if cfg.warn_file_size > cfg.max_file_size {
        return Err(ConfigError::invalid(
            "warn_file_size",
            format!(
                "must not exceed max_file_size ({} > {})",
                cfg.warn_file_size, cfg.max_file_size
            ),
        ));
    }

    if cfg.top_n == 0 {
        return Err(ConfigError::invalid("top_n", "must be greater than zero"));
    }

    if cfg.malformed_sample_size == 0 {
        return Err(ConfigError::invalid(
            "malformed_sample_size",
            "must be greater than zero",
        ));
    }

    Ok(())
}
