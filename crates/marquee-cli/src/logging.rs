use anyhow::Result;
use marquee_config::LoggingConfig;
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Filter directive for the given flags. `-q` wins over `-v`; without
/// either, `RUST_LOG` and then the configured level apply.
fn filter_for(verbose_level: u8, quiet: bool, configured: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    let fallback = match verbose_level {
        0 => configured,
        1 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// `RUST_LOG_JSON` wins, then `logging.json`, then the terminal check: JSON
/// when piped (e.g. under a service manager), human-readable otherwise.
fn json_enabled(env_value: Option<&str>, configured: Option<bool>, stdout_is_terminal: bool) -> bool {
    match env_value {
        Some(v) => v == "true",
        None => configured.unwrap_or(!stdout_is_terminal),
    }
}

pub fn init_logging(verbose_level: u8, quiet: bool, config: &LoggingConfig) -> Result<()> {
    let filter = filter_for(verbose_level, quiet, &config.level);
    let env_json = std::env::var("RUST_LOG_JSON").ok();
    let json = json_enabled(env_json.as_deref(), config.json, io::stdout().is_terminal());
    let registry = Registry::default().with(filter);

    match &config.file {
        Some(log_path) => {
            let file_appender = rolling_appender(log_path)?;
            if json {
                let json_layer = fmt::layer()
                    .json()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(file_appender);
                registry.with(json_layer).init();
            } else {
                let fmt_layer = fmt::layer()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(file_appender);
                registry.with(fmt_layer).init();
            }
        }
        None => {
            if json {
                let json_layer = fmt::layer()
                    .json()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(io::stderr);
                registry.with(json_layer).init();
            } else {
                let fmt_layer = fmt::layer()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(io::stderr);
                registry.with(fmt_layer).init();
            }
        }
    }

    Ok(())
}

// Daily rotation: marquee.log -> marquee.2026-01-17, ...
// The appender adds the date itself, so only the stem is passed as prefix.
fn rolling_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let log_dir = log_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Log file path has no parent directory"))?;
    std::fs::create_dir_all(log_dir)?;

    let log_filename = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid log filename"))?;
    let log_prefix = log_filename.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(log_filename);

    Ok(RollingFileAppender::new(Rotation::DAILY, log_dir, log_prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_quiet_overrides_verbose() {
        let filter = filter_for(2, true, "info");
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn test_json_decided_at_runtime_when_unset() {
        assert!(json_enabled(None, None, false));
        assert!(!json_enabled(None, None, true));
        assert!(!json_enabled(None, Some(false), false));
        assert!(json_enabled(None, Some(true), true));
        assert!(json_enabled(Some("true"), Some(false), true));
        assert!(!json_enabled(Some("false"), Some(true), false));
    }

    #[test]
    fn test_rolling_appender_creates_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("marquee.log");
        rolling_appender(&path).unwrap();
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_rolling_appender_rejects_bare_root() {
        assert!(rolling_appender(Path::new("/")).is_err());
    }
}
