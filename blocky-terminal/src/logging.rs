/// Logger setup for the terminal frontend
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Once;

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "warn",
/// "blocky_core=debug").
///
/// Without a `file`, records go to stderr, which is the same tty the frame is
/// drawn on; only warnings and errors are let through in that case.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub file: Option<PathBuf>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            file: None,
            write_style: env_logger::WriteStyle::Never,
        }
    }
}

static INIT: Once = Once::new();

/// Build the logger without installing it.
///
/// Filter precedence: explicit filter, then `RUST_LOG`, then `warn`.
pub fn build_logger(config: &LoggingConfig) -> io::Result<env_logger::Logger> {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = &config.filter {
        builder.parse_filters(filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(LevelFilter::Warn);
    }

    match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .target(env_logger::Target::Pipe(Box::new(file)))
                .write_style(env_logger::WriteStyle::Never);
        }
        None => {
            builder
                .target(env_logger::Target::Stderr)
                .write_style(config.write_style);
        }
    }

    Ok(builder.build())
}

/// Level actually enabled for `config`, given the logger's own filter.
pub fn max_level(config: &LoggingConfig, filter: LevelFilter) -> LevelFilter {
    match config.file {
        Some(_) => filter,
        None => filter.min(LevelFilter::Warn),
    }
}

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) -> io::Result<()> {
    let mut result = Ok(());
    INIT.call_once(|| {
        result = install(&config);
    });
    result
}

fn install(config: &LoggingConfig) -> io::Result<()> {
    let logger = build_logger(config)?;
    let level = max_level(config, logger.filter());
    log::set_boxed_logger(Box::new(logger))
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    log::set_max_level(level);
    log::debug!("logging initialized at {}", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Record};

    #[test]
    fn test_file_target_receives_records() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = LoggingConfig {
            filter: Some("trace".to_string()),
            file: Some(file.path().to_path_buf()),
            ..LoggingConfig::default()
        };
        let logger = build_logger(&config).unwrap();
        logger.log(
            &Record::builder()
                .args(format_args!("composed rig"))
                .level(Level::Trace)
                .target("blocky_core::rig")
                .build(),
        );
        logger.flush();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.contains("composed rig"));
        assert_eq!(max_level(&config, logger.filter()), LevelFilter::Trace);
    }

    #[test]
    fn test_stderr_target_is_capped_at_warn() {
        let config = LoggingConfig {
            filter: Some("trace".to_string()),
            ..LoggingConfig::default()
        };
        let logger = build_logger(&config).unwrap();
        assert_eq!(logger.filter(), LevelFilter::Trace);
        assert_eq!(max_level(&config, logger.filter()), LevelFilter::Warn);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: Some(dir.path().join("missing").join("blocky.log")),
            ..LoggingConfig::default()
        };
        assert!(build_logger(&config).is_err());
    }
}
