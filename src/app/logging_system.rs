use crate::config::{LogFormat, LogLevel};
use clap::ValueEnum;
use std::sync::{Mutex, Once};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log directive '{input}': expected target=level")]
    InvalidDirective { input: String },
    #[error("Invalid log level '{input}' in directive")]
    InvalidLevel { input: String },
    #[error("Logging initialization failed: {details}")]
    InitFailed { details: String },
}

/// One `target=level` pair of the tracing filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDirective {
    pub target: String,
    pub level: LogLevel,
}

impl LogDirective {
    pub fn new(target: impl Into<String>, level: LogLevel) -> Self {
        Self {
            target: target.into(),
            level,
        }
    }

    pub fn parse(directive: &str) -> Result<Self, LoggingError> {
        let Some((target, level)) = directive.split_once('=') else {
            return Err(LoggingError::InvalidDirective {
                input: directive.to_string(),
            });
        };
        let target = target.trim();
        if target.is_empty() || level.contains('=') {
            return Err(LoggingError::InvalidDirective {
                input: directive.to_string(),
            });
        }

        let level = level.trim();
        let level = <LogLevel as ValueEnum>::from_str(level, true).map_err(|_| {
            LoggingError::InvalidLevel {
                input: level.to_string(),
            }
        })?;

        Ok(Self::new(target, level))
    }

    pub fn to_filter_string(&self) -> String {
        format!("{}={}", self.target, self.level.as_str())
    }
}

/// Builds the `EnvFilter` from a default level plus per-target directives.
#[derive(Debug, Default)]
pub struct LoggingSystem {
    directives: Vec<LogDirective>,
}

impl LoggingSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Malformed directives are skipped with a note on stderr; the
    /// subscriber is not up yet at this point.
    pub fn add_directive(&mut self, directive: &str) {
        match LogDirective::parse(directive) {
            Ok(directive) => self.directives.push(directive),
            Err(e) => eprintln!("Warning: {e}, skipping directive"),
        }
    }

    pub fn directive_count(&self) -> usize {
        self.directives.len()
    }

    pub fn build_filter_string(&self, default_level: LogLevel) -> String {
        let mut filter_parts = Vec::with_capacity(self.directives.len() + 1);
        filter_parts.push(default_level.as_str().to_string());
        filter_parts.extend(self.directives.iter().map(LogDirective::to_filter_string));
        filter_parts.join(",")
    }

    /// Installs the global subscriber. Log lines go to stderr so that stdout
    /// stays free for command output.
    pub fn initialize(
        &self,
        default_level: LogLevel,
        format: LogFormat,
    ) -> Result<(), LoggingError> {
        let filter_string = self.build_filter_string(default_level);
        let env_filter = EnvFilter::try_new(&filter_string).map_err(|e| LoggingError::InitFailed {
            details: format!("bad filter '{filter_string}': {e}"),
        })?;

        let registry = tracing_subscriber::registry().with(env_filter);
        let result = match format {
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true)
                        .compact(),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .json()
                        .flatten_event(true),
                )
                .try_init(),
        };

        result.map_err(|e| LoggingError::InitFailed {
            details: e.to_string(),
        })
    }
}

/// Initializes logging once per process. Later calls return the outcome of
/// the first one.
pub fn setup_logging(
    level: LogLevel,
    format: LogFormat,
    directives: &[String],
) -> Result<(), LoggingError> {
    static INIT: Once = Once::new();
    static INIT_ERROR: Mutex<Option<String>> = Mutex::new(None);

    INIT.call_once(|| {
        let mut logging_system = LoggingSystem::new();
        for directive in directives {
            logging_system.add_directive(directive);
        }

        if let Err(e) = logging_system.initialize(level, format) {
            if let Ok(mut slot) = INIT_ERROR.lock() {
                *slot = Some(e.to_string());
            }
        }
    });

    match INIT_ERROR.lock() {
        Ok(slot) => match slot.as_ref() {
            Some(details) => Err(LoggingError::InitFailed {
                details: details.clone(),
            }),
            None => Ok(()),
        },
        Err(_) => Err(LoggingError::InitFailed {
            details: "logging state poisoned".to_string(),
        }),
    }
}
