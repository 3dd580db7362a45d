#![cfg(feature = "std")]

//! Stderr logger configured from `SEA_BATTLE_LOG`.
//!
//! The variable holds comma-separated directives: a bare level sets the
//! default, `module::path=level` overrides it for that module and its
//! children. For example `warn,sea_battle::fleet=trace`.

use std::env;
use std::sync::OnceLock;

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::LOG_ENV;

/// Level used when the variable is unset or names no default.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Per-module level directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    default: LevelFilter,
    modules: Vec<(String, LevelFilter)>,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            default: DEFAULT_LEVEL,
            modules: Vec::new(),
        }
    }
}

impl LogFilter {
    /// Parse directives; entries with an unknown level are skipped.
    pub fn parse(directives: &str) -> Self {
        let mut filter = Self::default();
        for entry in directives.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            match entry.split_once('=') {
                Some((module, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        filter.modules.push((module.trim().to_string(), level));
                    }
                }
                None => {
                    if let Ok(level) = entry.parse() {
                        filter.default = level;
                    }
                }
            }
        }
        // Longest path first so the most specific directive wins.
        filter.modules.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        filter
    }

    /// Level in effect for a record target.
    pub fn level_for(&self, target: &str) -> LevelFilter {
        self.modules
            .iter()
            .find(|(module, _)| {
                target == module
                    || (target.starts_with(module.as_str())
                        && target[module.len()..].starts_with("::"))
            })
            .map_or(self.default, |(_, level)| *level)
    }

    /// Most verbose level any directive enables.
    pub fn max_level(&self) -> LevelFilter {
        self.modules
            .iter()
            .map(|(_, level)| *level)
            .fold(self.default, |acc, level| acc.max(level))
    }
}

struct StderrLogger {
    filter: LogFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger. Later calls keep the first configuration.
pub fn init_logging() {
    let logger = LOGGER.get_or_init(|| StderrLogger {
        filter: env::var(LOG_ENV)
            .map(|directives| LogFilter::parse(&directives))
            .unwrap_or_default(),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.filter.max_level());
    }
}
