// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracing subscriber setup.
//!
//! The terminal belongs to the chooser, so events are only written when a log file is configured.

use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt as tracing_fmt, prelude::*, EnvFilter};

use crate::config::Config;

pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug)]
pub enum LoggingError {
    Open { path: PathBuf, source: io::Error },
    Filter { filter: String, reason: String },
    Install { reason: String },
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "failed to open log file {}: {source}", path.display())
            }
            Self::Filter { filter, reason } => write!(f, "invalid log filter {filter:?}: {reason}"),
            Self::Install { reason } => write!(f, "failed to install logger: {reason}"),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Installs the global subscriber. Returns `false` when no log file is configured.
pub fn init(config: &Config) -> Result<bool, LoggingError> {
    let Some(path) = config.log_file() else {
        return Ok(false);
    };

    let filter = build_filter(config.log_filter())?;
    let file = open_log_file(path)?;
    let layer = tracing_fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|err| LoggingError::Install { reason: err.to_string() })?;
    Ok(true)
}

pub fn build_filter(filter: Option<&str>) -> Result<EnvFilter, LoggingError> {
    let filter = filter.unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(filter)
        .map_err(|err| LoggingError::Filter { filter: filter.to_owned(), reason: err.to_string() })
}

fn open_log_file(path: &Path) -> Result<std::fs::File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open { path: path.to_path_buf(), source })
}
