// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Environment-driven configuration.

use std::env::{self, VarError};
use std::fmt;
use std::path::{Path, PathBuf};

pub const PALETTE_ENV: &str = "NAIAD_PALETTE";
pub const MAX_HEIGHT_ENV: &str = "NAIAD_MAX_HEIGHT";
pub const LOG_ENV: &str = "NAIAD_LOG";
pub const LOG_FILE_ENV: &str = "NAIAD_LOG_FILE";
pub const FALLBACK_LOG_ENV: &str = "RUST_LOG";
pub const DEFAULT_EDITOR: &str = "vi";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    palette: Option<String>,
    editor: String,
    max_height: Option<usize>,
    log_filter: Option<String>,
    log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: None,
            editor: DEFAULT_EDITOR.to_owned(),
            max_height: None,
            log_filter: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> Result<Self, ConfigError> {
        let var = |name: &str| non_empty_var(&lookup, name);

        let editor = match var("VISUAL")? {
            Some(editor) => editor,
            None => var("EDITOR")?.unwrap_or_else(|| DEFAULT_EDITOR.to_owned()),
        };

        let max_height = var(MAX_HEIGHT_ENV)?
            .map(|value| match value.parse::<usize>() {
                Ok(height) if height > 0 => Ok(height),
                _ => Err(ConfigError::InvalidEnv {
                    name: MAX_HEIGHT_ENV.to_owned(),
                    value: format!("{value} (expected a positive row count)"),
                }),
            })
            .transpose()?;

        let log_filter = match var(LOG_ENV)? {
            Some(filter) => Some(filter),
            None => var(FALLBACK_LOG_ENV)?,
        };

        Ok(Self {
            palette: var(PALETTE_ENV)?,
            editor,
            max_height,
            log_filter,
            log_file: var(LOG_FILE_ENV)?.map(PathBuf::from),
        })
    }

    /// Raw palette override, parsed by the terminal theme.
    pub fn palette(&self) -> Option<&str> {
        self.palette.as_deref()
    }

    /// Editor command used to open chosen documents.
    pub fn editor(&self) -> &str {
        &self.editor
    }

    pub fn max_height(&self) -> Option<usize> {
        self.max_height
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.log_filter.as_deref()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

fn non_empty_var(
    lookup: &impl Fn(&str) -> Result<String, VarError>,
    name: &str,
) -> Result<Option<String>, ConfigError> {
    match lookup(name) {
        Ok(value) => {
            let trimmed = value.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_owned()))
        }
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv {
            name: name.to_owned(),
            value: "<non-unicode>".to_owned(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::env::VarError;
    use std::path::Path;

    use rstest::rstest;

    use super::{Config, ConfigError, DEFAULT_EDITOR};

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: BTreeMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        Config::from_lookup(|name| vars.get(name).cloned().ok_or(VarError::NotPresent))
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]).expect("config");
        assert_eq!(config, Config::default());
        assert_eq!(config.editor(), DEFAULT_EDITOR);
    }

    #[rstest]
    #[case(&[("VISUAL", "nvim"), ("EDITOR", "nano")], "nvim")]
    #[case(&[("VISUAL", "  "), ("EDITOR", "nano")], "nano")]
    #[case(&[("EDITOR", "hx")], "hx")]
    fn editor_prefers_visual(#[case] vars: &[(&str, &str)], #[case] expected: &str) {
        assert_eq!(config(vars).expect("config").editor(), expected);
    }

    #[test]
    fn log_filter_falls_back_to_rust_log() {
        let config = config(&[("RUST_LOG", "debug"), ("NAIAD_LOG_FILE", "/tmp/naiad.log")])
            .expect("config");
        assert_eq!(config.log_filter(), Some("debug"));
        assert_eq!(config.log_file(), Some(Path::new("/tmp/naiad.log")));

        let config = self::config(&[("RUST_LOG", "debug"), ("NAIAD_LOG", "naiad=trace")])
            .expect("config");
        assert_eq!(config.log_filter(), Some("naiad=trace"));
    }

    #[rstest]
    #[case("0")]
    #[case("tall")]
    #[case("-3")]
    fn max_height_must_be_a_positive_number(#[case] value: &str) {
        let err = config(&[("NAIAD_MAX_HEIGHT", value)]).expect_err("invalid height");
        assert!(err.to_string().starts_with("invalid env NAIAD_MAX_HEIGHT="));
    }

    #[test]
    fn max_height_parses_row_count() {
        let config = config(&[("NAIAD_MAX_HEIGHT", "12")]).expect("config");
        assert_eq!(config.max_height(), Some(12));
    }
}
