// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Opening a chosen document in the user's editor.

use std::fmt;
use std::io;
use std::process::{Command, ExitStatus};

use tracing::info;

use crate::label::basename;
use crate::model::Placement;
use crate::tui::Choice;

/// Editors that understand the vim split and tab flags.
const VIM_FAMILY: [&str; 3] = ["vi", "vim", "nvim"];

#[derive(Debug)]
pub enum EditorError {
    InvalidPath { path: String },
    Spawn { command: String, source: io::Error },
    Failed { status: ExitStatus },
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath { path } => write!(f, "refusing to open path {path}"),
            Self::Spawn { command, source } => {
                write!(f, "failed to run editor command `{command}`: {source}")
            }
            Self::Failed { status } => write!(f, "editor command failed with status {status}"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            Self::InvalidPath { .. } | Self::Failed { .. } => None,
        }
    }
}

/// Shell command line that opens `choice` with `editor`.
///
/// Grep hits jump to their line with `+N`. Placements other than [`Placement::Replace`] only
/// change the command for vim-family editors.
pub fn editor_command(editor: &str, choice: &Choice) -> Result<String, EditorError> {
    let path = choice.path.to_string_lossy();
    if path.starts_with('-') {
        return Err(EditorError::InvalidPath { path: path.into_owned() });
    }

    let mut command = editor.trim().to_owned();
    if let Some(flag) = placement_flag(editor, choice.placement) {
        command.push(' ');
        command.push_str(flag);
    }
    if let Some(line) = choice.line_number {
        command.push_str(&format!(" +{line}"));
    }
    command.push(' ');
    command.push_str(&shell_single_quote(&path));
    Ok(command)
}

/// Runs the editor on `choice` through `sh -lc` and waits for it to exit.
pub fn launch_editor(editor: &str, choice: &Choice) -> Result<(), EditorError> {
    let command = editor_command(editor, choice)?;
    info!(command = command.as_str(), "launching editor");

    let status = Command::new("sh")
        .arg("-lc")
        .arg(&command)
        .status()
        .map_err(|source| EditorError::Spawn { command: command.clone(), source })?;
    if !status.success() {
        return Err(EditorError::Failed { status });
    }
    Ok(())
}

fn placement_flag(editor: &str, placement: Placement) -> Option<&'static str> {
    let program = editor.split_whitespace().next().map(basename)?;
    if !VIM_FAMILY.contains(&program) {
        return None;
    }
    match placement {
        Placement::Replace => None,
        Placement::NewContainer => Some("-p"),
        Placement::HorizontalSplit => Some("-o"),
        Placement::VerticalSplit => Some("-O"),
    }
}

pub(crate) fn shell_single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
