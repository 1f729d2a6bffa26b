// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;

/// Where a committed candidate is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Replace the current view.
    Replace,
    /// A new tab-like container.
    NewContainer,
    HorizontalSplit,
    VerticalSplit,
}

impl Placement {
    pub const ALL: [Placement; 4] =
        [Self::Replace, Self::NewContainer, Self::HorizontalSplit, Self::VerticalSplit];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::NewContainer => "new_container",
            Self::HorizontalSplit => "horizontal_split",
            Self::VerticalSplit => "vertical_split",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a session chooses between; selects the matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Open documents, fuzzy matched on their short labels.
    Buffers,
    /// Filesystem entries, fuzzy matched on their relative paths.
    Files,
    /// Lines of open documents, matched by a case-insensitive pattern.
    Grep,
}

impl SessionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buffers => "buffers",
            Self::Files => "files",
            Self::Grep => "grep",
        }
    }

    /// Whether `up-one-level` edits the query in this kind of session.
    pub fn edits_paths(self) -> bool {
        matches!(self, Self::Buffers | Self::Files)
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
