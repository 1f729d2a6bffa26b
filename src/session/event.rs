// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Placement;

/// Input accepted by a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A typed character; control characters are ignored.
    Char(char),
    Backspace,
    Clear,
    UpOneLevel,
    Next,
    Previous,
    Commit(Placement),
    Cancel,
    /// Close the selected document and stay in the chooser.
    Unload,
}

impl Event {
    /// Whether handling this event rebuilds the ranked list.
    pub fn edits_query(self) -> bool {
        matches!(self, Self::Char(_) | Self::Backspace | Self::Clear | Self::UpOneLevel)
    }
}
