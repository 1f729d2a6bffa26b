// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic path sets (no RNG).

const DIRS: [&str; 6] = ["src", "src/session", "src/render", "tests", "docs/guide", "vendor/lib"];
const STEMS: [&str; 8] = ["main", "mod", "fooBar", "query_parser", "layout-grid", "README", "lib", "x"];
const EXTS: [&str; 4] = ["rs", "md", "toml", "rb"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LargeDeep,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::LargeDeep];

    pub fn id(self) -> &'static str {
        match self {
            Case::Small => "small",
            Case::Medium => "medium",
            Case::LargeDeep => "large_deep",
        }
    }

    fn count(self) -> usize {
        match self {
            Case::Small => 24,
            Case::Medium => 400,
            Case::LargeDeep => 5_000,
        }
    }
}

/// Absolute paths; basenames repeat across directories so shortening has groups to resolve.
pub fn paths(case: Case) -> Vec<String> {
    (0..case.count())
        .map(|idx| {
            let dir = DIRS[idx % DIRS.len()];
            let stem = STEMS[(idx / DIRS.len()) % STEMS.len()];
            let ext = EXTS[(idx / 3) % EXTS.len()];
            let depth = if case == Case::LargeDeep { idx % 7 } else { 0 };
            let nested = (0..depth).map(|level| format!("/d{level}")).collect::<String>();
            format!("/home/dev/project/{dir}{nested}/{stem}{}.{ext}", idx / 48)
        })
        .collect()
}

pub const QUERIES: [&str; 4] = ["m", "mrs", "qp", "srclayoutgrid"];
