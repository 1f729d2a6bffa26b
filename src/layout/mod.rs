// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms for the chooser display.
//!
//! This module packs ranked labels into a column-major grid under a fixed viewport.

pub mod grid;

pub use grid::{
    label_width, layout_grid, GridLayout, Viewport, COLUMN_SEPARATOR, COLUMN_SEPARATOR_WIDTH,
};
