// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad: an incremental chooser for open documents, directory files and grep hits.
//!
//! The pure pieces (scoring, label shortening, grid layout and frame rendering) are independent of
//! any UI. [`session::Session`] drives them against a [`session::Host`], and [`tui`] provides a
//! ratatui host for the terminal.

pub mod config;
pub mod editor;
pub mod label;
pub mod layout;
pub mod logging;
pub mod model;
pub mod render;
pub mod score;
pub mod session;
pub mod tui;
