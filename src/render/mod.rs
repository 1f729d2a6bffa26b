// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering for the chooser display.
//!
//! Turns a [`GridLayout`](crate::layout::GridLayout) plus its labels into padded text rows and
//! bundles them with the prompt and selection into a [`Frame`] for a host to paint.

pub mod frame;
pub mod grid;
pub(crate) mod text;

pub use frame::{build_frame, CellSpan, Frame, FrameBody, FrameRequest, PROMPT_PREFIX};
pub use grid::{render_grid, render_no_matches, NO_MATCHES_MARKER, TRUNCATED_MARKER};
