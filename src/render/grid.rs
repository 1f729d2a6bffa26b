// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::{GridLayout, COLUMN_SEPARATOR};

use super::text::{center, pad_right, text_len, truncate_with_ellipsis};

pub const TRUNCATED_MARKER: &str = "-- TRUNCATED --";
pub const NO_MATCHES_MARKER: &str = "-- NO MATCHES --";

/// Renders `labels` into text rows following `layout`.
///
/// Every column but the last is padded to its width and followed by [`COLUMN_SEPARATOR`]. When the
/// layout is truncated, a centered [`TRUNCATED_MARKER`] row is appended. Trailing spaces are
/// trimmed from grid rows.
pub fn render_grid<S: AsRef<str>>(labels: &[S], layout: &GridLayout, width: usize) -> Vec<String> {
    let mut rows = vec![String::new(); layout.row_count()];
    let column_count = layout.column_count();

    if layout.row_count() > 0 {
        for (column, chunk) in labels.chunks(layout.row_count()).take(column_count).enumerate() {
            let column_width = layout.column_widths()[column];
            let last = column + 1 == column_count;
            for (row, label) in chunk.iter().enumerate() {
                let label = label.as_ref();
                let cell = if text_len(label) > column_width {
                    truncate_with_ellipsis(label, column_width)
                } else {
                    label.to_owned()
                };

                if last {
                    rows[row].push_str(&cell);
                } else {
                    rows[row].push_str(&pad_right(&cell, column_width));
                    rows[row].push_str(COLUMN_SEPARATOR);
                }
            }
        }
    }

    for row in &mut rows {
        row.truncate(row.trim_end_matches(' ').len());
    }

    if layout.truncated() {
        rows.push(center(TRUNCATED_MARKER, width));
    }

    rows
}

pub fn render_no_matches(width: usize) -> String {
    center(NO_MATCHES_MARKER, width)
}
