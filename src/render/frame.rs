// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::{layout_grid, GridLayout, Viewport};

use super::grid::{render_grid, render_no_matches};
use super::text::text_len;

pub const PROMPT_PREFIX: &str = ">> ";

/// A character span inside one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    row: usize,
    start: usize,
    width: usize,
}

impl CellSpan {
    pub fn new(row: usize, start: usize, width: usize) -> Self {
        Self { row, start, width }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Offset in chars from the start of the row.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameBody {
    /// Nothing can be drawn (zero-sized viewport).
    Empty,
    NoMatches { row: String },
    Grid {
        rows: Vec<String>,
        truncated: bool,
        selected: Option<CellSpan>,
        current: Option<CellSpan>,
    },
}

/// Everything a host needs to paint one chooser frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    prompt: String,
    body: FrameBody,
    highlights: Vec<String>,
}

impl Frame {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn body(&self) -> &FrameBody {
        &self.body
    }

    /// Matched substrings hosts may emphasize (grep sessions).
    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }

    pub fn rows(&self) -> &[String] {
        match &self.body {
            FrameBody::Empty => &[],
            FrameBody::NoMatches { row } => std::slice::from_ref(row),
            FrameBody::Grid { rows, .. } => rows.as_slice(),
        }
    }

    pub fn selected(&self) -> Option<CellSpan> {
        match &self.body {
            FrameBody::Grid { selected, .. } => *selected,
            _ => None,
        }
    }

    pub fn truncated(&self) -> bool {
        matches!(self.body, FrameBody::Grid { truncated: true, .. })
    }

    /// Text content of the selected cell, if any.
    pub fn selected_text(&self) -> Option<String> {
        let span = self.selected()?;
        let row = self.rows().get(span.row())?;
        Some(row.chars().skip(span.start()).take(span.width()).collect())
    }
}

/// Inputs for [`build_frame`].
#[derive(Debug, Clone)]
pub struct FrameRequest<'a, S> {
    pub query: &'a str,
    pub labels: &'a [S],
    pub selected: Option<usize>,
    pub current: Option<usize>,
    pub highlights: &'a [String],
    pub viewport: Viewport,
}

/// Lays out and renders one chooser frame.
///
/// An empty label list renders the no-matches row without running the layout.
pub fn build_frame<S: AsRef<str>>(request: FrameRequest<'_, S>) -> Frame {
    let prompt = format!("{PROMPT_PREFIX}{}", request.query);
    let highlights = request.highlights.to_vec();
    let viewport = request.viewport;

    if viewport.is_empty() {
        return Frame { prompt, body: FrameBody::Empty, highlights };
    }

    if request.labels.is_empty() {
        let row = render_no_matches(viewport.width());
        return Frame { prompt, body: FrameBody::NoMatches { row }, highlights };
    }

    let layout = layout_grid(request.labels, viewport);
    let rows = render_grid(request.labels, &layout, viewport.width());
    let span_of = |index: usize| cell_span(&layout, request.labels, index);

    let body = FrameBody::Grid {
        rows,
        truncated: layout.truncated(),
        selected: request.selected.and_then(span_of),
        current: request.current.and_then(span_of),
    };
    Frame { prompt, body, highlights }
}

fn cell_span<S: AsRef<str>>(layout: &GridLayout, labels: &[S], index: usize) -> Option<CellSpan> {
    let (row, column) = layout.cell_of(index)?;
    let label = labels.get(index)?.as_ref();
    let width = text_len(label).min(layout.column_widths()[column]);
    Some(CellSpan::new(row, layout.column_offset(column), width))
}
