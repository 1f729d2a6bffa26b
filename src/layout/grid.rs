// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

/// Joins adjacent columns; never emitted after the last column.
pub const COLUMN_SEPARATOR: &str = "    ";
pub const COLUMN_SEPARATOR_WIDTH: usize = COLUMN_SEPARATOR.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: usize,
    height: usize,
}

impl Viewport {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Column-major grid plan for a list of labels.
///
/// Column `c` holds the labels at `[c * row_count, (c + 1) * row_count)`. Only the first
/// `column_count` columns are displayed; when labels had to be dropped, `truncated` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    row_count: usize,
    column_widths: Vec<usize>,
    truncated: bool,
    label_count: usize,
}

impl GridLayout {
    fn empty() -> Self {
        Self { row_count: 0, column_widths: Vec::new(), truncated: false, label_count: 0 }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn label_count(&self) -> usize {
        self.label_count
    }

    /// Number of labels that land in a displayed column.
    pub fn visible_count(&self) -> usize {
        self.label_count.min(self.row_count * self.column_count())
    }

    /// Total row width: column widths plus the separators between them.
    pub fn total_width(&self) -> usize {
        let columns = self.column_count();
        self.column_widths.iter().sum::<usize>()
            + COLUMN_SEPARATOR_WIDTH * columns.saturating_sub(1)
    }

    /// `(row, column)` of the label at `index`, if it is displayed.
    pub fn cell_of(&self, index: usize) -> Option<(usize, usize)> {
        if self.row_count == 0 || index >= self.visible_count() {
            return None;
        }
        Some((index % self.row_count, index / self.row_count))
    }

    /// Character offset of column `column` within a rendered row.
    pub fn column_offset(&self, column: usize) -> usize {
        self.column_widths[..column.min(self.column_count())]
            .iter()
            .map(|width| width + COLUMN_SEPARATOR_WIDTH)
            .sum()
    }
}

pub fn label_width(label: &str) -> usize {
    label.chars().count()
}

/// Packs `labels` into the fewest rows that fit `viewport`.
///
/// Labels keep their order and are laid out column-major. When no row count within the viewport
/// height fits every label, all but one row are used and `truncated` is set (the spare row is for
/// a truncation marker).
pub fn layout_grid<S: AsRef<str>>(labels: &[S], viewport: Viewport) -> GridLayout {
    if labels.is_empty() {
        return GridLayout::empty();
    }

    let widths = labels.iter().map(|label| label_width(label.as_ref())).collect::<Vec<_>>();
    let mut ranges = RangeWidths::new(&widths);

    let (row_count, truncated) = optimal_row_count(&mut ranges, viewport);
    let (column_widths, dropped) = fit_columns(&mut ranges, row_count, viewport.width);

    GridLayout {
        row_count,
        column_widths,
        truncated: truncated || dropped,
        label_count: widths.len(),
    }
}

fn optimal_row_count(ranges: &mut RangeWidths<'_>, viewport: Viewport) -> (usize, bool) {
    let max_width = viewport.width;
    let max_height = viewport.height;
    let truncated_rows = max_height.saturating_sub(1);

    if max_height == 0 {
        return (0, true);
    }

    if single_row_width(ranges.widths) <= max_width {
        return (1, false);
    }

    if ranges.widths.len() > displayable_upper_bound(ranges.widths, viewport) {
        return (truncated_rows, true);
    }

    // One row is already known not to fit.
    let mut lower = 1;
    let mut upper = max_height + 1;
    while lower + 1 != upper {
        let rows = lower + (upper - lower) / 2;
        if ranges.total_width(rows, max_width) <= max_width {
            upper = rows;
        } else {
            lower = rows;
        }
    }

    if upper > max_height {
        (truncated_rows, true)
    } else {
        (upper, false)
    }
}

fn single_row_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + COLUMN_SEPARATOR_WIDTH * widths.len().saturating_sub(1)
}

/// Upper bound on how many labels can be shown: the most columns that fit when the widest label
/// is paired with the narrowest ones, times the height.
fn displayable_upper_bound(widths: &[usize], viewport: Viewport) -> usize {
    let mut sorted = widths.to_vec();
    sorted.sort_unstable();
    let Some(longest) = sorted.pop() else {
        return 0;
    };

    let mut row_width = longest + COLUMN_SEPARATOR_WIDTH;
    let mut column_count = 1usize;
    for width in sorted {
        row_width += width;
        if row_width > viewport.width {
            break;
        }
        column_count += 1;
        row_width += COLUMN_SEPARATOR_WIDTH;
    }

    column_count.saturating_mul(viewport.height)
}

fn fit_columns(
    ranges: &mut RangeWidths<'_>,
    row_count: usize,
    max_width: usize,
) -> (Vec<usize>, bool) {
    let label_count = ranges.widths.len();
    if row_count == 0 {
        return (Vec::new(), label_count > 0);
    }

    let mut column_widths = Vec::new();
    let mut total = 0usize;
    for start in (0..label_count).step_by(row_count) {
        let end = (start + row_count).min(label_count) - 1;
        let width = ranges.range_max(start, end);
        total += width;
        if total > max_width {
            break;
        }
        column_widths.push(width);
        total += COLUMN_SEPARATOR_WIDTH;
    }

    if column_widths.is_empty() && max_width > 0 {
        // The first column alone is too wide; show it clipped rather than showing nothing.
        let first = ranges.range_max(0, row_count.min(label_count) - 1);
        column_widths.push(first.min(max_width));
        return (column_widths, true);
    }

    let dropped = column_widths.len() * row_count < label_count;
    (column_widths, dropped)
}

/// Range-max over label widths, memoized by `(start, end)` for one layout pass.
///
/// Binary-search probes with different row counts split the labels into overlapping ranges; the
/// halving recursion lets those probes share sub-results.
struct RangeWidths<'a> {
    widths: &'a [usize],
    memo: HashMap<(usize, usize), usize>,
}

impl<'a> RangeWidths<'a> {
    fn new(widths: &'a [usize]) -> Self {
        Self { widths, memo: HashMap::new() }
    }

    /// Widest label in the inclusive index range `start..=end`.
    fn range_max(&mut self, start: usize, end: usize) -> usize {
        if start == end {
            return self.widths[start];
        }
        if let Some(&width) = self.memo.get(&(start, end)) {
            return width;
        }

        let split = start + ((end - start) >> 1);
        let width = self.range_max(start, split).max(self.range_max(split + 1, end));
        self.memo.insert((start, end), width);
        width
    }

    /// Row width when laid out with `row_count` rows. Stops early once `limit` is exceeded.
    fn total_width(&mut self, row_count: usize, limit: usize) -> usize {
        let label_count = self.widths.len();
        let mut total = 0usize;
        for start in (0..label_count).step_by(row_count) {
            let end = (start + row_count).min(label_count) - 1;
            total += self.range_max(start, end);
            if total > limit {
                return total;
            }
            total += COLUMN_SEPARATOR_WIDTH;
        }
        total.saturating_sub(COLUMN_SEPARATOR_WIDTH)
    }
}
