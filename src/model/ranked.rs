// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::slice;

use super::Candidate;

/// Candidates that matched the current query, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedList<Id> {
    items: Vec<Candidate<Id>>,
}

impl<Id> Default for RankedList<Id> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<Id> RankedList<Id> {
    pub fn new(items: Vec<Candidate<Id>>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Candidate<Id>> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Candidate<Id>> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Candidate<Id>] {
        &self.items
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(Candidate::label).collect()
    }

    /// Position of the candidate flagged as current, if it is ranked.
    pub fn current_position(&self) -> Option<usize> {
        self.items.iter().position(Candidate::is_current)
    }
}

impl<'a, Id> IntoIterator for &'a RankedList<Id> {
    type Item = &'a Candidate<Id>;
    type IntoIter = slice::Iter<'a, Candidate<Id>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Index of the highlighted entry of a [`RankedList`].
///
/// Kept in `[0, len)` by wrapping on navigation and clamping whenever the list changes; an empty
/// list pins it at 0 with nothing selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn next(&mut self, len: usize) {
        self.index = if len == 0 { 0 } else { (self.index + 1) % len };
    }

    pub fn previous(&mut self, len: usize) {
        self.index = if len == 0 { 0 } else { (self.index % len + len - 1) % len };
    }

    /// Moves to `index`, clamped to the last entry of a list of `len`.
    pub fn restore(&mut self, index: usize, len: usize) {
        self.index = index.min(len.saturating_sub(1));
    }

    pub fn clamp(&mut self, len: usize) {
        self.restore(self.index, len);
    }

    /// The selected index, or `None` for an empty list.
    pub fn resolve(self, len: usize) -> Option<usize> {
        (self.index < len).then_some(self.index)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{RankedList, Selection};
    use crate::model::Candidate;

    #[rstest]
    #[case(0, 3, 1)]
    #[case(2, 3, 0)]
    #[case(0, 0, 0)]
    fn next_wraps_around(#[case] start: usize, #[case] len: usize, #[case] expected: usize) {
        let mut selection = Selection::default();
        selection.restore(start, len);
        selection.next(len);
        assert_eq!(selection.index(), expected);
    }

    #[rstest]
    #[case(0, 3, 2)]
    #[case(2, 3, 1)]
    #[case(0, 1, 0)]
    #[case(0, 0, 0)]
    fn previous_wraps_around(#[case] start: usize, #[case] len: usize, #[case] expected: usize) {
        let mut selection = Selection::default();
        selection.restore(start, len);
        selection.previous(len);
        assert_eq!(selection.index(), expected);
    }

    #[test]
    fn clamp_keeps_index_inside_shrunk_list() {
        let mut selection = Selection::default();
        selection.restore(4, 10);
        selection.clamp(3);
        assert_eq!(selection.index(), 2);
        selection.clamp(0);
        assert_eq!(selection.index(), 0);
        assert_eq!(selection.resolve(0), None);
    }

    #[test]
    fn current_position_finds_flagged_candidate() {
        let ranked = RankedList::new(vec![
            Candidate::new(1, "a", "a"),
            Candidate::new(2, "b", "b").with_current(true),
        ]);
        assert_eq!(ranked.current_position(), Some(1));
        assert_eq!(ranked.labels(), vec!["a", "b"]);
    }
}
