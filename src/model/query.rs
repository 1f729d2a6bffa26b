// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::label::PATH_SEPARATOR;
use crate::score::is_separator_query;

/// The text typed at the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True for a query consisting of a single word separator.
    pub fn is_separator(&self) -> bool {
        is_separator_query(&self.text)
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Removes the last char; returns false when the query was already empty.
    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Drops the trailing path segment (`a/b/c` -> `a/b/`, `a/b/` -> `a/`, `a` -> empty).
    pub fn up_one_level(&mut self) {
        let trimmed = self.text.trim_end_matches(PATH_SEPARATOR);
        match trimmed.rfind(PATH_SEPARATOR) {
            Some(idx) => self.text.truncate(idx + PATH_SEPARATOR.len_utf8()),
            None => self.text.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Query;

    #[rstest]
    #[case("src/score/mod", "src/score/")]
    #[case("src/score/", "src/")]
    #[case("src//", "")]
    #[case("main", "")]
    #[case("/", "")]
    #[case("/etc", "/")]
    #[case("", "")]
    fn up_one_level_drops_trailing_segment(#[case] text: &str, #[case] expected: &str) {
        let mut query = Query::new(text);
        query.up_one_level();
        assert_eq!(query.as_str(), expected);
    }

    #[test]
    fn pop_on_empty_query_is_a_no_op() {
        let mut query = Query::default();
        assert!(!query.pop());
        assert!(query.is_empty());
    }

    #[test]
    fn single_separator_queries_are_detected() {
        assert!(Query::new(".").is_separator());
        assert!(!Query::new("..").is_separator());
        assert!(!Query::new("a").is_separator());
    }
}
