// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ways of turning the candidate set and a query into a ranked list.

use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::model::{Candidate, Query, RankedList, SessionKind};
use crate::score::{score, SCORE_MATCH, SCORE_NO_MATCH};

/// Field separator of grep hit labels (`name:line:text`).
pub const GREP_LABEL_SEPARATOR: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Scored, filtered and sorted by label.
    Alphabetical,
    /// Scored, filtered and sorted by descending score.
    Fuzzy,
    /// One candidate per document line matching the query as a pattern.
    Grep,
}

impl MatchStrategy {
    /// Empty queries list everything alphabetically in every kind of session. A lone separator
    /// carries no ranking signal for fuzzy sessions and falls back to alphabetical order too.
    pub fn select(kind: SessionKind, query: &Query) -> Self {
        if query.is_empty() {
            return Self::Alphabetical;
        }
        match kind {
            SessionKind::Grep => Self::Grep,
            _ if query.is_separator() => Self::Alphabetical,
            _ => Self::Fuzzy,
        }
    }

    /// Ranks `candidates` against `query`.
    ///
    /// `lines` is only read by [`MatchStrategy::Grep`] and is index-aligned with `candidates`.
    pub fn rank<Id: Clone>(
        self,
        candidates: &[Candidate<Id>],
        lines: &[Vec<String>],
        query: &Query,
    ) -> Matches<Id> {
        match self {
            Self::Alphabetical => {
                let mut items = score_candidates(candidates, query.as_str());
                items.sort_by(|a, b| a.label().cmp(b.label()));
                Matches::ranked(items)
            }
            Self::Fuzzy => {
                let mut items = score_candidates(candidates, query.as_str());
                items.sort_by(|a, b| b.score().total_cmp(&a.score()));
                Matches::ranked(items)
            }
            Self::Grep => match compile_pattern(query.as_str()) {
                Some(pattern) => grep_candidates(candidates, lines, &pattern),
                None => Matches::default(),
            },
        }
    }
}

/// Result of one ranking pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Matches<Id> {
    pub ranked: RankedList<Id>,
    /// Distinct matched substrings in first-seen order.
    pub highlights: Vec<String>,
}

impl<Id> Default for Matches<Id> {
    fn default() -> Self {
        Self { ranked: RankedList::default(), highlights: Vec::new() }
    }
}

impl<Id> Matches<Id> {
    fn ranked(items: Vec<Candidate<Id>>) -> Self {
        Self { ranked: RankedList::new(items), highlights: Vec::new() }
    }
}

fn score_candidates<Id: Clone>(candidates: &[Candidate<Id>], abbrev: &str) -> Vec<Candidate<Id>> {
    candidates
        .iter()
        .filter_map(|candidate| {
            let value = score(candidate.name(), abbrev);
            (value > SCORE_NO_MATCH).then(|| candidate.clone().with_score(value))
        })
        .collect()
}

fn compile_pattern(query: &str) -> Option<Regex> {
    match RegexBuilder::new(query).case_insensitive(true).build() {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            debug!(query, error = %err, "invalid grep pattern");
            None
        }
    }
}

fn grep_candidates<Id: Clone>(
    candidates: &[Candidate<Id>],
    lines: &[Vec<String>],
    pattern: &Regex,
) -> Matches<Id> {
    let mut items = Vec::new();
    let mut highlights = Vec::new();
    let mut seen = BTreeSet::new();

    for (document, document_lines) in candidates.iter().zip(lines) {
        for (idx, line) in document_lines.iter().enumerate() {
            let Some(found) = pattern.find(line) else {
                continue;
            };
            if !found.as_str().is_empty() && seen.insert(found.as_str()) {
                highlights.push(found.as_str().to_owned());
            }

            let line_number = idx + 1;
            let label = format!(
                "{}{GREP_LABEL_SEPARATOR}{line_number}{GREP_LABEL_SEPARATOR}{line}",
                document.name()
            );
            items.push(
                Candidate::new(document.id().clone(), label.clone(), label)
                    .with_line_number(line_number)
                    .with_score(SCORE_MATCH),
            );
        }
    }

    Matches { ranked: RankedList::new(items), highlights }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::MatchStrategy;
    use crate::model::{Candidate, Query, SessionKind};

    fn documents(names: &[&str]) -> Vec<Candidate<usize>> {
        names.iter().enumerate().map(|(idx, name)| Candidate::new(idx, *name, *name)).collect()
    }

    fn lines(text: &[&[&str]]) -> Vec<Vec<String>> {
        text.iter().map(|doc| doc.iter().map(|line| (*line).to_owned()).collect()).collect()
    }

    #[rstest]
    #[case(SessionKind::Buffers, "", MatchStrategy::Alphabetical)]
    #[case(SessionKind::Buffers, ".", MatchStrategy::Alphabetical)]
    #[case(SessionKind::Files, "a", MatchStrategy::Fuzzy)]
    #[case(SessionKind::Grep, "", MatchStrategy::Alphabetical)]
    #[case(SessionKind::Grep, ".", MatchStrategy::Grep)]
    fn strategy_follows_kind_and_query(
        #[case] kind: SessionKind,
        #[case] query: &str,
        #[case] expected: MatchStrategy,
    ) {
        assert_eq!(MatchStrategy::select(kind, &Query::new(query)), expected);
    }

    #[test]
    fn fuzzy_drops_non_matches_and_sorts_by_score() {
        let candidates = documents(&["b.txt", "dir/a.txt", "a.txt"]);
        let matches = MatchStrategy::Fuzzy.rank(&candidates, &[], &Query::new("a"));
        assert_eq!(matches.ranked.labels(), vec!["a.txt", "dir/a.txt"]);
        assert!(matches.highlights.is_empty());
    }

    #[test]
    fn fuzzy_keeps_candidate_order_for_equal_scores() {
        let candidates = documents(&["xa", "ya", "za"]);
        let matches = MatchStrategy::Fuzzy.rank(&candidates, &[], &Query::new("a"));
        assert_eq!(matches.ranked.labels(), vec!["xa", "ya", "za"]);
    }

    #[test]
    fn alphabetical_sorts_labels_ascending() {
        let candidates = documents(&["zeta.rs", "alpha.rs", "Beta.rs"]);
        let matches = MatchStrategy::Alphabetical.rank(&candidates, &[], &Query::default());
        assert_eq!(matches.ranked.labels(), vec!["Beta.rs", "alpha.rs", "zeta.rs"]);
    }

    #[test]
    fn separator_query_still_filters() {
        let candidates = documents(&["Makefile", "main.rs", "lib.rs"]);
        let matches = MatchStrategy::Alphabetical.rank(&candidates, &[], &Query::new("."));
        assert_eq!(matches.ranked.labels(), vec!["lib.rs", "main.rs"]);
    }

    #[test]
    fn grep_labels_hits_with_name_and_line() {
        let candidates = documents(&["a.rs", "b.rs"]);
        let text = lines(&[&["fn main() {}", "let x = 1;"], &["// MAIN entry"]]);
        let matches = MatchStrategy::Grep.rank(&candidates, &text, &Query::new("main"));
        assert_eq!(matches.ranked.labels(), vec!["a.rs:1:fn main() {}", "b.rs:1:// MAIN entry"]);
        assert_eq!(matches.ranked.get(1).map(|hit| *hit.id()), Some(1));
        assert_eq!(matches.ranked.get(0).and_then(|hit| hit.line_number()), Some(1));
        assert_eq!(matches.highlights, vec!["main", "MAIN"]);
    }

    #[test]
    fn grep_collects_each_matched_string_once() {
        let candidates = documents(&["a.rs"]);
        let text = lines(&[&["foo", "bar", "foo again"]]);
        let matches = MatchStrategy::Grep.rank(&candidates, &text, &Query::new("foo"));
        assert_eq!(matches.ranked.len(), 2);
        assert_eq!(matches.ranked.get(1).and_then(|hit| hit.line_number()), Some(3));
        assert_eq!(matches.highlights, vec!["foo"]);
    }

    #[test]
    fn invalid_grep_pattern_yields_no_matches() {
        let candidates = documents(&["a.rs"]);
        let text = lines(&[&["(unclosed"]]);
        let matches = MatchStrategy::Grep.rank(&candidates, &text, &Query::new("(unclosed"));
        assert!(matches.ranked.is_empty());
        assert!(matches.highlights.is_empty());
    }
}
