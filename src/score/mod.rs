// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fuzzy relevance scoring.
//!
//! Scores a candidate label against a typed abbreviation. The score is the mean of a per-character
//! score array over the label, so short, front-loaded matches that land on word or camel-case
//! boundaries rank highest.

pub const SCORE_NO_MATCH: f64 = 0.0;
pub const SCORE_MATCH: f64 = 1.0;
pub const SCORE_TRAILING: f64 = 0.8;
pub const SCORE_TRAILING_BUT_STARTED: f64 = 0.9;
pub const SCORE_BUFFER: f64 = 0.85;

const WORD_SEPARATORS: [char; 4] = [' ', '.', '_', '-'];

/// Scores `text` against `abbrev`, returning a value in `[0, 1]`.
///
/// - An empty `abbrev` scores [`SCORE_TRAILING`] so an empty query still keeps every candidate.
/// - Every abbreviation character must be found, in order, in `text` (ASCII case-insensitive);
///   otherwise the score is [`SCORE_NO_MATCH`].
pub fn score(text: &str, abbrev: &str) -> f64 {
    if abbrev.is_empty() {
        return SCORE_TRAILING;
    }

    let text: Vec<char> = text.chars().collect();
    let abbrev: Vec<char> = abbrev.chars().collect();
    if abbrev.len() > text.len() {
        return SCORE_NO_MATCH;
    }

    let Some(scores) = score_array(&text, &abbrev) else {
        return SCORE_NO_MATCH;
    };

    let sum: f64 = scores.iter().sum();
    sum / scores.len() as f64
}

/// Returns `true` when `query` is a single word separator (e.g. `.`), which carries no ranking
/// signal on its own.
pub fn is_separator_query(query: &str) -> bool {
    let mut chars = query.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if is_word_separator(ch))
}

fn is_word_separator(ch: char) -> bool {
    WORD_SEPARATORS.contains(&ch)
}

fn score_array(text: &[char], abbrev: &[char]) -> Option<Vec<f64>> {
    let lower: Vec<char> = text.iter().map(char::to_ascii_lowercase).collect();
    let mut scores = vec![SCORE_NO_MATCH; text.len()];

    let mut last_index = 0usize;
    let mut started = false;

    for want in abbrev.iter().map(char::to_ascii_lowercase) {
        let index = last_index + lower[last_index..].iter().position(|&ch| ch == want)?;
        if index == 0 {
            started = true;
        }

        if index > 0 && is_word_separator(text[index - 1]) {
            scores[index - 1] = SCORE_MATCH;
            fill(&mut scores, last_index, index - 1, SCORE_BUFFER);
        } else if text[index].is_ascii_uppercase() {
            fill(&mut scores, last_index, index, SCORE_BUFFER);
        } else {
            fill(&mut scores, last_index, index, SCORE_NO_MATCH);
        }

        scores[index] = SCORE_MATCH;
        last_index = index + 1;
    }

    let trailing = if started { SCORE_TRAILING_BUT_STARTED } else { SCORE_TRAILING };
    let len = scores.len();
    fill(&mut scores, last_index, len, trailing);

    Some(scores)
}

fn fill(scores: &mut [f64], start: usize, end: usize, value: f64) {
    if start < end {
        scores[start..end].fill(value);
    }
}
