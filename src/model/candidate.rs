// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A document as reported by the host at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<Id> {
    id: Id,
    path: Option<String>,
    modified: bool,
    current: bool,
}

impl<Id> Document<Id> {
    /// `path` is `None` for unnamed documents.
    pub fn new(id: Id, path: Option<String>) -> Self {
        Self { id, path, modified: false, current: false }
    }

    pub fn with_modified(mut self, modified: bool) -> Self {
        self.modified = modified;
        self
    }

    pub fn with_current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Whether this is the document the user is currently looking at.
    pub fn is_current(&self) -> bool {
        self.current
    }
}

/// One selectable item: a document, a filesystem entry or a grep hit.
///
/// `name` is the text the query is matched against; `label` is what gets laid out and may carry
/// decorations such as the modified marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<Id> {
    id: Id,
    name: String,
    label: String,
    score: f64,
    line_number: Option<usize>,
    current: bool,
}

impl<Id> Candidate<Id> {
    pub fn new(id: Id, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            label: label.into(),
            score: 0.0,
            line_number: None,
            current: false,
        }
    }

    pub fn with_line_number(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    pub fn with_current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// 1-based source line of a grep hit.
    pub fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    pub fn is_current(&self) -> bool {
        self.current
    }
}

impl<Id> AsRef<str> for Candidate<Id> {
    fn as_ref(&self) -> &str {
        &self.label
    }
}
