// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Documents backed by files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::label::is_remote_path;
use crate::model::Document;
use crate::session::HostError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    /// Path shown to the session.
    name: String,
    /// Path used for reading.
    location: PathBuf,
    current: bool,
}

/// An ordered set of documents addressed by their index; unloaded slots stay empty so ids remain
/// stable for the lifetime of the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    entries: Vec<Option<Entry>>,
}

impl DocumentSet {
    /// Documents for explicit paths. Relative paths are resolved against `cwd`.
    pub fn from_paths<I, S>(paths: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = paths
            .into_iter()
            .map(|path| {
                let location = resolve(path.as_ref(), cwd);
                let name = location.to_string_lossy().into_owned();
                Some(Entry { name, location, current: false })
            })
            .collect();
        Self { entries }
    }

    /// Every file below `root`, named relative to it. Hidden entries are skipped.
    pub fn scan(root: &Path) -> Result<Self, HostError> {
        let mut entries = Vec::new();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        for result in walker {
            let entry = result.map_err(|err| {
                let context = format!("scan {}", root.display());
                HostError::io(context, err.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            entries.push(Some(Entry {
                name: relative.to_string_lossy().into_owned(),
                location: entry.path().to_path_buf(),
                current: false,
            }));
        }

        debug!(root = %root.display(), files = entries.len(), "scanned directory");
        Ok(Self { entries })
    }

    /// Flags the document at `path`, resolved like [`DocumentSet::from_paths`] does, as current.
    pub fn mark_current(&mut self, path: &str, cwd: &Path) {
        let location = resolve(path, cwd);
        for entry in self.entries.iter_mut().flatten() {
            entry.current = entry.location == location;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn documents(&self) -> Vec<Document<usize>> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(id, entry)| {
                let entry = entry.as_ref()?;
                Some(Document::new(id, Some(entry.name.clone())).with_current(entry.current))
            })
            .collect()
    }

    pub fn location(&self, id: usize) -> Option<&Path> {
        self.entry(id).map(|entry| entry.location.as_path())
    }

    /// File contents split into lines; invalid UTF-8 is replaced rather than rejected.
    pub fn lines(&self, id: usize) -> Result<Vec<String>, HostError> {
        let entry = self.entry(id).ok_or_else(|| missing(id))?;
        let bytes = fs::read(&entry.location)
            .map_err(|err| HostError::io(format!("read {}", entry.location.display()), err))?;
        Ok(String::from_utf8_lossy(&bytes).lines().map(str::to_owned).collect())
    }

    pub fn remove(&mut self, id: usize) -> Result<(), HostError> {
        self.entries.get_mut(id).and_then(Option::take).map(drop).ok_or_else(|| missing(id))
    }

    fn entry(&self, id: usize) -> Option<&Entry> {
        self.entries.get(id)?.as_ref()
    }
}

fn resolve(path: &str, cwd: &Path) -> PathBuf {
    if is_remote_path(path) {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn missing(id: usize) -> HostError {
    HostError::Unavailable { reason: format!("no document with id {id}") }
}
