// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Short display labels for sets of full paths.
//!
//! Most paths shorten to their basename. When several paths share a basename, the longest
//! segment-aligned prefix they have in common is stripped instead, so the remaining parent
//! segments tell them apart (`/x/foo.rb`, `/y/foo.rb` -> `x/foo.rb`, `y/foo.rb`).

use std::collections::BTreeMap;

pub const PATH_SEPARATOR: char = '/';
pub const NO_NAME_LABEL: &str = "[No Name]";

/// Scheme prefixes of remote paths; these are shown verbatim.
pub const REMOTE_PATH_PREFIXES: [&str; 1] = ["scp://"];

/// Computes a short label for every entry of `paths` (index-aligned with the input).
///
/// `None` entries are unnamed documents and map to [`NO_NAME_LABEL`].
pub fn shorten_paths(paths: &[Option<&str>]) -> Vec<String> {
    let mut groups = BTreeMap::<&str, Vec<&str>>::new();
    for path in paths.iter().flatten().copied() {
        if !is_remote_path(path) {
            groups.entry(basename(path)).or_default().push(path);
        }
    }

    let prefixes = groups
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(base, members)| (base, common_dir_prefix(&members)))
        .collect::<BTreeMap<_, _>>();

    paths
        .iter()
        .map(|path| match path {
            None => NO_NAME_LABEL.to_owned(),
            Some(path) if is_remote_path(path) => (*path).to_owned(),
            Some(path) => {
                let base = basename(path);
                let short = prefixes
                    .get(base)
                    .map(|prefix| &path[prefix.len()..])
                    .unwrap_or(base);
                if short.is_empty() {
                    base.to_owned()
                } else {
                    short.to_owned()
                }
            }
        })
        .collect()
}

/// Maps every full path in `paths` to its short label.
pub fn shorten<'a>(paths: impl IntoIterator<Item = &'a str>) -> BTreeMap<String, String> {
    let paths = paths.into_iter().map(Some).collect::<Vec<_>>();
    let labels = shorten_paths(&paths);
    paths.into_iter().flatten().map(str::to_owned).zip(labels).collect()
}

/// Final path segment, ignoring trailing separators (`a/b/` -> `b`).
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(PATH_SEPARATOR);
    if trimmed.is_empty() {
        return path;
    }
    match trimmed.rfind(PATH_SEPARATOR) {
        Some(idx) => &trimmed[idx + PATH_SEPARATOR.len_utf8()..],
        None => trimmed,
    }
}

pub fn is_remote_path(path: &str) -> bool {
    REMOTE_PATH_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Longest common prefix of `paths` that ends exactly at a path separator.
///
/// Returns an empty prefix when the paths share no complete leading segment.
pub fn common_dir_prefix<'a>(paths: &[&'a str]) -> &'a str {
    let Some((first, rest)) = paths.split_first() else {
        return "";
    };

    let common_len = rest.iter().fold(first.len(), |len, path| {
        first.as_bytes()[..len]
            .iter()
            .zip(path.as_bytes())
            .take_while(|(a, b)| a == b)
            .count()
    });

    match first.as_bytes()[..common_len].iter().rposition(|&b| b == PATH_SEPARATOR as u8) {
        Some(idx) => &first[..=idx],
        None => "",
    }
}
