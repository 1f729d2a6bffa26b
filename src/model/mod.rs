// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core chooser data model.
//!
//! Documents come from the host; candidates are what the session scores, ranks and shows.

pub mod candidate;
pub mod placement;
pub mod query;
pub mod ranked;

pub use candidate::{Candidate, Document};
pub use placement::{Placement, SessionKind};
pub use query::Query;
pub use ranked::{RankedList, Selection};
