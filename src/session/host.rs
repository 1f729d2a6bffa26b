// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::io;

use serde::Serialize;
use tracing::warn;

use crate::layout::Viewport;
use crate::model::{Document, Placement};
use crate::render::Frame;

use super::Event;

/// Everything a host needs to open a committed candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenRequest<Id> {
    pub id: Id,
    pub placement: Placement,
    /// 1-based line to jump to (grep hits).
    pub line_number: Option<usize>,
    pub label: String,
}

#[derive(Debug)]
pub enum HostError {
    Io { context: String, source: io::Error },
    Unavailable { reason: String },
    OpenFailed { target: String, reason: String },
    Unsupported { operation: &'static str },
}

impl HostError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { context, source } => write!(f, "{context}: {source}"),
            Self::Unavailable { reason } => write!(f, "host unavailable: {reason}"),
            Self::OpenFailed { target, reason } => write!(f, "failed to open {target}: {reason}"),
            Self::Unsupported { operation } => write!(f, "host does not support {operation}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// The environment a [`Session`](super::Session) runs in: documents, drawing and input.
///
/// Calls are strictly sequential; a session never calls back into the host while another host
/// call is in progress.
pub trait Host {
    /// Host-owned document reference.
    type Id: Clone;

    /// Documents available for choosing, in host order.
    fn documents(&mut self) -> Result<Vec<Document<Self::Id>>, HostError>;

    /// Text lines of one document (grep sessions only).
    fn lines(&mut self, id: &Self::Id) -> Result<Vec<String>, HostError>;

    fn open(&mut self, request: &OpenRequest<Self::Id>) -> Result<(), HostError>;

    /// Closes a document (buffer sessions only).
    fn unload(&mut self, _id: &Self::Id) -> Result<(), HostError> {
        Err(HostError::Unsupported { operation: "unload" })
    }

    /// Space available for the candidate grid, excluding the prompt line.
    fn viewport(&self) -> Viewport;

    fn render(&mut self, frame: &Frame) -> Result<(), HostError>;

    /// Blocks until the next input event.
    fn next_event(&mut self) -> Result<Event, HostError>;

    /// Acquires whatever display state the chooser needs while it runs.
    fn capture_ui_state(&mut self) -> Result<(), HostError> {
        Ok(())
    }

    /// Releases what [`Host::capture_ui_state`] acquired. Called on every exit path.
    fn restore_ui_state(&mut self) {}

    /// Host error channel for failures the session recovers from.
    fn report_error(&mut self, error: &HostError) {
        warn!(error = %error, "host operation failed");
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::HostError;

    #[test]
    fn io_errors_expose_their_source() {
        let err = HostError::io("read /tmp/x", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "read /tmp/x: gone");
        assert!(err.source().is_some());
    }

    #[test]
    fn other_errors_render_lowercase_messages() {
        let err = HostError::OpenFailed { target: "a.rs".to_owned(), reason: "busy".to_owned() };
        assert_eq!(err.to_string(), "failed to open a.rs: busy");
        assert!(err.source().is_none());
        let err = HostError::Unsupported { operation: "unload" };
        assert_eq!(err.to_string(), "host does not support unload");
    }
}
