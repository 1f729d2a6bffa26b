// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The chooser state machine.
//!
//! A [`Session`] owns the candidate set, the query and the selection. The host feeds it one
//! [`Event`] at a time; query edits trigger a full re-rank, navigation only moves the selection.
//! Every handled event ends with a fresh [`Frame`](crate::render::Frame) sent to the host.

use std::fmt;

use tracing::{debug, info, warn};

use crate::label::{shorten_paths, NO_NAME_LABEL};
use crate::model::{Candidate, Document, Placement, Query, RankedList, Selection, SessionKind};
use crate::render::{build_frame, FrameRequest};

mod event;
mod host;
mod strategy;


pub use event::Event;
pub use host::{Host, HostError, OpenRequest};
pub use strategy::{MatchStrategy, Matches, GREP_LABEL_SEPARATOR};

/// Label suffix of documents with unsaved changes.
pub const MODIFIED_MARKER: &str = " [+]";

#[derive(Debug)]
pub enum SessionError {
    Host(HostError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host(err) => write!(f, "chooser aborted: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Host(err) => Some(err),
        }
    }
}

impl From<HostError> for SessionError {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
}

/// How a [`Session::run`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<Id> {
    Opened(OpenRequest<Id>),
    Cancelled,
    /// `run` was called while the session was already running.
    AlreadyRunning,
}

/// Grep state stashed at session end and served again by the next start.
#[derive(Debug, Clone)]
struct GrepResume<Id> {
    query: Query,
    ranked: RankedList<Id>,
    highlights: Vec<String>,
    selection: usize,
}

#[derive(Debug)]
pub struct Session<Id> {
    kind: SessionKind,
    state: SessionState,
    initial_query: Query,
    query: Query,
    candidates: Vec<Candidate<Id>>,
    lines: Option<Vec<Vec<String>>>,
    ranked: RankedList<Id>,
    selection: Selection,
    highlights: Vec<String>,
    resume: Option<GrepResume<Id>>,
}

impl<Id: Clone> Session<Id> {
    pub fn new(kind: SessionKind) -> Self {
        Self {
            kind,
            state: SessionState::Idle,
            initial_query: Query::default(),
            query: Query::default(),
            candidates: Vec::new(),
            lines: None,
            ranked: RankedList::default(),
            selection: Selection::default(),
            highlights: Vec::new(),
            resume: None,
        }
    }

    /// Query typed in advance of every start that does not resume a previous grep.
    pub fn with_query(mut self, text: impl Into<String>) -> Self {
        self.initial_query = Query::new(text);
        self
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn ranked(&self) -> &RankedList<Id> {
        &self.ranked
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The candidate a commit would open.
    pub fn selected(&self) -> Option<&Candidate<Id>> {
        self.ranked.get(self.selection.resolve(self.ranked.len())?)
    }

    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }

    /// Starts the session and drives it with host events until it ends.
    ///
    /// Host UI state is restored on every exit path, including errors and panics.
    pub fn run<H: Host<Id = Id>>(&mut self, host: &mut H) -> Result<Outcome<Id>, SessionError> {
        if !self.start(host)? {
            return Ok(Outcome::AlreadyRunning);
        }

        let mut guard = UiGuard { session: self, host, armed: true };
        loop {
            let event = guard.host.next_event()?;
            if let Some(outcome) = guard.session.handle_event(&mut *guard.host, event) {
                return Ok(outcome);
            }
        }
    }

    /// Captures the host UI, loads candidates and draws the first frame.
    ///
    /// Returns `false` without touching anything if the session is already running.
    pub fn start<H: Host<Id = Id>>(&mut self, host: &mut H) -> Result<bool, SessionError> {
        if self.is_running() {
            debug!(kind = %self.kind, "session already running");
            return Ok(false);
        }

        host.capture_ui_state()?;
        self.state = SessionState::Running;

        let mut guard = UiGuard { session: self, host, armed: true };
        guard.session.load_first_frame(&mut *guard.host);
        guard.armed = false;
        Ok(true)
    }

    fn load_first_frame<H: Host<Id = Id>>(&mut self, host: &mut H) {
        self.selection.reset();
        self.highlights.clear();
        self.load_candidates(host);

        match self.resume.take() {
            Some(resume) => {
                self.query = resume.query;
                if resume.ranked.is_empty() {
                    self.recompute(host);
                } else {
                    self.ranked = resume.ranked;
                    self.highlights = resume.highlights;
                }
                self.selection.restore(resume.selection, self.ranked.len());
            }
            None => {
                self.query = self.initial_query.clone();
                self.recompute(host);
            }
        }

        info!(
            kind = %self.kind,
            candidates = self.candidates.len(),
            ranked = self.ranked.len(),
            "session started"
        );
        self.draw(host);
    }

    /// Applies one event. Returns the outcome when the event ended the session.
    pub fn handle_event<H: Host<Id = Id>>(&mut self, host: &mut H, event: Event) -> Option<Outcome<Id>> {
        if !self.is_running() {
            debug!(?event, "event ignored while idle");
            return None;
        }
        debug!(?event, query = self.query.as_str(), ranked = self.ranked.len(), "session event");

        match event {
            Event::Char(ch) if ch.is_control() => return None,
            Event::Char(ch) => self.query.push(ch),
            Event::Backspace => {
                self.query.pop();
            }
            Event::Clear => self.query.clear(),
            Event::UpOneLevel => {
                if !self.kind.edits_paths() {
                    return None;
                }
                self.query.up_one_level();
            }
            Event::Next => self.selection.next(self.ranked.len()),
            Event::Previous => self.selection.previous(self.ranked.len()),
            Event::Commit(placement) => return self.commit(host, placement),
            Event::Cancel => {
                self.finish(host);
                info!(kind = %self.kind, "session cancelled");
                return Some(Outcome::Cancelled);
            }
            Event::Unload => self.unload_selected(host),
        }

        if event.edits_query() {
            self.requery(host);
        }
        self.draw(host);
        None
    }

    fn requery<H: Host<Id = Id>>(&mut self, host: &mut H) {
        self.selection.reset();
        self.recompute(host);
    }

    fn recompute<H: Host<Id = Id>>(&mut self, host: &mut H) {
        let strategy = MatchStrategy::select(self.kind, &self.query);
        if strategy == MatchStrategy::Grep {
            self.load_lines(host);
        }

        let lines = self.lines.as_deref().unwrap_or_default();
        let matches = strategy.rank(&self.candidates, lines, &self.query);
        self.ranked = matches.ranked;
        self.highlights = matches.highlights;
        self.selection.clamp(self.ranked.len());
    }

    fn load_candidates<H: Host<Id = Id>>(&mut self, host: &mut H) {
        let documents = host.documents().unwrap_or_else(|err| {
            warn!(error = %err, "failed to enumerate documents");
            host.report_error(&err);
            Vec::new()
        });

        self.lines = None;
        self.candidates = match self.kind {
            SessionKind::Files => documents
                .iter()
                .map(|document| {
                    let path = document.path().unwrap_or(NO_NAME_LABEL);
                    Candidate::new(document.id().clone(), path, path)
                        .with_current(document.is_current())
                })
                .collect(),
            SessionKind::Buffers | SessionKind::Grep => {
                let paths = documents.iter().map(Document::path).collect::<Vec<_>>();
                documents
                    .iter()
                    .zip(shorten_paths(&paths))
                    .map(|(document, name)| {
                        let label = if self.kind == SessionKind::Buffers && document.is_modified() {
                            format!("{name}{MODIFIED_MARKER}")
                        } else {
                            name.clone()
                        };
                        Candidate::new(document.id().clone(), name, label)
                            .with_current(document.is_current())
                    })
                    .collect()
            }
        };
    }

    fn load_lines<H: Host<Id = Id>>(&mut self, host: &mut H) {
        if self.lines.is_some() {
            return;
        }

        let mut lines = Vec::with_capacity(self.candidates.len());
        for candidate in &self.candidates {
            lines.push(host.lines(candidate.id()).unwrap_or_else(|err| {
                warn!(document = candidate.name(), error = %err, "failed to read document lines");
                host.report_error(&err);
                Vec::new()
            }));
        }
        debug!(documents = lines.len(), "loaded grep lines");
        self.lines = Some(lines);
    }

    fn commit<H: Host<Id = Id>>(&mut self, host: &mut H, placement: Placement) -> Option<Outcome<Id>> {
        let Some(candidate) = self.selected() else {
            debug!("nothing selected to commit");
            return None;
        };
        let request = OpenRequest {
            id: candidate.id().clone(),
            placement,
            line_number: candidate.line_number(),
            label: candidate.label().to_owned(),
        };

        match host.open(&request) {
            Ok(()) => {
                self.finish(host);
                info!(label = request.label.as_str(), %placement, "candidate opened");
                Some(Outcome::Opened(request))
            }
            Err(err) => {
                warn!(label = request.label.as_str(), error = %err, "open failed");
                host.report_error(&err);
                self.draw(host);
                None
            }
        }
    }

    fn unload_selected<H: Host<Id = Id>>(&mut self, host: &mut H) {
        if self.kind != SessionKind::Buffers {
            return;
        }
        let Some(index) = self.selection.resolve(self.ranked.len()) else {
            return;
        };
        let Some(id) = self.ranked.get(index).map(|candidate| candidate.id().clone()) else {
            return;
        };

        if let Err(err) = host.unload(&id) {
            warn!(error = %err, "unload failed");
            host.report_error(&err);
            return;
        }

        self.load_candidates(host);
        self.recompute(host);
        self.selection.restore(index, self.ranked.len());
        info!(remaining = self.candidates.len(), "document unloaded");
    }

    fn draw<H: Host<Id = Id>>(&self, host: &mut H) {
        let frame = build_frame(FrameRequest {
            query: self.query.as_str(),
            labels: self.ranked.as_slice(),
            selected: self.selection.resolve(self.ranked.len()),
            current: self.ranked.current_position(),
            highlights: &self.highlights,
            viewport: host.viewport(),
        });

        if let Err(err) = host.render(&frame) {
            warn!(error = %err, "render failed");
            host.report_error(&err);
        }
    }

    /// Ends the run: stashes grep state, drops the candidate set and restores the host UI.
    fn finish<H: Host<Id = Id>>(&mut self, host: &mut H) {
        if self.kind == SessionKind::Grep {
            self.resume = Some(GrepResume {
                query: self.query.clone(),
                ranked: self.ranked.clone(),
                highlights: self.highlights.clone(),
                selection: self.selection.index(),
            });
        }

        self.state = SessionState::Idle;
        self.candidates.clear();
        self.lines = None;
        host.restore_ui_state();
    }
}

/// Finishes a still-running session when startup or [`Session::run`] unwinds or returns early.
///
/// Disarmed once startup hands a running session back to the caller.
struct UiGuard<'a, H: Host> {
    session: &'a mut Session<H::Id>,
    host: &'a mut H,
    armed: bool,
}

impl<H: Host> Drop for UiGuard<'_, H> {
    fn drop(&mut self) {
        if self.armed && self.session.is_running() {
            warn!(kind = %self.session.kind, "session aborted");
            self.session.finish(&mut *self.host);
        }
    }
}
