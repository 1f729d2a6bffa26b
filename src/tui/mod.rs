// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal host.
//!
//! Runs a chooser session full-screen with ratatui + crossterm: the candidate grid sits right above
//! a one-line prompt, and host errors show next to the prompt until the next key press.

use std::{error::Error, io, mem, ops::Range, path::PathBuf};

use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::layout::Viewport;
use crate::model::{Document, Placement, SessionKind};
use crate::render::{Frame as ChooserFrame, FrameBody};
use crate::session::{Event, Host, HostError, OpenRequest, Outcome, Session, SessionError};

mod documents;
mod theme;


pub use documents::DocumentSet;
pub use theme::TuiTheme;

/// Rows below the grid (the prompt line).
const PROMPT_ROWS: u16 = 1;

/// The document picked in a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub path: PathBuf,
    pub label: String,
    pub placement: Placement,
    pub line_number: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(KeyEvent),
    Resize,
}

/// Blocking source of terminal input.
pub trait InputSource {
    fn next_input(&mut self) -> io::Result<Input>;
}

#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn next_input(&mut self) -> io::Result<Input> {
        loop {
            match event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => return Ok(Input::Key(key)),
                TermEvent::Resize(_, _) => return Ok(Input::Resize),
                _ => {}
            }
        }
    }
}

/// Runs a chooser over `documents` on the process terminal.
pub fn run_chooser(
    kind: SessionKind,
    documents: DocumentSet,
    query: Option<&str>,
    config: &Config,
) -> Result<Option<Choice>, Box<dyn Error>> {
    let theme = TuiTheme::from_config(config)?;
    let mut host = TerminalHost::stdout(documents, theme)?.with_max_height(config.max_height());
    let mut session = Session::new(kind).with_query(query.unwrap_or_default());
    Ok(choose(&mut host, &mut session)?)
}

/// Runs `session` on `host` and returns what was picked, if anything.
pub fn choose<B: Backend, I: InputSource>(
    host: &mut TerminalHost<B, I>,
    session: &mut Session<usize>,
) -> Result<Option<Choice>, SessionError> {
    match session.run(host)? {
        Outcome::Opened(_) => Ok(host.take_choice()),
        Outcome::Cancelled | Outcome::AlreadyRunning => Ok(None),
    }
}

pub struct TerminalHost<B: Backend, I: InputSource> {
    terminal: Terminal<B>,
    input: I,
    documents: DocumentSet,
    theme: TuiTheme,
    max_height: Option<usize>,
    raw_screen: bool,
    captured: bool,
    status: Option<String>,
    last_frame: Option<ChooserFrame>,
    choice: Option<Choice>,
}

impl TerminalHost<CrosstermBackend<io::Stdout>, CrosstermInput> {
    /// Host on stdout; raw mode and the alternate screen are held while a session runs.
    pub fn stdout(documents: DocumentSet, theme: TuiTheme) -> Result<Self, HostError> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(|err| HostError::io("open terminal", err))?;
        let mut host = Self::new(terminal, CrosstermInput, documents, theme);
        host.raw_screen = true;
        Ok(host)
    }
}

impl<B: Backend, I: InputSource> TerminalHost<B, I> {
    pub fn new(terminal: Terminal<B>, input: I, documents: DocumentSet, theme: TuiTheme) -> Self {
        Self {
            terminal,
            input,
            documents,
            theme,
            max_height: None,
            raw_screen: false,
            captured: false,
            status: None,
            last_frame: None,
            choice: None,
        }
    }

    /// Caps the number of grid rows.
    pub fn with_max_height(mut self, max_height: Option<usize>) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn document_set(&self) -> &DocumentSet {
        &self.documents
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn take_choice(&mut self) -> Option<Choice> {
        self.choice.take()
    }

    fn redraw(&mut self) -> Result<(), HostError> {
        let Some(frame) = &self.last_frame else {
            return Ok(());
        };
        let theme = &self.theme;
        let status = self.status.as_deref();
        self.terminal
            .draw(|term| draw_chooser(term, frame, theme, status))
            .map(drop)
            .map_err(|err| HostError::io("draw chooser", err))
    }

    fn release(&mut self) {
        if !self.captured {
            return;
        }
        self.captured = false;
        let _ = self.terminal.show_cursor();
        if self.raw_screen {
            leave_raw_screen();
        } else {
            let _ = self.terminal.clear();
        }
    }
}

impl<B: Backend, I: InputSource> Host for TerminalHost<B, I> {
    type Id = usize;

    fn documents(&mut self) -> Result<Vec<Document<usize>>, HostError> {
        Ok(self.documents.documents())
    }

    fn lines(&mut self, id: &usize) -> Result<Vec<String>, HostError> {
        self.documents.lines(*id)
    }

    fn open(&mut self, request: &OpenRequest<usize>) -> Result<(), HostError> {
        let path = self.documents.location(request.id).ok_or_else(|| HostError::OpenFailed {
            target: request.label.clone(),
            reason: "document is no longer available".to_owned(),
        })?;
        self.choice = Some(Choice {
            path: path.to_path_buf(),
            label: request.label.clone(),
            placement: request.placement,
            line_number: request.line_number,
        });
        Ok(())
    }

    fn unload(&mut self, id: &usize) -> Result<(), HostError> {
        self.documents.remove(*id)
    }

    fn viewport(&self) -> Viewport {
        match self.terminal.size() {
            Ok(area) => chooser_viewport(area, self.max_height),
            Err(err) => {
                warn!(error = %err, "terminal size unavailable");
                Viewport::new(0, 0)
            }
        }
    }

    fn render(&mut self, frame: &ChooserFrame) -> Result<(), HostError> {
        self.last_frame = Some(frame.clone());
        self.redraw()
    }

    fn next_event(&mut self) -> Result<Event, HostError> {
        loop {
            let input =
                self.input.next_input().map_err(|err| HostError::io("read terminal input", err))?;
            match input {
                Input::Key(key) => {
                    if let Some(event) = map_key(key) {
                        self.status = None;
                        return Ok(event);
                    }
                    debug!(?key, "unmapped key");
                }
                Input::Resize => match self.terminal.autoresize() {
                    Ok(()) => self.redraw()?,
                    Err(err) => self.report_error(&HostError::io("resize terminal", err)),
                },
            }
        }
    }

    fn capture_ui_state(&mut self) -> Result<(), HostError> {
        if self.raw_screen {
            enter_raw_screen().map_err(|err| HostError::io("prepare terminal", err))?;
        }
        self.captured = true;
        self.terminal
            .hide_cursor()
            .and_then(|()| self.terminal.clear())
            .map_err(|err| HostError::io("prepare terminal", err))
    }

    fn restore_ui_state(&mut self) {
        self.release();
    }

    fn report_error(&mut self, error: &HostError) {
        warn!(error = %error, "chooser error");
        self.status = Some(error.to_string());
    }
}

impl<B: Backend, I: InputSource> Drop for TerminalHost<B, I> {
    fn drop(&mut self) {
        self.release();
    }
}

fn enter_raw_screen() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen).map_err(|err| {
        leave_raw_screen();
        err
    })
}

fn leave_raw_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Grid space left on a terminal of `area` once the prompt is placed.
pub fn chooser_viewport(area: Rect, max_height: Option<usize>) -> Viewport {
    let height = usize::from(area.height.saturating_sub(PROMPT_ROWS));
    let height = max_height.map_or(height, |max| height.min(max));
    Viewport::new(usize::from(area.width), height)
}

/// Maps a key press to a chooser event.
///
/// Ctrl-N/P move, Ctrl-W drops a path segment, Ctrl-U clears, Ctrl-O/V/T open in a split,
/// vertical split or new container, Ctrl-D unloads; Enter/Tab open in place; Esc/Ctrl-C/Ctrl-G quit.
pub fn map_key(key: KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let KeyCode::Char(ch) = key.code else {
            return None;
        };
        return match ch.to_ascii_lowercase() {
            'n' => Some(Event::Next),
            'p' => Some(Event::Previous),
            'w' => Some(Event::UpOneLevel),
            'u' => Some(Event::Clear),
            'h' => Some(Event::Backspace),
            'o' => Some(Event::Commit(Placement::HorizontalSplit)),
            'v' => Some(Event::Commit(Placement::VerticalSplit)),
            't' => Some(Event::Commit(Placement::NewContainer)),
            'd' => Some(Event::Unload),
            'c' | 'g' => Some(Event::Cancel),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(ch) => Some(Event::Char(ch)),
        KeyCode::Enter | KeyCode::Tab => Some(Event::Commit(Placement::Replace)),
        KeyCode::Backspace => Some(Event::Backspace),
        KeyCode::Esc => Some(Event::Cancel),
        KeyCode::Down | KeyCode::Right => Some(Event::Next),
        KeyCode::Up | KeyCode::Left => Some(Event::Previous),
        _ => None,
    }
}

fn draw_chooser(term: &mut Frame<'_>, frame: &ChooserFrame, theme: &TuiTheme, status: Option<&str>) {
    let area = term.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(PROMPT_ROWS)])
        .split(area);
    let (grid_area, prompt_area) = (chunks[0], chunks[1]);

    let lines = frame_lines(frame, theme);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).min(grid_area.height);
    let grid_area = Rect { y: grid_area.y + grid_area.height - height, height, ..grid_area };
    term.render_widget(Paragraph::new(lines).style(theme.base_style()), grid_area);

    term.render_widget(Paragraph::new(prompt_line(frame, theme, status)), prompt_area);
    let prompt_width = u16::try_from(frame.prompt().chars().count()).unwrap_or(u16::MAX);
    term.set_cursor(
        prompt_area.x + prompt_width.min(prompt_area.width.saturating_sub(1)),
        prompt_area.y,
    );
}

fn prompt_line(frame: &ChooserFrame, theme: &TuiTheme, status: Option<&str>) -> Line<'static> {
    let mut spans = vec![Span::styled(frame.prompt().to_owned(), theme.prompt_style())];
    if let Some(status) = status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("({status})"), theme.error_style()));
    }
    Line::from(spans)
}

/// Styled grid rows: highlights first, then the current document, then the selection on top.
pub(crate) fn frame_lines(frame: &ChooserFrame, theme: &TuiTheme) -> Vec<Line<'static>> {
    match frame.body() {
        FrameBody::Empty => Vec::new(),
        FrameBody::NoMatches { row } => {
            vec![Line::from(Span::styled(row.clone(), theme.marker_style()))]
        }
        FrameBody::Grid { rows, truncated, selected, current } => rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                if *truncated && idx + 1 == rows.len() {
                    return Line::from(Span::styled(row.clone(), theme.marker_style()));
                }

                let mut styles = vec![theme.base_style(); row.chars().count()];
                for highlight in frame.highlights() {
                    for range in char_ranges(row, highlight) {
                        paint(&mut styles, range, theme.highlight_style());
                    }
                }
                for (span, style) in
                    [(*current, theme.current_style()), (*selected, theme.selection_style())]
                {
                    if let Some(span) = span.filter(|span| span.row() == idx) {
                        paint(&mut styles, span.start()..span.start() + span.width(), style);
                    }
                }
                styled_line(row, &styles)
            })
            .collect(),
    }
}

/// Char ranges of every occurrence of `needle` in `row`.
fn char_ranges(row: &str, needle: &str) -> Vec<Range<usize>> {
    if needle.is_empty() {
        return Vec::new();
    }
    let width = needle.chars().count();
    row.match_indices(needle)
        .map(|(byte, _)| {
            let start = row[..byte].chars().count();
            start..start + width
        })
        .collect()
}

fn paint(styles: &mut [Style], range: Range<usize>, style: Style) {
    let end = range.end.min(styles.len());
    if range.start < end {
        styles[range.start..end].fill(style);
    }
}

fn styled_line(row: &str, styles: &[Style]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();

    for (ch, &style) in row.chars().zip(styles) {
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    Line::from(spans)
}
