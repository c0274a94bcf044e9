//! Frame assembly and emission for the terminal host.
//!
//! A [`Frame`] is a pure snapshot of what one iteration draws: the visible text
//! rows (already cut to the terminal width), the status row and the terminal
//! cell the hardware cursor goes to. Building it touches no terminal state so
//! everything except [`render`] is testable without a TTY.
//!
//! Row layout: text rows `0..rows-1`, status on the last row.

use anyhow::Result;
use core_model::{STATUS_ROWS, Viewport};
use core_state::EditorState;
use core_text::TextStore;
use std::io::Write;

mod cells;
mod status;
mod writer;

pub use cells::{cursor_cell, display_width, truncate_to_width};
pub use status::{StatusContext, status_line};
use writer::Writer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<String>,
    pub status: String,
    /// Hardware cursor target as (column, row) cells.
    pub cursor: (u16, u16),
    pub viewport: Viewport,
}

/// Host-side extras drawn alongside the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chrome<'a> {
    pub pad: u16,
    pub info: Option<&'a str>,
}

/// Split `text` into display rows starting at line `top`: at most `rows - 1`
/// lines (the last row is the status line), each cut to `cols` cells on
/// cluster boundaries.
pub fn visible_rows(text: &str, top: usize, rows: u16, cols: u16) -> Vec<String> {
    let take = usize::from(rows.saturating_sub(STATUS_ROWS));
    text.split('\n')
        .skip(top)
        .take(take)
        .map(|line| truncate_to_width(line, usize::from(cols)))
        .collect()
}

impl Frame {
    pub fn build<S: TextStore>(state: &EditorState<S>, chrome: Chrome<'_>) -> Self {
        let viewport = state.viewport();
        let text = state.text();
        let top = state.cursor.top_row(viewport);
        let rows = visible_rows(&text, top, viewport.rows, viewport.cols);

        let error = state.last_error().map(|e| e.to_string());
        let status = status_line(&StatusContext {
            mode: state.mode,
            error: error.as_deref(),
            info: chrome.info,
            pad: chrome.pad,
            cols: viewport.cols,
        });

        let (row, _) = state.cursor.screen_position(viewport);
        let line_start = state.store.line_start(state.cursor.row);
        let line = state
            .store
            .slice(line_start, line_start + state.store.line_len(state.cursor.row));
        let cell = cursor_cell(&line, state.cursor.col).min(viewport.max_cursor_col());
        let cursor = (
            u16::try_from(cell).unwrap_or(u16::MAX),
            u16::try_from(row).unwrap_or(u16::MAX),
        );

        Self {
            rows,
            status,
            cursor,
            viewport,
        }
    }

    fn commands(&self) -> Writer {
        let mut w = Writer::default();
        w.clear_all();
        for (y, row) in self.rows.iter().enumerate() {
            w.move_to(0, u16::try_from(y).unwrap_or(u16::MAX));
            w.print(row.as_str());
        }
        if self.viewport.rows > 0 {
            w.move_to(0, self.viewport.rows - STATUS_ROWS);
            w.print_reverse(self.status.as_str());
        }
        w.move_to(self.cursor.0, self.cursor.1);
        w
    }
}

/// Emit a full frame to `out` and flush once.
pub fn render<W: Write>(out: &mut W, frame: &Frame) -> Result<()> {
    tracing::trace!(target: "render", rows = frame.rows.len(), cursor_x = frame.cursor.0, cursor_y = frame.cursor.1, "frame");
    frame.commands().flush_to(out)
}
