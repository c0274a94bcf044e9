//! Editor session state: document store, cursor, mode, selection and the last
//! error surfaced by a dispatch.
//!
//! One explicitly constructed [`EditorState`] owns everything a session
//! mutates. The dispatcher borrows it mutably for exactly one key event at a
//! time; there is no ambient global state and no other writer, which keeps the
//! gap buffer's single-owner cost model intact.
//!
//! The session is generic over its [`TextStore`] so the same state machine runs
//! over the gap buffer (default) or the rope store.

use core_model::{Cursor, Viewport};
use core_text::{EditError, GapBuffer, TextStore};

mod selection;
pub use selection::{Selection, SelectionTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Navigation mode. Initial mode of every session.
    #[default]
    Normal,
    /// Text entry at the edit point.
    Insert,
    /// Character-wise selection.
    Visual,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Visual => "VISUAL",
        }
    }

    /// Status-line label, e.g. `[NORMAL]`.
    pub fn label(&self) -> String {
        format!("[{}]", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct EditorState<S: TextStore = GapBuffer> {
    pub store: S,
    pub cursor: Cursor,
    pub mode: Mode,
    pub selection: SelectionTracker,
    viewport: Viewport,
    last_error: Option<EditError>,
}

impl<S: TextStore> EditorState<S> {
    /// Start a session in Normal mode with the cursor on the store's edit point.
    pub fn new(mut store: S, viewport: Viewport) -> Self {
        let mut cursor = Cursor::at_edit_point(&store);
        cursor.reclamp(&mut store, viewport);
        Self {
            store,
            cursor,
            mode: Mode::Normal,
            selection: SelectionTracker::default(),
            viewport,
            last_error: None,
        }
    }

    pub fn text(&self) -> String {
        self.store.read_all()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Apply a new host viewport and re-clamp the cursor into it. A Visual
    /// selection follows the cursor if the clamp moved it.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        tracing::debug!(target: "state", rows = viewport.rows, cols = viewport.cols, "viewport_changed");
        self.viewport = viewport;
        let before = self.cursor;
        self.cursor.reclamp(&mut self.store, viewport);
        if self.mode == Mode::Visual && before != self.cursor {
            self.selection.extend(self.cursor.offset);
        }
    }

    pub fn last_error(&self) -> Option<&EditError> {
        self.last_error.as_ref()
    }

    /// Record the outcome of the latest dispatch; `None` clears the previous error.
    pub fn set_last_error(&mut self, err: Option<EditError>) {
        self.last_error = err;
    }
}
