#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::handle_key;
use core_events::{KeyCode, KeyEvent};
use core_model::Viewport;
use core_state::EditorState;
use core_text::{GapBuffer, RopeStore, TextStore};

pub fn gap_session(text: &str) -> EditorState<GapBuffer> {
    EditorState::new(GapBuffer::new(text).unwrap(), Viewport::default())
}

pub fn rope_session(text: &str) -> EditorState<RopeStore> {
    EditorState::new(RopeStore::new(text), Viewport::default())
}

pub fn kc(c: char) -> KeyEvent {
    KeyEvent::char(c)
}

pub fn esc() -> KeyEvent {
    KeyEvent::plain(KeyCode::Esc)
}

pub fn enter() -> KeyEvent {
    KeyEvent::plain(KeyCode::Enter)
}

pub fn backspace() -> KeyEvent {
    KeyEvent::plain(KeyCode::Backspace)
}

/// Feed keys one at a time, the way the host loop does. Failures stay
/// recorded on the state as its last error.
pub fn feed<S: TextStore>(state: &mut EditorState<S>, keys: &[KeyEvent]) {
    for key in keys {
        let _ = handle_key(state, key);
    }
}

/// Feed every char of `s` as a plain key.
pub fn type_str<S: TextStore>(state: &mut EditorState<S>, s: &str) {
    for c in s.chars() {
        let _ = handle_key(state, &kc(c));
    }
}

/// Invariants that hold after every dispatch.
pub fn assert_consistent<S: TextStore>(state: &EditorState<S>) {
    let c = state.cursor;
    assert!(c.offset <= state.store.len(), "offset {} past end", c.offset);
    assert_eq!(state.store.edit_point(), c.offset, "edit point drifted from cursor");
    assert_eq!(state.store.line_of(c.offset), c.row);
    assert_eq!(c.offset - state.store.line_start(c.row), c.col);
    assert!(c.col <= state.store.line_len(c.row));
}
