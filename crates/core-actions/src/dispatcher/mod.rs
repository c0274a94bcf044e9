//! Dispatcher applying `Action` to mutable editor state.
//!
//! Decomposed into focused sub-modules:
//! * `motion` - cursor movement and Visual selection extension
//! * `mode`   - mode transitions (Normal <-> Insert, Normal <-> Visual)
//! * `edit`   - text mutation at the edit point (insert/newline/backspace)
//!
//! Every handler leaves `state.cursor.offset == state.store.edit_point()`.

use crate::{Action, translate_key};
use core_events::KeyEvent;
use core_state::EditorState;
use core_text::{EditError, EditResult, TextStore};

mod edit;
mod mode;
mod motion;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Visible state changed and the host should redraw.
    pub dirty: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self { dirty: true }
    }
    pub fn clean() -> Self {
        Self { dirty: false }
    }
}

/// Apply an action to editor state.
///
/// Errors leave the state untouched: a failed reservation happens before any
/// text moves and Visual operators are rejected up front.
pub fn dispatch<S: TextStore>(
    action: Action,
    state: &mut EditorState<S>,
) -> EditResult<DispatchResult> {
    match action {
        Action::Motion(kind) => Ok(motion::handle_motion(kind, state)),
        Action::ModeChange(mc) => Ok(mode::handle_mode_change(mc, state)),
        Action::Edit(kind) => edit::handle_edit(kind, state),
        Action::VisualOperator(op) => {
            tracing::debug!(target: "actions.dispatch", op = op.as_str(), "visual_operator_rejected");
            Err(EditError::not_implemented(format!(
                "visual {} operator",
                op.as_str()
            )))
        }
    }
}

/// Translate and dispatch one key event.
///
/// The outcome replaces the session's last error: an `Err` is recorded for the
/// status line and also returned, any success clears it. Unmapped keys are a
/// no-op that only clears a previous error.
pub fn handle_key<S: TextStore>(
    state: &mut EditorState<S>,
    key: &KeyEvent,
) -> EditResult<DispatchResult> {
    let had_error = state.last_error().is_some();
    let Some(action) = translate_key(state.mode, key) else {
        state.set_last_error(None);
        return Ok(DispatchResult { dirty: had_error });
    };
    tracing::trace!(target: "actions.dispatch", ?action, mode = state.mode.as_str(), "dispatch");
    match dispatch(action, state) {
        Ok(result) => {
            state.set_last_error(None);
            Ok(DispatchResult {
                dirty: result.dirty || had_error,
            })
        }
        Err(err) => {
            tracing::debug!(target: "actions.dispatch", error = %err, "dispatch_failed");
            state.set_last_error(Some(err.clone()));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditKind, ModeChange, MotionKind, OperatorKind};
    use core_model::Viewport;
    use core_state::Mode;
    use core_text::GapBuffer;

    fn state(text: &str) -> EditorState {
        EditorState::new(GapBuffer::new(text).unwrap(), Viewport::default())
    }

    #[test]
    fn edits_outside_insert_are_clean_noops() {
        let mut st = state("abc");
        let r = dispatch(Action::Edit(EditKind::InsertChar('x')), &mut st).unwrap();
        assert!(!r.dirty);
        assert_eq!(st.text(), "abc");
        let r = dispatch(Action::Edit(EditKind::Backspace), &mut st).unwrap();
        assert!(!r.dirty);
        assert_eq!(st.text(), "abc");
    }

    #[test]
    fn visual_operator_is_rejected_without_state_change() {
        let mut st = state("abc");
        dispatch(Action::ModeChange(ModeChange::EnterVisual), &mut st).unwrap();
        dispatch(Action::Motion(MotionKind::Left), &mut st).unwrap();
        let before = (st.cursor, st.selection.current(), st.text());
        let err = dispatch(Action::VisualOperator(OperatorKind::Yank), &mut st).unwrap_err();
        assert!(matches!(err, EditError::NotImplemented(ref m) if m.contains("yank")));
        assert_eq!(before, (st.cursor, st.selection.current(), st.text()));
        assert_eq!(st.mode, Mode::Visual);
    }

    #[test]
    fn motion_reports_dirty_only_when_cursor_moves() {
        let mut st = state("ab");
        assert_eq!(st.cursor.col, 2);
        assert!(!dispatch(Action::Motion(MotionKind::Right), &mut st).unwrap().dirty);
        assert!(dispatch(Action::Motion(MotionKind::Left), &mut st).unwrap().dirty);
        assert!(!dispatch(Action::Motion(MotionKind::Up), &mut st).unwrap().dirty);
    }

    #[test]
    fn handle_key_clears_previous_error() {
        let mut st = state("abc");
        st.set_last_error(Some(EditError::not_implemented("stale")));
        let r = handle_key(&mut st, &KeyEvent::char('q')).unwrap();
        assert!(r.dirty);
        assert!(st.last_error().is_none());
        let r = handle_key(&mut st, &KeyEvent::char('q')).unwrap();
        assert!(!r.dirty);
    }

    #[test]
    fn handle_key_returns_and_records_failure() {
        let mut st = state("abc");
        handle_key(&mut st, &KeyEvent::char('v')).unwrap();
        let err = handle_key(&mut st, &KeyEvent::char('d')).unwrap_err();
        assert!(matches!(err, EditError::NotImplemented(_)));
        assert_eq!(st.last_error(), Some(&err));
    }
}
