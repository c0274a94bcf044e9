//! Mode transition handling.
//!
//! Entering Visual anchors an empty selection at the cursor; leaving Visual
//! (or Insert) drops it. The cursor never moves on a mode change.

use super::DispatchResult;
use crate::ModeChange;
use core_state::{EditorState, Mode};
use core_text::TextStore;

pub(crate) fn handle_mode_change<S: TextStore>(
    mc: ModeChange,
    state: &mut EditorState<S>,
) -> DispatchResult {
    let from = state.mode;
    match mc {
        ModeChange::EnterInsert => {
            state.mode = Mode::Insert;
        }
        ModeChange::LeaveInsert => {
            state.selection.clear();
            state.mode = Mode::Normal;
        }
        ModeChange::EnterVisual => {
            state.selection.begin(state.cursor.offset);
            state.mode = Mode::Visual;
        }
        ModeChange::LeaveVisual => {
            state.selection.clear();
            state.mode = Mode::Normal;
        }
    }
    tracing::debug!(target: "actions.dispatch", from = from.as_str(), to = state.mode.as_str(), "mode_change");
    DispatchResult::dirty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::Viewport;
    use core_text::GapBuffer;

    fn state(text: &str) -> EditorState {
        EditorState::new(GapBuffer::new(text).unwrap(), Viewport::default())
    }

    #[test]
    fn leaving_insert_drops_any_selection() {
        let mut st = state("abc");
        st.mode = Mode::Insert;
        st.selection.begin(1);
        st.selection.extend(3);
        let r = handle_mode_change(ModeChange::LeaveInsert, &mut st);
        assert!(r.dirty);
        assert_eq!(st.mode, Mode::Normal);
        assert!(!st.selection.is_active());
        assert_eq!(st.cursor.offset, 3);
    }

    #[test]
    fn visual_round_trip_anchors_then_clears() {
        let mut st = state("abc");
        handle_mode_change(ModeChange::EnterVisual, &mut st);
        assert_eq!(st.mode, Mode::Visual);
        assert_eq!(st.selection.anchor(), Some(3));
        handle_mode_change(ModeChange::LeaveVisual, &mut st);
        assert_eq!(st.mode, Mode::Normal);
        assert!(!st.selection.is_active());
    }
}
