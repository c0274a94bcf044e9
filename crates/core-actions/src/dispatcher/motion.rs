//! Motion sub-dispatch (cursor movement).
//!
//! The coordinator in `core_model::Cursor::move_relative` owns the clamping
//! rules; this layer only routes the store and viewport to it and keeps a
//! Visual selection's active end on the cursor.

use super::DispatchResult;
use crate::MotionKind;
use core_state::{EditorState, Mode};
use core_text::TextStore;

pub(crate) fn handle_motion<S: TextStore>(
    kind: MotionKind,
    state: &mut EditorState<S>,
) -> DispatchResult {
    let (delta_rows, delta_cols) = kind.delta();
    let viewport = state.viewport();
    let moved = state
        .cursor
        .move_relative(&mut state.store, viewport, delta_rows, delta_cols);
    if !moved {
        return DispatchResult::clean();
    }
    if state.mode == Mode::Visual {
        state.selection.extend(state.cursor.offset);
    }
    DispatchResult::dirty()
}
