//! Text edit action handling (insert/newline/backspace).
//!
//! Edits only apply in Insert mode. The edit point is first relocated to the
//! cursor, the store is mutated there, and the cursor is recomputed from the
//! edit point afterwards.

use super::DispatchResult;
use crate::EditKind;
use core_state::{EditorState, Mode};
use core_text::{EditResult, TextStore};

pub(crate) fn handle_edit<S: TextStore>(
    kind: EditKind,
    state: &mut EditorState<S>,
) -> EditResult<DispatchResult> {
    if state.mode != Mode::Insert {
        return Ok(DispatchResult::clean());
    }
    let at = state.cursor.offset;
    state.store.move_edit_point(at);
    match kind {
        EditKind::InsertChar(c) => {
            state.store.insert_char(c)?;
            tracing::trace!(target: "actions.dispatch", op="insert", ch=%c.escape_debug(), offset=at, "edit");
        }
        EditKind::InsertNewline => {
            state.store.insert_char('\n')?;
            tracing::trace!(target: "actions.dispatch", op="newline", offset=at, "edit");
        }
        EditKind::Backspace => match state.store.delete_backward() {
            Some(removed) => {
                tracing::trace!(target: "actions.dispatch", op="backspace", removed=%removed.escape_debug(), offset=at, "edit");
            }
            None => return Ok(DispatchResult::clean()),
        },
    }
    state.cursor.sync_to_edit_point(&state.store);
    Ok(DispatchResult::dirty())
}
