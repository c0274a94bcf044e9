//! Document stores for the editing core.
//!
//! All positions handed across the `TextStore` boundary are counted in Unicode
//! scalar values (`char`), never bytes: a multi-byte character is a single
//! indivisible unit for cursor movement, deletion and line lengths. Line breaks
//! are `'\n'` only.
//!
//! Two strategies implement the contract:
//! * [`GapBuffer`] - the primary store. Edits at the edit point are O(1)
//!   amortized and relocating the edit point costs only the distance moved.
//! * [`RopeStore`] - a `ropey::Rope` with a tracked edit point, kept so the
//!   state machine can be exercised over a second storage layout.

mod error;
pub mod gap;
pub mod rope;

pub use error::{EditError, EditResult};
pub use gap::GapBuffer;
pub use rope::RopeStore;

/// Capability set the modal dispatcher needs from a document store.
///
/// Every store owns a single *edit point*. Insertions and deletions happen
/// there; cursor movement relocates it first.
pub trait TextStore {
    /// Full document text. O(n), no side effects.
    fn read_all(&self) -> String;

    /// Document length in units.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current edit point (`0..=len()`).
    fn edit_point(&self) -> usize;

    /// Insert `text` at the edit point; the edit point ends up after it.
    fn insert_text(&mut self, text: &str) -> EditResult<()>;

    /// Insert one unit at the edit point.
    fn insert_char(&mut self, ch: char) -> EditResult<()> {
        let mut tmp = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut tmp))
    }

    /// Remove the unit immediately before the edit point and return it.
    /// `None` (not an error) at document start.
    fn delete_backward(&mut self) -> Option<char>;

    /// Relocate the edit point, clamping `target` to `[0, len()]`.
    /// Returns the resulting edit point.
    fn move_edit_point(&mut self, target: usize) -> usize;

    /// Non-clamping relocation: a target past the end is reported instead of
    /// being absorbed.
    fn try_move_edit_point(&mut self, target: usize) -> EditResult<usize> {
        let len = self.len();
        if target > len {
            return Err(EditError::invalid_range(format!(
                "edit point {target} beyond document length {len}"
            )));
        }
        Ok(self.move_edit_point(target))
    }

    /// Number of lines (`'\n'` count + 1).
    fn line_count(&self) -> usize;

    /// Row containing `offset` (clamped to the document).
    fn line_of(&self, offset: usize) -> usize;

    /// Offset of the first unit of `row` (row clamped to the last line).
    fn line_start(&self, row: usize) -> usize;

    /// Length of `row` excluding its terminator. 0 for rows past the end.
    fn line_len(&self, row: usize) -> usize;

    /// Length of the line containing `offset`, excluding its terminator.
    fn line_length_at(&self, offset: usize) -> usize {
        self.line_len(self.line_of(offset))
    }

    /// Text in `[start, end)`, both clamped to the document.
    fn slice(&self, start: usize, end: usize) -> String;
}
