//! Cursor/viewport coordination.
//!
//! A [`Cursor`] carries one absolute offset into the document plus the derived
//! `(row, col)` pair, where `col` is the offset within the current line. The
//! coordinator keeps the cursor and the store's edit point synchronized:
//! * every movement ends with `TextStore::move_edit_point(cursor.offset)`;
//! * every mutation ends with [`Cursor::sync_to_edit_point`].
//!
//! Two clamps hold simultaneously and are deliberately separate:
//! * offset clamping (`0 <= offset <= len`, `col <= line_len(row)`) is a
//!   buffer concern, applied on every move;
//! * display clamping (row within the visible text rows, col within the
//!   terminal width) is applied only by [`Cursor::screen_position`] and never
//!   changes the logical cursor.
//!
//! Relative movement additionally clamps the row to the visible rows, as the
//! host has no free scrolling. An edit can still carry the row below the last
//! visible row (typing Enter on it); from there the row ceiling is the cursor's
//! own row, so sideways motion stays on its line, and the display shifts down by
//! [`Cursor::top_row`] so the drawn cursor stays on the edit point.

use core_text::TextStore;

mod viewport;
pub use viewport::{STATUS_ROWS, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub offset: usize,
    pub row: usize,
    pub col: usize,
}

/// Map `(row, col)` to an absolute offset. `row` is clamped to the last line and
/// `col` to that line's length.
pub fn to_offset<S: TextStore + ?Sized>(store: &S, row: usize, col: usize) -> usize {
    let row = row.min(store.line_count().saturating_sub(1));
    store.line_start(row) + col.min(store.line_len(row))
}

/// Map an absolute offset (clamped to the document) to `(row, col)`.
pub fn from_offset<S: TextStore + ?Sized>(store: &S, offset: usize) -> (usize, usize) {
    let offset = offset.min(store.len());
    let row = store.line_of(offset);
    (row, offset - store.line_start(row))
}

fn clamp_add(base: usize, delta: isize, max: usize) -> usize {
    base.saturating_add_signed(delta).min(max)
}

impl Cursor {
    pub fn at_offset<S: TextStore + ?Sized>(store: &S, offset: usize) -> Self {
        let offset = offset.min(store.len());
        let (row, col) = from_offset(store, offset);
        Self { offset, row, col }
    }

    /// Cursor sitting on the store's current edit point.
    pub fn at_edit_point<S: TextStore + ?Sized>(store: &S) -> Self {
        Self::at_offset(store, store.edit_point())
    }

    /// Recompute the cursor from the edit point after a buffer mutation.
    pub fn sync_to_edit_point<S: TextStore + ?Sized>(&mut self, store: &S) {
        *self = Self::at_edit_point(store);
    }

    /// Move by `(delta_rows, delta_cols)`.
    ///
    /// The row is clamped to `[0, min(line_count - 1, viewport.max_cursor_row())]`
    /// and then the column to `[0, line_len(row)]`. A cursor already below the
    /// viewport's last row keeps its own row as the ceiling. The edit point
    /// follows the cursor. Returns whether the cursor moved.
    pub fn move_relative<S: TextStore + ?Sized>(
        &mut self,
        store: &mut S,
        viewport: Viewport,
        delta_rows: isize,
        delta_cols: isize,
    ) -> bool {
        let before = *self;
        let max_row = store
            .line_count()
            .saturating_sub(1)
            .min(viewport.max_cursor_row().max(self.row));
        let row = clamp_add(self.row, delta_rows, max_row);
        let col = clamp_add(self.col, delta_cols, store.line_len(row));
        self.offset = to_offset(store, row, col);
        self.row = row;
        self.col = col;
        store.move_edit_point(self.offset);
        if before != *self {
            tracing::trace!(target: "model.cursor", delta_rows, delta_cols, row, col, offset = self.offset, "move_relative");
        }
        before != *self
    }

    /// Re-apply the viewport row clamp after a resize. The column is re-clamped
    /// against the new row and the edit point follows.
    pub fn reclamp<S: TextStore + ?Sized>(&mut self, store: &mut S, viewport: Viewport) {
        let max_row = viewport.max_cursor_row();
        if self.row > max_row {
            let col = self.col.min(store.line_len(max_row));
            self.offset = to_offset(store, max_row, col);
            self.row = max_row;
            self.col = col;
            store.move_edit_point(self.offset);
            tracing::debug!(target: "model.cursor", row = self.row, rows = viewport.rows, "reclamp");
        }
    }

    /// First document row drawn so that the cursor row is visible.
    pub fn top_row(&self, viewport: Viewport) -> usize {
        self.row.saturating_sub(viewport.max_cursor_row())
    }

    /// Display position (row, col) inside `viewport`, relative to [`Self::top_row`].
    pub fn screen_position(&self, viewport: Viewport) -> (usize, usize) {
        (
            self.row - self.top_row(viewport),
            self.col.min(viewport.max_cursor_col()),
        )
    }
}
