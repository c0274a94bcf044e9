//! Host-supplied viewport geometry.
//!
//! The host reports its terminal size every iteration and the size may change
//! between iterations. The bottom `STATUS_ROWS` rows belong to the status line,
//! so the cursor may only occupy rows `0..=rows - 2`.

pub const STATUS_ROWS: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: u16,
    pub cols: u16,
}

impl Viewport {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    /// Rows available for document text.
    pub fn text_rows(&self) -> u16 {
        self.rows.saturating_sub(STATUS_ROWS)
    }

    /// Last row the cursor may be displayed on. Degenerate viewports (0 or 1
    /// rows) still allow row 0.
    pub fn max_cursor_row(&self) -> usize {
        usize::from(self.rows.saturating_sub(STATUS_ROWS + 1))
    }

    /// Last column the cursor may be displayed on.
    pub fn max_cursor_col(&self) -> usize {
        usize::from(self.cols.saturating_sub(1))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(24, 80)
    }
}
