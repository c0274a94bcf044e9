//! Visual-mode selection tracking.
//!
//! A selection is an `(anchor, active)` pair of absolute offsets. The anchor is
//! fixed where Visual mode was entered; `active` follows the cursor. Either may
//! be the larger one. The effective range is the half-open `[min, max)`.

use core_text::{EditError, EditResult, TextStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub active: usize,
}

impl Selection {
    pub fn range(&self) -> (usize, usize) {
        (self.anchor.min(self.active), self.anchor.max(self.active))
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

/// Holds at most one open selection. Only Visual mode keeps one open.
#[derive(Debug, Default, Clone)]
pub struct SelectionTracker {
    current: Option<Selection>,
}

impl SelectionTracker {
    pub fn begin(&mut self, offset: usize) {
        self.current = Some(Selection {
            anchor: offset,
            active: offset,
        });
        tracing::trace!(target: "state.selection", anchor = offset, "begin");
    }

    /// Move the active end. With nothing open this begins a selection at
    /// `offset` so Visual mode always has one.
    pub fn extend(&mut self, offset: usize) {
        match self.current.as_mut() {
            Some(sel) => sel.active = offset,
            None => self.begin(offset),
        }
    }

    /// Normalized `[start, end)`.
    pub fn range(&self) -> EditResult<(usize, usize)> {
        self.current
            .map(|sel| sel.range())
            .ok_or_else(|| EditError::invalid_range("no active selection"))
    }

    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            tracing::trace!(target: "state.selection", "clear");
        }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<Selection> {
        self.current
    }

    pub fn anchor(&self) -> Option<usize> {
        self.current.map(|sel| sel.anchor)
    }

    pub fn active(&self) -> Option<usize> {
        self.current.map(|sel| sel.active)
    }

    /// Text covered by the selection.
    pub fn selected_text<S: TextStore + ?Sized>(&self, store: &S) -> EditResult<String> {
        let (start, end) = self.range()?;
        Ok(store.slice(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::GapBuffer;

    #[test]
    fn begin_is_empty_at_offset() {
        let mut t = SelectionTracker::default();
        t.begin(4);
        assert_eq!(t.range().unwrap(), (4, 4));
        assert!(t.current().unwrap().is_empty());
    }

    #[test]
    fn range_is_normalized_when_active_precedes_anchor() {
        let mut t = SelectionTracker::default();
        t.begin(5);
        t.extend(2);
        assert_eq!(t.anchor(), Some(5));
        assert_eq!(t.active(), Some(2));
        assert_eq!(t.range().unwrap(), (2, 5));
        t.extend(9);
        assert_eq!(t.range().unwrap(), (5, 9));
    }

    #[test]
    fn range_without_selection_is_invalid() {
        let mut t = SelectionTracker::default();
        assert!(matches!(t.range(), Err(EditError::InvalidRange(_))));
        t.begin(1);
        t.clear();
        assert!(!t.is_active());
        assert!(matches!(t.range(), Err(EditError::InvalidRange(_))));
    }

    #[test]
    fn extend_without_selection_begins_one() {
        let mut t = SelectionTracker::default();
        t.extend(3);
        assert_eq!(t.anchor(), Some(3));
        assert_eq!(t.range().unwrap(), (3, 3));
    }

    #[test]
    fn selected_text_reads_range() {
        let b = GapBuffer::new("hello world").unwrap();
        let mut t = SelectionTracker::default();
        t.begin(10);
        t.extend(6);
        assert_eq!(t.selected_text(&b).unwrap(), "worl");
    }
}
