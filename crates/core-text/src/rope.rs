//! Rope-backed document store.
//!
//! `ropey` indexes by char natively, so the edit point is just a char index and
//! relocation is O(1); inserts and deletes are O(log n). ropey is built without
//! its `unicode_lines`/`cr_lines` features so only `'\n'` breaks lines, matching
//! [`GapBuffer`](crate::GapBuffer).

use crate::{EditResult, TextStore};
use ropey::Rope;

#[derive(Debug, Clone, Default)]
pub struct RopeStore {
    rope: Rope,
    edit_point: usize,
}

impl RopeStore {
    /// Construct a store from an in-memory string slice, edit point at the end.
    pub fn new(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let edit_point = rope.len_chars();
        Self { rope, edit_point }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl TextStore for RopeStore {
    fn read_all(&self) -> String {
        self.rope.to_string()
    }

    fn len(&self) -> usize {
        self.rope.len_chars()
    }

    fn edit_point(&self) -> usize {
        self.edit_point
    }

    fn insert_text(&mut self, text: &str) -> EditResult<()> {
        self.rope.insert(self.edit_point, text);
        self.edit_point += text.chars().count();
        tracing::trace!(target: "text.rope", len = text.len(), edit_point = self.edit_point, "insert");
        Ok(())
    }

    fn insert_char(&mut self, ch: char) -> EditResult<()> {
        self.rope.insert_char(self.edit_point, ch);
        self.edit_point += 1;
        Ok(())
    }

    fn delete_backward(&mut self) -> Option<char> {
        if self.edit_point == 0 {
            return None;
        }
        let idx = self.edit_point - 1;
        let ch = self.rope.char(idx);
        self.rope.remove(idx..self.edit_point);
        self.edit_point = idx;
        Some(ch)
    }

    fn move_edit_point(&mut self, target: usize) -> usize {
        self.edit_point = target.min(self.rope.len_chars());
        self.edit_point
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_of(&self, offset: usize) -> usize {
        self.rope.char_to_line(offset.min(self.rope.len_chars()))
    }

    fn line_start(&self, row: usize) -> usize {
        let last = self.rope.len_lines().saturating_sub(1);
        self.rope.line_to_char(row.min(last))
    }

    fn line_len(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        // ropey lines include the trailing newline except possibly the last line.
        let line = self.rope.line(row);
        let n = line.len_chars();
        if n > 0 && line.char(n - 1) == '\n' {
            n - 1
        } else {
            n
        }
    }

    fn slice(&self, start: usize, end: usize) -> String {
        let len = self.rope.len_chars();
        let (start, end) = (start.min(len), end.min(len));
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }
}
