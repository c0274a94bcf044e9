//! Gap buffer document store.
//!
//! Layout:
//!
//! ```text
//!  before: "Focus on"        (document order)
//!  after:  "tunod eht "      (reversed)
//!  document = before + reverse(after) = "Focus on the donut"
//! ```
//!
//! Both halves grow and shrink only at their tail, so inserting or deleting at
//! the edit point never touches unrelated text. Relocating the edit point moves
//! exactly the units between the old and new position from one tail to the
//! other: cost is O(distance), not O(document).
//!
//! Newlines are counted per half, so line queries scan outward from the gap
//! and only walk the text between the gap and the line asked for.

use crate::{EditResult, TextStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapBuffer {
    before: String,
    after: String,
    before_chars: usize,
    after_chars: usize,
    /// Newlines in the whole document.
    newlines: usize,
    /// Newlines in `before`.
    before_newlines: usize,
}

impl GapBuffer {
    /// Create a buffer holding `text` with the edit point at its end.
    pub fn new(text: &str) -> EditResult<Self> {
        let mut before = String::new();
        before.try_reserve(text.len())?;
        before.push_str(text);
        let newlines = count_newlines(text);
        Ok(Self {
            before_chars: text.chars().count(),
            newlines,
            before_newlines: newlines,
            before,
            after: String::new(),
            after_chars: 0,
        })
    }

    /// Document units in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.before.chars().chain(self.after.chars().rev())
    }

    /// Text left of the edit point.
    pub fn before_gap(&self) -> &str {
        &self.before
    }

    /// Move `count` units from the tail of `before` onto `after`.
    fn shift_left(&mut self, count: usize) {
        let split = tail_split(&self.before, count);
        self.before_newlines -= count_newlines(&self.before[split..]);
        self.after.extend(self.before[split..].chars().rev());
        self.before.truncate(split);
        self.before_chars -= count;
        self.after_chars += count;
    }

    /// Move `count` units from the tail of `after` onto `before`.
    fn shift_right(&mut self, count: usize) {
        let split = tail_split(&self.after, count);
        self.before_newlines += count_newlines(&self.after[split..]);
        self.before.extend(self.after[split..].chars().rev());
        self.after.truncate(split);
        self.after_chars -= count;
        self.before_chars += count;
    }
}

/// Byte index where the last `count` chars of `s` begin. `count` must not exceed
/// the char count of `s`.
fn tail_split(s: &str, count: usize) -> usize {
    if count == 0 {
        return s.len();
    }
    s.char_indices()
        .rev()
        .nth(count - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

fn count_newlines(s: &str) -> usize {
    s.bytes().filter(|b| *b == b'\n').count()
}

impl TextStore for GapBuffer {
    fn read_all(&self) -> String {
        let mut out = String::with_capacity(self.before.len() + self.after.len());
        out.push_str(&self.before);
        out.extend(self.after.chars().rev());
        out
    }

    fn len(&self) -> usize {
        self.before_chars + self.after_chars
    }

    fn edit_point(&self) -> usize {
        self.before_chars
    }

    fn insert_text(&mut self, text: &str) -> EditResult<()> {
        self.before.try_reserve(text.len())?;
        self.before.push_str(text);
        self.before_chars += text.chars().count();
        let added = count_newlines(text);
        self.newlines += added;
        self.before_newlines += added;
        tracing::trace!(target: "text.gap", len = text.len(), edit_point = self.before_chars, "insert");
        Ok(())
    }

    fn insert_char(&mut self, ch: char) -> EditResult<()> {
        self.before.try_reserve(ch.len_utf8())?;
        self.before.push(ch);
        self.before_chars += 1;
        if ch == '\n' {
            self.newlines += 1;
            self.before_newlines += 1;
        }
        Ok(())
    }

    fn delete_backward(&mut self) -> Option<char> {
        let ch = self.before.pop()?;
        self.before_chars -= 1;
        if ch == '\n' {
            self.newlines -= 1;
            self.before_newlines -= 1;
        }
        Some(ch)
    }

    fn move_edit_point(&mut self, target: usize) -> usize {
        let target = target.min(self.len());
        let from = self.before_chars;
        if target < from {
            self.shift_left(from - target);
        } else if target > from {
            self.shift_right(target - from);
        }
        if target != from {
            tracing::trace!(target: "text.gap", from, to = target, "move_edit_point");
        }
        self.before_chars
    }

    fn line_count(&self) -> usize {
        self.newlines + 1
    }

    fn line_of(&self, offset: usize) -> usize {
        let offset = offset.min(self.len());
        if offset <= self.before_chars {
            let split = tail_split(&self.before, self.before_chars - offset);
            self.before_newlines - count_newlines(&self.before[split..])
        } else {
            let split = tail_split(&self.after, offset - self.before_chars);
            self.before_newlines + count_newlines(&self.after[split..])
        }
    }

    fn line_start(&self, row: usize) -> usize {
        let row = row.min(self.newlines);
        if row == 0 {
            return 0;
        }
        let mut offset = self.before_chars;
        if row <= self.before_newlines {
            // Walk left past the newlines of later rows; the next one ends row - 1.
            let mut skip = self.before_newlines - row;
            for ch in self.before.chars().rev() {
                offset -= 1;
                if ch == '\n' {
                    if skip == 0 {
                        return offset + 1;
                    }
                    skip -= 1;
                }
            }
            0
        } else {
            let mut remaining = row - self.before_newlines;
            for ch in self.after.chars().rev() {
                offset += 1;
                if ch == '\n' {
                    remaining -= 1;
                    if remaining == 0 {
                        return offset;
                    }
                }
            }
            self.len()
        }
    }

    fn line_len(&self, row: usize) -> usize {
        if row > self.newlines {
            return 0;
        }
        let end = if row == self.newlines {
            self.len()
        } else {
            self.line_start(row + 1) - 1
        };
        end - self.line_start(row)
    }

    fn slice(&self, start: usize, end: usize) -> String {
        let len = self.len();
        let (start, end) = (start.min(len), end.min(len));
        if start >= end {
            return String::new();
        }
        self.chars().skip(start).take(end - start).collect()
    }
}
