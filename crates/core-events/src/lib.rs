//! Logical input events handed from the host to the editing core.
//!
//! The host decodes raw terminal input and pre-classifies special keys
//! (escape, backspace, enter, insert, arrows) before anything reaches the state
//! machine. Printable keys arrive as `KeyCode::Char` carrying the decoded
//! character.

use std::fmt;

/// One event per host iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Unmodified key.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    pub fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// A character the editor should insert as text: `Char` without CTRL/ALT.
    /// SHIFT is already folded into the character by the host.
    pub fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c)
                if !self.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT)
                    && !c.is_control() =>
            {
                Some(c)
            }
            _ => None,
        }
    }
}

/// Normalized logical key representations consumed by higher layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    Insert,
    Up,
    Down,
    Left,
    Right,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.contains(KeyModifiers::CTRL) {
            f.write_str("C-")?;
        }
        if self.mods.contains(KeyModifiers::ALT) {
            f.write_str("M-")?;
        }
        match self.code {
            KeyCode::Char(c) => write!(f, "{c}"),
            other => write!(f, "<{other:?}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_display() {
        assert_eq!(KeyEvent::char('x').to_string(), "x");
        assert_eq!(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CTRL).to_string(),
            "C-c"
        );
        assert_eq!(KeyEvent::plain(KeyCode::Esc).to_string(), "<Esc>");
    }

    #[test]
    fn printable_excludes_chords_and_control_chars() {
        assert_eq!(KeyEvent::char('!').printable(), Some('!'));
        assert_eq!(
            KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT).printable(),
            Some('A')
        );
        assert_eq!(
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CTRL).printable(),
            None
        );
        assert_eq!(KeyEvent::char('\u{7}').printable(), None);
        assert_eq!(KeyEvent::plain(KeyCode::Enter).printable(), None);
    }
}
