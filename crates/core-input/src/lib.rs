//! Blocking terminal input for the host loop.
//!
//! `read_input` waits on `crossterm::event::read` and returns the next event the
//! editor cares about: key presses (and auto-repeats) plus terminal resizes.
//! Releases, mouse, focus and paste events are skipped. The crossterm -> logical
//! mapping lives in the pure `map_event` so it can be tested without a TTY.

use anyhow::Result;
use core_events::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    self, Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKind,
    KeyModifiers as CMods,
};

/// Block until the next relevant input event.
pub fn read_input() -> Result<InputEvent> {
    loop {
        let raw = event::read()?;
        if let Some(ev) = map_event(&raw) {
            tracing::trace!(target: "input", event = ?ev, "input_event");
            return Ok(ev);
        }
        tracing::trace!(target: "input", "input_event_skipped");
    }
}

pub fn map_event(ev: &CEvent) -> Option<InputEvent> {
    match ev {
        CEvent::Key(key) => map_key(key).map(InputEvent::Key),
        CEvent::Resize(cols, rows) => Some(InputEvent::Resize(*cols, *rows)),
        _ => None,
    }
}

/// Map a crossterm key event into a logical key. `None` for releases and for
/// keys the editor has no binding for (function keys, media keys, ...).
pub fn map_key(key: &CKeyEvent) -> Option<KeyEvent> {
    if !matches!(key.kind, CKind::Press | CKind::Repeat) {
        return None;
    }
    let code = match key.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Insert => KeyCode::Insert,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        _ => return None,
    };
    Some(KeyEvent::new(code, map_mods(key.modifiers)))
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

/// Ctrl-C ends the session regardless of mode.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c' | 'C')) && key.mods.contains(KeyModifiers::CTRL)
}
