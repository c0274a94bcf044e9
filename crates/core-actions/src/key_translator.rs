//! Stateless key -> Action translation.
//!
//! Each mode has its own table. Keys a mode does not recognize translate to
//! `None`, which the dispatcher treats as a clean no-op rather than an error.
//! Arrow keys move the cursor in every mode; `h`/`j`/`k`/`l` only outside
//! Insert, where they are text.

use crate::{Action, EditKind, ModeChange, MotionKind, OperatorKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::Mode;

pub fn translate_key(mode: Mode, key: &KeyEvent) -> Option<Action> {
    tracing::trace!(target: "actions.translate", mode = mode.as_str(), key = %key, "translate_key_attempt");
    match mode {
        Mode::Normal => translate_normal(key),
        Mode::Insert => translate_insert(key),
        Mode::Visual => translate_visual(key),
    }
}

fn arrow_motion(code: KeyCode) -> Option<MotionKind> {
    match code {
        KeyCode::Left => Some(MotionKind::Left),
        KeyCode::Right => Some(MotionKind::Right),
        KeyCode::Up => Some(MotionKind::Up),
        KeyCode::Down => Some(MotionKind::Down),
        _ => None,
    }
}

/// Letter or arrow motion shared by Normal and Visual.
fn motion(key: &KeyEvent) -> Option<MotionKind> {
    if let Some(m) = arrow_motion(key.code) {
        return Some(m);
    }
    if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char('h') => Some(MotionKind::Left),
        KeyCode::Char('j') => Some(MotionKind::Down),
        KeyCode::Char('k') => Some(MotionKind::Up),
        KeyCode::Char('l') => Some(MotionKind::Right),
        _ => None,
    }
}

fn translate_normal(key: &KeyEvent) -> Option<Action> {
    if let Some(m) = motion(key) {
        return Some(Action::Motion(m));
    }
    match (key.code, key.printable()) {
        (KeyCode::Insert, _) | (_, Some('i')) => Some(Action::ModeChange(ModeChange::EnterInsert)),
        (_, Some('v')) => Some(Action::ModeChange(ModeChange::EnterVisual)),
        _ => None,
    }
}

fn translate_insert(key: &KeyEvent) -> Option<Action> {
    if let Some(m) = arrow_motion(key.code) {
        return Some(Action::Motion(m));
    }
    match key.code {
        KeyCode::Esc => Some(Action::ModeChange(ModeChange::LeaveInsert)),
        KeyCode::Enter => Some(Action::Edit(EditKind::InsertNewline)),
        KeyCode::Backspace => Some(Action::Edit(EditKind::Backspace)),
        KeyCode::Tab => Some(Action::Edit(EditKind::InsertChar('\t'))),
        _ => key
            .printable()
            .map(|c| Action::Edit(EditKind::InsertChar(c))),
    }
}

fn translate_visual(key: &KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Esc {
        return Some(Action::ModeChange(ModeChange::LeaveVisual));
    }
    if let Some(m) = motion(key) {
        return Some(Action::Motion(m));
    }
    match key.printable() {
        Some('d' | 'x') => Some(Action::VisualOperator(OperatorKind::Delete)),
        Some('y') => Some(Action::VisualOperator(OperatorKind::Yank)),
        Some('c') => Some(Action::VisualOperator(OperatorKind::Change)),
        _ => None,
    }
}
