//! Modal input state machine.
//!
//! Key handling is split in two stages:
//! * [`translate_key`] maps `(mode, key)` to an [`Action`] without touching any
//!   state;
//! * [`dispatcher::dispatch`] applies an action to an `EditorState`.
//!
//! [`handle_key`] runs both for one key event and records the outcome as the
//! session's last error, so the host always has exactly one result per key.

pub mod dispatcher;
mod key_translator;

pub use dispatcher::{DispatchResult, dispatch, handle_key};
pub use key_translator::translate_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    ModeChange(ModeChange),
    Edit(EditKind),
    /// Operator key pressed in Visual mode. No operator semantics are defined;
    /// dispatch reports `EditError::NotImplemented`.
    VisualOperator(OperatorKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
}

impl MotionKind {
    /// `(delta_rows, delta_cols)` for this motion.
    pub fn delta(self) -> (isize, isize) {
        match self {
            MotionKind::Left => (0, -1),
            MotionKind::Right => (0, 1),
            MotionKind::Up => (-1, 0),
            MotionKind::Down => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    EnterInsert,
    LeaveInsert,
    EnterVisual,
    LeaveVisual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    InsertNewline,
    Backspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Delete,
    Yank,
    Change,
}

impl OperatorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperatorKind::Delete => "delete",
            OperatorKind::Yank => "yank",
            OperatorKind::Change => "change",
        }
    }
}
