//! Error kinds surfaced by document stores and the editing core.
//!
//! None of these are fatal: the dispatcher hands them back to the host which
//! shows the most recent one on the status line and keeps reading keys.

use std::collections::TryReserveError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// Growing a store failed; the keystroke that triggered it is not applied.
    #[error("storage error: {0}")]
    Storage(#[from] TryReserveError),
    /// An offset or range argument violated its bound contract.
    #[error("invalid range: {0}")]
    InvalidRange(String),
    /// Capability declared but not provided by this build.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

impl EditError {
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::NotImplemented(msg.into())
    }
}

pub type EditResult<T> = Result<T, EditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_kind() {
        let e = EditError::invalid_range("no active selection");
        assert_eq!(e.to_string(), "invalid range: no active selection");
        let e = EditError::not_implemented("visual operator 'd'");
        assert_eq!(e.to_string(), "not implemented: visual operator 'd'");
    }

    #[test]
    fn reserve_failure_converts_to_storage() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        let e: EditError = err.into();
        assert!(matches!(e, EditError::Storage(_)));
        assert!(e.to_string().starts_with("storage error"));
    }
}
