//! User-facing notices.
//!
//! Nothing in mobroom is fatal. Refused commands and failed writes are turned
//! into a [`Notice`] that the presentation layer shows and then forgets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, TimerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    /// Shown without interrupting the countdown.
    Warning,
    /// Must be acknowledged before anything else happens.
    Blocking,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn blocking(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Blocking,
            message: message.into(),
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.level == NoticeLevel::Blocking
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NoticeLevel::Info => write!(f, "{}", self.message),
            NoticeLevel::Warning => write!(f, "warning: {}", self.message),
            NoticeLevel::Blocking => write!(f, "!! {}", self.message),
        }
    }
}

impl From<&CoreError> for Notice {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::Timer(TimerError::EmptyRoster) => Notice::blocking(err_message(err)),
            CoreError::Storage(e) => {
                Notice::warning(format!("Failed to save stats. {e}"))
            }
            _ => Notice::warning(err_message(err)),
        }
    }
}

/// The innermost message, without the category prefix.
fn err_message(err: &CoreError) -> String {
    match err {
        CoreError::Validation(e) => e.to_string(),
        CoreError::Roster(e) => e.to_string(),
        CoreError::Timer(e) => e.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RosterError, StorageError};

    #[test]
    fn empty_roster_is_blocking() {
        let err = CoreError::from(TimerError::EmptyRoster);
        let notice = Notice::from(&err);
        assert!(notice.is_blocking());
        assert_eq!(notice.message, "Please add team members first!");
    }

    #[test]
    fn roster_errors_are_warnings_without_prefix() {
        let err = CoreError::from(RosterError::Duplicate("Ana".into()));
        let notice = Notice::from(&err);
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "'Ana' is already on the team");
    }

    #[test]
    fn storage_errors_mention_saving() {
        let err = CoreError::from(StorageError::Unavailable("quota exceeded".into()));
        let notice = Notice::from(&err);
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.starts_with("Failed to save stats."));
        assert!(notice.message.contains("quota exceeded"));
    }
}
