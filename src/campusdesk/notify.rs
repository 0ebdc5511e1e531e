//! User-facing notices.
//!
//! Commands return their notices inside a `CmdResult`. Components that must
//! not fail loudly, such as a [`DurableCell`](crate::cell::DurableCell) whose
//! write was refused, hand their notices to a [`Reporter`] instead, and the
//! API folds whatever was reported into the next command result.

use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Receives notices that cannot be returned to the caller.
pub trait Reporter {
    fn report(&self, message: CmdMessage);
}

/// Collects reported notices until they are drained.
#[derive(Debug, Default)]
pub struct MessageLog {
    pending: RefCell<Vec<CmdMessage>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<CmdMessage> {
        self.pending.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl Reporter for MessageLog {
    fn report(&self, message: CmdMessage) {
        self.pending.borrow_mut().push(message);
    }
}
