//! Failure reporting shared by a request and the response it produces.

use std::fmt;
use std::sync::Arc;

/// Decides how a recorded failure is surfaced to the caller.
pub trait Reporter: Send + Sync {
    fn errorf(&self, message: &str);
}

/// Panics with the failure message, aborting the current test.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    fn errorf(&self, message: &str) {
        panic!("{}", message);
    }
}

/// Logs the failure message at error level and carries on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn errorf(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Failure latch bound to a reporter.
///
/// Only the first failure reaches the reporter; once failed, the chain
/// stays failed.
#[derive(Clone)]
pub struct Chain {
    reporter: Arc<dyn Reporter>,
    failed: bool,
}

impl Chain {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self {
            reporter,
            failed: false,
        }
    }

    /// Record a failure
    pub fn fail(&mut self, message: impl fmt::Display) {
        let message = message.to_string();
        log::debug!("request failed: {}", message);
        if self.failed {
            return;
        }
        self.failed = true;
        self.reporter.errorf(&message);
    }

    pub fn failed(&self) -> bool {
        self.failed
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain").field("failed", &self.failed).finish()
    }
}
