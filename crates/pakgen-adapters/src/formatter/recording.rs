//! Recording formatter test double.

use std::sync::{Arc, Mutex};

use pakgen_core::{
    application::{ApplicationError, ports::Formatter},
    domain::RelativePath,
    error::PakgenResult,
};

/// Formatter that records every call instead of spawning a process.
///
/// Clones share the same call log. Can be told to fail, for exercising the
/// emit-succeeded-but-format-failed path.
#[derive(Debug, Clone, Default)]
pub struct RecordingFormatter {
    calls: Arc<Mutex<Vec<Vec<RelativePath>>>>,
    fail: bool,
}

impl RecordingFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A formatter whose every invocation reports a non-zero exit.
    pub fn failing() -> Self {
        Self {
            calls: Arc::default(),
            fail: true,
        }
    }

    /// All recorded invocations, in order.
    pub fn calls(&self) -> Vec<Vec<RelativePath>> {
        self.calls.lock().unwrap().clone()
    }
}

impl Formatter for RecordingFormatter {
    fn format(&self, paths: &[RelativePath]) -> PakgenResult<()> {
        self.calls.lock().unwrap().push(paths.to_vec());
        if self.fail {
            return Err(ApplicationError::FormatterFailed {
                command: "recording".into(),
                status: "exit status: 1".into(),
            }
            .into());
        }
        Ok(())
    }
}
