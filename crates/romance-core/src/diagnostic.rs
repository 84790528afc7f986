//! Non-fatal configuration diagnostics.
//!
//! Validation never aborts: it corrects what it can and reports what it
//! found as a list of `Diagnostic`s for the host to surface.

use std::fmt;

/// How serious a configuration finding is.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Severity {
    /// Value was missing or out of range and has been corrected.
    Warning,
    /// Value is inconsistent and was left as-is; behavior may be odd.
    Error,
}

/// One configuration finding, scoped to the block it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// e.g. `"kinds[human].sexuality"`.
    pub scope: String,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, scope: scope.into(), message: message.into() }
    }

    pub fn error(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, scope: scope.into(), message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Emit this diagnostic through `tracing` at the matching level.
    pub fn log(&self) {
        match self.severity {
            Severity::Warning => tracing::warn!(scope = %self.scope, "{}", self.message),
            Severity::Error   => tracing::error!(scope = %self.scope, "{}", self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error   => "error",
        };
        write!(f, "{level} [{}]: {}", self.scope, self.message)
    }
}
