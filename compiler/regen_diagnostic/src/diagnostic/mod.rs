//! Core diagnostic types.

use std::fmt;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// The rendered pattern probably does not do what the author intended.
    Warning,
    /// Informational; the rendered pattern is correct but has a quirk.
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// Stable identifiers for every diagnostic the canonicalizer emits.
///
/// Format: `W####` for warnings, `N####` for notes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticCode {
    /// A named capturing group is the pattern root; the engine numbers the
    /// whole match as group 0 and the root as group 1, so nested groups
    /// start at 2.
    W0001,
    /// A capturing group was de-atomized and lost its capture.
    W0002,
    /// Simplification stopped at the pass limit before reaching a fixed point.
    W0003,
    /// A non-capturing group is the pattern root; the engine still reports
    /// the whole match as group 0.
    N0001,
}

impl DiagnosticCode {
    /// The code as it appears in output, e.g. `"W0002"`.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::W0001 => "W0001",
            DiagnosticCode::W0002 => "W0002",
            DiagnosticCode::W0003 => "W0003",
            DiagnosticCode::N0001 => "N0001",
        }
    }

    /// Severity implied by the code prefix.
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticCode::W0001 | DiagnosticCode::W0002 | DiagnosticCode::W0003 => {
                Severity::Warning
            }
            DiagnosticCode::N0001 => Severity::Note,
        }
    }

    /// One-line description, used when a diagnostic has no custom message.
    pub fn description(self) -> &'static str {
        match self {
            DiagnosticCode::W0001 => {
                "named group used as pattern root; nested groups are numbered from 2"
            }
            DiagnosticCode::W0002 => "capturing group de-atomized; its capture is lost",
            DiagnosticCode::W0003 => "simplification did not reach a fixed point",
            DiagnosticCode::N0001 => {
                "non-capturing group used as pattern root; the match is still group 0"
            }
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single non-fatal report about a pattern.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic carrying the code's default description.
    pub fn new(code: DiagnosticCode) -> Self {
        Diagnostic {
            code,
            severity: code.severity(),
            message: code.description().to_string(),
        }
    }

    /// Replace the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}
