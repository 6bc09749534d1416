//! Canonicalizer configuration.

use std::env;
use std::str::FromStr;

/// Environment variable overriding [`CanonConfig::max_passes`].
pub const MAX_PASSES_VAR: &str = "REGEN_MAX_PASSES";

/// Environment variable overriding [`CanonConfig::report_root_notes`].
pub const ROOT_NOTES_VAR: &str = "REGEN_ROOT_NOTES";

/// Knobs for [`Simplifier`](crate::Simplifier).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CanonConfig {
    /// Upper bound on simplification passes before giving up on a fixed
    /// point. Always at least 1.
    pub max_passes: usize,
    /// Whether note-level root diagnostics (`N0001`) are recorded.
    pub report_root_notes: bool,
}

impl CanonConfig {
    pub const DEFAULT_MAX_PASSES: usize = 32;

    /// Defaults, overridden by `REGEN_MAX_PASSES` and `REGEN_ROOT_NOTES`
    /// when set. Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(passes) = read_var::<usize>(MAX_PASSES_VAR) {
            config.max_passes = passes.max(1);
        }
        if let Some(notes) = read_var::<bool>(ROOT_NOTES_VAR) {
            config.report_root_notes = notes;
        }
        config
    }

    #[must_use]
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    #[must_use]
    pub fn with_root_notes(mut self, report: bool) -> Self {
        self.report_root_notes = report;
        self
    }
}

impl Default for CanonConfig {
    fn default() -> Self {
        CanonConfig {
            max_passes: Self::DEFAULT_MAX_PASSES,
            report_root_notes: true,
        }
    }
}

fn read_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    parse_setting(name, &raw)
}

fn parse_setting<T: FromStr>(name: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var = name, value = raw, "ignoring unparseable setting");
            None
        }
    }
}
