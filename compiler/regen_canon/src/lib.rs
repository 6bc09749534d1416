//! Canonicalization and compilation of regen pattern trees.
//!
//! # Pipeline
//!
//! ```text
//! build tree (regen_ir) → toplevel: simplify to a fixed point → render → compile (fancy-regex)
//! ```
//!
//! [`Pattern`] runs the pipeline once, on first use, and keeps the rendered
//! string and the compiled matcher for every later search.
//!
//! # What simplification does
//!
//! 1. **Derepeat**: `abcabc` and child sequences `[x, y, x, y]` become
//!    fixed-count repetitions of their shortest unit.
//! 2. **Fold**: `(?:a{2,3}){2}` becomes `a{4,6}` when both forms match the
//!    same counts.
//! 3. **Flatten and elide**: undelimited sequences are spliced into their
//!    parent; `(?:a)` becomes `a`.
//! 4. **Drop**: `{1,1}` repetitions disappear.
//!
//! Non-fatal findings (a named group as the pattern root, a capture lost to
//! de-atomization, the pass limit) are reported as
//! [`Diagnostic`](regen_diagnostic::Diagnostic)s and as `tracing` events.

mod config;
mod derepeat;
mod join;
mod pattern;
mod simplify;

use std::sync::Once;

pub use config::{CanonConfig, MAX_PASSES_VAR, ROOT_NOTES_VAR};
pub use derepeat::shortest_period;
pub use join::join;
pub use pattern::{render_pattern, CompileError, Pattern};
pub use simplify::{derepeated, Simplifier};

use regen_ir::{Node, PatternError};

/// Canonicalization on a node with a throwaway [`Simplifier`].
///
/// Diagnostics still reach `tracing`; use a [`Simplifier`] directly to
/// collect them.
pub trait Canonicalize {
    /// One simplification pass.
    fn simplified(&self) -> Result<Node, PatternError>;

    /// The most unwrapped equivalent. A capture lost on the way is reported
    /// as `W0002` through `tracing`.
    fn deatomized(&self) -> Node;

    /// Canonical form as a pattern root.
    fn toplevel(&self) -> Result<Node, PatternError>;
}

impl Canonicalize for Node {
    fn simplified(&self) -> Result<Node, PatternError> {
        Simplifier::default().simplify(self)
    }

    fn deatomized(&self) -> Node {
        Simplifier::default().deatomize(self, true)
    }

    fn toplevel(&self) -> Result<Node, PatternError> {
        Simplifier::new(CanonConfig::from_env()).toplevel(self)
    }
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and nothing after the first call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
