//! Compiled patterns: canonicalize once, render once, compile once.

use std::fmt;
use std::sync::OnceLock;

use fancy_regex::{Captures, Match, Regex};
use regen_diagnostic::Diagnostic;
use regen_ir::{IntoNode, Node, PatternError};
use tracing::debug;

use crate::{CanonConfig, Simplifier};

/// Failure to turn a pattern tree into a working matcher.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// The tree itself is invalid (raised while canonicalizing).
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// The engine rejected the rendered pattern.
    #[error("engine rejected pattern `{pattern}`: {message}")]
    Engine { pattern: String, message: String },

    /// The engine failed while matching (for example, a backtracking
    /// limit was hit).
    #[error("matching `{pattern}` failed: {message}")]
    Match { pattern: String, message: String },
}

/// Canonicalize `root`, render it and compile the result.
///
/// Diagnostics raised along the way are logged; use [`Pattern`] to collect
/// them.
pub fn render_pattern(root: &Node) -> Result<(String, Regex), CompileError> {
    let compiled = Compiled::build(root, CanonConfig::from_env())?;
    Ok((compiled.rendered, compiled.regex))
}

#[derive(Debug)]
struct Compiled {
    canonical: Node,
    rendered: String,
    regex: Regex,
    /// `\A(?:...)`, for matches that must start at the beginning of input.
    anchored: Regex,
    diagnostics: Vec<Diagnostic>,
}

impl Compiled {
    #[tracing::instrument(level = "debug", skip_all)]
    fn build(root: &Node, config: CanonConfig) -> Result<Self, CompileError> {
        let mut simplifier = Simplifier::new(config);
        let canonical = simplifier.toplevel(root)?;
        let rendered = canonical.render();
        debug!(pattern = %rendered, "rendered");
        let regex = compile(&rendered)?;
        let anchored = compile(&format!(r"\A(?:{rendered})"))?;
        Ok(Compiled {
            canonical,
            rendered,
            regex,
            anchored,
            diagnostics: simplifier.take_diagnostics(),
        })
    }
}

fn compile(pattern: &str) -> Result<Regex, CompileError> {
    Regex::new(pattern).map_err(|err| CompileError::Engine {
        pattern: pattern.to_string(),
        message: err.to_string(),
    })
}

/// A pattern tree with its canonical form, rendering and matcher computed
/// on first use and cached for the life of the value.
///
/// The cache is write-once: the tree cannot be changed after construction,
/// and concurrent first uses compute it exactly once.
pub struct Pattern {
    root: Node,
    config: CanonConfig,
    compiled: OnceLock<Result<Compiled, CompileError>>,
}

impl Pattern {
    /// Coerce `root` into a pattern with the default configuration.
    pub fn new(root: impl IntoNode) -> Result<Self, PatternError> {
        Ok(Self::from_node(root.into_node()?))
    }

    pub fn from_node(root: Node) -> Self {
        Self::with_config(root, CanonConfig::from_env())
    }

    pub fn with_config(root: Node, config: CanonConfig) -> Self {
        Pattern {
            root,
            config,
            compiled: OnceLock::new(),
        }
    }

    /// The tree as constructed.
    pub fn root(&self) -> &Node {
        &self.root
    }

    fn compiled(&self) -> Result<&Compiled, CompileError> {
        self.compiled
            .get_or_init(|| Compiled::build(&self.root, self.config))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// The canonical tree that is rendered.
    pub fn canonical(&self) -> Result<&Node, CompileError> {
        Ok(&self.compiled()?.canonical)
    }

    /// Engine syntax for the canonical tree.
    pub fn rendered(&self) -> Result<&str, CompileError> {
        Ok(&self.compiled()?.rendered)
    }

    pub fn regex(&self) -> Result<&Regex, CompileError> {
        Ok(&self.compiled()?.regex)
    }

    /// Diagnostics raised while canonicalizing.
    pub fn diagnostics(&self) -> Result<&[Diagnostic], CompileError> {
        Ok(&self.compiled()?.diagnostics)
    }

    /// First match anywhere in `text`.
    pub fn search<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, CompileError> {
        let compiled = self.compiled()?;
        compiled
            .regex
            .find(text)
            .map_err(|err| matching_failed(&compiled.rendered, &err))
    }

    /// Match that must begin at the start of `text`.
    pub fn match_start<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, CompileError> {
        let compiled = self.compiled()?;
        compiled
            .anchored
            .find(text)
            .map_err(|err| matching_failed(&compiled.rendered, &err))
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> Result<bool, CompileError> {
        let compiled = self.compiled()?;
        compiled
            .regex
            .is_match(text)
            .map_err(|err| matching_failed(&compiled.rendered, &err))
    }

    /// Groups of the first match in `text`.
    pub fn captures<'t>(&self, text: &'t str) -> Result<Option<Captures<'t>>, CompileError> {
        let compiled = self.compiled()?;
        compiled
            .regex
            .captures(text)
            .map_err(|err| matching_failed(&compiled.rendered, &err))
    }
}

fn matching_failed(pattern: &str, err: &fancy_regex::Error) -> CompileError {
    CompileError::Match {
        pattern: pattern.to_string(),
        message: err.to_string(),
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("root", &self.root)
            .field("rendered", &self.compiled.get().map(|c| c.as_ref().map(|c| &c.rendered)))
            .finish_non_exhaustive()
    }
}

impl TryFrom<Node> for Pattern {
    type Error = CompileError;

    /// Build and eagerly compile.
    fn try_from(root: Node) -> Result<Self, Self::Error> {
        let pattern = Pattern::from_node(root);
        pattern.compiled()?;
        Ok(pattern)
    }
}
