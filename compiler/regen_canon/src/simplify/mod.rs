//! Canonicalization: simplification passes, de-atomization and the
//! pattern-root rules.
//!
//! Every rewrite here is pure: the input tree is never modified and the
//! output matches exactly the same strings. The [`Simplifier`] carries the
//! configuration and collects the diagnostics a rewrite raises.
//!
//! # Passes
//!
//! One call to [`Simplifier::simplify`] rewrites the tree bottom-up once.
//! Some rewrites expose others (a literal that derepeats inside a group
//! lets the group elide, which lets an outer repetition fold), so
//! [`Simplifier::canonicalize`] repeats passes until the tree stops
//! changing or [`CanonConfig::max_passes`] is reached.

mod group;
mod repeat;

pub use group::derepeated;

use regen_diagnostic::{Diagnostic, DiagnosticCode, DiagnosticQueue};
use regen_ir::{Group, GroupKind, Node, PatternError, Repeat};
use regen_stack::with_stack;
use tracing::{debug, trace};

use crate::derepeat::shortest_period;
use crate::CanonConfig;

/// Simplification context: configuration plus a diagnostics sink.
#[derive(Clone, Debug, Default)]
pub struct Simplifier {
    config: CanonConfig,
    diagnostics: DiagnosticQueue,
}

impl Simplifier {
    pub fn new(config: CanonConfig) -> Self {
        Simplifier {
            config,
            diagnostics: DiagnosticQueue::new(),
        }
    }

    pub fn config(&self) -> &CanonConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &DiagnosticQueue {
        &self.diagnostics
    }

    /// Take the diagnostics collected so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.flush()
    }

    /// One bottom-up simplification pass.
    pub fn simplify(&mut self, node: &Node) -> Result<Node, PatternError> {
        with_stack(|| match node {
            Node::Literal(lit) => self.simplify_literal(lit.text()),
            Node::Repeat(repeat) => self.simplify_repeat(repeat),
            Node::Group(group) => self.simplify_group_with(group, true, true),
            Node::Alternation(alt) => {
                let mut branches = Vec::with_capacity(alt.branches().len());
                for branch in alt.branches() {
                    match self.simplify(branch)? {
                        Node::Alternation(inner) => branches.extend(inner.into_branches()),
                        other => branches.push(other),
                    }
                }
                if let [_] = branches.as_slice() {
                    if let Some(only) = branches.pop() {
                        return Ok(only);
                    }
                }
                Ok(Node::Alternation(alt.with_branches(branches).delimited()))
            }
            Node::Lookaround(look) => {
                let child = self.simplify(look.child())?;
                Ok(Node::Lookaround(look.with_child(child)))
            }
            Node::Conditional(cond) => {
                let yes = self.simplify(cond.yes())?;
                let no = self.simplify(cond.no())?;
                Ok(Node::Conditional(cond.with_branches(yes, no)))
            }
            Node::Verbatim(_) | Node::Class(_) | Node::Set(_) | Node::Backref(_) => {
                Ok(node.clone())
            }
        })
    }

    /// Simplify until the tree stops changing.
    ///
    /// Stops after [`CanonConfig::max_passes`] passes with a `W0003`
    /// diagnostic; the last tree is still a valid, equivalent pattern.
    pub fn canonicalize(&mut self, node: &Node) -> Result<Node, PatternError> {
        let mut current = node.clone();
        for pass in 1..=self.config.max_passes {
            let next = self.simplify(&current)?;
            if next == current {
                trace!(pass, "fixed point reached");
                return Ok(next);
            }
            current = next;
        }
        self.diagnostics.push(Diagnostic::new(DiagnosticCode::W0003).with_message(format!(
            "simplification did not reach a fixed point within {} passes",
            self.config.max_passes
        )));
        Ok(current)
    }

    /// The most unwrapped equivalent of `node`.
    ///
    /// Delimited groups become undelimited sequences and alternations lose
    /// their delimiters. Unwrapping a capturing group drops its capture;
    /// with `warn` set that records a `W0002` diagnostic.
    pub fn deatomize(&mut self, node: &Node, warn: bool) -> Node {
        match node {
            Node::Group(group) if group.is_atomic() => {
                if group.is_capturing() && warn {
                    let what = match group.name() {
                        Some(name) => format!("named group `{name}`"),
                        None => "capturing group".to_string(),
                    };
                    self.diagnostics.push(
                        Diagnostic::new(DiagnosticCode::W0002)
                            .with_message(format!("{what} de-atomized; its capture is lost")),
                    );
                }
                Node::Group(Group::sequence(group.children().to_vec()))
            }
            Node::Alternation(alt) => Node::Alternation(alt.bare()),
            Node::Repeat(repeat) if repeat.quantifier().is_none() => {
                self.deatomize(repeat.child(), warn)
            }
            _ => node.clone(),
        }
    }

    /// Canonical form of a pattern root.
    ///
    /// A capturing root keeps its delimiters (a named one is reported,
    /// since the engine numbers the match itself as group 0 and the root as
    /// group 1). A non-capturing root is unwrapped, and an alternation root
    /// renders bare.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn toplevel(&mut self, root: &Node) -> Result<Node, PatternError> {
        self.report_root(root);
        let mut node = root.clone();
        for _ in 0..self.config.max_passes {
            node = self.canonicalize(&release(node))?;
            let wrapped = matches!(&node, Node::Group(group) if group.kind() == &GroupKind::NonCapturing);
            if !wrapped {
                break;
            }
        }
        Ok(match node {
            Node::Alternation(alt) => Node::Alternation(alt.bare()),
            other => other,
        })
    }

    fn report_root(&mut self, root: &Node) {
        let Some(group) = root.as_group() else {
            return;
        };
        match group.kind() {
            GroupKind::Named(name) => {
                self.diagnostics.push(Diagnostic::new(DiagnosticCode::W0001).with_message(
                    format!("named group `{name}` is the pattern root; nested groups are numbered from 2"),
                ));
            }
            GroupKind::NonCapturing if self.config.report_root_notes => {
                self.diagnostics.push(Diagnostic::new(DiagnosticCode::N0001));
            }
            GroupKind::Capturing | GroupKind::NonCapturing | GroupKind::Sequence => {}
        }
    }

    fn simplify_literal(&mut self, text: &str) -> Result<Node, PatternError> {
        let chars: Vec<char> = text.chars().collect();
        let (unit, count) = shortest_period(&chars);
        if count == 1 {
            return Ok(Node::literal(text));
        }
        let Ok(count) = u32::try_from(count) else {
            return Ok(Node::literal(text));
        };
        let prefix: String = chars[..unit].iter().collect();
        debug!(text, unit = %prefix, count, "literal derepeated");
        let repeat = Repeat::exact(Node::literal(prefix), count)?;
        self.simplify_repeat(&repeat)
    }
}

/// `node` without a non-capturing wrapper, for positions where it no longer
/// needs to be one atom (the pattern root, an unquantified repetition).
/// Captures are never dropped here.
fn release(node: Node) -> Node {
    match node {
        Node::Group(group) if group.kind() == &GroupKind::NonCapturing => {
            Node::Group(Group::sequence(group.into_children()))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests;
