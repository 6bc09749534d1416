//! Repetition rewrites: atomize the child, simplify it, fold a nested
//! repetition into this one, and drop a `{1,1}` repetition entirely. A
//! child that consumes nothing is never quantified.

use regen_ir::repeat::quantifiable;
use regen_ir::{Bound, Group, Node, PatternError, Repeat};
use tracing::trace;

use super::{release, Simplifier};

impl Simplifier {
    pub(super) fn simplify_repeat(&mut self, repeat: &Repeat) -> Result<Node, PatternError> {
        if repeat.quantifier().is_none() {
            let child = self.simplify(repeat.child())?;
            return Ok(release(child));
        }
        let child = self.simplify(&quantifiable(repeat.child()))?;
        if child.is_zero_width() && !child.has_capture() {
            trace!(min = repeat.min(), "zero-width repetition collapsed");
            return Ok(if repeat.min() == 0 {
                Node::literal("")
            } else {
                release(child)
            });
        }
        let merged = merge_child(repeat, child)?;
        Ok(drop_if_unnecessary(merged))
    }
}

/// `outer` around `child`, folding `child` in when it is itself a quantified
/// repetition.
///
/// `(x{a,b}){c,d}` becomes `x{ac,bd}` only when both forms match the same
/// counts; otherwise the inner repetition stays, wrapped so the outer
/// quantifier can bind to it. A fixed inner count has no greediness of its
/// own, so it takes the outer one; two ranges that disagree are an error.
fn merge_child(outer: &Repeat, child: Node) -> Result<Repeat, PatternError> {
    let inner = match child {
        Node::Repeat(inner) if inner.quantifier().is_some() => inner,
        other => return rebuild(outer, other),
    };
    if inner.is_greedy() != outer.is_greedy() && !inner.is_fixed() {
        return Err(PatternError::IrreconcilableGreediness {
            outer_greedy: outer.is_greedy(),
            inner_greedy: inner.is_greedy(),
        });
    }
    match folded_bounds(outer, &inner) {
        Some((min, max)) => {
            trace!(min, %max, "nested repetition folded");
            Repeat::new(inner.into_child(), Bound::Finite(min), max, outer.is_greedy())
        }
        None => rebuild(outer, Node::Group(Group::wrapper(Node::Repeat(inner)))),
    }
}

fn rebuild(outer: &Repeat, child: Node) -> Result<Repeat, PatternError> {
    Repeat::new(child, Bound::Finite(outer.min()), outer.max(), outer.is_greedy())
}

/// Product bounds of `outer` over `inner`, if folding is exact and the
/// product fits.
///
/// `k` repetitions of `{a,b}` match every total in `[ka, kb]`, so the union
/// over `k` in `[c,d]` has no gaps exactly when `(k+1)a <= kb + 1` for each
/// `k` in `[c,d)`. The slack grows with `k`, so checking `k = c` suffices.
pub(super) fn folded_bounds(outer: &Repeat, inner: &Repeat) -> Option<(u32, Bound)> {
    let exact = outer.is_fixed() || {
        let c = u64::from(outer.min());
        let a = u64::from(inner.min());
        match inner.max() {
            Bound::Finite(b) => c * u64::from(b) + 1 >= (c + 1) * a,
            Bound::Infinite => c >= 1 || a <= 1,
        }
    };
    if !exact {
        return None;
    }
    let min = outer.min().checked_mul(inner.min())?;
    let max = outer.max().checked_mul(inner.max())?;
    Some((min, max))
}

fn drop_if_unnecessary(repeat: Repeat) -> Node {
    if repeat.quantifier().is_none() {
        release(repeat.into_child())
    } else {
        Node::Repeat(repeat)
    }
}
