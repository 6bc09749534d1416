//! Alternation between branches: `a|b|c`.

use crate::Node;

/// A choice between branches.
///
/// `|` binds looser than anything else, so in context an alternation is
/// delimited as `(?:a|b)`. Only at the pattern root, where nothing can bind
/// around it, does it render bare.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alternation {
    branches: Vec<Node>,
    delimited: bool,
}

impl Alternation {
    pub fn new(branches: Vec<Node>) -> Self {
        Alternation {
            branches,
            delimited: true,
        }
    }

    pub fn branches(&self) -> &[Node] {
        &self.branches
    }

    pub fn into_branches(self) -> Vec<Node> {
        self.branches
    }

    pub fn is_delimited(&self) -> bool {
        self.delimited
    }

    #[must_use]
    pub fn with_branches(&self, branches: Vec<Node>) -> Self {
        Alternation {
            branches,
            delimited: self.delimited,
        }
    }

    #[must_use]
    pub fn delimited(&self) -> Self {
        Alternation {
            branches: self.branches.clone(),
            delimited: true,
        }
    }

    #[must_use]
    pub fn bare(&self) -> Self {
        Alternation {
            branches: self.branches.clone(),
            delimited: false,
        }
    }

    pub fn atoms(&self) -> usize {
        match (self.delimited, self.branches.as_slice()) {
            (true, _) => 1,
            (false, [only]) => only.atoms(),
            (false, branches) => branches.len(),
        }
    }

    pub fn render_into(&self, out: &mut String) {
        if self.delimited {
            out.push_str("(?:");
        }
        for (i, branch) in self.branches.iter().enumerate() {
            if i > 0 {
                out.push('|');
            }
            branch.render_into(out);
        }
        if self.delimited {
            out.push(')');
        }
    }
}
