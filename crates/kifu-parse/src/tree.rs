//! The game tree produced by the parser.

use crate::Node;

/// A linear sequence of nodes followed by zero or more variations.
///
/// Every tree stored in `leaves` has a non-empty `sequence`. Only the tree
/// returned for a multi-game collection has an empty `sequence` of its own.
///
/// Dropping is iterative. The derived `Clone`, `PartialEq` and `Debug`
/// recurse once per nesting level, so avoid them on untrusted input with
/// very deep variations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameTree {
    /// Nodes in play order.
    pub sequence: Vec<Node>,
    /// Variations branching after the last node of `sequence`.
    pub leaves: Vec<GameTree>,
}

impl GameTree {
    /// Whether this tree is a container of independent games rather than a
    /// game itself.
    pub fn is_collection(&self) -> bool {
        self.sequence.is_empty()
    }

    /// First node of the sequence, where game-wide properties such as `SZ` live.
    pub fn root_node(&self) -> Option<&Node> {
        self.sequence.first()
    }

    /// Total number of nodes in this tree and all of its variations.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            count += tree.sequence.len();
            pending.extend(tree.leaves.iter());
        }
        count
    }

    /// Length of the longest line of play through this tree.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0usize)];
        while let Some((tree, above)) = pending.pop() {
            let here = above + tree.sequence.len();
            deepest = deepest.max(here);
            pending.extend(tree.leaves.iter().map(|leaf| (leaf, here)));
        }
        deepest
    }
}

impl Drop for GameTree {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.leaves);
        while let Some(mut tree) = pending.pop() {
            pending.append(&mut tree.leaves);
        }
    }
}
