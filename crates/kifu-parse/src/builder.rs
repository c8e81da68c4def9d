//! Game-tree builder from assembled items.

use tracing::debug;

use crate::{GameTree, Item, ParseError, ParseErrorKind, Span};

/// Builder that constructs a [`GameTree`] from [`Item`]s.
///
/// Nesting is tracked with an explicit stack, so deeply nested variations do
/// not grow the call stack.
pub struct TreeBuilder {
    stack: Vec<BuilderFrame>,
    /// The tree receiving nodes. Starts as the implicit collection that holds
    /// every top-level game.
    current: GameTree,
}

/// A parent tree waiting for its child to close.
struct BuilderFrame {
    tree: GameTree,
    /// The `(` that opened the child.
    open: Span,
}

impl TreeBuilder {
    /// Create a new tree builder.
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            current: GameTree::default(),
        }
    }

    /// Feed one item.
    pub fn item(&mut self, item: Item) -> Result<(), ParseError> {
        match item {
            Item::Open { span } => {
                // Top-level games may follow each other directly; inside a
                // game a branch needs a node in front of it.
                if !self.stack.is_empty() && self.current.sequence.is_empty() {
                    return Err(ParseError::new(
                        ParseErrorKind::EmptySequenceBeforeBranch,
                        span,
                    ));
                }
                let parent = std::mem::take(&mut self.current);
                self.stack.push(BuilderFrame {
                    tree: parent,
                    open: span,
                });
            }

            Item::Close { span } => {
                let Some(frame) = self.stack.pop() else {
                    return Err(ParseError::new(
                        ParseErrorKind::UnbalancedParentheses,
                        span,
                    ));
                };
                if self.current.sequence.is_empty() {
                    return Err(ParseError::new(
                        ParseErrorKind::EmptySequenceBeforeBranch,
                        span,
                    ));
                }
                let finished = std::mem::replace(&mut self.current, frame.tree);
                self.current.leaves.push(finished);
            }

            Item::Node(node) => {
                if self.stack.is_empty() {
                    return Err(ParseError::new(
                        ParseErrorKind::UnbalancedParentheses,
                        node.span,
                    ));
                }
                self.current.sequence.push(node);
            }
        }
        Ok(())
    }

    /// Finish building and return the root tree.
    ///
    /// A single top-level game is returned as is; several are returned as a
    /// collection whose `sequence` is empty.
    pub fn finish(self) -> Result<GameTree, ParseError> {
        if let Some(frame) = self.stack.last() {
            return Err(ParseError::new(
                ParseErrorKind::UnbalancedParentheses,
                frame.open,
            ));
        }

        let mut collection = self.current;
        debug!(games = collection.leaves.len(), "built game tree");
        match collection.leaves.len() {
            0 => Err(ParseError::new(ParseErrorKind::EmptyInput, Span::point(0))),
            1 => Ok(collection.leaves.remove(0)),
            _ => Ok(collection),
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
