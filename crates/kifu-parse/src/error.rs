//! Error kinds for SGF parsing.

use crate::Span;

/// Everything that can go wrong between raw text and a [`GameTree`](crate::GameTree).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    // Lexical
    /// A `[` with no matching unescaped `]`.
    #[error("unterminated property value")]
    UnterminatedValue,
    /// A `]` outside of any property value.
    #[error("unexpected character")]
    UnexpectedCharacter,

    // Container
    /// Nothing but whitespace.
    #[error("empty game record")]
    EmptyInput,
    /// Input does not start with `(;` or does not end with `)`.
    #[error("game record must start with \"(;\" and end with \")\"")]
    MissingDelimiters,

    // Properties
    /// A property identifier followed by no value.
    #[error("missing value for property {ident}")]
    MissingPropertyValue { ident: String },
    /// A value with no identifier in front of it.
    #[error("missing property identifier")]
    MissingPropertyIdentifier,
    /// The same identifier twice in one node.
    #[error("duplicate property identifier {ident}")]
    DuplicatePropertyIdentifier {
        ident: String,
        /// Where the identifier first appeared.
        original: Span,
    },
    /// An identifier between `)` and the next `;`.
    #[error("property {ident} is not inside a node")]
    PropertyOutsideNode { ident: String },

    // Tree shape
    /// `(` or `)` with no node before it in the enclosing sequence.
    #[error("game tree without a node sequence")]
    EmptySequenceBeforeBranch,
    /// Parentheses that do not pair up.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
}
