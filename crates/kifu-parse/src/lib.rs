#![doc = include_str!("../README.md")]

pub use kifu_tokenizer::{Span, Token, TokenKind, Tokenizer};

mod error;
pub use error::ParseErrorKind;

mod diagnostic;
pub use diagnostic::ParseError;

mod node;
pub use node::{Node, Property};

mod assembler;
pub use assembler::{Assembler, Item};

mod tree;
pub use tree::GameTree;

mod builder;
pub use builder::TreeBuilder;

/// Parse SGF text into a game tree.
pub fn parse(source: &str) -> Result<GameTree, ParseError> {
    let items = Assembler::new(source).assemble()?;
    let mut builder = TreeBuilder::new();
    for item in items {
        builder.item(item)?;
    }
    builder.finish()
}
