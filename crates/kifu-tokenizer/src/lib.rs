//! A tokenizer for SGF game records.

mod span;
pub use span::Span;

mod token;
pub use token::{Token, TokenKind, unescape_value};

mod tokenizer;
pub use tokenizer::Tokenizer;
