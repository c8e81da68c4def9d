//! Token types for the SGF tokenizer.

use std::borrow::Cow;

use crate::Span;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structural tokens
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,

    /// Property identifier: `B`, `AB`, `SZ`, ...
    Ident,
    /// Bracketed property value `[...]`, brackets included in the text.
    Value,

    /// Whitespace between tokens. Never significant.
    Whitespace,

    // Errors
    /// A `[` that is never closed. Spans to the end of input.
    UnterminatedValue,
    /// A character that cannot start any token (a stray `]`).
    Error,
}

impl TokenKind {
    /// Whether this token carries no meaning for the parser.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::UnterminatedValue | TokenKind::Error)
    }
}

/// A token with its kind, span, and source text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span in the source text.
    pub span: Span,
    /// The source text of this token.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: &'src str) -> Self {
        Self { kind, span, text }
    }

    /// Contents of a `Value` token without its brackets, with `\]` unescaped.
    ///
    /// Returns `None` for any other kind of token.
    pub fn value(&self) -> Option<Cow<'src, str>> {
        if self.kind != TokenKind::Value {
            return None;
        }
        let inner = self
            .text
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))?;
        Some(unescape_value(inner))
    }
}

/// Replace every `\]` in raw value contents with `]`.
///
/// Inside a closed value every `]` is escaped, so dropping the one backslash
/// in front of each `]` is enough. Other backslashes are kept verbatim.
pub fn unescape_value(raw: &str) -> Cow<'_, str> {
    if raw.contains("\\]") {
        Cow::Owned(raw.replace("\\]", "]"))
    } else {
        Cow::Borrowed(raw)
    }
}
