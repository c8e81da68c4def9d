//! Tokenizer for SGF game records.

use crate::{Span, Token, TokenKind};
use tracing::trace;

/// A tokenizer that produces tokens from SGF source text.
#[derive(Clone)]
pub struct Tokenizer<'src> {
    /// The source text being tokenized.
    source: &'src str,
    /// The remaining source text (suffix of `source`).
    remaining: &'src str,
    /// Current byte position in `source`.
    pos: u32,
}

impl<'src> Tokenizer<'src> {
    /// Create a new tokenizer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            remaining: source,
            pos: 0,
        }
    }

    /// Get the current byte position.
    #[inline]
    pub fn position(&self) -> u32 {
        self.pos
    }

    /// Check if we're at the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.remaining.is_empty()
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    /// Advance by one character and return it.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8() as u32;
        self.remaining = &self.remaining[c.len_utf8()..];
        Some(c)
    }

    /// Create a token from the given start position to current position.
    fn token(&self, kind: TokenKind, start: u32) -> Token<'src> {
        let span = Span::new(start, self.pos);
        let text = &self.source[start as usize..self.pos as usize];
        trace!("Token {:?} at {:?}: {:?}", kind, span, text);
        Token::new(kind, span, text)
    }

    /// Get the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        let start = self.pos;
        let c = self.peek()?;

        let token = match c {
            '(' => {
                self.advance();
                self.token(TokenKind::LParen, start)
            }
            ')' => {
                self.advance();
                self.token(TokenKind::RParen, start)
            }
            ';' => {
                self.advance();
                self.token(TokenKind::Semicolon, start)
            }
            '[' => self.tokenize_value(),
            // A closing bracket outside a value closes nothing.
            ']' => {
                self.advance();
                self.token(TokenKind::Error, start)
            }
            _ if c.is_whitespace() => self.tokenize_whitespace(),
            _ => self.tokenize_ident(),
        };
        Some(token)
    }

    fn tokenize_whitespace(&mut self) -> Token<'src> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
        self.token(TokenKind::Whitespace, start)
    }

    /// Tokenize a property identifier: everything up to the next delimiter,
    /// bracket or whitespace.
    fn tokenize_ident(&mut self) -> Token<'src> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_ident_char(c) {
                self.advance();
            } else {
                break;
            }
        }
        self.token(TokenKind::Ident, start)
    }

    /// Tokenize a bracketed value `[...]`.
    ///
    /// A `]` closes the value unless an odd number of backslashes directly
    /// precedes it.
    fn tokenize_value(&mut self) -> Token<'src> {
        let start = self.pos;

        // Consume opening bracket
        self.advance();

        let mut backslashes = 0usize;
        loop {
            match self.advance() {
                None => return self.token(TokenKind::UnterminatedValue, start),
                Some(']') if backslashes % 2 == 0 => break,
                Some('\\') => backslashes += 1,
                Some(_) => backslashes = 0,
            }
        }

        self.token(TokenKind::Value, start)
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Check if a character can continue a property identifier.
fn is_ident_char(c: char) -> bool {
    !matches!(c, '(' | ')' | ';' | '[' | ']') && !c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kifu_testhelpers::init_tracing;
    use proptest::prelude::*;

    fn tokenize(source: &str) -> Vec<(TokenKind, &str)> {
        init_tracing();
        Tokenizer::new(source).map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_structural_tokens() {
        assert_eq!(tokenize("("), vec![(TokenKind::LParen, "(")]);
        assert_eq!(tokenize(")"), vec![(TokenKind::RParen, ")")]);
        assert_eq!(tokenize(";"), vec![(TokenKind::Semicolon, ";")]);
    }

    #[test]
    fn test_simple_record() {
        assert_eq!(
            tokenize("(;B[pd])"),
            vec![
                (TokenKind::LParen, "("),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Ident, "B"),
                (TokenKind::Value, "[pd]"),
                (TokenKind::RParen, ")"),
            ]
        );
    }

    #[test]
    fn test_whitespace_between_tokens() {
        let tokens = tokenize("(\n ;AB [aa]\t[bb] )");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::LParen, "("),
                (TokenKind::Whitespace, "\n "),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Ident, "AB"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Value, "[aa]"),
                (TokenKind::Whitespace, "\t"),
                (TokenKind::Value, "[bb]"),
                (TokenKind::Whitespace, " "),
                (TokenKind::RParen, ")"),
            ]
        );
    }

    #[test]
    fn test_value_keeps_delimiters_and_whitespace() {
        assert_eq!(
            tokenize("[ hello (world); ]"),
            vec![(TokenKind::Value, "[ hello (world); ]")]
        );
    }

    #[test]
    fn test_escaped_closing_bracket() {
        let tokens = tokenize(r"C[a\]b]");
        assert_eq!(
            tokens,
            vec![(TokenKind::Ident, "C"), (TokenKind::Value, r"[a\]b]")]
        );
    }

    #[test]
    fn test_escaped_backslash_before_bracket_closes() {
        // `\\` is two backslashes, so the bracket after them is a real close.
        let tokens = tokenize(r"C[a\\]B[cc]");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Ident, "C"),
                (TokenKind::Value, r"[a\\]"),
                (TokenKind::Ident, "B"),
                (TokenKind::Value, "[cc]"),
            ]
        );
    }

    #[test]
    fn test_escape_then_real_close() {
        let tokens: Vec<_> = Tokenizer::new(r"C[x\]]").collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].value().as_deref(), Some("x]"));
    }

    #[test]
    fn test_open_bracket_inside_value() {
        assert_eq!(
            tokenize("C[[a]"),
            vec![(TokenKind::Ident, "C"), (TokenKind::Value, "[[a]")]
        );
    }

    #[test]
    fn test_unterminated_value() {
        let tokens = tokenize("(;C[never closed");
        assert_eq!(
            tokens.last(),
            Some(&(TokenKind::UnterminatedValue, "[never closed"))
        );
    }

    #[test]
    fn test_unterminated_after_escape() {
        let tokens = tokenize(r"C[oops\]");
        assert_eq!(tokens.last().map(|t| t.0), Some(TokenKind::UnterminatedValue));
    }

    #[test]
    fn test_stray_closing_bracket_is_error() {
        let tokens = tokenize("(;])");
        assert_eq!(tokens[2], (TokenKind::Error, "]"));
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens: Vec<_> = Tokenizer::new("(;C[é])").collect();
        let value = &tokens[3];
        assert_eq!(value.span, Span::new(3, 7));
        assert_eq!(value.span.slice("(;C[é])"), "[é]");
    }

    /// Text with no backslash right before a `]` or at the end, which is
    /// what the `\]` escape can represent.
    fn escapable_text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop_oneof!["[a-z \\[\\]]", "\\\\[a-z]"], 0..20)
            .prop_map(|parts| parts.concat())
    }

    proptest! {
        /// Any text, escaped the SGF way, comes back out of a value unchanged.
        #[test]
        fn escaped_text_round_trips(text in escapable_text()) {
            let escaped = text.replace(']', "\\]");
            let source = format!("C[{escaped}]");
            let tokens: Vec<_> = Tokenizer::new(&source).collect();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[1].kind, TokenKind::Value);
            let value = tokens[1].value();
            prop_assert_eq!(value.as_deref(), Some(text.as_str()));
        }

        /// A `]` closes the value only after an even run of backslashes.
        #[test]
        fn backslash_parity_decides_the_close(run in 0usize..8) {
            let source = format!("C[x{}]]", "\\".repeat(run));
            let kinds: Vec<_> = Tokenizer::new(&source).map(|t| t.kind).collect();
            if run % 2 == 0 {
                prop_assert_eq!(kinds, vec![TokenKind::Ident, TokenKind::Value, TokenKind::Error]);
            } else {
                prop_assert_eq!(kinds, vec![TokenKind::Ident, TokenKind::Value]);
            }
        }
    }
}
