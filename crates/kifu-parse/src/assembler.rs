//! Groups identifier and value tokens into nodes.

use kifu_tokenizer::{Token, TokenKind, Tokenizer};
use tracing::trace;

use crate::{Node, ParseError, ParseErrorKind, Span};

/// Output of the assembler: structural parentheses interleaved with nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// `(`
    Open { span: Span },
    /// `)`
    Close { span: Span },
    /// A complete node, started by `;`.
    Node(Node),
}

/// Turns SGF source text into a flat list of [`Item`]s.
pub struct Assembler<'src> {
    tokens: Vec<Token<'src>>,
    items: Vec<Item>,
    /// The node under construction. Its last property is the pending one.
    node: Option<Node>,
}

impl<'src> Assembler<'src> {
    /// Tokenize `source`, dropping whitespace.
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: Tokenizer::new(source)
                .filter(|t| !t.kind.is_trivia())
                .collect(),
            items: Vec::new(),
            node: None,
        }
    }

    /// Run assembly to completion.
    pub fn assemble(mut self) -> Result<Vec<Item>, ParseError> {
        self.check_container()?;

        let tokens = std::mem::take(&mut self.tokens);
        for token in tokens {
            match token.kind {
                TokenKind::LParen => {
                    self.flush()?;
                    self.items.push(Item::Open { span: token.span });
                }
                TokenKind::RParen => {
                    self.flush()?;
                    self.items.push(Item::Close { span: token.span });
                }
                TokenKind::Semicolon => {
                    self.flush()?;
                    self.node = Some(Node::new(token.span));
                }
                TokenKind::Ident => self.ident(&token)?,
                TokenKind::Value => self.value(&token)?,
                // Filtered in `new` and rejected in `check_container`.
                TokenKind::Whitespace | TokenKind::UnterminatedValue | TokenKind::Error => {}
            }
        }

        // The container check guarantees a trailing `)`, which flushed the
        // last node.
        debug_assert!(self.node.is_none());
        Ok(self.items)
    }

    /// Lexical errors, emptiness and the `(;` ... `)` frame.
    fn check_container(&self) -> Result<(), ParseError> {
        if let Some(bad) = self.tokens.iter().find(|t| t.kind.is_error()) {
            let kind = match bad.kind {
                TokenKind::UnterminatedValue => ParseErrorKind::UnterminatedValue,
                _ => ParseErrorKind::UnexpectedCharacter,
            };
            return Err(ParseError::new(kind, bad.span));
        }

        let (Some(first), Some(last)) = (self.tokens.first(), self.tokens.last()) else {
            return Err(ParseError::new(ParseErrorKind::EmptyInput, Span::point(0)));
        };

        if first.kind != TokenKind::LParen {
            return Err(ParseError::new(ParseErrorKind::MissingDelimiters, first.span));
        }
        match self.tokens.get(1) {
            Some(second) if second.kind == TokenKind::Semicolon => {}
            Some(second) => {
                return Err(ParseError::new(
                    ParseErrorKind::MissingDelimiters,
                    second.span,
                ));
            }
            None => {
                return Err(ParseError::new(ParseErrorKind::MissingDelimiters, first.span));
            }
        }
        if last.kind != TokenKind::RParen {
            return Err(ParseError::new(ParseErrorKind::MissingDelimiters, last.span));
        }
        Ok(())
    }

    /// Fail if the pending property never got a value.
    fn check_pending(&self) -> Result<(), ParseError> {
        if let Some(pending) = self.node.as_ref().and_then(Node::pending)
            && pending.values.is_empty()
        {
            return Err(ParseError::new(
                ParseErrorKind::MissingPropertyValue {
                    ident: pending.ident.clone(),
                },
                pending.span,
            ));
        }
        Ok(())
    }

    /// Finish the node under construction, if any.
    fn flush(&mut self) -> Result<(), ParseError> {
        self.check_pending()?;
        if let Some(node) = self.node.take() {
            trace!("Node with {} properties at {:?}", node.len(), node.span);
            self.items.push(Item::Node(node));
        }
        Ok(())
    }

    fn ident(&mut self, token: &Token<'src>) -> Result<(), ParseError> {
        self.check_pending()?;

        let Some(node) = self.node.as_mut() else {
            return Err(ParseError::new(
                ParseErrorKind::PropertyOutsideNode {
                    ident: token.text.to_string(),
                },
                token.span,
            ));
        };

        if let Some(original) = node.get(token.text) {
            return Err(ParseError::new(
                ParseErrorKind::DuplicatePropertyIdentifier {
                    ident: token.text.to_string(),
                    original: original.span,
                },
                token.span,
            ));
        }

        node.open_property(token.text, token.span);
        Ok(())
    }

    fn value(&mut self, token: &Token<'src>) -> Result<(), ParseError> {
        let value = token.value().unwrap_or_default().into_owned();
        let pushed = self
            .node
            .as_mut()
            .is_some_and(|node| node.push_value(value, token.span));
        if pushed {
            Ok(())
        } else {
            Err(ParseError::new(
                ParseErrorKind::MissingPropertyIdentifier,
                token.span,
            ))
        }
    }
}
