//! Diagnostic rendering for parse errors.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::{ParseErrorKind, Span};

/// A parse error with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Source location.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Render this error with ariadne.
    ///
    /// Returns a string containing the formatted error message with source context.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        self.write_report(filename, source, &mut output);
        String::from_utf8(output).unwrap_or_else(|_| format!("{}", self))
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(&self, filename: &str, source: &str, writer: W) {
        let report = self.build_report(filename);
        let _ = report
            .finish()
            .write((filename, Source::from(source)), writer);
    }

    fn build_report<'a>(
        &self,
        filename: &'a str,
    ) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
        let range = self.span.range();
        let base = Report::build(ReportKind::Error, (filename, range.clone()))
            .with_message(self.kind.to_string());

        match &self.kind {
            ParseErrorKind::DuplicatePropertyIdentifier { original, .. } => base
                .with_label(
                    Label::new((filename, original.range()))
                        .with_message("first defined here")
                        .with_color(Color::Blue),
                )
                .with_label(
                    Label::new((filename, range))
                        .with_message("defined again here")
                        .with_color(Color::Red),
                )
                .with_help("each property may appear only once per node; list all values after one identifier"),

            ParseErrorKind::UnterminatedValue => base
                .with_label(
                    Label::new((filename, range))
                        .with_message("value opened here")
                        .with_color(Color::Red),
                )
                .with_help("close the value with ']'; write '\\]' for a literal bracket"),

            ParseErrorKind::UnexpectedCharacter => base
                .with_label(
                    Label::new((filename, range))
                        .with_message("not inside a property value")
                        .with_color(Color::Red),
                ),

            ParseErrorKind::EmptyInput => base,

            ParseErrorKind::MissingDelimiters => base
                .with_label(
                    Label::new((filename, range))
                        .with_message("unexpected here")
                        .with_color(Color::Red),
                )
                .with_help("a game record looks like (;GM[1] ... )"),

            ParseErrorKind::MissingPropertyValue { .. } => base
                .with_label(
                    Label::new((filename, range))
                        .with_message("expected a [value] after this")
                        .with_color(Color::Red),
                ),

            ParseErrorKind::MissingPropertyIdentifier => base
                .with_label(
                    Label::new((filename, range))
                        .with_message("value without identifier")
                        .with_color(Color::Red),
                ),

            ParseErrorKind::PropertyOutsideNode { .. } => base
                .with_label(
                    Label::new((filename, range))
                        .with_message("no node is open here")
                        .with_color(Color::Red),
                )
                .with_help("start a node with ';' before its properties"),

            ParseErrorKind::EmptySequenceBeforeBranch => base
                .with_label(
                    Label::new((filename, range))
                        .with_message("no node before this")
                        .with_color(Color::Red),
                )
                .with_help("every game tree needs at least one node before its variations"),

            ParseErrorKind::UnbalancedParentheses => base
                .with_label(
                    Label::new((filename, range))
                        .with_message("not matched")
                        .with_color(Color::Red),
                ),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.span.start)
    }
}

impl std::error::Error for ParseError {}
