//! Errors from loading a game record.

use ariadne::{Color, Label, Report, ReportKind, Source};
use kifu_parse::{ParseError, Span};

use crate::PropertyError;

/// Why a game record could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The text is not well-formed SGF.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A property was well-formed but the record refused it.
    #[error("error while applying property {ident}: {source}")]
    Property {
        ident: String,
        span: Span,
        source: PropertyError,
    },

    /// `SZ` is not a size between 1 and 52.
    #[error("invalid board size {value:?}")]
    InvalidBoardSize { value: String, span: Span },
}

impl LoadError {
    /// Location of the offending text.
    pub fn span(&self) -> Span {
        match self {
            LoadError::Parse(error) => error.span,
            LoadError::Property { span, .. } | LoadError::InvalidBoardSize { span, .. } => *span,
        }
    }

    /// Render this error with ariadne.
    pub fn render(&self, filename: &str, source: &str) -> String {
        if let LoadError::Parse(error) = self {
            return error.render(filename, source);
        }

        let range = self.span().range();
        let (message, help) = match self {
            LoadError::Property { ident, source, .. } => (
                format!("{ident} cannot be applied here"),
                match source {
                    PropertyError::Move(_) => {
                        "the move is illegal on the position reached by this node"
                    }
                    PropertyError::InvalidPoint(_) => "points are two letters from a-z or A-Z",
                },
            ),
            _ => (
                "expected N or W:H".to_string(),
                "board sizes range from 1 to 52",
            ),
        };
        let report = Report::build(ReportKind::Error, (filename, range.clone()))
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, range))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .with_help(help)
            .finish();

        let mut output = Vec::new();
        let _ = report.write((filename, Source::from(source)), &mut output);
        String::from_utf8(output).unwrap_or_else(|_| self.to_string())
    }
}
