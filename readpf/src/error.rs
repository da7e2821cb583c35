use std::io;
use std::ops::Range;

use annotate_snippets::display_list::{DisplayList, FormatOptions};
use annotate_snippets::snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation};
use thiserror::Error;

use crate::statement::Statement;

/// Failure to obtain the raw text of a parameter file.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// A line that could not be turned into a statement.
///
/// `span` is the byte range of the offending keyword within `line`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A well-formed 3- or 2-argument line whose keyword takes a different number of arguments.
    #[error("line {line_no}, unknown keyword `{keyword}`")]
    UnknownKeyword {
        line_no: usize,
        keyword: String,
        arity: usize,
        line: String,
        span: Range<usize>,
    },
    /// A well-formed 1-argument line whose keyword is not a single-argument keyword.
    #[error("line {line_no}, unknown define type `{keyword}`")]
    UnknownDefineType {
        line_no: usize,
        keyword: String,
        line: String,
        span: Range<usize>,
    },
    #[error("line {line_no}, unknown statement `{line}`")]
    UnknownStatement {
        line_no: usize,
        line: String,
    },
}

use ParseError::*;

impl ParseError {
    pub fn line_no(&self) -> usize {
        match self {
            UnknownKeyword { line_no, .. }
            | UnknownDefineType { line_no, .. }
            | UnknownStatement { line_no, .. } => *line_no,
        }
    }

    /// The full text of the line that failed.
    pub fn line(&self) -> &str {
        match self {
            UnknownKeyword { line, .. }
            | UnknownDefineType { line, .. }
            | UnknownStatement { line, .. } => line,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    // Character offsets into `line()`, which is what the snippet renderer counts in.
    fn annotation_range(&self) -> (usize, usize) {
        let line = self.line();
        match self {
            UnknownKeyword { span, .. } | UnknownDefineType { span, .. } => {
                let start = line[..span.start].chars().count();
                (start, start + line[span.clone()].chars().count())
            },
            UnknownStatement { .. } => (0, line.chars().count()),
        }
    }

    fn annotation_label(&self) -> &'static str {
        match self {
            UnknownKeyword { .. } => "keyword not valid with this many arguments",
            UnknownDefineType { .. } => "not a single-argument keyword",
            UnknownStatement { .. } => "does not match any statement form",
        }
    }

    pub fn create_snippet<'a>(&'a self, message: &'a str, origin: Option<&'a str>, color: bool) -> Snippet<'a> {
        Snippet {
            title: Some(Annotation {
                label: Some(message),
                id: None,
                annotation_type: AnnotationType::Error,
            }),
            footer: vec![],
            slices: vec![
                Slice {
                    source: self.line(),
                    line_start: self.line_no(),
                    origin,
                    fold: false,
                    annotations: vec![
                        SourceAnnotation {
                            range: self.annotation_range(),
                            label: self.annotation_label(),
                            annotation_type: AnnotationType::Error,
                        }
                    ],
                }
            ],
            opt: FormatOptions {
                color,
                ..Default::default()
            },
        }
    }

    /// Renders the error with the offending line underlined, ready to print.
    pub fn report(&self, origin: Option<&str>, color: bool) -> String {
        let message = self.message();
        let snippet = self.create_snippet(&message, origin, color);
        DisplayList::from(snippet).to_string()
    }
}

/// A parse that stopped at `error`, along with every statement accepted before it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct PartialParse {
    pub parsed: Vec<Statement>,
    #[source]
    pub error: ParseError,
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn messages() {
        let err = UnknownKeyword {
            line_no: 3,
            keyword: "FOO".to_string(),
            arity: 3,
            line: "FOO 1 2 3".to_string(),
            span: 0..3,
        };
        assert_eq!(err.message(), "line 3, unknown keyword `FOO`");

        let err = UnknownDefineType {
            line_no: 1,
            keyword: "EEEE".to_string(),
            line: "  EEEE 1".to_string(),
            span: 2..6,
        };
        assert_eq!(err.message(), "line 1, unknown define type `EEEE`");

        let err = UnknownStatement { line_no: 9, line: "garbage line".to_string() };
        assert_eq!(err.message(), "line 9, unknown statement `garbage line`");
        assert_eq!(err.line_no(), 9);
    }

    #[test]
    fn annotation_covers_keyword() {
        let err = UnknownDefineType {
            line_no: 1,
            keyword: "EEEE".to_string(),
            line: "\u{e9}\tEEEE 1".to_string(),
            span: 3..7,
        };
        assert_eq!(err.annotation_range(), (2, 6));
    }

    #[test]
    fn report_mentions_line() {
        let err = UnknownStatement { line_no: 2, line: "   garbage line".to_string() };
        let report = err.report(Some("params.pf"), false);
        assert!(report.contains("unknown statement"));
        assert!(report.contains("garbage line"));
        assert!(report.contains("params.pf"));
    }
}
