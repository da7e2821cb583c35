use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::error::{ParseError, PartialParse};
use crate::lines::ParameterFile;
use crate::statement::{Keyword, Statement};

/// The shape of line a pattern recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    /// A keyword followed by this many numeric arguments.
    Args(usize),
    /// Nothing but whitespace and an optional comment.
    Blank,
}

/// A compiled parameter-file grammar.
///
/// Lines are tried against each pattern in order and the first full match wins,
/// so longer argument lists must come before shorter ones.
/// Construction compiles the grammar; reuse a `Parser` when parsing many files.
#[derive(Debug, Clone)]
pub struct Parser {
    patterns: Vec<(Regex, Form)>,
}

use Form::*;

impl Parser {

    // Registering a pattern anchors it at both ends of the line, so don't use ^ or $.
    // Group 1 is the keyword and groups 2.. are the arguments.
    // Whitespace is only tab, newline, form feed, carriage return and space; not `\s`,
    // which would also accept vertical tab and Unicode spaces.
    const PATTERNS: [(&'static str, Form); 4] = [
        (r"[\t\n\f\r ]*([A-Z]+)[\t\n\f\r ]+([0-9]+)[\t\n\f\r ]+([0-9]+)[\t\n\f\r ]+([0-9]+)[\t\n\f\r ]*(//.*)?", Args(3)),
        (r"[\t\n\f\r ]*([A-Z]+)[\t\n\f\r ]+([0-9]+)[\t\n\f\r ]+([0-9]+)[\t\n\f\r ]*(//.*)?",                     Args(2)),
        (r"[\t\n\f\r ]*([A-Z]+)[\t\n\f\r ]+([0-9]+)[\t\n\f\r ]*(//.*)?",                                           Args(1)),
        (r"[\t\n\f\r ]*(//.*)?",                                                                                   Blank),
    ];

    pub fn new() -> Parser {
        let mut this = Parser {
            patterns: Vec::new(),
        };

        for (pattern, form) in Self::PATTERNS.iter() {
            this.register_pattern(pattern, *form);
        }

        this
    }

    fn register_pattern(&mut self, pattern: &str, form: Form) {
        assert!(!pattern.starts_with('^') && !pattern.ends_with('$'));
        let pattern = format!("^(?:{})$", pattern);
        let regex = Regex::new(pattern.as_str()).expect("Invalid regex");
        self.patterns.push((regex, form))
    }

    /// Parses every line of `pf` in order, stopping at the first line that fails.
    ///
    /// On failure the statements accepted before the bad line are returned
    /// alongside the error in [`PartialParse`].
    pub fn parse(&self, pf: &ParameterFile) -> Result<Vec<Statement>, PartialParse> {
        debug!(lines = pf.len(), "parsing parameter file");
        let mut parsed = Vec::new();
        for (i, line) in pf.lines().iter().enumerate() {
            let line_no = i + 1;
            match self.parse_line(line, line_no) {
                Ok(Some(statement)) => {
                    trace!(line_no, %statement, "accepted statement");
                    parsed.push(statement);
                },
                Ok(None) => {
                    trace!(line_no, "skipped blank line");
                },
                Err(error) => {
                    debug!(line_no, accepted = parsed.len(), %error, "parse failed");
                    return Err(PartialParse { parsed, error });
                },
            }
        }
        debug!(statements = parsed.len(), "parsed parameter file");
        Ok(parsed)
    }

    /// Parses a single line. Blank and comment-only lines give `Ok(None)`.
    pub fn parse_line(&self, line: &str, line_no: usize) -> Result<Option<Statement>, ParseError> {
        for (pattern, form) in &self.patterns {
            if let Some(captures) = pattern.captures(line) {
                return match form {
                    Args(arity) => resolve(&captures, *arity, line, line_no).map(Some),
                    Blank => Ok(None),
                };
            }
        }
        Err(ParseError::UnknownStatement { line_no, line: line.to_string() })
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

// Only keywords of the matched arity are considered; a line is never re-read at another arity.
fn resolve(captures: &Captures, arity: usize, line: &str, line_no: usize) -> Result<Statement, ParseError> {
    let name = &captures[1];
    let keyword = match Keyword::lookup(name, arity) {
        Some(keyword) => keyword,
        None => {
            let span = captures.get(1).map_or(0..0, |m| m.range());
            let keyword = name.to_string();
            let line = line.to_string();
            return Err(if arity == 1 {
                ParseError::UnknownDefineType { line_no, keyword, line, span }
            } else {
                ParseError::UnknownKeyword { line_no, keyword, arity, line, span }
            });
        },
    };

    let arg = |n: usize| captures[n + 2].to_string();
    let statement = match keyword {
        Keyword::Aaaa => Statement::Aaaa { input_x: arg(0), input_y: arg(1), input_z: arg(2), line_no },
        Keyword::Bbbb => Statement::Bbbb { input_x: arg(0), input_y: arg(1), line_no },
        Keyword::Cccc => Statement::Cccc { input_x: arg(0), line_no },
        Keyword::Dddd => Statement::Dddd { input_x: arg(0), line_no },
    };
    Ok(statement)
}

/// Parses `pf` with a freshly compiled grammar.
pub fn parse(pf: &ParameterFile) -> Result<Vec<Statement>, PartialParse> {
    Parser::new().parse(pf)
}
