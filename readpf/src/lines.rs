//! Splitting raw parameter-file text into logical lines.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::ReadError;

const LINE_ENDING: &str = r"\r\n|\n";

static LINE_ENDING_REGEX: OnceLock<Regex> = OnceLock::new();

/// The lines of a parameter file, in source order, with line endings removed.
///
/// No line is ever dropped: a file with N line endings has N + 1 lines,
/// so text ending in a newline produces a trailing empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterFile {
    lines: Vec<String>,
}

impl ParameterFile {
    /// Splits `src` on `\r\n` or `\n`. Whitespace is left untouched.
    ///
    /// This never fails; the `Result` matches [`read_from_file`](Self::read_from_file).
    pub fn read_from_string(src: &str) -> Result<ParameterFile, ReadError> {
        Ok(ParameterFile { lines: split_lines(src) })
    }

    /// Reads the whole file at `path`.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than rejected,
    /// so only I/O failures produce a [`ReadError`].
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<ParameterFile, ReadError> {
        let path = path.as_ref();
        let mut file = File::open(path)?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read parameter file");

        let src = String::from_utf8_lossy(&bytes);
        Self::read_from_string(&src)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always `false`: even empty text splits into one empty line.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub(crate) fn split_lines(src: &str) -> Vec<String> {
    // A single literal pattern; compiling it cannot fail.
    let line_ending = LINE_ENDING_REGEX.get_or_init(|| Regex::new(LINE_ENDING).expect("Invalid regex"));
    line_ending.split(src)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn lines(src: &str) -> Vec<String> {
        ParameterFile::read_from_string(src).unwrap().lines().to_vec()
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        assert_eq!(lines(""), vec![""]);
        assert!(!ParameterFile::read_from_string("").unwrap().is_empty());
    }

    #[test]
    fn trailing_newline_yields_trailing_empty_line() {
        assert_eq!(lines("CCCC 1\n"), vec!["CCCC 1", ""]);
    }

    #[test]
    fn mixed_line_endings() {
        assert_eq!(lines("a\r\nb\nc\r\n\r\nd"), vec!["a", "b", "c", "", "d"]);
    }

    #[test]
    fn line_count_is_endings_plus_one() {
        let inputs = [
            "\n\n\n",
            "\r\n\r\n",
            "x\ny\r\nz",
            "  // only a comment  ",
            "\r\n\n\r\n\n",
        ];
        for input in inputs.iter() {
            let endings = input.matches('\n').count();
            assert_eq!(lines(input).len(), endings + 1, "input: {:?}", input);
        }
    }

    #[test]
    fn line_ending_regex_is_compiled_once() {
        split_lines("a\nb");
        let first = LINE_ENDING_REGEX.get().unwrap() as *const Regex;
        split_lines("c\r\nd");
        assert!(std::ptr::eq(first, LINE_ENDING_REGEX.get().unwrap()));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(lines("  AAAA 1 2 3  \r\n\t"), vec!["  AAAA 1 2 3  ", "\t"]);
    }

    #[test]
    fn lone_carriage_return_is_not_a_line_ending() {
        assert_eq!(lines("a\rb"), vec!["a\rb"]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = ParameterFile::read_from_file("does/not/exist.pf").unwrap_err();
        assert!(matches!(err, ReadError::Io(_)));
        assert!(!err.to_string().is_empty());
    }
}
