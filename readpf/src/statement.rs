use std::fmt::{Display, Formatter, Result};

use itertools::Itertools;

/// A keyword that starts a statement. Each keyword takes a fixed number of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Aaaa,
    Bbbb,
    Cccc,
    Dddd,
}

use Keyword::*;

impl Keyword {
    pub const ALL: [Keyword; 4] = [Aaaa, Bbbb, Cccc, Dddd];

    /// Finds the keyword spelled `name` among those taking exactly `arity` arguments.
    ///
    /// A keyword with a different arity is not found, even if the spelling matches.
    pub fn lookup(name: &str, arity: usize) -> Option<Keyword> {
        Self::ALL.iter()
            .copied()
            .find(|keyword| keyword.arity() == arity && keyword.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Aaaa => "AAAA",
            Bbbb => "BBBB",
            Cccc => "CCCC",
            Dddd => "DDDD",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Aaaa => 3,
            Bbbb => 2,
            Cccc | Dddd => 1,
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// A single parsed line of a parameter file.
///
/// Arguments are kept as the digit strings found in the source,
/// so `0001` stays `0001`. `line_no` is 1-based and counts blank and comment lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Aaaa { input_x: String, input_y: String, input_z: String, line_no: usize },
    Bbbb { input_x: String, input_y: String, line_no: usize },
    Cccc { input_x: String, line_no: usize },
    Dddd { input_x: String, line_no: usize },
}

impl Statement {
    pub fn keyword(&self) -> Keyword {
        match self {
            Statement::Aaaa { .. } => Aaaa,
            Statement::Bbbb { .. } => Bbbb,
            Statement::Cccc { .. } => Cccc,
            Statement::Dddd { .. } => Dddd,
        }
    }

    pub fn line_no(&self) -> usize {
        match self {
            Statement::Aaaa { line_no, .. }
            | Statement::Bbbb { line_no, .. }
            | Statement::Cccc { line_no, .. }
            | Statement::Dddd { line_no, .. } => *line_no,
        }
    }

    /// The arguments in source order. Always `self.keyword().arity()` long.
    pub fn args(&self) -> Vec<&str> {
        match self {
            Statement::Aaaa { input_x, input_y, input_z, .. } => vec![input_x.as_str(), input_y.as_str(), input_z.as_str()],
            Statement::Bbbb { input_x, input_y, .. } => vec![input_x.as_str(), input_y.as_str()],
            Statement::Cccc { input_x, .. }
            | Statement::Dddd { input_x, .. } => vec![input_x.as_str()],
        }
    }

    /// Canonical text: the keyword and arguments separated by single spaces, without a comment.
    pub fn get_string(&self) -> String {
        format!("{} {}", self.keyword(), self.args().iter().join(" "))
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.get_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn renders_canonical_form() {
        let stmt = Statement::Aaaa {
            input_x: "0001".to_string(),
            input_y: "02".to_string(),
            input_z: "3".to_string(),
            line_no: 4,
        };
        assert_eq!(stmt.get_string(), "AAAA 0001 02 3");
        assert_eq!(stmt.to_string(), "AAAA 0001 02 3");
        assert_eq!(stmt.line_no(), 4);

        let stmt = Statement::Dddd { input_x: "0004".to_string(), line_no: 2 };
        assert_eq!(stmt.get_string(), "DDDD 0004");
    }

    #[test]
    fn lookup_respects_arity() {
        assert_eq!(Keyword::lookup("AAAA", 3), Some(Aaaa));
        assert_eq!(Keyword::lookup("CCCC", 1), Some(Cccc));
        assert_eq!(Keyword::lookup("DDDD", 1), Some(Dddd));
        assert_eq!(Keyword::lookup("CCCC", 3), None);
        assert_eq!(Keyword::lookup("AAAA", 1), None);
        assert_eq!(Keyword::lookup("aaaa", 3), None);
    }

    #[test]
    fn args_match_arity() {
        let stmts = vec![
            Statement::Aaaa { input_x: "1".into(), input_y: "2".into(), input_z: "3".into(), line_no: 1 },
            Statement::Bbbb { input_x: "1".into(), input_y: "2".into(), line_no: 2 },
            Statement::Cccc { input_x: "1".into(), line_no: 3 },
            Statement::Dddd { input_x: "1".into(), line_no: 4 },
        ];
        for stmt in stmts {
            assert_eq!(stmt.args().len(), stmt.keyword().arity());
        }
    }
}
