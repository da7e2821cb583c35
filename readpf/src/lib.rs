//! Reading line-oriented parameter files.
//!
//! A parameter file holds one statement per line: an uppercase keyword followed by
//! a fixed number of numeric arguments and an optional `//` comment.
//! Blank lines and comment-only lines are ignored.
//!
//! ```
//! use readpf::{ParameterFile, Statement, parse};
//!
//! let pf = ParameterFile::read_from_string("CCCC 0001\n// limits\nBBBB 0006 9999\n").unwrap();
//! let statements = parse(&pf).unwrap();
//!
//! assert_eq!(statements, vec![
//!     Statement::Cccc { input_x: "0001".to_string(), line_no: 1 },
//!     Statement::Bbbb { input_x: "0006".to_string(), input_y: "9999".to_string(), line_no: 3 },
//! ]);
//! assert_eq!(statements[1].to_string(), "BBBB 0006 9999");
//! ```
//!
//! Parsing stops at the first bad line. The statements before it are still handed back:
//!
//! ```
//! use readpf::{ParameterFile, PartialParse, parse};
//!
//! let pf = ParameterFile::read_from_string("DDDD 4\nFOO 1 2 3\n").unwrap();
//! let PartialParse { parsed, error } = parse(&pf).unwrap_err();
//!
//! assert_eq!(parsed.len(), 1);
//! assert_eq!(error.to_string(), "line 2, unknown keyword `FOO`");
//! ```

pub mod error;
pub mod lines;
pub mod parser;
pub mod statement;

pub use error::{ParseError, PartialParse, ReadError};
pub use lines::ParameterFile;
pub use parser::{parse, Parser};
pub use statement::{Keyword, Statement};
