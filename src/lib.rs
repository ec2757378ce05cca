//! # mipsfmt Library
//!
//! A pretty-printer for MIPS assembly source. Text is split into labels,
//! instructions, directives, comments and line breaks, then written back
//! with one indentation level for code and with the trailing comments of
//! each label-delimited block aligned on a common tab stop.
//!
//! ```
//! let formatted = mipsfmt::format("main:\nli $v0, 1 # print\n", 8).unwrap();
//! assert_eq!(formatted, "main:\n\tli\t$v0, 1\t# print\n\n");
//! ```

pub mod block;
pub mod caller;
pub mod checker;
pub mod config;
pub mod formatter;
pub mod lexer;

mod constants;
mod env_variables;

pub use config::FormatterConfig;
pub use formatter::{LengthCheck, count_non_whitespace, format, format_default, format_with};
pub use lexer::FormatError;
