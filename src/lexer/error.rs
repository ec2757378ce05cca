use std::fmt::{self, Display};

/// 1-based line and column of a character in the input.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Malformed input. Formatting stops at the first one and produces no output.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("{position}: unterminated string literal")]
    UnterminatedString { position: Position },
    #[error("{position}: comment is not terminated by a line break")]
    UnterminatedComment { position: Position },
    #[error("{position}: unexpected character {character:?}")]
    UnexpectedCharacter { character: char, position: Position },
    #[error("{position}: `{term}` cannot start while `{open}` is still open on the same line")]
    OverlappingConstructs {
        open: String,
        term: String,
        position: Position,
    },
    #[error("tab width must be a positive integer, got {0}")]
    InvalidTabWidth(usize),
}
