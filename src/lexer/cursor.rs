use crate::lexer::error::{FormatError, Position};

/// Walks the input one character at a time while tracking the line and
/// column of the next character.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    rest: &'a str,
    position: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            position: Position::new(1, 1),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    pub fn peek_second(&self) -> Option<char> {
        self.rest.chars().nth(1)
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    /// Reads one term: a run of non-whitespace characters, where a leading
    /// `"` extends the term up to the next quote not preceded by `\`.
    /// Anything glued to the closing quote (a trailing comma) stays in the
    /// term.
    pub fn read_term(&mut self) -> Result<String, FormatError> {
        let start = self.position;
        let mut term = String::new();

        if self.peek() == Some('"') {
            self.bump();
            term.push('"');
            let mut escaped = false;
            loop {
                match self.bump() {
                    Some('"') if !escaped => break,
                    Some(c) => {
                        escaped = c == '\\';
                        term.push(c);
                    }
                    None => return Err(FormatError::UnterminatedString { position: start }),
                }
            }
            term.push('"');
        }

        while let Some(c) = self.peek().filter(|c| !c.is_whitespace()) {
            term.push(c);
            self.bump();
        }
        Ok(term)
    }

    /// Reads a comment body, the `#` already consumed, up to but excluding
    /// the line break. A `\r` right before the line break is dropped.
    pub fn read_comment(&mut self, start: Position) -> Result<String, FormatError> {
        let mut text = String::new();
        loop {
            match self.peek() {
                Some('\n') => break,
                Some('\r') if self.peek_second() == Some('\n') => {
                    self.bump();
                    break;
                }
                Some(c) => {
                    text.push(c);
                    self.bump();
                }
                None => return Err(FormatError::UnterminatedComment { position: start }),
            }
        }
        Ok(text)
    }
}
