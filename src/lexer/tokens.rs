//! # Tokens
//!
//! The five token kinds produced by the lexer, and the [`TokenStream`]
//! arena that owns them.
//!
//! Blocks never own tokens directly: they hold [`TokenId`] handles into the
//! stream, so an alignment pass that rewrites a comment through a block is
//! visible when the whole stream is rendered afterwards.

use std::fmt::{self, Display};

use derive_getters::Getters;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    Label(String),
    Instruction(Instruction),
    Directive(Directive),
    Comment(Comment),
    NewLine,
}

impl Token {
    pub fn is_newline(&self) -> bool {
        matches!(self, Token::NewLine)
    }
}

/// An operator followed by its operands, trailing commas already stripped.
#[derive(Clone, Debug, Eq, PartialEq, Getters)]
pub struct Instruction {
    operator: String,
    operands: Vec<String>,
}

impl Instruction {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            operands: Vec::new(),
        }
    }

    pub fn with_operands(operator: impl Into<String>, operands: Vec<String>) -> Self {
        Self {
            operator: operator.into(),
            operands,
        }
    }

    pub fn push_operand(&mut self, operand: String) {
        self.operands.push(operand);
    }
}

/// A `.name` directive and its parameters.
///
/// `continued` records that the line ended right after the name and the
/// parameters came on the following line.
#[derive(Clone, Debug, Eq, PartialEq, Getters)]
pub struct Directive {
    name: String,
    params: Vec<String>,
    continued: bool,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            continued: false,
        }
    }

    pub fn push_param(&mut self, param: String) {
        self.params.push(param);
    }

    pub fn mark_continued(&mut self) {
        self.continued = true;
    }

    /// Drops the continuation flag, returning whether it was set.
    pub fn take_continued(&mut self) -> bool {
        std::mem::take(&mut self.continued)
    }
}

/// Text after the `#` up to the end of the line.
#[derive(Clone, Debug, Eq, PartialEq, Getters)]
pub struct Comment {
    text: String,
    /// Number of tabs emitted before the `#`, assigned by block alignment.
    indentation: usize,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indentation: 0,
        }
    }

    pub fn set_indentation(&mut self, indentation: usize) {
        self.indentation = indentation;
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Label(name) => write!(f, "{name}:"),
            Token::Instruction(instruction) => Display::fmt(instruction, f),
            Token::Directive(directive) => Display::fmt(directive, f),
            Token::Comment(comment) => Display::fmt(comment, f),
            Token::NewLine => writeln!(f),
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\t{}", self.operator)?;
        if !self.operands.is_empty() {
            write!(f, "\t{}", self.operands.join(", "))?;
        }
        Ok(())
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\t.{}", self.name)?;
        if self.params.is_empty() {
            return Ok(());
        }
        let separator = if self.continued { "\n\t\t" } else { "\t" };
        write!(f, "{separator}{}", self.params.join(" "))
    }
}

impl Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.indentation {
            f.write_str("\t")?;
        }
        write!(f, "#{}", self.text)
    }
}

/// Handle to a token stored in a [`TokenStream`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TokenId(usize);

/// The global, ordered token sequence. Tokens are appended exactly once and
/// never removed except for trailing line breaks at the very end.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) -> TokenId {
        self.tokens.push(token);
        TokenId(self.tokens.len() - 1)
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.0)
    }

    pub fn get_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.get_mut(id.0)
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// The `n`-th token counting back from the end, `0` being the last one.
    pub fn nth_back(&self, n: usize) -> Option<&Token> {
        self.tokens.iter().rev().nth(n)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Collapses any run of trailing line breaks down to a single one.
    pub fn trim_trailing_newlines(&mut self) {
        while self.tokens.len() >= 2
            && self.tokens.iter().rev().take(2).all(Token::is_newline)
        {
            self.tokens.pop();
        }
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
