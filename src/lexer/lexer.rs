use std::borrow::Cow;

use tracing::{debug, trace};

use crate::{
    block::Block,
    lexer::{
        cursor::Cursor,
        error::{FormatError, Position},
        tokens::{Comment, Directive, Instruction, Token, TokenId, TokenStream},
    },
};

/// The construct currently accumulating terms.
#[derive(Clone, Debug, Default)]
enum Pending {
    #[default]
    Idle,
    Instruction(Instruction),
    Directive(Directive),
}

/// Turns assembly text into a [`TokenStream`], aligning the comments of
/// every label-delimited block as soon as that block is closed.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    tab_width: usize,
    stream: TokenStream,
    block: Block,
    pending: Pending,
    /// Set once the first term is read. Comments seen before it form the
    /// file header and stay out of alignment.
    started: bool,
}

/// Lexes `input`, appending a final line break first if it lacks one.
pub fn lex(input: &str, tab_width: usize) -> Result<TokenStream, FormatError> {
    let input = ensure_trailing_newline(input);
    Lexer::new(&input, tab_width)?.run()
}

pub fn ensure_trailing_newline(input: &str) -> Cow<'_, str> {
    if input.ends_with('\n') {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!("{input}\n"))
    }
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, tab_width: usize) -> Result<Self, FormatError> {
        if tab_width == 0 {
            return Err(FormatError::InvalidTabWidth(tab_width));
        }
        Ok(Self {
            cursor: Cursor::new(input),
            tab_width,
            stream: TokenStream::new(),
            block: Block::new(),
            pending: Pending::Idle,
            started: false,
        })
    }

    pub fn run(mut self) -> Result<TokenStream, FormatError> {
        while let Some(c) = self.cursor.peek() {
            let position = self.cursor.position();
            match c {
                '#' => {
                    self.cursor.bump();
                    self.comment(position)?;
                }
                '\n' => {
                    self.cursor.bump();
                    self.newline();
                }
                '\r' if self.cursor.peek_second() == Some('\n') => {
                    self.cursor.bump();
                }
                ' ' | '\t' => {
                    self.cursor.bump();
                }
                c if !c.is_whitespace() => {
                    let term = self.cursor.read_term()?;
                    self.term(term, position)?;
                }
                character => {
                    return Err(FormatError::UnexpectedCharacter {
                        character,
                        position,
                    });
                }
            }
        }

        self.flush_pending();
        self.close_block();
        debug!("Lexed input into {} tokens", self.stream.len());
        Ok(self.stream)
    }

    fn term(&mut self, term: String, position: Position) -> Result<(), FormatError> {
        self.started = true;

        if let Some(name) = term.strip_suffix(':') {
            self.label(name);
            return Ok(());
        }
        if let Some(name) = term.strip_prefix('.') {
            return self.directive(name, position);
        }

        if matches!(self.pending, Pending::Idle) {
            trace!("{position}: operator `{term}`");
            self.pending = Pending::Instruction(Instruction::new(term));
            return Ok(());
        }

        match &mut self.pending {
            Pending::Idle => {}
            Pending::Instruction(instruction) => {
                let operand = term.strip_suffix(',').unwrap_or(&term);
                // A lone comma between operands is regenerated on render.
                if !operand.is_empty() {
                    instruction.push_operand(operand.to_owned());
                }
            }
            Pending::Directive(directive) => directive.push_param(term),
        }
        Ok(())
    }

    fn label(&mut self, name: &str) {
        self.flush_pending();
        if !self.stream.last().is_none_or(Token::is_newline) {
            self.emit(Token::NewLine);
        }
        self.close_block();

        trace!("Label `{name}` opens a new block");
        self.stream.push(Token::Label(name.to_owned()));
        self.stream.push(Token::NewLine);
    }

    fn directive(&mut self, name: &str, position: Position) -> Result<(), FormatError> {
        let open = match &self.pending {
            Pending::Idle => None,
            // Nothing followed it on its own line, so it is complete.
            Pending::Directive(open) if open.params().is_empty() && *open.continued() => None,
            Pending::Directive(open) => Some(format!(".{}", open.name())),
            Pending::Instruction(open) => Some(open.operator().clone()),
        };
        if let Some(open) = open {
            return Err(FormatError::OverlappingConstructs {
                open,
                term: format!(".{name}"),
                position,
            });
        }

        self.flush_pending();
        trace!("{position}: directive `.{name}`");
        self.pending = Pending::Directive(Directive::new(name));
        Ok(())
    }

    fn comment(&mut self, position: Position) -> Result<(), FormatError> {
        self.flush_pending();
        let text = self.cursor.read_comment(position)?;
        let comment = Token::Comment(Comment::new(text));
        if self.started {
            self.emit(comment);
        } else {
            self.stream.push(comment);
        }
        Ok(())
    }

    fn newline(&mut self) {
        if let Pending::Directive(directive) = &mut self.pending {
            if directive.params().is_empty() && !directive.continued() {
                directive.mark_continued();
                return;
            }
        }
        self.flush_pending();
        self.push_newline();
    }

    /// Appends a line break unless it would follow a label's own line break
    /// or produce a second blank line in a row.
    fn push_newline(&mut self) {
        let after_label = matches!(
            (self.stream.nth_back(1), self.stream.nth_back(0)),
            (Some(Token::Label(_)), Some(Token::NewLine))
        );
        let blank_run = matches!(
            (self.stream.nth_back(1), self.stream.nth_back(0)),
            (Some(Token::NewLine), Some(Token::NewLine))
        );
        if after_label || blank_run {
            return;
        }
        self.emit(Token::NewLine);
    }

    fn flush_pending(&mut self) {
        match std::mem::take(&mut self.pending) {
            Pending::Idle => {}
            Pending::Instruction(instruction) => {
                self.emit(Token::Instruction(instruction));
            }
            Pending::Directive(mut directive) => {
                // The line break it was waiting across never got parameters.
                let swallowed = directive.params().is_empty() && directive.take_continued();
                self.emit(Token::Directive(directive));
                if swallowed {
                    self.push_newline();
                }
            }
        }
    }

    /// Appends to both the global stream and the current block.
    fn emit(&mut self, token: Token) -> TokenId {
        let id = self.stream.push(token);
        self.block.push(id);
        id
    }

    fn close_block(&mut self) {
        let block = std::mem::take(&mut self.block);
        trace!("Closing block of {} tokens", block.len());
        block.align_comments(&mut self.stream, self.tab_width);
    }
}
