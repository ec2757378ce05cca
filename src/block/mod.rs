//! # Blocks
//!
//! A [`Block`] is the run of tokens between two labels. It is the unit over
//! which trailing comments are aligned: every comment that follows an
//! instruction in the block starts at the same tab stop, the first one past
//! the block's longest instruction.
//!
//! Blocks only hold [`TokenId`] handles. Alignment writes the comment
//! indentation straight into the shared [`TokenStream`].

use crate::lexer::{Instruction, Token, TokenId, TokenStream};


#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Block {
    tokens: Vec<TokenId>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: TokenId) {
        self.tokens.push(id);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn ids(&self) -> &[TokenId] {
        &self.tokens
    }

    /// The column at which trailing comments start: the smallest multiple of
    /// `tab_width` strictly greater than the longest instruction, or `0`
    /// when the block holds no instruction.
    ///
    /// An instruction is as long as [`instruction_length`] says, unless its
    /// operator overflows a tab stop and the line really ends further right.
    pub fn comment_column(&self, stream: &TokenStream, tab_width: usize) -> usize {
        self.tokens
            .iter()
            .filter_map(|id| match stream.get(*id) {
                Some(Token::Instruction(instruction)) => Some(
                    instruction_length(instruction, tab_width)
                        .max(rendered_width(instruction, tab_width)),
                ),
                _ => None,
            })
            .map(|length| (length / tab_width + 1) * tab_width)
            .max()
            .unwrap_or(0)
    }

    /// Assigns the indentation of every comment in the block, then discards
    /// the block.
    ///
    /// - A comment right after an instruction gets as many tabs as it takes
    ///   to get from the end of that instruction's line to
    ///   [`Block::comment_column`], and never fewer than one.
    /// - Any other comment gets a single tab.
    /// - Comments on their own line at the tail of the block, with only blank
    ///   lines after them, are flushed left: they describe what comes next.
    pub fn align_comments(self, stream: &mut TokenStream, tab_width: usize) {
        let column = self.comment_column(stream, tab_width);

        for (i, &id) in self.tokens.iter().enumerate() {
            if !matches!(stream.get(id), Some(Token::Comment(_))) {
                continue;
            }
            let previous = i.checked_sub(1).and_then(|p| stream.get(self.tokens[p]));
            let indentation = match previous {
                Some(Token::Instruction(instruction)) => {
                    let end = rendered_width(instruction, tab_width);
                    (column / tab_width).saturating_sub(end / tab_width).max(1)
                }
                _ => 1,
            };
            set_indentation(stream, id, indentation);
        }

        for (i, &id) in self.tokens.iter().enumerate().rev() {
            let is_comment = match stream.get(id) {
                Some(Token::NewLine) => continue,
                Some(Token::Comment(_)) => true,
                _ => false,
            };
            if !is_comment || !self.starts_line(stream, i) {
                break;
            }
            set_indentation(stream, id, 0);
        }
    }

    fn starts_line(&self, stream: &TokenStream, i: usize) -> bool {
        i == 0 || matches!(stream.get(self.tokens[i - 1]), Some(Token::NewLine))
    }
}

/// Nominal width of an instruction line, used to pick the comment column:
/// one tab before the operator, one full tab stop for the operator, then the
/// operands joined by `", "`.
pub fn instruction_length(instruction: &Instruction, tab_width: usize) -> usize {
    let operands = instruction.operands();
    let mut length = 2 * tab_width;
    if !operands.is_empty() {
        length += operands.iter().map(|o| o.chars().count()).sum::<usize>();
        length += 2 * (operands.len() - 1);
    }
    length
}

/// Column at which the rendered instruction line actually ends, with tabs
/// expanded to `tab_width`. Differs from [`instruction_length`] when the
/// instruction has no operands or its operator fills a whole tab stop.
pub fn rendered_width(instruction: &Instruction, tab_width: usize) -> usize {
    let operands = instruction.operands();
    let mut width = tab_width + instruction.operator().chars().count();
    if !operands.is_empty() {
        width = (width / tab_width + 1) * tab_width;
        width += operands.iter().map(|o| o.chars().count()).sum::<usize>();
        width += 2 * (operands.len() - 1);
    }
    width
}

fn set_indentation(stream: &mut TokenStream, id: TokenId, indentation: usize) {
    if let Some(Token::Comment(comment)) = stream.get_mut(id) {
        comment.set_indentation(indentation);
    }
}
