mod cursor;
mod error;
mod lexer;
mod tokens;


pub use error::{FormatError, Position};
pub use lexer::{Lexer, ensure_trailing_newline, lex};
pub use tokens::{Comment, Directive, Instruction, Token, TokenId, TokenStream};
