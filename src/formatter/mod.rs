//! # Formatter
//!
//! Entry points of the formatting pipeline: lex the text (aligning each
//! block as it closes), normalize the trailing line breaks, then render
//! every token in order.

mod length;

pub use length::{LengthCheck, count_non_whitespace};

use tracing::debug;

use crate::{
    config::FormatterConfig,
    constants::DEFAULT_TAB_WIDTH,
    lexer::{FormatError, TokenStream, lex},
};

/// Formats `input` with the given tab width.
///
/// The output always ends with a line break, and formatting its own output
/// again yields the same text.
pub fn format(input: &str, tab_width: usize) -> Result<String, FormatError> {
    let mut stream = lex(input, tab_width)?;
    stream.trim_trailing_newlines();
    let output = render(&stream);
    debug!(
        "Formatted {} bytes into {} bytes using {} tokens",
        input.len(),
        output.len(),
        stream.len()
    );
    Ok(output)
}

pub fn format_with(input: &str, config: &FormatterConfig) -> Result<String, FormatError> {
    format(input, config.tab_width)
}

/// Formats `input` with the default tab width of 8.
pub fn format_default(input: &str) -> Result<String, FormatError> {
    format(input, DEFAULT_TAB_WIDTH)
}

/// Concatenates the tokens and appends the final line break.
pub fn render(stream: &TokenStream) -> String {
    let mut output: String = stream.iter().map(ToString::to_string).collect();
    output.push('\n');
    output
}
