//! # Caller Module
//!
//! File-level workflow around the formatter, as run by the `mipsfmt`
//! binary:
//! - Reads the source file and optionally runs the external syntax checker
//! - Formats it, keeping the original text if formatting fails
//! - Guards against code loss by comparing visible character counts, asking
//!   for confirmation on a mismatch
//! - Writes the result to the output path, or back over the input

use std::{
    fs::{read_to_string, write},
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{
    checker::check_syntax,
    config::FormatterConfig,
    constants::CONFIRM_ANSWER,
    formatter::{LengthCheck, format_with},
};

/// One formatting job.
#[derive(Debug, Clone)]
pub struct FormatRequest {
    pub input: PathBuf,
    /// Where to write the result. `None` overwrites the input.
    pub output: Option<PathBuf>,
    pub config: FormatterConfig,
    /// Run the external checker on the input first.
    pub check: bool,
    /// Keep the formatted text even when the length check fails.
    pub assume_yes: bool,
}

impl FormatRequest {
    pub fn new(input: PathBuf, config: FormatterConfig) -> Self {
        Self {
            input,
            output: None,
            config,
            check: false,
            assume_yes: false,
        }
    }

    pub fn destination(&self) -> &PathBuf {
        self.output.as_ref().unwrap_or(&self.input)
    }
}

/// What ended up being written.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    Formatted,
    /// The input could not be formatted; the original text was written.
    Fallback,
    /// The length check failed and the user declined; the original text
    /// was written.
    Aborted,
}

/// Runs a [`FormatRequest`]. Confirmation prompts are written to `prompt_out`
/// and answered from `prompt_in`.
#[tracing::instrument(skip(prompt_in, prompt_out))]
pub fn run(
    request: &FormatRequest,
    prompt_in: impl BufRead,
    mut prompt_out: impl Write,
) -> Result<Outcome> {
    // Step 1: Reading the source
    let input = &request.input;
    info!("Reading {:?}", input);
    let source = read_to_string(input).context(format!("When reading the file {:?}.", input))?;

    // Step 2: Optional syntax check
    if request.check {
        check_syntax(input)?;
    }

    // Step 3: Formatting
    let (mut output, mut outcome) = match format_with(&source, &request.config) {
        Ok(formatted) => (formatted, Outcome::Formatted),
        Err(e) => {
            warn!("Failed to format {:?}: {e}. Keeping the original text.", input);
            (source.clone(), Outcome::Fallback)
        }
    };

    // Step 4: Length check
    let lengths = LengthCheck::new(&source, &output);
    if !lengths.is_preserved() {
        warn!(
            "Formatted code does not have same length as original. Possible code loss. Original length: {}. Formatted length: {}",
            lengths.input(),
            lengths.output()
        );
        let keep = request.assume_yes || confirm(&lengths, prompt_in, &mut prompt_out)?;
        if !keep {
            info!("Aborting, the original text is kept");
            output = source;
            outcome = Outcome::Aborted;
        }
    }

    // Step 5: Writing
    let destination = request.destination();
    write(destination, output).context(format!("When writing the file {:?}.", destination))?;
    info!("Wrote {:?} ({:?})", destination, outcome);
    Ok(outcome)
}

/// Asks whether to keep output whose length differs from the input.
pub fn confirm(
    lengths: &LengthCheck,
    mut prompt_in: impl BufRead,
    mut prompt_out: impl Write,
) -> Result<bool> {
    writeln!(
        prompt_out,
        "Formatted code does not have same length as original. Possible code loss."
    )?;
    writeln!(
        prompt_out,
        "Original length: {}. Formatted length: {}",
        lengths.input(),
        lengths.output()
    )?;
    write!(prompt_out, "Continue? (y/n) ")?;
    prompt_out.flush()?;

    let mut answer = String::new();
    prompt_in
        .read_line(&mut answer)
        .context("Failed to read the confirmation answer")?;
    Ok(answer.trim() == CONFIRM_ANSWER)
}
