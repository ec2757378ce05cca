mod common;

use std::{
    fs::{read_to_string, write},
    io::{Cursor, empty, sink},
    path::Path,
};

use anyhow::Result;
use common::corpus::HELLO;
use mipsfmt::{
    FormatterConfig, LengthCheck,
    caller::{FormatRequest, Outcome, confirm, run},
    checker::check_syntax_with,
    format,
};
use tempfile::{NamedTempFile, tempdir};

fn source_file(content: &str) -> Result<NamedTempFile> {
    let file = NamedTempFile::new()?;
    write(file.path(), content)?;
    Ok(file)
}

fn request(input: &Path) -> FormatRequest {
    FormatRequest::new(input.to_path_buf(), FormatterConfig::default())
}

#[test]
fn formats_in_place() -> Result<()> {
    let file = source_file(HELLO)?;
    let mut prompt: Vec<u8> = Vec::new();

    let outcome = run(&request(file.path()), empty(), &mut prompt)?;

    assert_eq!(outcome, Outcome::Formatted);
    assert_eq!(read_to_string(file.path())?, format(HELLO, 8)?);
    assert!(prompt.is_empty());
    Ok(())
}

#[test]
fn writes_to_a_separate_output() -> Result<()> {
    let file = source_file("main:\nli $v0, 10\nsyscall\n")?;
    let dir = tempdir()?;
    let output = dir.path().join("formatted.s");
    let request = FormatRequest {
        output: Some(output.clone()),
        config: FormatterConfig::new(4),
        ..request(file.path())
    };

    assert_eq!(run(&request, empty(), sink())?, Outcome::Formatted);
    assert_eq!(read_to_string(&output)?, "main:\n\tli\t$v0, 10\n\tsyscall\n\n");
    assert_eq!(read_to_string(file.path())?, "main:\nli $v0, 10\nsyscall\n");
    Ok(())
}

#[test]
fn malformed_input_is_left_untouched() -> Result<()> {
    let original = ".foo .bar\n  add $t0,$t0,1\n";
    let file = source_file(original)?;

    assert_eq!(run(&request(file.path()), empty(), sink())?, Outcome::Fallback);
    assert_eq!(read_to_string(file.path())?, original);
    Ok(())
}

#[test]
fn declined_length_mismatch_keeps_the_original() -> Result<()> {
    let original = "jr $ra,\n";
    let file = source_file(original)?;
    let mut prompt: Vec<u8> = Vec::new();

    let outcome = run(&request(file.path()), Cursor::new("n\n"), &mut prompt)?;

    assert_eq!(outcome, Outcome::Aborted);
    assert_eq!(read_to_string(file.path())?, original);
    let prompt = String::from_utf8(prompt)?;
    assert!(prompt.contains("Original length: 6. Formatted length: 5"));
    assert!(prompt.ends_with("Continue? (y/n) "));
    Ok(())
}

#[test]
fn accepted_length_mismatch_keeps_the_formatted_text() -> Result<()> {
    let file = source_file("jr $ra,\n")?;

    let outcome = run(&request(file.path()), Cursor::new("y\n"), sink())?;

    assert_eq!(outcome, Outcome::Formatted);
    assert_eq!(read_to_string(file.path())?, "\tjr\t$ra\n\n");
    Ok(())
}

#[test]
fn assume_yes_skips_the_prompt() -> Result<()> {
    let file = source_file("jr $ra,\n")?;
    let request = FormatRequest {
        assume_yes: true,
        ..request(file.path())
    };
    let mut prompt: Vec<u8> = Vec::new();

    assert_eq!(run(&request, empty(), &mut prompt)?, Outcome::Formatted);
    assert!(prompt.is_empty());
    Ok(())
}

#[test]
fn missing_input_is_an_error() -> Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing.s");
    assert!(run(&request(&missing), empty(), sink()).is_err());
    Ok(())
}

#[test]
fn confirm_only_accepts_y() -> Result<()> {
    let lengths = LengthCheck::new("a b", "a");
    assert!(confirm(&lengths, Cursor::new("y\n"), sink())?);
    assert!(!confirm(&lengths, Cursor::new("yes\n"), sink())?);
    assert!(!confirm(&lengths, empty(), sink())?);
    Ok(())
}

#[test]
fn config_file_overrides_defaults() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("config.json");

    assert_eq!(FormatterConfig::load_from(&path)?, None);

    write(&path, r#"{ "tab_width": 4 }"#)?;
    assert_eq!(FormatterConfig::load_from(&path)?, Some(FormatterConfig::new(4)));

    write(&path, "{}")?;
    assert_eq!(FormatterConfig::load_from(&path)?, Some(FormatterConfig::default()));

    write(&path, "tab_width = 4")?;
    assert!(FormatterConfig::load_from(&path).is_err());
    Ok(())
}

#[test]
fn zero_tab_width_config_is_invalid() {
    assert!(FormatterConfig::new(0).validate().is_err());
    assert!(FormatterConfig::default().validate().is_ok());
}

#[cfg(unix)]
#[test]
fn checker_exit_status_decides() -> Result<()> {
    let file = source_file(HELLO)?;
    check_syntax_with(Path::new("true"), file.path())?;

    let err = check_syntax_with(Path::new("false"), file.path()).unwrap_err();
    assert!(err.to_string().contains("is not valid MIPS"));
    Ok(())
}
