//! Optional syntax check run before formatting, delegated to an external
//! MIPS checker (`mipsy --check <file>` by default).

use std::{
    env::var,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result, bail};
use tracing::{debug, error, info};
use which::which;

use crate::{
    constants::{CHECKER_FLAG, CHECKER_NAME},
    env_variables::EnvVariable,
};

/// Locates the checker binary, either from `MIPSFMT_CHECKER` or on the
/// system PATH.
pub fn get_checker_path() -> Result<PathBuf> {
    let path_str =
        var(EnvVariable::CheckerPath.to_string()).unwrap_or_else(|_| CHECKER_NAME.to_string());
    debug!("Raw checker path resolved to '{}'", path_str);

    let path = PathBuf::from(&path_str);

    if path.exists() {
        if path.is_file() {
            info!("Resolved checker path: {}", path.display());
            return Ok(path);
        }
        error!("Checker path does not point to a file: {}", path.display());
        bail!(
            "Checker path does not point to a valid file: {}",
            path.display()
        );
    }

    if let Ok(resolved) = which(&path_str) {
        info!("Found checker in PATH at: {}", resolved.display());
        return Ok(resolved);
    }

    error!("Could not find '{}' in filesystem or PATH", path_str);
    bail!("Could not find '{}' in filesystem or PATH", path_str);
}

/// Runs the checker on `input` and fails if it reports invalid syntax.
pub fn check_syntax(input: &Path) -> Result<()> {
    let checker = get_checker_path()?;
    check_syntax_with(&checker, input)
}

pub fn check_syntax_with(checker: &Path, input: &Path) -> Result<()> {
    info!("Checking {} with {}", input.display(), checker.display());
    let output = Command::new(checker)
        .arg(CHECKER_FLAG)
        .arg(input)
        .output()
        .with_context(|| format!("Failed to run the checker {}", checker.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let report = if stderr.trim().is_empty() { stdout } else { stderr };
        error!("{} rejected {}", checker.display(), input.display());
        bail!(
            "{} is not valid MIPS according to {}: {}",
            input.display(),
            checker.display(),
            report.trim()
        );
    }
    info!("{} passed the syntax check", input.display());
    Ok(())
}
