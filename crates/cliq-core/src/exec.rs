//! Blocking execution of a rendered argument vector.
//!
//! The program is resolved on `PATH` up front so a missing binary is reported
//! as an execution error naming the program rather than a bare I/O error.
//! Output is captured in full; stdout comes first, followed by stderr.

use crate::error::{CliqError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Resolve `program` on `PATH`. Paths containing a separator are returned
/// as-is when they exist.
pub fn resolve_program(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|e| CliqError::Execution {
        program: program.to_string(),
        reason: format!("not found: {e}"),
        output: String::new(),
    })
}

/// Run `argv` to completion and return its trimmed combined output.
pub fn execute(argv: &[String]) -> Result<String> {
    let (program, args) = argv.split_first().ok_or(CliqError::EmptyCommand)?;
    let path = resolve_program(program)?;
    tracing::info!(program = %program, args = args.len(), "executing command");

    let output = Command::new(&path)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| CliqError::Execution {
            program: program.clone(),
            reason: format!("failed to start: {e}"),
            output: String::new(),
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        let reason = match output.status.code() {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        };
        return Err(CliqError::Execution {
            program: program.clone(),
            reason,
            output: combined.trim().to_string(),
        });
    }

    Ok(combined.trim().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
