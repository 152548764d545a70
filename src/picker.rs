//! File picker
//!
//! Runs a configured external picker command and reads the chosen path from
//! its stdout, or shows the native dialog when no command is configured.
//! Both block the calling thread until the user is done.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Most bytes read from a picker's stdout
pub const PICKER_OUTPUT_LIMIT: u64 = 4096;

/// Turn raw picker output into a path: first non-empty line, trimmed
pub fn parse_picker_output(output: &[u8]) -> Option<PathBuf> {
    let text = String::from_utf8_lossy(output);
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(PathBuf::from)
}

/// Spawn `argv`, read its stdout up to the limit, then reap it
pub fn run_picker(argv: &[String]) -> io::Result<Option<PathBuf>> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty picker command"))?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .spawn()?;

    let mut output = Vec::new();
    if let Some(stdout) = child.stdout.take() {
        stdout.take(PICKER_OUTPUT_LIMIT).read_to_end(&mut output)?;
        // Closing the pipe here unblocks a picker that writes past the limit
    }

    let status = child.wait()?;
    tracing::debug!(?status, bytes = output.len(), "picker finished");

    Ok(parse_picker_output(&output))
}

fn native_dialog(start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Open document")
        .add_filter("PDF documents", &["pdf"])
        .add_filter("All files", &["*"]);
    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_file()
}

/// Ask the user for a document. `None` means cancelled.
pub fn pick_file(command: Option<&[String]>, start_dir: Option<&Path>) -> Option<PathBuf> {
    match command {
        Some(argv) => match run_picker(argv) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("File picker {:?} failed: {}; using native dialog", argv, e);
                native_dialog(start_dir)
            }
        },
        None => native_dialog(start_dir),
    }
}
