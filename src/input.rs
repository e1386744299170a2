//! Standard input capture.
//!
//! Piped content is read in full before any processing starts; an
//! interactive terminal is never read from.

use std::io::{self, IsTerminal, Read};

/// Reads all of standard input when it is piped.
///
/// Returns `None` for an interactive terminal and `Some("")` for a pipe that
/// delivered nothing.
pub fn read_stdin() -> io::Result<Option<String>> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    read_piped(stdin.lock(), interactive)
}

/// Reads `reader` to the end unless it is an interactive terminal.
///
/// Invalid UTF-8 is replaced rather than rejected, so binary noise in a log
/// does not abort the run.
pub fn read_piped<R: Read>(mut reader: R, interactive: bool) -> io::Result<Option<String>> {
    if interactive {
        return Ok(None);
    }

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    tracing::debug!(bytes = bytes.len(), "read piped input");
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    };
    Ok(Some(content))
}
