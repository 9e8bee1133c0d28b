//! Input acquisition: piped stdin or a file named with --file
//!
//! Piped input always wins over --file; an interactive terminal with no
//! file argument means there is nothing to send.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use tracing::warn;

use crate::error::{Error, Result};

/// Where the payload comes from. Decided once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Stdin is redirected or piped
    Piped,
    /// A file path was given and stdin is an interactive terminal
    File(PathBuf),
    /// Interactive terminal and no file argument
    None,
}

/// Decide the input source from the stdin mode and the --file argument.
pub fn detect(stdin_is_terminal: bool, file_path: Option<PathBuf>) -> InputSource {
    let file_path = file_path.filter(|p| !p.as_os_str().is_empty());

    if !stdin_is_terminal {
        if let Some(path) = &file_path {
            // Kept from the original tool: the pipe silently shadows --file.
            warn!(path = %path.display(), "ignoring --file because stdin is piped");
        }
        InputSource::Piped
    } else if let Some(path) = file_path {
        InputSource::File(path)
    } else {
        InputSource::None
    }
}

/// Read everything line by line, appending exactly one `\n` per line.
///
/// CRLF and LF inputs produce identical buffers. An empty reader yields an
/// empty buffer.
pub fn read_normalized<R: BufRead>(reader: R) -> io::Result<String> {
    let mut buffer = String::new();
    for line in reader.lines() {
        buffer.push_str(&line?);
        buffer.push('\n');
    }
    Ok(buffer)
}

/// Fill the output buffer from the detected source.
///
/// Returns `None` when there is no input (usage case). A file that cannot
/// be opened is `Error::FileOpen`; the handle is closed when acquisition
/// returns, on every path.
pub fn acquire(source: InputSource) -> Result<Option<String>> {
    match source {
        InputSource::Piped => {
            let stdin = io::stdin();
            Ok(Some(read_normalized(stdin.lock())?))
        }
        InputSource::File(path) => {
            let file = File::open(&path).map_err(Error::FileOpen)?;
            Ok(Some(read_normalized(BufReader::new(file))?))
        }
        InputSource::None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn piped_stdin_wins_over_file_argument() {
        let source = detect(false, Some(PathBuf::from("/tmp/data.txt")));
        assert_eq!(source, InputSource::Piped);
    }

    #[test]
    fn file_argument_used_when_stdin_is_a_terminal() {
        let source = detect(true, Some(PathBuf::from("/tmp/data.txt")));
        assert_eq!(source, InputSource::File(PathBuf::from("/tmp/data.txt")));
    }

    #[test]
    fn empty_file_argument_counts_as_absent() {
        assert_eq!(detect(true, Some(PathBuf::new())), InputSource::None);
    }

    #[test]
    fn terminal_without_file_is_none() {
        assert_eq!(detect(true, None), InputSource::None);
    }

    #[test]
    fn read_normalized_appends_single_newline_per_line() {
        let buffer = read_normalized(Cursor::new("hello\nworld")).unwrap();
        assert_eq!(buffer, "hello\nworld\n");
    }

    #[test]
    fn read_normalized_handles_crlf() {
        let buffer = read_normalized(Cursor::new("a\r\nb\r\nc")).unwrap();
        assert_eq!(buffer, "a\nb\nc\n");
    }

    #[test]
    fn read_normalized_preserves_trailing_blank_lines() {
        let buffer = read_normalized(Cursor::new("x\n\n")).unwrap();
        assert_eq!(buffer, "x\n\n");
    }

    #[test]
    fn read_normalized_empty_input_yields_empty_buffer() {
        let buffer = read_normalized(Cursor::new("")).unwrap();
        assert_eq!(buffer, "");
    }

    #[test]
    fn acquire_from_file_reads_and_normalizes() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "line1\r\nline2").unwrap();

        let buffer = acquire(InputSource::File(file.path().to_path_buf()))
            .unwrap()
            .unwrap();

        assert_eq!(buffer, "line1\nline2\n");
    }

    #[test]
    fn acquire_from_empty_file_proceeds_with_empty_buffer() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let buffer = acquire(InputSource::File(file.path().to_path_buf()))
            .unwrap()
            .unwrap();

        assert_eq!(buffer, "");
    }

    #[test]
    fn acquire_missing_file_is_file_open_error() {
        let err = acquire(InputSource::File(PathBuf::from("/nonexistent/path/x.txt")))
            .unwrap_err();

        assert!(matches!(err, Error::FileOpen(_)));
        assert!(err.to_string().starts_with("File Open error:"));
    }

    #[test]
    fn acquire_none_returns_no_buffer() {
        assert_eq!(acquire(InputSource::None).unwrap(), None);
    }
}
