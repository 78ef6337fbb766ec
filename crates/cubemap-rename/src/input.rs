//! Interactive folder prompt.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::RenameResult;

/// Prompt written before reading the folder path.
pub const PROMPT: &str = "Enter folder path: ";

/// Turn one line of user input into a folder path.
///
/// Strips the line ending and the double quotes file managers add when a
/// path is dragged into a terminal. Spaces are kept, they may be part of
/// the folder name.
#[must_use]
pub fn parse_folder_input(line: &str) -> PathBuf {
    PathBuf::from(line.trim_end_matches(['\r', '\n']).trim_matches('"'))
}

/// Write [`PROMPT`] to `output` and read a folder path from `input`.
///
/// Fails with [`RenameError::Prompt`](crate::RenameError::Prompt) if the
/// streams fail or `input` is already at end of file.
pub fn read_folder_path<R, W>(mut input: R, mut output: W) -> RenameResult<PathBuf>
where
    R: BufRead,
    W: Write,
{
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no folder path given").into());
    }

    Ok(parse_folder_input(&line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenameError;
    use std::path::Path;

    #[test]
    fn test_parse_plain_path() {
        assert_eq!(parse_folder_input("/tmp/sky\n"), Path::new("/tmp/sky"));
    }

    #[test]
    fn test_parse_strips_quotes_and_crlf() {
        assert_eq!(
            parse_folder_input("\"C:\\textures\\sky box\"\r\n"),
            Path::new("C:\\textures\\sky box")
        );
        assert_eq!(parse_folder_input("\"sky \"\n"), Path::new("sky "));
        assert_eq!(parse_folder_input(" sky\n"), Path::new(" sky"));
    }

    #[test]
    fn test_read_folder_path_prompts() {
        let mut output = Vec::new();
        let path = read_folder_path(&b"\"assets/skybox\"\n"[..], &mut output).unwrap();

        assert_eq!(path, Path::new("assets/skybox"));
        assert_eq!(output, PROMPT.as_bytes());
    }

    #[test]
    fn test_read_folder_path_eof() {
        let err = read_folder_path(&b""[..], io::sink()).unwrap_err();
        assert!(matches!(err, RenameError::Prompt(e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
