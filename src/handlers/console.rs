use std::fmt::Display;
use std::io::{BufRead, ErrorKind, Write};
use crate::errors::{AppError, AppResult};

/// Line-based prompt over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `message` and reads one line without its line ending. End of input is an error.
    pub fn prompt(&mut self, message: &str) -> AppResult<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::Io(ErrorKind::UnexpectedEof.into()));
        }
        Ok(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string())
    }

    pub fn say(&mut self, message: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
pub(crate) fn scripted(input: &str) -> Console<std::io::Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(std::io::Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[cfg(test)]
pub(crate) fn transcript(console: Console<std::io::Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}
