//! User-facing console output
//!
//! Status lines go to the "out" stream, failures to the "err" stream. Both
//! are plain `Write` sinks so drivers can run against in-memory buffers.

use std::fmt::Display;
use std::io::{self, Write};

/// Pair of output streams used by the workflow and report drivers
pub struct Console<'a> {
    out: Box<dyn Write + 'a>,
    err: Box<dyn Write + 'a>,
}

impl<'a> Console<'a> {
    /// Console writing to arbitrary sinks
    pub fn new(out: impl Write + 'a, err: impl Write + 'a) -> Self {
        Self {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    /// Print a status line
    pub fn say(&mut self, line: impl Display) {
        let _ = writeln!(self.out, "{}", line);
    }

    /// Print a failure line
    pub fn error(&mut self, line: impl Display) {
        let _ = writeln!(self.err, "{}", line);
    }

    /// Flush both streams
    pub fn flush(&mut self) {
        let _ = self.out.flush();
        let _ = self.err.flush();
    }
}

impl Console<'static> {
    /// Console bound to the process stdout and stderr
    pub fn stdio() -> Self {
        Console::new(io::stdout(), io::stderr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streams_are_separate() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        {
            let mut console = Console::new(&mut out, &mut err);
            console.say("hello");
            console.error(format_args!("failed: {}", 42));
        }

        assert_eq!(String::from_utf8(out).unwrap(), "hello\n");
        assert_eq!(String::from_utf8(err).unwrap(), "failed: 42\n");
    }
}
