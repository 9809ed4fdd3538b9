//! Interactive input providers
//!
//! Every question the workflow asks goes through [`Prompt`], so tests can
//! replace the terminal with [`ScriptedPrompt`].

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of answers to interactive questions
pub trait Prompt {
    /// Show `question` and return the answer without its line terminator
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Prompt reading answers from the process stdin
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", question)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input while waiting for an answer",
            ));
        }
        Ok(strip_line_ending(&line).to_string())
    }
}

/// Prompt replaying a fixed list of answers
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.asked.push(question.to_string());
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left")
        })
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
