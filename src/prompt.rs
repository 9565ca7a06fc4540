//! Interactive decisions
//!
//! The resolver only ever needs free-text answers; interpreting them is done
//! by the caller.

use std::io::{self, BufRead, IsTerminal, Write};

pub trait Prompter {
    /// Ask a question and return the raw answer line.
    fn ask(&mut self, question: &str) -> io::Result<String>;

    /// Show a numbered menu, then ask `question`.
    fn choose(&mut self, header: &str, options: &[String], question: &str) -> io::Result<String> {
        println!("{header}");
        for (i, option) in options.iter().enumerate() {
            println!("{}. {}", i + 1, option);
        }
        self.ask(question)
    }
}

/// Reads answers from the terminal. Empty answers are allowed so that a bare
/// Enter confirms. Piped stdin is read line by line instead.
#[derive(Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        if !io::stdin().is_terminal() {
            return read_answer(&mut io::stdin().lock(), &mut io::stdout(), question);
        }
        dialoguer::Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }
}

/// Print `question`, then take one line from `input` without its line ending.
fn read_answer(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> io::Result<String> {
    write!(output, "{question}: ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no answer on stdin"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Replays canned answers and records every question asked.
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
    pub menus: Vec<Vec<String>>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
            menus: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer"))
    }

    fn choose(&mut self, _header: &str, options: &[String], question: &str) -> io::Result<String> {
        self.menus.push(options.to_vec());
        self.ask(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn piped_answer_is_one_line() {
        let mut input = Cursor::new("n\r\nignored\n");
        let mut output = Vec::new();
        let answer = read_answer(&mut input, &mut output, "Did you mean 'Hades'? (y/n)").unwrap();
        assert_eq!(answer, "n");
        assert_eq!(String::from_utf8(output).unwrap(), "Did you mean 'Hades'? (y/n): ");
    }

    #[test]
    fn piped_empty_line_confirms() {
        let answer = read_answer(&mut Cursor::new("\n"), &mut Vec::new(), "q").unwrap();
        assert_eq!(answer, "");
    }

    #[test]
    fn closed_stdin_is_an_error() {
        let err = read_answer(&mut Cursor::new(""), &mut Vec::new(), "q").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
