use std::io::{stdin, stdout, BufRead, StdinLock, Stdout, Write};

use cms_console_core::error::Result;
use cms_console_core::parameters::Prompter;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use indexmap::IndexSet;

/// Line-based prompter reading answers from `reader` and writing questions to `writer`.
pub struct TerminalPrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(stdin().lock(), stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Reads one trimmed line; `None` once input is exhausted.
    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }

        Ok(Some(input.trim().to_string()))
    }

    fn print_question(&mut self, question: &str, default: Option<&str>) -> Result<()> {
        queue!(
            self.writer,
            SetForegroundColor(Color::Green),
            Print(format!(" {question}")),
            ResetColor
        )?;

        if let Some(default) = default {
            queue!(
                self.writer,
                Print(" ["),
                SetForegroundColor(Color::Yellow),
                Print(default),
                ResetColor,
                Print("]")
            )?;
        }

        queue!(self.writer, Print(":\n"))?;
        Ok(())
    }

    fn print_choices(&mut self, choices: &[String]) -> Result<()> {
        for (index, choice) in choices.iter().enumerate() {
            queue!(
                self.writer,
                Print("  ["),
                SetForegroundColor(Color::Yellow),
                Print(index),
                ResetColor,
                Print(format!("] {choice}\n"))
            )?;
        }
        Ok(())
    }

    fn print_prompt(&mut self) -> Result<()> {
        queue!(self.writer, Print(" > "))?;
        self.writer.flush()?;
        Ok(())
    }

    fn print_invalid(&mut self, message: &str) -> Result<()> {
        queue!(
            self.writer,
            SetForegroundColor(Color::Red),
            Print(format!(" [ERROR] {message}\n")),
            ResetColor
        )?;
        Ok(())
    }
}

/// Finds a choice by its index, its label, or the short code before ` | `
/// in labels such as `H | Past hour`. Labels and codes match case-insensitively.
fn parse_choice(answer: &str, choices: &[String]) -> Option<usize> {
    if let Ok(index) = answer.parse::<usize>() {
        return (index < choices.len()).then_some(index);
    }

    choices
        .iter()
        .position(|choice| choice.eq_ignore_ascii_case(answer))
        .or_else(|| {
            choices.iter().position(|choice| {
                choice
                    .split_once(" | ")
                    .is_some_and(|(code, _)| code.eq_ignore_ascii_case(answer))
            })
        })
}

/// Parses a comma-separated list of choices, keeping the first occurrence of each.
fn parse_choices(answer: &str, choices: &[String]) -> std::result::Result<Vec<usize>, String> {
    let mut selected = IndexSet::new();

    for token in answer.split(',').map(str::trim).filter(|token| !token.is_empty()) {
        match parse_choice(token, choices) {
            Some(index) => {
                selected.insert(index);
            }
            None => return Err(format!("Value \"{token}\" is invalid")),
        }
    }

    Ok(selected.into_iter().collect())
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn multi_select(&mut self, question: &str, choices: &[String]) -> Result<Vec<usize>> {
        loop {
            self.print_question(question, None)?;
            self.print_choices(choices)?;
            self.print_prompt()?;

            let Some(answer) = self.read_answer()? else {
                return Ok(Vec::new());
            };

            match parse_choices(&answer, choices) {
                Ok(selected) if !selected.is_empty() => return Ok(selected),
                Ok(_) => self.print_invalid("Select at least one value")?,
                Err(message) => self.print_invalid(&message)?,
            }
        }
    }

    fn ask_number(&mut self, question: &str, default: u32) -> Result<u32> {
        loop {
            self.print_question(question, Some(&default.to_string()))?;
            self.print_prompt()?;

            let Some(answer) = self.read_answer()? else {
                return Ok(default);
            };

            if answer.is_empty() {
                return Ok(default);
            }

            match answer.parse::<u32>() {
                Ok(value) if value > 0 => return Ok(value),
                _ => self.print_invalid(&format!("\"{answer}\" is not a positive number"))?,
            }
        }
    }

    fn select(&mut self, question: &str, choices: &[String], default: usize) -> Result<usize> {
        let default_label = choices.get(default).cloned();

        loop {
            self.print_question(question, default_label.as_deref())?;
            self.print_choices(choices)?;
            self.print_prompt()?;

            let Some(answer) = self.read_answer()? else {
                return Ok(default);
            };

            if answer.is_empty() {
                return Ok(default);
            }

            match parse_choice(&answer, choices) {
                Some(index) => return Ok(index),
                None => self.print_invalid(&format!("Value \"{answer}\" is invalid"))?,
            }
        }
    }
}
