use std::io::Write;

use cms_console_core::error::Result;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

fn print_status<W: Write>(writer: &mut W, color: Color, tag: &str, message: &str) -> Result<()> {
    queue!(
        writer,
        SetForegroundColor(color),
        Print(format!("[{tag}] {message}")),
        ResetColor,
        Print("\n")
    )?;
    writer.flush()?;
    Ok(())
}

pub fn print_success<W: Write>(writer: &mut W, message: &str) -> Result<()> {
    print_status(writer, Color::Green, "OK", message)
}

pub fn print_warning<W: Write>(writer: &mut W, message: &str) -> Result<()> {
    print_status(writer, Color::Yellow, "WARNING", message)
}

pub fn print_error<W: Write>(writer: &mut W, message: &str) -> Result<()> {
    print_status(writer, Color::Red, "ERROR", message)
}
