//! Terminal interaction: answering resolver questions and styled status lines.

pub mod input;
pub mod output;

pub use input::TerminalPrompter;
