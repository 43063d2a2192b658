//! CMS Console CLI Library
//!
//! This crate provides the command-line interface for cms-console. It parses
//! arguments, loads the site definition, asks the interactive questions and
//! prints the command output.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`context`]: Site definition, messages and the collaborators built from them
//! - [`commands`]: One handler per console command
//! - [`interaction`]: Terminal prompter and styled status lines
//!
//! # Examples
//!
//! ```bash
//! # List every registered service
//! cms-console container:debug
//!
//! # Describe one service
//! cms-console container:debug logger.factory
//!
//! # Generate nodes, asking for anything not given
//! cms-console create:nodes article
//!
//! # Generate nodes without questions, reproducibly
//! cms-console -n create:nodes article page --limit 20 --time-range W --seed 7
//! ```

pub mod cli_args;
pub mod commands;
pub mod context;
pub mod interaction;

use std::io::stdin;

use clap::Parser;
use cms_console_core::error::Result;
use crossterm::tty::IsTty;
use log::debug;

use crate::cli_args::{Args, Commands};
use crate::context::SiteContext;

/// Parses the process arguments and runs the selected command.
///
/// # Errors
///
/// Returns any error raised while loading the site or running the command.
pub fn execute() -> Result<()> {
    let args = Args::parse();
    run(&args)
}

/// Runs the command described by `args`.
///
/// # Errors
///
/// Returns any error raised while loading the site or running the command.
pub fn run(args: &Args) -> Result<()> {
    let context = SiteContext::load(args.site_path.as_deref())?;

    match &args.command {
        Commands::ContainerDebug { service } => {
            commands::container_debug::handle(&context, service.as_deref())
        }
        Commands::CreateNodes(nodes) => {
            let interactive = !args.no_interaction && stdin().is_tty();
            debug!("Interactive: {}", interactive);
            commands::create_nodes::handle(&context, nodes, interactive)
        }
    }
}
