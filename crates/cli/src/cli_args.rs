//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Command names follow the console's `group:action` convention.

use clap::{Parser, Subcommand};
use cms_console_core::parameters::RawGenerationInput;

/// Command-line arguments for the cms-console tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cms_console_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cms-console", "container:debug"]);
/// assert!(!args.no_interaction);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "cms-console", term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the site definition YAML.
    ///
    /// If not provided, defaults to `~/.cms-console/site.yml`.
    #[arg(long, short = 'c', global = true)]
    pub site_path: Option<String>,

    /// Do not ask any interactive question.
    ///
    /// Options left unset take their defaults. Prompting is also skipped
    /// when stdin is not a terminal.
    #[arg(long, short = 'n', action, global = true)]
    pub no_interaction: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display current services for an application.
    #[command(name = "container:debug")]
    ContainerDebug {
        /// Service ID to describe. Lists every service when omitted.
        service: Option<String>,
    },

    /// Create dummy nodes for your application.
    #[command(name = "create:nodes")]
    CreateNodes(CreateNodesArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct CreateNodesArgs {
    /// Content type(s) to be used in node creation.
    pub content_types: Vec<String>,

    /// How many nodes to generate (at most 10000).
    #[arg(long)]
    pub limit: Option<String>,

    /// Number of words in node titles (at most 100).
    #[arg(long)]
    pub title_words: Option<String>,

    /// How far back creation dates may go: 1 (now), 3600 (hour), 86400 (day),
    /// 604800 (week), 2592000 (month), 31536000 (year), or N/H/D/W/M/Y.
    #[arg(long)]
    pub time_range: Option<String>,

    /// Seed for the random generator, to make a run reproducible.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CreateNodesArgs {
    #[must_use]
    pub fn raw_input(&self) -> RawGenerationInput {
        RawGenerationInput {
            content_types: self.content_types.clone(),
            limit: self.limit.clone(),
            title_words: self.title_words.clone(),
            time_range: self.time_range.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_debug_without_service() {
        let args = Args::parse_from(["cms-console", "container:debug"]);

        assert!(args.site_path.is_none());
        assert!(!args.no_interaction);
        assert!(matches!(
            args.command,
            Commands::ContainerDebug { service: None }
        ));
    }

    #[test]
    fn test_container_debug_with_service() {
        let args = Args::parse_from(["cms-console", "container:debug", "logger.factory"]);

        match args.command {
            Commands::ContainerDebug { service } => {
                assert_eq!(service, Some("logger.factory".to_string()));
            }
            _ => panic!("Expected container:debug"),
        }
    }

    #[test]
    fn test_create_nodes_defaults() {
        let args = Args::parse_from(["cms-console", "create:nodes"]);

        match args.command {
            Commands::CreateNodes(nodes) => {
                assert!(nodes.content_types.is_empty());
                assert!(nodes.limit.is_none());
                assert!(nodes.title_words.is_none());
                assert!(nodes.time_range.is_none());
                assert!(nodes.seed.is_none());
            }
            _ => panic!("Expected create:nodes"),
        }
    }

    #[test]
    fn test_create_nodes_all_options() {
        let args = Args::parse_from([
            "cms-console",
            "create:nodes",
            "article",
            "page",
            "--limit=3",
            "--title-words",
            "2",
            "--time-range=86400",
            "--seed",
            "99",
        ]);

        match args.command {
            Commands::CreateNodes(nodes) => {
                let raw = nodes.raw_input();
                assert_eq!(raw.content_types, vec!["article", "page"]);
                assert_eq!(raw.limit, Some("3".to_string()));
                assert_eq!(raw.title_words, Some("2".to_string()));
                assert_eq!(raw.time_range, Some("86400".to_string()));
                assert_eq!(nodes.seed, Some(99));
            }
            _ => panic!("Expected create:nodes"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from([
            "cms-console",
            "create:nodes",
            "-n",
            "--site-path",
            "/custom/site.yml",
        ]);

        assert!(args.no_interaction);
        assert_eq!(args.site_path, Some("/custom/site.yml".to_string()));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let result = Args::try_parse_from(["cms-console", "cache:rebuild"]);
        assert!(result.is_err());
    }
}
