//! Command-line interface definitions.

use crate::config::BasePath;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve blog site metadata for the site generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "blogmeta.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Prefix for asset and search-index paths [default: $BASE_PATH]
    #[arg(short = 'B', long = "base-path", global = true)]
    pub base_path: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the resolved metadata as JSON
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },

    /// Validate the metadata and report every problem
    #[command(visible_alias = "c")]
    Check,

    /// Write a blogmeta.toml holding the default metadata
    #[command(visible_alias = "i")]
    Init {
        /// Print the file instead of writing it
        #[arg(long)]
        dry: bool,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// `--base-path` if given, otherwise `BASE_PATH` from the environment.
    pub fn base_path(&self) -> BasePath {
        match &self.base_path {
            Some(path) => BasePath::new(path.as_str()),
            None => BasePath::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["blogmeta", "show", "--pretty", "-B", "/blog"]).unwrap();
        assert_eq!(cli.base_path(), BasePath::new("/blog"));
        assert_eq!(cli.config, PathBuf::from("blogmeta.toml"));
        let Commands::Show { args } = cli.command else {
            panic!("expected show");
        };
        assert!(args.pretty);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_empty_base_path_flag() {
        let cli = Cli::try_parse_from(["blogmeta", "--base-path", "", "check"]).unwrap();
        assert!(cli.base_path().is_empty());
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["blogmeta", "init", "--dry"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Init {
                dry: true,
                force: false
            }
        ));
    }
}
