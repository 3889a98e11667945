//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// List the sub pages of a wiki page as an indented, nested list
#[derive(Parser, Debug)]
#[command(name = "subpagelist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding the local .subpagelist.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the sub page list of a page
    ///
    /// Parameters: page=<title> intro=<text> default=<text|-> showpage=<yes|no>
    /// limit=<n> wrap=<yes|no>. A leading bare value is taken as the page.
    Render {
        /// Pages file (one page path per line)
        #[arg(short, long, env = "SUBPAGELIST_PAGES_FILE", value_hint = ValueHint::FilePath)]
        pages: Option<PathBuf>,

        /// key=value parameters
        #[arg(required = true)]
        params: Vec<String>,
    },

    /// Show the hierarchy of a page as a tree
    Tree {
        /// Pages file (one page path per line)
        #[arg(short, long, env = "SUBPAGELIST_PAGES_FILE", value_hint = ValueHint::FilePath)]
        pages: Option<PathBuf>,

        /// Page title
        page: String,
    },

    /// List all sub page paths of a page, flat
    Pages {
        /// Pages file (one page path per line)
        #[arg(short, long, env = "SUBPAGELIST_PAGES_FILE", value_hint = ValueHint::FilePath)]
        pages: Option<PathBuf>,

        /// Page title
        page: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print config template
    Init,

    /// Show config paths
    Path,
}
