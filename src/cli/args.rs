//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// In-memory mirror of a directory hierarchy: look up, insert and delete paths
#[derive(Parser, Debug)]
#[command(name = "pathtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory to mirror (default: `default_dir` setting)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Config file (default: ~/.config/pathtree/pathtree.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the mirrored hierarchy as a tree
    Tree {
        /// Levels to show (default: `display_depth` setting)
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Classify paths as file, directory or absent
    Find {
        /// Relative paths, `/`-separated
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List every mirrored path in sorted pre-order
    List {
        /// Only directories
        #[arg(long, conflicts_with = "files")]
        dirs: bool,
        /// Only files
        #[arg(long)]
        files: bool,
    },

    /// Show node, file and directory counts and height
    Stats,

    /// Apply in-memory inserts, then deletes, and print the result
    Edit {
        /// Insert a path (parent must exist)
        #[arg(long = "insert", value_name = "PATH")]
        inserts: Vec<String>,
        /// Insert a path flagged as a directory
        #[arg(long = "mkdir", value_name = "PATH")]
        mkdirs: Vec<String>,
        /// Delete a path and its subtree
        #[arg(long = "delete", value_name = "PATH")]
        deletes: Vec<String>,
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
    /// Show effective settings
    Show,
    /// Print a commented template config
    Template,
    /// Print the global config file location
    Path,
}
