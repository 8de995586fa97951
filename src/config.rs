/*!
 * Configuration handling for elves
 */

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::error::Result;
use crate::materializer::{MaterializeOptions, DEFAULT_PERMISSION};
use crate::{bail, ensure};

/// Highest mode accepted for created directories (setuid, setgid and sticky included)
pub const MAX_PERMISSION: u32 = 0o7777;

/// Command-line arguments for elves
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "elves",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tool to generate directories from json files",
    long_about = "Creates a directory hierarchy from a JSON tree description, such as the output of `tree -J`."
)]
pub struct Args {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[clap(subcommand)]
    pub command: Command,
}

/// Subcommands of elves
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create directories where the command is executed
    #[clap(after_help = "Examples:\n  elves create ./sample.json\n  elves create ./sample.json --sub new-project --permission 777")]
    Create(CreateArgs),

    /// Print the version
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

/// Arguments of the `create` command
#[derive(clap::Args, Debug, Clone)]
pub struct CreateArgs {
    /// JSON file describing the tree
    pub file: PathBuf,

    /// Permission of created directories, in octal
    #[clap(short, long)]
    pub permission: Option<String>,

    /// Create the tree inside this new subdirectory
    #[clap(short, long)]
    pub sub: Option<String>,

    /// Create a .gitkeep file in every directory
    #[clap(short, long)]
    pub gitkeep: bool,

    /// Print the tree that would be created without touching the filesystem
    #[clap(short, long)]
    pub dry_run: bool,

    /// Do not print the summary table
    #[clap(short, long)]
    pub quiet: bool,
}

/// Configuration of a `create` run
#[derive(Clone, Debug)]
pub struct Config {
    /// Path of the tree description
    pub document: PathBuf,

    /// Octal mode requested on the command line, parsed when creating
    pub permission: Option<String>,

    /// Subdirectory to create the tree in
    pub subdirectory: Option<String>,

    /// Whether to create marker files
    pub create_marker_files: bool,

    /// Only render the tree
    pub dry_run: bool,

    /// Suppress the summary table
    pub quiet: bool,
}

impl Config {
    /// Create configuration from `create` arguments
    pub fn from_args(args: CreateArgs) -> Self {
        Self {
            document: args.file,
            permission: args.permission,
            subdirectory: args.sub,
            create_marker_files: args.gitkeep,
            dry_run: args.dry_run,
            quiet: args.quiet,
        }
    }

    /// Validate the configuration
    ///
    /// The permission is not checked here: a dry run never applies it.
    pub fn validate(&self) -> Result<()> {
        if let Some(sub) = &self.subdirectory {
            ensure!(!sub.is_empty(), Config, "subdirectory name is empty");
            ensure!(
                sub != "." && sub != "..",
                Config,
                "subdirectory name {:?} refers to an existing directory",
                sub
            );
        }

        Ok(())
    }

    /// Label printed above a dry-run tree
    pub fn root_label(&self) -> &str {
        self.subdirectory.as_deref().unwrap_or(".")
    }

    /// Directory the tree is created under
    pub fn root_dir(&self) -> PathBuf {
        match &self.subdirectory {
            Some(sub) => PathBuf::from(".").join(sub),
            None => PathBuf::from("."),
        }
    }

    /// Mode applied to created directories, `755` unless given
    pub fn permission(&self) -> Result<u32> {
        match self.permission.as_deref() {
            Some(value) => parse_permission(value),
            None => Ok(DEFAULT_PERMISSION),
        }
    }

    /// Options handed to the materializer
    pub fn materialize_options(&self) -> Result<MaterializeOptions> {
        Ok(MaterializeOptions {
            permission: self.permission()?,
            create_marker_files: self.create_marker_files,
        })
    }
}

/// Parse an octal permission string such as `755` or `0o700`
pub fn parse_permission(value: &str) -> Result<u32> {
    let digits = value.trim();
    let digits = digits.strip_prefix("0o").unwrap_or(digits);

    let permission = match u32::from_str_radix(digits, 8) {
        Ok(permission) => permission,
        Err(e) => bail!(Config, "invalid permission value {:?}: {}", value, e),
    };
    ensure!(
        permission <= MAX_PERMISSION,
        Config,
        "invalid permission value {:?}: must be at most 7777",
        value
    );

    Ok(permission)
}
