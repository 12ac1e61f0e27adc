//! Command-line interface implementation for verless.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for verless.
#[derive(Parser, Debug)]
#[command(author, version, about = "verless: scaffold projects and themes, list content files", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project or theme
    #[command(subcommand)]
    Create(CreateCommand),

    /// Print the content files below a directory, one per line
    Files {
        /// Directory to walk
        #[arg(value_name = "ROOT", default_value = ".")]
        root: PathBuf,

        /// Print every file instead of Markdown files not starting with an underscore
        #[arg(short, long)]
        all: bool,

        /// Skip files whose path or name matches the glob; can be repeated
        #[arg(short, long, value_name = "GLOB")]
        exclude: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CreateCommand {
    /// Create a new project
    Project {
        /// Directory where the project will be created
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Remove the existing project first
        #[arg(short, long)]
        overwrite: bool,
    },

    /// Create a new theme inside an existing project
    Theme {
        /// Name of the theme
        #[arg(value_name = "NAME")]
        name: String,

        /// Project the theme is created in
        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument
                || e.kind() == ErrorKind::MissingSubcommand
            {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
