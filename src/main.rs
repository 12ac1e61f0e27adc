//! verless's application entry point.
//! Parses the command line and hands off to project/theme creation or to the
//! content file listing.

use verless::{
    cli::{get_args, Args, Command, CreateCommand},
    config::{CreateProjectOptions, CreateThemeOptions},
    create::{create_project, create_theme},
    error::{default_error_handler, Result},
    filter::{exclude_globs, markdown_only, no_underscores},
    logger::init_logger,
    stream::StreamRequest,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Create(CreateCommand::Project { path, overwrite }) => {
            create_project(&path, &CreateProjectOptions { overwrite })?;
            println!("Project created in {}.", path.display());
        }
        Command::Create(CreateCommand::Theme { name, project }) => {
            create_theme(&CreateThemeOptions { project }, &name)?;
            println!("Theme '{name}' created.");
        }
        Command::Files { root, all, exclude } => {
            let mut request = StreamRequest::new(root);
            if !all {
                request = request.filter(markdown_only).filter(no_underscores);
            }
            if !exclude.is_empty() {
                request = request.filter(exclude_globs(&exclude)?);
            }

            let (files, walk) = request.spawn();
            for file in files {
                println!("{}", file.display());
            }

            walk.join().unwrap_or_else(|e| std::panic::resume_unwind(e))?;
        }
    }
    Ok(())
}
