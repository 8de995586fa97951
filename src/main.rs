/*!
 * Command-line interface for elves
 */

use std::fs;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use elves::config::{Args, Command, Config};
use elves::error::{ElvesError, IoResultExt, Result};
use elves::materializer::{count_directories, create_directory, Materializer};
use elves::parser;
use elves::report::{CreateReport, ReportFormat, Reporter};
use elves::writer::TreeWriter;
use elves::VERSION;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(e) = elves::logging::init_logging(args.verbose) {
        eprintln!("Warning: {}", e);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Version => {
            println!("elves version {}", VERSION);
            Ok(())
        }
        Command::Completions { shell } => {
            let mut command = Args::command();
            clap_complete::generate(shell, &mut command, "elves", &mut io::stdout());
            Ok(())
        }
        Command::Create(create) => {
            let config = Config::from_args(create);
            config.validate()?;
            create_tree(&config)
        }
    }
}

fn create_tree(config: &Config) -> Result<()> {
    let raw = fs::read(&config.document).map_err(|source| ElvesError::ReadDocument {
        path: config.document.clone(),
        source,
    })?;
    let document = parser::parse(&raw)?;
    let contents = document.root_contents();
    debug!(
        document = %config.document.display(),
        entries = document.entries.len(),
        "parsed tree description"
    );

    if config.dry_run {
        let stdout = io::stdout();
        let mut writer = TreeWriter::new(stdout.lock(), config.create_marker_files);
        writer.write_with_root(config.root_label(), contents)?;
        return Ok(());
    }

    let options = config.materialize_options()?;
    let start_time = Instant::now();
    let root = config.root_dir();

    if config.subdirectory.is_some() {
        create_directory(&root, options.permission).at_path(&root)?;
        info!(path = %root.display(), "created subdirectory");
    }

    let progress = if config.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(count_directories(contents))
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len}")
    {
        progress.set_style(style);
    }
    progress.set_prefix("📁 Creating");

    let materializer = Materializer::with_progress(options, Arc::new(progress.clone()));
    let result = materializer.materialize(contents, &root);
    progress.finish_and_clear();
    let stats = result?;

    if !config.quiet {
        let report = CreateReport {
            root: config.root_label().to_string(),
            permission: options.permission,
            duration: start_time.elapsed(),
            stats,
            declared: document.declared_counts(),
        };
        Reporter::new(ReportFormat::ConsoleTable).print_report(&report);
    }

    Ok(())
}
