use clap::Parser;
use std::io::Write;
use tagsearch::application::{RunConfig, SearchService};
use tagsearch::cli::{render, Cli};
use tagsearch::error::TagsearchError;
use tagsearch::infrastructure::{Config, FileSystemRepository};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("TAGSEARCH_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagsearchError> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_from_dir(&cli.dir)?,
    };
    let run_config = RunConfig::resolve(cli.dir.clone(), cli.run_flags(), &config);
    tracing::debug!(?run_config, "resolved configuration");

    let repo = FileSystemRepository::open(run_config.root.clone())?;

    let outcome = SearchService::new(repo).execute(&run_config)?;
    let output = render(&outcome, &run_config);

    // A closed pipe (e.g. `| head`) is not an error
    let mut stdout = std::io::stdout().lock();
    match stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(TagsearchError::Io),
    }
}
