//! CLI command definitions

use crate::application::RunFlags;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagsearch")]
#[command(about = "Search for, and/or summarise, tags in plaintext files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Keywords to filter by (prefix with ! to exclude files carrying the tag)
    #[arg(value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Keywords to exclude, same as prefixing a keyword with !
    #[arg(long, value_name = "TAG")]
    pub not: Vec<String>,

    /// List all tags for files matching keywords
    #[arg(short, long)]
    pub list: bool,

    /// Long list (one per line) all tags for files matching keywords
    #[arg(long)]
    pub long: bool,

    /// Sort tags by number of files and show the count
    #[arg(short, long)]
    pub numeric: bool,

    /// List tags together with the files carrying them
    #[arg(short, long)]
    pub summarise: bool,

    /// Filter using ANY, rather than ALL keywords
    #[arg(short = 'o', long = "or")]
    pub or_filter: bool,

    /// Show untagged files
    #[arg(short, long)]
    pub untagged: bool,

    /// Show tags that only differ by a plural 's'
    #[arg(long)]
    pub similar_tags: bool,

    /// Output file lists in vim quickfix format
    #[arg(long)]
    pub vim: bool,

    /// Directory to search (default: current directory)
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Config file (default: .tagsearch.toml in the search directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Presentation flags for building a run configuration
    pub fn run_flags(&self) -> RunFlags {
        RunFlags {
            keywords: self.keywords.clone(),
            not: self.not.clone(),
            list: self.list,
            long: self.long,
            numeric: self.numeric,
            summarise: self.summarise,
            or_filter: self.or_filter,
            untagged: self.untagged,
            similar_tags: self.similar_tags,
            vim: self.vim,
        }
    }
}
