//! Tome CLI - Command-line interface for library file parsing

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::ScanOptions;
use tome_core::LibraryType;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate jobs argument (must be at least 1)
fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("jobs must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "tome")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the commands that parse files
#[derive(Args)]
struct LibraryArgs {
    /// Library type (manga, comic, book, light_novel, image)
    #[arg(short = 't', long, env = "TOME_LIBRARY_TYPE", default_value = "manga")]
    library_type: LibraryType,

    /// Library root bounding the folder fallback
    #[arg(short = 'r', long, env = "TOME_LIBRARY_ROOT")]
    library_root: Option<String>,

    /// Ignore embedded metadata (ComicInfo.xml, OPF)
    #[arg(long, env = "TOME_NO_METADATA")]
    no_metadata: bool,
}

impl LibraryArgs {
    fn into_options(self, jobs: usize) -> ScanOptions {
        ScanOptions {
            library_type: self.library_type,
            library_root: self.library_root,
            use_metadata: !self.no_metadata,
            jobs,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single library file
    Parse {
        /// Input file path
        input: String,

        #[command(flatten)]
        library: LibraryArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse every supported file in a directory tree
    Scan {
        /// Input directory
        input_dir: String,

        #[command(flatten)]
        library: LibraryArgs,

        /// Number of parallel jobs (must be at least 1)
        #[arg(short, long, env = "TOME_JOBS", default_value = "4", value_parser = parse_jobs)]
        jobs: usize,
    },

    /// Print the sortable form of a title
    SortTitle {
        /// Title to normalize
        title: String,
    },

    /// Validate an ISBN-10 or ISBN-13
    Isbn {
        /// Identifier to validate
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "tome_cli=debug,tome_core=debug"
    } else {
        "tome_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Parse {
            input,
            library,
            json,
        } => commands::parse(&input, &library.into_options(1), json),

        Commands::Scan {
            input_dir,
            library,
            jobs,
        } => commands::scan(&input_dir, &library.into_options(jobs)),

        Commands::SortTitle { title } => commands::sort_title(&title),

        Commands::Isbn { value } => commands::isbn(&value),
    }
}
