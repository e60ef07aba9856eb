//! Tome CLI - Command-line interface for the book catalogue

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

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

#[derive(Subcommand)]
enum Commands {
    /// Display a catalogue file grouped by publication decade
    Decades {
        /// Catalogue file path (JSON array of books)
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Override the current year used for an empty catalogue
        #[arg(long)]
        year: Option<i32>,
    },

    /// Add a book to a catalogue file
    Add {
        /// Catalogue file path (created if missing)
        input: String,

        /// Book title
        #[arg(short, long)]
        title: String,

        /// Author name
        #[arg(short, long)]
        author: String,

        /// Year of publication
        #[arg(short, long)]
        year: i32,

        /// Genre label
        #[arg(short, long, default_value = "Unknown")]
        genre: String,
    },

    /// Fetch books from a tome-server and display them by decade
    Fetch {
        /// Server base URL
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        url: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "tome_cli=debug,tome_core=debug"
    } else {
        "tome_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Decades { input, json, year } => commands::decades(&input, json, year),

        Commands::Add {
            input,
            title,
            author,
            year,
            genre,
        } => commands::add(&input, &title, &author, year, &genre),

        Commands::Fetch { url, json } => commands::fetch(&url, json).await,
    }
}
