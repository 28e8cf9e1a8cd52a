//! resumo CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "resumo", version, about = "Exam history dashboard for the grading backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the history digest from the backend and search it
    Search {
        /// Keep only students whose identifier contains this text
        #[arg(long)]
        student: Option<String>,

        /// Keep only attempts with exactly this exam label,
        /// e.g. "2023 - Dia 1 (ingles)"
        #[arg(long)]
        date: Option<String>,

        /// Backend base URL (overrides config)
        #[arg(long)]
        base_url: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Parse a digest from a local file and search it
    Parse {
        /// Path to a file holding the digest text
        file: PathBuf,

        /// Keep only students whose identifier contains this text
        #[arg(long)]
        student: Option<String>,

        /// Keep only attempts with exactly this exam label
        #[arg(long)]
        date: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries only the requested table or JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("resumo=info".parse().unwrap())
                .add_directive("resumo_core=info".parse().unwrap())
                .add_directive("resumo_sources=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            student,
            date,
            base_url,
            config,
            format,
        } => commands::search::execute(student, date, base_url, config, format).await,
        Commands::Parse {
            file,
            student,
            date,
            format,
        } => commands::parse::execute(file, student, date, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
