//! Circle CLI - Command-line interface for Circle
//!
//! This is the main entry point for users interacting with a social
//! network file. It provides one-shot commands for each query and the
//! interactive menu.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod menu;
mod render;

#[derive(Parser)]
#[command(name = "circle")]
#[command(author = "Circle Contributors")]
#[command(version)]
#[command(about = "Friendship analysis for small social networks", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display every member and their friends
    Show {
        /// Network data file
        file: PathBuf,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Recommend a friend for a member
    Recommend {
        /// Network data file
        file: PathBuf,

        /// Member name
        member: String,
    },

    /// Display the number of friends for a member
    Friends {
        /// Network data file
        file: PathBuf,

        /// Member name
        member: String,
    },

    /// Display members with the least number of friends or none at all
    Least {
        /// Network data file
        file: PathBuf,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Display the friends of a member's friends
    Indirect {
        /// Network data file
        file: PathBuf,

        /// Member name
        member: String,
    },

    /// Display the mutual friends of two members
    Mutual {
        /// Network data file
        file: PathBuf,

        /// First member name
        first: String,

        /// Second member name
        second: String,
    },

    /// Start the interactive menu
    Menu {
        /// Network data file to open first (prompted for otherwise)
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Show { file, json } => commands::show(&file, json),
        Commands::Recommend { file, member } => commands::recommend(&file, &member),
        Commands::Friends { file, member } => commands::friends(&file, &member),
        Commands::Least { file, json } => commands::least(&file, json),
        Commands::Indirect { file, member } => commands::indirect(&file, &member),
        Commands::Mutual {
            file,
            first,
            second,
        } => commands::mutual(&file, &first, &second),
        Commands::Menu { file } => commands::menu(file),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
