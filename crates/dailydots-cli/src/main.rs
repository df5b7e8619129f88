//! Daily Dots CLI
//!
//! Command-line interface for Daily Dots - one mood-tagged journal entry
//! per day.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use dailydots_core::{Config, JournalStore, Mood, StorageError};

mod commands;
mod dates;
mod editor;
mod logging;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "dailydots")]
#[command(about = "Daily Dots - a mood journal, one entry per day")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the summary: counters, today's entry, recent entries
    Home,
    /// Write or update the entry for a day
    #[command(alias = "add")]
    Write {
        /// Day to write (YYYY-MM-DD, today, yesterday); defaults to today
        #[arg(short, long, value_parser = dates::parse_date)]
        date: Option<NaiveDate>,
        /// Mood (happy, sad, calm, frustrated, tired, excited, anxious, neutral)
        #[arg(short, long)]
        mood: Option<Mood>,
        /// Entry text (opens editor if not provided)
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Show the entry for a day
    Show {
        /// Day (YYYY-MM-DD, today, yesterday)
        #[arg(value_parser = dates::parse_date)]
        date: NaiveDate,
    },
    /// List entries, newest first
    #[command(alias = "ls")]
    List {
        /// Only entries of this month (YYYY-MM)
        #[arg(short, long, value_parser = dates::parse_month)]
        month: Option<NaiveDate>,
    },
    /// Show a month calendar with moods
    #[command(alias = "cal")]
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(short, long, value_parser = dates::parse_month)]
        month: Option<NaiveDate>,
    },
    /// Delete the entry for a day
    #[command(alias = "rm")]
    Delete {
        /// Day (YYYY-MM-DD, today, yesterday)
        #[arg(value_parser = dates::parse_date)]
        date: NaiveDate,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List recent days and whether each has an entry
    Days {
        /// Number of days to show
        #[arg(short = 'n', long, default_value_t = 7)]
        count: usize,
    },
    /// List available moods
    Moods,
    /// Show total entries, this month and current streak
    Stats,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, log_file, recent_count)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    let result = run(cli.command.unwrap_or(Commands::Home), &output);

    if let Err(ref e) = result {
        let suggestion = e
            .chain()
            .find_map(|cause| cause.downcast_ref::<StorageError>())
            .and_then(StorageError::recovery_suggestion);
        if let Some(hint) = suggestion.filter(|_| !output.is_quiet()) {
            eprintln!("hint: {}", hint);
        }
    }

    result
}

fn run(command: Commands, output: &Output) -> Result<()> {
    // Config commands don't need the store
    if let Commands::Config { command } = command {
        return handle_config_command(command, output);
    }

    let config = Config::load()?;
    logging::init(&config);

    let mut store = JournalStore::open_with_config(config);

    match command {
        Commands::Home => commands::home::show(&store, output),
        Commands::Write {
            date,
            mood,
            content,
        } => commands::entry::write(&mut store, date, mood, content, output),
        Commands::Show { date } => commands::entry::show(&store, date, output),
        Commands::List { month } => commands::entry::list(&store, month, output),
        Commands::Calendar { month } => commands::calendar::show(&store, month, output),
        Commands::Delete { date, yes } => commands::entry::delete(&mut store, date, yes, output),
        Commands::Days { count } => commands::calendar::days(&store, count, output),
        Commands::Moods => commands::mood::list(output),
        Commands::Stats => commands::home::stats(&store, output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}
