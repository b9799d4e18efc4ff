//! worktrack library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod calendar;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::activity::Activity;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Morning { yes } => cli::commands::track::morning(cfg, *yes),
        Commands::Break => cli::commands::track::take_break(cfg),
        Commands::Resume => cli::commands::track::resume(cfg),
        Commands::Closing => cli::commands::track::closing(cfg),
        Commands::Sick { date } => {
            cli::commands::absence::handle(cfg, Activity::Sick, date.as_ref())
        }
        Commands::Vacation { date } => {
            cli::commands::absence::handle(cfg, Activity::Vacation, date.as_ref())
        }
        Commands::Timeoff { date } => {
            cli::commands::absence::handle(cfg, Activity::TimeOff, date.as_ref())
        }
        Commands::Day { offset } => cli::commands::report::day(cfg, *offset),
        Commands::Week { offset } => cli::commands::report::week(cfg, *offset),
        Commands::Month { month } => cli::commands::report::month(cfg, month.as_ref()),
        Commands::Year { year, from, to } => {
            cli::commands::report::year(cfg, *year, *from, *to)
        }
        Commands::Total => cli::commands::report::total(cfg),
        Commands::Config { print_config } => {
            cli::commands::config::handle(cfg, *print_config)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once; the core only ever sees plain values from it.
    let mut cfg = Config::load()?;

    // Apply a database override from the command line, if any.
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
