mod config;
mod output;
mod tui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use dotenvy::dotenv;
use etude::{Core, Event};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Etude - Practice Tracker CLI", long_about = None)]
struct Args {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse and edit exercises and sessions
    Interactive {
        #[arg(short, long)]
        dev_data: bool,
    },
    /// Add exercises and print the result
    AddExercise {
        #[arg(required = true)]
        names: Vec<String>,
        #[arg(short, long)]
        dev_data: bool,
        #[arg(long)]
        json: bool,
    },
    /// Add sessions and print the result
    AddSession {
        #[arg(required = true)]
        names: Vec<String>,
        #[arg(short, long)]
        dev_data: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print exercises and sessions
    List {
        #[arg(short, long)]
        dev_data: bool,
        #[arg(long)]
        json: bool,
    },
    /// Apply a JSON array of events and print the result
    Replay {
        path: PathBuf,
        #[arg(short, long)]
        dev_data: bool,
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    fn dev_data(&self) -> bool {
        match self {
            Commands::Interactive { dev_data }
            | Commands::AddExercise { dev_data, .. }
            | Commands::AddSession { dev_data, .. }
            | Commands::List { dev_data, .. }
            | Commands::Replay { dev_data, .. } => *dev_data,
        }
    }
}

fn start_core(config: &Config) -> Core {
    let core = Core::new();
    if config.dev_data {
        info!("seeding development data");
        core.update(Event::DevInit);
    }
    core
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let interactive = matches!(args.command, Commands::Interactive { .. });
    let config = Config::resolve(interactive, args.command.dev_data(), args.log.as_deref());
    for ignored in &config.ignored_log_levels {
        eprintln!("ignoring unknown log level {}", ignored);
    }
    etude::logging::init_logger(config.log_level, env_logger::Target::Stderr);

    let core = start_core(&config);

    match args.command {
        Commands::Interactive { .. } => {
            let terminal = ratatui::init();
            let result = tokio::task::spawn_blocking(move || tui::run(terminal, &core))
                .await
                .context("terminal UI thread panicked");
            ratatui::restore();
            result?
        }
        Commands::AddExercise { names, json, .. } => {
            let events = names.into_iter().map(|name| Event::AddExercise { name });
            report_ignored(output::apply_all(&core, events));
            output::print_view(&core.view(), json)
        }
        Commands::AddSession { names, json, .. } => {
            let events = names.into_iter().map(|name| Event::AddSession { name });
            report_ignored(output::apply_all(&core, events));
            output::print_view(&core.view(), json)
        }
        Commands::List { json, .. } => output::print_view(&core.view(), json),
        Commands::Replay { path, json, .. } => {
            let events = output::read_events(&path)?;
            report_ignored(output::apply_all(&core, events));
            output::print_view(&core.view(), json)
        }
    }
}

fn report_ignored(ignored: usize) {
    if ignored > 0 {
        eprintln!("{} event(s) ignored", ignored);
    }
}
