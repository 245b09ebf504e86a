mod cli;
mod errors;
mod render;

use std::io::Read;

use chrono::NaiveDate;
use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::{Result, eyre::bail};
use todotxt_core::{
    Task, TasksConfig,
    config::ProtoConfig,
    date::today,
    init_logging,
};
use tracing::{debug, info};

fn main() -> Result<()> {
    crate::errors::init()?;
    let args = Cli::parse();
    let log_path = init_logging(args.log_level)?;
    debug!("Logging to {}", log_path.display());

    let config = TasksConfig::new(&ProtoConfig {
        config_path: args.config_path.clone(),
    })?;
    let output = run(args.command, &config, today())?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn run(command: Commands, config: &TasksConfig, today: NaiveDate) -> Result<String> {
    let output = match command {
        Commands::Parse { line } => render::tokens(&Task::new(0, &line)),
        Commands::Add { line, no_date } => {
            if line.trim().is_empty() {
                bail!("Refusing to add an empty task");
            }
            let task = if config.add_creation_date && !no_date {
                Task::with_creation_date(0, &line, today)
            } else {
                Task::new(0, &line)
            };
            task.in_file_format()
        }
        Commands::Complete { line, date } => {
            let mut task = Task::new(0, &line);
            if task.is_completed() {
                info!("Task is already completed: {task}");
            }
            task.mark_complete(date.unwrap_or(today));
            task.in_file_format()
        }
        Commands::Uncomplete { line } => {
            let mut task = Task::new(0, &line);
            task.mark_incomplete();
            task.in_file_format()
        }
        Commands::Priority { line, priority } => {
            let mut task = Task::new(0, &line);
            task.set_priority(priority);
            task.in_file_format()
        }
        Commands::Threshold { line, date } => {
            let mut task = Task::new(0, &line);
            let date = date.unwrap_or_default();
            if !date.is_empty() && todotxt_core::date::parse_date(&date).is_none() {
                bail!("Invalid threshold date {date:?}, expected YYYY-MM-DD");
            }
            task.set_threshold_date(&date);
            task.in_file_format()
        }
        Commands::Tag { line, tag } => {
            let mut task = Task::new(0, &line);
            task.add_tag(&tag);
            task.in_file_format()
        }
        Commands::Untag { line, tag } => {
            let mut task = Task::new(0, &line);
            task.remove_tag(&tag);
            task.in_file_format()
        }
        Commands::Show { line } => render::describe(&Task::new(0, &line), config, today),
        Commands::List { file } => {
            let content = match file {
                Some(path) => std::fs::read_to_string(&path)?,
                None => {
                    let mut content = String::new();
                    std::io::stdin().read_to_string(&mut content)?;
                    content
                }
            };
            render::list(&content, config, today).join("\n")
        }
        Commands::GenerateConfig { path } => {
            let dest = TasksConfig::generate_config(path)?;
            format!("Configuration has been created at {}", dest.display())
        }
    };
    Ok(output)
}
