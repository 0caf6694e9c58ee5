use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::path::PathBuf;

use issuegen::Generator;
use issuegen::RunOptions;
use issuegen::cli::{Cli, Command};
use issuegen::config::{Config, LOCAL_CONFIG_FILE};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    Ok(())
}

fn build_generator(config: &Config) -> Result<Generator> {
    Generator::new(config.generator.clone()).context("Invalid configuration")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.dir {
        config.directory = dir;
    }

    info!("issuegen starting in {}", config.directory.display());

    match cli.command.unwrap_or(Command::Generate) {
        Command::InitConfig { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));
            config.save(&path)?;
            println!("{} Wrote config: {}", "✓".green(), path.display().to_string().cyan());
        }
        Command::List => {
            let seeds = build_generator(&config)?.seeds(&config.directory)?;
            if seeds.is_empty() {
                println!("No seed templates found");
            } else {
                for seed in seeds {
                    println!("{}", seed);
                }
            }
        }
        Command::Plan => {
            let report = build_generator(&config)?.run_with(&config.directory, &RunOptions { dry_run: true })?;
            for file in &report.files {
                println!(
                    "{} -> {} {}",
                    file.seed,
                    file.name.yellow(),
                    format!("({})", file.replacement).dimmed()
                );
            }
        }
        Command::Generate => {
            let options = RunOptions { dry_run: cli.dry_run };
            let report = build_generator(&config)?.run_with(&config.directory, &options)?;
            if cli.dry_run {
                for file in &report.files {
                    println!("{} {}", "would write".dimmed(), file.path.display());
                }
            }
            println!(
                "{} {} file(s) written from {} seed template(s)",
                "✓".green(),
                report.written_count(),
                report.seeds.len()
            );
        }
    }

    Ok(())
}
