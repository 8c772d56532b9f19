//! Coach Portraits - Placeholder portrait generator
//!
//! This is the main entry point for the coach-portraits binary. It renders a
//! colored-circle placeholder portrait for every coach persona and expression
//! pair and writes the set to the assets directory as PNG files.

mod batch;
mod cli;
mod config;
mod error;
mod logging;
mod persona;
mod render;

use clap::Parser;

use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::persona::{Expression, Persona};

fn main() {
    // Parse CLI arguments first (before logging, so we know verbosity)
    let cli = Cli::parse();
    let level = logging::level_from_flags(cli.verbose, cli.quiet);

    if let Err(e) = logging::init(level) {
        eprintln!("{}", e.format_for_log());
        std::process::exit(e.exit_code());
    }

    let result = match cli.command {
        // No subcommand runs the full batch with defaults.
        None => run_generate(None, None, None),
        Some(Commands::Generate {
            config,
            out_dir,
            size,
        }) => run_generate(config, out_dir, size),
        Some(Commands::List { json }) => run_list(json),
        Some(Commands::Config { subcommand }) => handle_config_command(subcommand),
    };

    if let Err(e) = result {
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

/// Run the batch generation with CLI overrides applied over the config.
fn run_generate(
    config: Option<String>,
    out_dir: Option<String>,
    size: Option<u32>,
) -> Result<()> {
    let mut cfg = GeneratorConfig::load(config.as_deref())?;
    if let Some(dir) = out_dir {
        cfg.output.dir = dir;
    }
    if let Some(size) = size {
        cfg.canvas.size = size;
    }
    cfg.validate()?;

    let summary = batch::run(&cfg)?;
    batch::print_summary(&summary);
    Ok(())
}

/// Print the persona and expression tables.
fn run_list(json: bool) -> Result<()> {
    if json {
        let listing = serde_json::json!({
            "personas": Persona::all().iter().map(|p| serde_json::json!({
                "slug": p.slug(),
                "name": p.display_name(),
                "initial": p.initial(),
                "base_color": p.base_color(),
            })).collect::<Vec<_>>(),
            "expressions": Expression::all().iter().map(|e| serde_json::json!({
                "slug": e.slug(),
                "indicator_color": e.indicator_color().map(|c| [c[0], c[1], c[2]]),
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("Personas:");
    for persona in Persona::all() {
        let [r, g, b] = persona.base_color();
        println!(
            "  {:<10} initial '{}'  base color #{:02x}{:02x}{:02x}",
            persona.slug(),
            persona.initial(),
            r,
            g,
            b
        );
    }
    println!();
    println!("Expressions:");
    for expression in Expression::all() {
        match expression.indicator_color() {
            Some(c) => println!(
                "  {:<13} indicator #{:02x}{:02x}{:02x}",
                expression.slug(),
                c[0],
                c[1],
                c[2]
            ),
            None => println!("  {:<13} no indicator", expression.slug()),
        }
    }
    Ok(())
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = GeneratorConfig::load(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            config::init_config(path.as_deref(), force)?;
        }
    }
    Ok(())
}
