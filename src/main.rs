use anyhow::{Context, Result};
use clap::Parser;
use depmap::cli::{Cli, Commands};
use depmap::commands::{
    explain_entry, init_config, print_summary, run_explore, ExplainConfig, ExploreConfig,
    SummaryConfig,
};
use depmap::config::{discover_config, load_config_from, DiscoveredConfig, DisplayConfig};
use depmap::observability::{init_tracing, install_panic_hook};

// Main orchestrator function
fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();

    let discovered = resolve_config(&cli)?;
    let logging = &discovered.config.logging;
    let log_file = cli.log_file.as_deref().or(logging.file.as_deref());
    init_tracing(logging.level.as_deref(), cli.verbose, log_file)
        .context("Failed to initialize logging")?;
    discovered.log();
    let config = discovered.config;

    match cli.command {
        Commands::Explore {
            snapshot,
            issues,
            no_explanations,
            no_calculation,
            no_detail,
            panel,
            select,
        } => run_explore(ExploreConfig {
            snapshot,
            issues,
            display: apply_display_flags(
                config.display,
                no_explanations,
                no_calculation,
                no_detail,
            ),
            panel,
            select,
        }),
        Commands::Explain {
            snapshot,
            panel,
            index,
            id,
            issues,
            format,
            width,
        } => explain_entry(ExplainConfig {
            snapshot,
            issues,
            panel,
            index,
            id,
            format,
            width,
        }),
        Commands::Summary {
            snapshot,
            issues,
            top,
        } => print_summary(SummaryConfig {
            snapshot,
            issues,
            top,
        }),
        Commands::Init { force } => init_config(force),
    }
}

// An explicit --config must load; discovery falls back to defaults
fn resolve_config(cli: &Cli) -> Result<DiscoveredConfig> {
    match &cli.config {
        Some(path) => Ok(DiscoveredConfig::explicit(path, load_config_from(path)?)),
        None => Ok(discover_config()),
    }
}

// Command-line flags can only switch display features off
fn apply_display_flags(
    mut display: DisplayConfig,
    no_explanations: bool,
    no_calculation: bool,
    no_detail: bool,
) -> DisplayConfig {
    display.show_explanations &= !no_explanations;
    display.show_calculation &= !no_calculation;
    display.show_detail_panel &= !no_detail;
    display
}
