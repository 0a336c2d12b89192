use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::insights::Panel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "depmap")]
#[command(about = "Explore and explain dependency-graph metrics for an issue tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Use this config file instead of searching for .depmap.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive insights dashboard
    Explore {
        /// Analysis snapshot (JSON)
        snapshot: PathBuf,

        /// Issue tracker JSONL; replaces the snapshot's issue records
        #[arg(long)]
        issues: Option<PathBuf>,

        /// Start with panel descriptions hidden
        #[arg(long)]
        no_explanations: bool,

        /// Start with the calculation proof hidden
        #[arg(long)]
        no_calculation: bool,

        /// Start with the detail panel hidden
        #[arg(long)]
        no_detail: bool,

        /// Panel to focus on start
        #[arg(long, value_enum)]
        panel: Option<Panel>,

        /// Issue id to select in the starting panel
        #[arg(long, requires = "panel")]
        select: Option<String>,
    },

    /// Print the drill-down explanation for one panel entry
    Explain {
        /// Analysis snapshot (JSON)
        snapshot: PathBuf,

        /// Panel to explain
        #[arg(short, long, value_enum)]
        panel: Panel,

        /// Entry index within the panel (default: first)
        #[arg(long, conflicts_with = "id")]
        index: Option<usize>,

        /// Issue id to explain
        #[arg(long)]
        id: Option<String>,

        /// Issue tracker JSONL; replaces the snapshot's issue records
        #[arg(long)]
        issues: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Text width used for truncating titles
        #[arg(long, default_value = "80")]
        width: usize,
    },

    /// Print every panel's status and top entries
    Summary {
        /// Analysis snapshot (JSON)
        snapshot: PathBuf,

        /// Issue tracker JSONL; replaces the snapshot's issue records
        #[arg(long)]
        issues: Option<PathBuf>,

        /// Entries listed per panel
        #[arg(long, default_value = "3")]
        top: usize,
    },

    /// Initialize a depmap configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explain_with_panel_alias() {
        let cli = Cli::parse_from([
            "depmap",
            "explain",
            "snap.json",
            "--panel",
            "cut-points",
            "--id",
            "bd-1",
        ]);
        match cli.command {
            Commands::Explain { panel, id, format, .. } => {
                assert_eq!(panel, Panel::ArticulationPoints);
                assert_eq!(id.as_deref(), Some("bd-1"));
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_index_conflicts_with_id() {
        let result = Cli::try_parse_from([
            "depmap", "explain", "s.json", "-p", "hubs", "--index", "1", "--id", "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_verbosity_counts() {
        let cli = Cli::parse_from(["depmap", "-vv", "summary", "s.json"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_select_requires_panel() {
        assert!(Cli::try_parse_from(["depmap", "explore", "s.json", "--select", "A"]).is_err());
    }
}
