use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// `reportreel` - turn a client's campaign results into a video report.
#[derive(Parser, Debug)]
#[command(name = "reportreel")]
#[command(author = "theonlyhennygod")]
#[command(version)]
#[command(about = "Campaign video report generator.", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.reportreel/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through the four report steps and send the result
    Wizard,

    /// Compute one highlight KPI, e.g. `kpi ctr clicks=7500 impressions=150000`
    Kpi {
        /// KPI type: CPL, CTR, ConversionRate, EngagementRate or ROAS
        kind: String,

        /// Raw inputs as key=value pairs
        #[arg(value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    /// Parse pasted campaign rows and print them with a summary
    Parse {
        /// File with the rows (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a saved JSON draft and send it to the webhook
    Submit {
        /// Draft file (same shape as the wizard state)
        file: PathBuf,

        /// Print the payload instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the effective configuration
    Config,
}
