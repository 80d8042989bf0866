use clap::{Parser, ValueEnum};
use explorer::{Panel, Panels, ResponsePolicy, DEFAULT_API_URL};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// 64-character order id. Starts the interactive prompt when omitted.
    pub order_id: Option<String>,

    #[arg(long, env = "EXPLORER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Ignore responses of searches superseded by a newer one.
    #[arg(long, env = "EXPLORER_LATEST_ONLY")]
    pub latest_only: bool,

    /// Panels to show expanded.
    #[arg(long, value_enum, value_name = "PANEL")]
    pub expand: Vec<ExpandArg>,

    /// Print the fetched record as JSON instead of panels.
    #[arg(long)]
    pub json: bool,

    #[arg(long)]
    pub no_color: bool,

    /// Render dates in UTC instead of the local zone.
    #[arg(long)]
    pub utc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpandArg {
    Overview,
    Source,
    Destination,
    Additional,
    All,
}

impl Cli {
    pub fn policy(&self) -> ResponsePolicy {
        if self.latest_only {
            ResponsePolicy::LatestIssued
        } else {
            ResponsePolicy::LastResolvedWins
        }
    }

    pub fn expanded(&self) -> Panels {
        let mut panels = Panels::default();
        for arg in &self.expand {
            let panel = match arg {
                ExpandArg::All => return Panels::all(),
                ExpandArg::Overview => Panel::Overview,
                ExpandArg::Source => Panel::Source,
                ExpandArg::Destination => Panel::Destination,
                ExpandArg::Additional => Panel::Additional,
            };
            if !panels.is_expanded(panel) {
                panels.toggle(panel);
            }
        }
        panels
    }
}
