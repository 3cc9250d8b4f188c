use clap::Parser;
use derive_more::Display;
use derive_more::From;
use derive_more::Into;
use std::path::PathBuf;

pub const DEFAULT_TOP: u32 = 10;
pub const MAX_TOP: u32 = 2000;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Finds specific coins by symbol (can be a comma separated list)
    #[arg(short, long, value_name = "SYMBOL", value_delimiter = ',')]
    pub find: Vec<String>,

    /// Shows the top coins ranked from 1 to INDEX by market cap [default: 10, max: 2000]
    #[arg(short, long, value_name = "INDEX", allow_hyphen_values = true)]
    pub top: Option<String>,

    /// Prints the underlying error on failure and enables debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// YAML file overriding the API endpoint and timeout
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn options(&self) -> MonitorOptions {
        let symbols: Vec<String> = self
            .find
            .iter()
            .map(|symbol| symbol.trim())
            .filter(|symbol| !symbol.is_empty())
            .map(String::from)
            .collect();

        // The first page must be large enough to contain every requested symbol.
        let limit = if symbols.is_empty() {
            valid_top(self.top.as_deref())
        } else {
            MAX_TOP
        };

        MonitorOptions {
            symbols,
            limit: limit.into(),
            verbose: self.verbose,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct MonitorOptions {
    pub symbols: Vec<String>,
    pub limit: ResultLimit,
    pub verbose: bool,
}

/// Number of ranked assets requested in one call.
#[derive(Display, From, Into, Debug, PartialEq, Eq, Clone, Copy)]
pub struct ResultLimit(u32);

fn valid_top(raw: Option<&str>) -> u32 {
    let Some(top) = raw.and_then(|raw| raw.trim().parse::<f64>().ok()) else {
        return DEFAULT_TOP;
    };
    if top.is_nan() || top < 1.0 {
        DEFAULT_TOP
    } else if top > MAX_TOP as f64 {
        MAX_TOP
    } else {
        top.trunc() as u32
    }
}
