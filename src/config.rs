use std::{path::PathBuf, time::Duration};

use clap::Parser;
use derive_getters::Getters;
use derive_new::new;

use crate::models::LookbackPeriod;

pub const DEFAULT_SYMBOL: &str = "600519.SS";
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";

#[derive(Debug, Parser)]
#[command(version, about = "Look up Chinese A-share tickers and get a few recommendations")]
pub struct Cli {
    /// Symbol pre-filled in the search bar (e.g. 600519.SS or 000001.SZ)
    #[arg(long, env = "STOCK_SYMBOL", default_value = DEFAULT_SYMBOL)]
    pub symbol: String,

    /// Initially selected lookback period
    #[arg(long, env = "STOCK_PERIOD", value_enum, default_value_t = LookbackPeriod::OneMonth)]
    pub period: LookbackPeriod,

    /// Upper bound for every request to the data provider
    #[arg(long, env = "YAHOO_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    #[arg(long, env = "YAHOO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "YAHOO_COOKIE_URL", default_value = DEFAULT_COOKIE_URL)]
    pub cookie_url: String,

    #[arg(long, env = "STOCK_LOG_FILE", default_value = "~/.stock-recommender.log")]
    pub log_file: String,
}

#[derive(Clone, Debug, Getters, new)]
pub struct Config {
    symbol: String,
    period: LookbackPeriod,
    timeout: Duration,
    base_url: String,
    cookie_url: String,
    log_file: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let log_file = PathBuf::from(shellexpand::tilde(&cli.log_file).into_owned());
        Self {
            symbol: cli.symbol,
            period: cli.period,
            timeout: Duration::from_secs(cli.timeout_secs.max(1)),
            base_url: cli.base_url,
            cookie_url: cli.cookie_url,
            log_file,
        }
    }
}
