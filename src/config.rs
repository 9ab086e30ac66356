use crate::domain::market::Market;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    /// Market pre-selected in the calculator form on startup.
    pub default_market: Market,
    pub window_width: f32,
    pub window_height: f32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let market_str = env::var("DEFAULT_MARKET").unwrap_or_else(|_| "ashare".to_string());
        let default_market = Market::from_str(&market_str)?;

        let window_width = env::var("WINDOW_WIDTH")
            .unwrap_or_else(|_| "1200".to_string())
            .parse::<f32>()
            .context("Failed to parse WINDOW_WIDTH")?;

        let window_height = env::var("WINDOW_HEIGHT")
            .unwrap_or_else(|_| "800".to_string())
            .parse::<f32>()
            .context("Failed to parse WINDOW_HEIGHT")?;

        Ok(Config {
            default_market,
            window_width,
            window_height,
        })
    }
}
