use crate::domain::values::date_range::DateRange;
use async_trait::async_trait;

/// One day's closing prices for a ticker. Either field may be missing in
/// provider data; consumers pick adjusted close over close.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PricePoint {
    pub adj_close: Option<f64>,
    pub close: Option<f64>,
}

#[async_trait]
pub trait MarketData: Send + Sync {
    /// Daily price series for the ticker over the window, chronologically
    /// ordered oldest first.
    async fn daily_series(
        &self,
        ticker: &str,
        range: DateRange,
    ) -> Result<Vec<PricePoint>, MarketDataError>;
}

#[derive(Debug)]
pub enum MarketDataError {
    /// HTTP or network error
    Network(String),
    /// Response parsing error
    Parse(String),
}

impl std::fmt::Display for MarketDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketDataError::Network(msg) => write!(f, "Network error: {msg}"),
            MarketDataError::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for MarketDataError {}
