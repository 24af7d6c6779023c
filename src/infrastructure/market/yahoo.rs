use crate::domain::ports::market_data::{MarketData, MarketDataError, PricePoint};
use crate::domain::values::date_range::DateRange;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::time::Duration;

/// Yahoo Finance daily price history via the v8 chart API (no auth
/// required).
pub struct YahooMarketData {
    client: reqwest::Client,
}

impl YahooMarketData {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .user_agent(
                    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                     AppleWebKit/537.36 (KHTML, like Gecko) \
                     Chrome/120.0.0.0 Safari/537.36",
                )
                .build()
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, serde::Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct ChartData {
    indicators: Indicators,
}

#[derive(Debug, serde::Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
    #[serde(default)]
    adjclose: Vec<AdjClose>,
}

#[derive(Debug, serde::Deserialize)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

#[derive(Debug, serde::Deserialize)]
struct AdjClose {
    adjclose: Option<Vec<Option<f64>>>,
}

fn epoch(date: NaiveDate) -> i64 {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap();
    DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc).timestamp()
}

#[async_trait]
impl MarketData for YahooMarketData {
    async fn daily_series(
        &self,
        ticker: &str,
        range: DateRange,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        // period2 is exclusive in the chart API; push it one day past the
        // inclusive range end.
        let period1 = epoch(range.start);
        let period2 = epoch(range.end.succ_opt().unwrap_or(range.end));
        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{ticker}\
             ?period1={period1}&period2={period2}&interval=1d"
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketDataError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(MarketDataError::Network(format!(
                "Yahoo API returned {} for {ticker}",
                resp.status()
            )));
        }

        let data: ChartResponse = resp
            .json()
            .await
            .map_err(|e| MarketDataError::Parse(e.to_string()))?;

        if let Some(err) = data.chart.error {
            return Err(MarketDataError::Parse(format!("Yahoo error: {err}")));
        }

        let results = data
            .chart
            .result
            .ok_or_else(|| MarketDataError::Parse("No chart results".into()))?;
        let chart = results
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::Parse("Empty chart results".into()))?;

        let closes = chart
            .indicators
            .quote
            .first()
            .and_then(|q| q.close.as_deref())
            .unwrap_or(&[]);
        let adjs = chart
            .indicators
            .adjclose
            .first()
            .and_then(|a| a.adjclose.as_deref())
            .unwrap_or(&[]);

        let n = closes.len().max(adjs.len());
        let points = (0..n)
            .map(|i| PricePoint {
                adj_close: adjs.get(i).copied().flatten(),
                close: closes.get(i).copied().flatten(),
            })
            .collect();
        Ok(points)
    }
}
