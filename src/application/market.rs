use crate::domain::error::DomainError;
use crate::domain::ports::market_data::MarketData;
use crate::domain::values::date_range::DateRange;
use crate::domain::values::instrument::Instrument;
use crate::domain::values::performance::PerformanceResult;
use chrono::NaiveDate;
use std::sync::Arc;

/// Substrings that mark a message as a performance question. Matching is
/// case-insensitive; like the instrument table this is a fixed list, not a
/// parser.
const PERFORMANCE_KEYWORDS: &[&str] = &[
    "roi",
    "return",
    "performance",
    "how did",
    "rendimiento",
    "rentabilidad",
];

/// Whether a message should be answered with live market data.
pub fn wants_market_data(query: &str) -> bool {
    let q = query.to_lowercase();
    PERFORMANCE_KEYWORDS.iter().any(|kw| q.contains(kw))
}

/// Outcome of a market query: a computed performance figure, or the
/// instrument was not one the bot knows. The latter is a normal terminal
/// branch, not an error.
#[derive(Debug)]
pub enum MarketReply {
    Performance(PerformanceResult),
    UnknownInstrument,
}

pub struct MarketReportUseCase {
    market: Arc<dyn MarketData>,
}

impl MarketReportUseCase {
    pub fn new(market: Arc<dyn MarketData>) -> Self {
        Self { market }
    }

    /// Resolve instrument and date range from the query text, then fetch
    /// and compute the return over that window.
    pub async fn execute(&self, query: &str, today: NaiveDate) -> Result<MarketReply, DomainError> {
        let Some(instrument) = Instrument::resolve(query) else {
            return Ok(MarketReply::UnknownInstrument);
        };
        let range = DateRange::resolve(query, today);
        let result = self.fetch_performance(instrument, range).await?;
        Ok(MarketReply::Performance(result))
    }

    /// One call to the market data provider. Empty series, no usable price
    /// field, or a zero initial price all surface as `DataUnavailable`.
    /// Adjusted close is preferred over close; the first and last rows of
    /// the chosen series become the initial and final prices.
    pub async fn fetch_performance(
        &self,
        instrument: Instrument,
        range: DateRange,
    ) -> Result<PerformanceResult, DomainError> {
        let ticker = instrument.ticker();
        let series = self
            .market
            .daily_series(ticker, range)
            .await
            .map_err(|e| DomainError::DataUnavailable(e.to_string()))?;

        if series.is_empty() {
            return Err(DomainError::DataUnavailable(format!(
                "no data returned for {ticker}"
            )));
        }

        let mut prices: Vec<f64> = series.iter().filter_map(|p| p.adj_close).collect();
        if prices.is_empty() {
            prices = series.iter().filter_map(|p| p.close).collect();
        }

        let (Some(&initial), Some(&last)) = (prices.first(), prices.last()) else {
            return Err(DomainError::DataUnavailable(format!(
                "no usable price field for {ticker}"
            )));
        };

        PerformanceResult::from_prices(ticker.to_string(), range, initial, last).ok_or_else(|| {
            DomainError::DataUnavailable(format!("zero initial price for {ticker}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_keywords() {
        assert!(wants_market_data("How did Bitcoin do last year?"));
        assert!(wants_market_data("what was the ROI of sp500"));
        assert!(wants_market_data("¿qué rendimiento tuvo el nasdaq?"));
        assert!(!wants_market_data("how do I deposit money"));
    }
}
