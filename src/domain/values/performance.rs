use super::date_range::DateRange;
use std::fmt;

/// Percentage return over a date window, with the prices it was derived
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceResult {
    pub ticker: String,
    pub range: DateRange,
    pub roi_pct: f64,
    pub initial_price: f64,
    pub final_price: f64,
}

impl PerformanceResult {
    /// Compute ROI from the first and last prices of a series. Returns
    /// None when the initial price is zero, where ROI is undefined.
    pub fn from_prices(
        ticker: String,
        range: DateRange,
        initial_price: f64,
        final_price: f64,
    ) -> Option<Self> {
        if initial_price == 0.0 {
            return None;
        }
        let roi_pct = (final_price - initial_price) / initial_price * 100.0;
        Some(Self {
            ticker,
            range,
            roi_pct,
            initial_price,
            final_price,
        })
    }
}

impl fmt::Display for PerformanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The ROI of {} from {} to {} is {:.2}%. Starting price: ${:.2}, Final price: ${:.2}.",
            self.ticker,
            self.range.start,
            self.range.end,
            self.roi_pct,
            self.initial_price,
            self.final_price
        )
    }
}
