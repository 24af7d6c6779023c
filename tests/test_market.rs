mod common;

use chrono::NaiveDate;
use common::FixedMarket;
use std::sync::Arc;
use taylorbot::application::market::{MarketReply, MarketReportUseCase};
use taylorbot::domain::error::DomainError;
use taylorbot::domain::ports::market_data::PricePoint;
use taylorbot::domain::values::date_range::DateRange;
use taylorbot::domain::values::instrument::Instrument;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn year_2024() -> DateRange {
    DateRange::new(date(2024, 1, 1), date(2024, 12, 31))
}

#[test]
fn test_instrument_keyword_table() {
    assert_eq!(
        Instrument::resolve("How did Bitcoin do?"),
        Some(Instrument::Bitcoin)
    );
    assert_eq!(Instrument::Bitcoin.ticker(), "BTC-USD");
    assert_eq!(
        Instrument::resolve("que tal el NASDAQ"),
        Some(Instrument::Nasdaq)
    );
    assert_eq!(Instrument::Nasdaq.ticker(), "^IXIC");
    assert_eq!(
        Instrument::resolve("sp500 returns please"),
        Some(Instrument::Sp500)
    );
    assert_eq!(Instrument::Sp500.ticker(), "^GSPC");
    assert_eq!(Instrument::resolve("tell me about gold"), None);
}

#[tokio::test]
async fn test_golden_roi_formatting() {
    let uc = MarketReportUseCase::new(Arc::new(FixedMarket::adj_closes(&[100.0, 120.0, 150.0])));
    let result = uc
        .fetch_performance(Instrument::Bitcoin, year_2024())
        .await
        .unwrap();
    assert_eq!(
        result.to_string(),
        "The ROI of BTC-USD from 2024-01-01 to 2024-12-31 is 50.00%. \
         Starting price: $100.00, Final price: $150.00."
    );
}

#[tokio::test]
async fn test_adjusted_close_preferred_over_close() {
    let series = vec![
        PricePoint {
            adj_close: Some(90.0),
            close: Some(100.0),
        },
        PricePoint {
            adj_close: Some(180.0),
            close: Some(200.0),
        },
    ];
    let uc = MarketReportUseCase::new(Arc::new(FixedMarket::new(series)));
    let result = uc
        .fetch_performance(Instrument::Sp500, year_2024())
        .await
        .unwrap();
    assert_eq!(result.initial_price, 90.0);
    assert_eq!(result.final_price, 180.0);
}

#[tokio::test]
async fn test_close_fallback_when_no_adjusted_close() {
    let series = vec![
        PricePoint {
            adj_close: None,
            close: Some(50.0),
        },
        PricePoint {
            adj_close: None,
            close: Some(75.0),
        },
    ];
    let uc = MarketReportUseCase::new(Arc::new(FixedMarket::new(series)));
    let result = uc
        .fetch_performance(Instrument::Nasdaq, year_2024())
        .await
        .unwrap();
    assert_eq!(result.initial_price, 50.0);
    assert_eq!(result.roi_pct, 50.0);
}

#[tokio::test]
async fn test_empty_series_is_data_unavailable() {
    let uc = MarketReportUseCase::new(Arc::new(FixedMarket::empty()));
    let err = uc
        .fetch_performance(Instrument::Bitcoin, year_2024())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::DataUnavailable(_)));
}

#[tokio::test]
async fn test_no_usable_price_field_is_data_unavailable() {
    let series = vec![PricePoint::default(), PricePoint::default()];
    let uc = MarketReportUseCase::new(Arc::new(FixedMarket::new(series)));
    let err = uc
        .fetch_performance(Instrument::Bitcoin, year_2024())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::DataUnavailable(_)));
}

#[tokio::test]
async fn test_zero_initial_price_is_data_unavailable() {
    let uc = MarketReportUseCase::new(Arc::new(FixedMarket::adj_closes(&[0.0, 100.0])));
    let err = uc
        .fetch_performance(Instrument::Bitcoin, year_2024())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::DataUnavailable(_)));
}

#[tokio::test]
async fn test_unrecognized_instrument_is_not_an_error() {
    let uc = MarketReportUseCase::new(Arc::new(FixedMarket::adj_closes(&[100.0, 150.0])));
    let reply = uc
        .execute("how did gold perform", date(2025, 6, 15))
        .await
        .unwrap();
    assert!(matches!(reply, MarketReply::UnknownInstrument));
}

#[tokio::test]
async fn test_execute_resolves_range_from_query() {
    let uc = MarketReportUseCase::new(Arc::new(FixedMarket::adj_closes(&[100.0, 150.0])));
    let reply = uc
        .execute("how did bitcoin do in 2023", date(2025, 6, 15))
        .await
        .unwrap();
    let MarketReply::Performance(result) = reply else {
        panic!("expected a performance result");
    };
    assert_eq!(result.range.start, date(2023, 1, 1));
    assert_eq!(result.range.end, date(2023, 12, 31));
    assert_eq!(result.ticker, "BTC-USD");
}
