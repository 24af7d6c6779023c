use chrono::{Datelike, Duration, NaiveDate};

/// Inclusive date window for a market performance query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Resolve a free-text query to a concrete window. Rules, in priority
    /// order:
    ///
    /// 1. query contains "2023" → the 2023 calendar year,
    /// 2. query contains "last year" (case-insensitive) → the previous
    ///    calendar year,
    /// 3. otherwise → the trailing 365 days ending today.
    pub fn resolve(query: &str, today: NaiveDate) -> DateRange {
        let q = query.to_lowercase();
        if q.contains("2023") {
            return DateRange::calendar_year(2023);
        }
        if q.contains("last year") {
            return DateRange::calendar_year(today.year() - 1);
        }
        DateRange {
            start: today - Duration::days(365),
            end: today,
        }
    }

    fn calendar_year(year: i32) -> DateRange {
        DateRange {
            start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
        }
    }
}
