use std::fmt;

/// Instruments the bot can quote, with their Yahoo Finance tickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instrument {
    Nasdaq,
    Sp500,
    Bitcoin,
}

/// Fixed keyword table. Matching is a lowercase substring check, in table
/// order — this is deliberately a lookup table, not a parser.
const KEYWORDS: &[(&str, Instrument)] = &[
    ("nasdaq", Instrument::Nasdaq),
    ("sp500", Instrument::Sp500),
    ("bitcoin", Instrument::Bitcoin),
];

impl Instrument {
    /// Resolve a free-text query to a known instrument, or None when no
    /// keyword matches. No match is a normal outcome, not an error.
    pub fn resolve(query: &str) -> Option<Instrument> {
        let q = query.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(kw, _)| q.contains(kw))
            .map(|(_, instrument)| *instrument)
    }

    pub fn ticker(&self) -> &'static str {
        match self {
            Instrument::Nasdaq => "^IXIC",
            Instrument::Sp500 => "^GSPC",
            Instrument::Bitcoin => "BTC-USD",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ticker())
    }
}
