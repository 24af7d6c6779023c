pub mod date_range;
pub mod instrument;
pub mod performance;
