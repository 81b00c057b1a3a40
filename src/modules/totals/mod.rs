// Document totals: aggregation over rows and the round-off policy

pub mod models;
pub mod services;

pub use models::{DocumentTotals, LineTotals, NoteTotals, RoundedTotal, TotalsReport};
pub use services::{RoundOffPolicy, TotalsAggregator};
