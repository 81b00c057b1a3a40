mod round_off;
mod totals_aggregator;

pub use round_off::RoundOffPolicy;
pub use totals_aggregator::TotalsAggregator;
