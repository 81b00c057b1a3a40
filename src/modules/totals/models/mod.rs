mod totals;

pub use totals::{DocumentTotals, LineTotals, NoteTotals, RoundedTotal, TotalsReport};
