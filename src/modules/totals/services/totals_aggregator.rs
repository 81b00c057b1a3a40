use tracing::debug;

use crate::modules::items::{ItemCalculator, LineItem};
use crate::modules::totals::models::LineTotals;

/// Folds per-row values into document totals
pub struct TotalsAggregator;

impl TotalsAggregator {
    /// Sum calculated values over `items`, in order.
    ///
    /// Every row is recalculated from its inputs; previously written
    /// derived fields are not trusted.
    pub fn aggregate(items: &[LineItem]) -> LineTotals {
        let totals = items
            .iter()
            .map(ItemCalculator::calculate)
            .fold(LineTotals::default(), |totals, values| totals.accumulate(&values));

        debug!(
            items = items.len(),
            sub_total = %totals.sub_total,
            total_discount = %totals.total_discount,
            total_tax = %totals.total_tax,
            total = %totals.total,
            "Aggregated line totals"
        );

        totals
    }

    /// Like [`TotalsAggregator::aggregate`], with zeros for a missing list
    pub fn aggregate_opt(items: Option<&[LineItem]>) -> LineTotals {
        items.map(Self::aggregate).unwrap_or_default()
    }
}
