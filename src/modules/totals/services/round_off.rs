use rust_decimal::Decimal;

use crate::core::money::{self, round_half_up};
use crate::modules::totals::models::RoundedTotal;

/// Optional rounding of a document's grand total to whole currency units.
///
/// Applied once, after aggregation; rows are never rounded to whole units.
pub struct RoundOffPolicy;

impl RoundOffPolicy {
    /// Round `total` to the nearest whole unit (ties up) when `enabled`,
    /// recording the signed difference.
    pub fn apply(total: Decimal, enabled: bool) -> RoundedTotal {
        if !enabled {
            return RoundedTotal {
                total,
                round_off_value: Decimal::ZERO,
            };
        }

        let rounded = round_half_up(total, 0);
        RoundedTotal {
            total: rounded,
            round_off_value: money::sub(rounded, total),
        }
    }
}
