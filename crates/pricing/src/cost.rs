use repaircost_log::Repair;

use crate::error::{PricingError, Result};
use crate::table::PriceTable;

/// Total monetary cost of a repair against a price snapshot.
///
/// The flat cost quoted by the log plus `quantity × unit price` over all
/// required materials. Fails on the first material absent from the table,
/// naming exactly that material. Borrows both arguments, so the same repair
/// can be re-priced against a reloaded snapshot.
pub fn total_cost(repair: &Repair, prices: &PriceTable) -> Result<f64> {
    let mut total = repair.cost.as_f64();
    for (material, quantity) in &repair.materials {
        let price = prices
            .price(material)
            .ok_or_else(|| PricingError::UnknownMaterial {
                material: material.clone(),
            })?;
        total += *quantity as f64 * price;
    }
    Ok(total)
}
