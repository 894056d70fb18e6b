use indexmap::IndexMap;
use serde_json::Number;

use crate::models::{InstanceRecord, Offer};

/// Projects every offer priced in `region` onto an [`InstanceRecord`],
/// keeping catalog order. Offers with no (or a `null`) price for `region`
/// are dropped.
pub fn parse_offers(offers: &IndexMap<String, Offer>, region: &str) -> Vec<InstanceRecord> {
    offers
        .iter()
        .filter_map(|(offer_key, offer)| {
            let price = offer.prices.get(region)?.as_ref()?;
            Some(InstanceRecord {
                instance_type: offer_key.clone(),
                cpu: integral(&offer.cores),
                memory: integral(&offer.ram),
                storage: integral(&offer.disk_size),
                cost: integral(&price.value),
            })
        })
        .collect()
}

/// Writes whole floats (`2.0`, `1e1`) back out as integers.
fn integral(n: &Number) -> Number {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT => {
            Number::from(f as i64)
        }
        _ => n.clone(),
    }
}
