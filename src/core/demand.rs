//! Demand side: transaction counts per bucket, taken from the sales ledger
//! independently of any ping data.

use crate::models::bucket::BucketKey;
use crate::models::sale::SaleRecord;
use std::collections::BTreeMap;

/// Count sales per (day_of_week, hour) bucket of the sale timestamp.
pub fn count_sales(sales: &[SaleRecord]) -> BTreeMap<BucketKey, i64> {
    let mut counts: BTreeMap<BucketKey, i64> = BTreeMap::new();

    for sale in sales {
        *counts
            .entry(BucketKey::from_timestamp(&sale.timestamp))
            .or_insert(0) += 1;
    }

    counts
}
