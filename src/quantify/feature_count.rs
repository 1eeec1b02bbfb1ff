//! Per-feature read counting
//!
//! The last reduction stage: every candidate id emitted by a read's
//! [`BestSet`](crate::BestSet) contributes one count to that feature. A
//! read with k tied best candidates therefore adds one to each of the k
//! features — counts are emission counts, not deduplicated read sets.
//!
//! Counting is a pure sum, so it is order-independent and
//! [`combine_tallies`] lets partial tallies from independently processed
//! partitions be merged in any grouping.
//!
//! # Examples
//!
//! ```
//! use readquant::tally_features;
//!
//! let emissions = ["tx1", "tx2", "tx1", "tx1"];
//! let tally = tally_features(emissions.iter().map(|s| s.to_string()));
//!
//! assert_eq!(tally["tx1"], 3);
//! assert_eq!(tally["tx2"], 1);
//! ```

use std::collections::HashMap;

/// Feature counts: candidate id → number of best-match emissions
pub type FeatureTally = HashMap<String, u64>;

/// Count best-match emissions per candidate id
///
/// Pure count: the sum over all values always equals the number of
/// emissions consumed.
pub fn tally_features<I>(emissions: I) -> FeatureTally
where
    I: IntoIterator<Item = String>,
{
    let mut tally = FeatureTally::new();
    for id in emissions {
        *tally.entry(id).or_insert(0) += 1;
    }
    tally
}

/// Merge two partial tallies by summing per-feature counts
///
/// Associative and commutative, so partition tallies can be reduced in any
/// tree shape.
///
/// # Example
///
/// ```
/// use readquant::{combine_tallies, tally_features};
///
/// let a = tally_features(["tx1".to_string(), "tx2".to_string()]);
/// let b = tally_features(["tx1".to_string()]);
///
/// let merged = combine_tallies(a, b);
/// assert_eq!(merged["tx1"], 2);
/// assert_eq!(merged["tx2"], 1);
/// ```
pub fn combine_tallies(mut a: FeatureTally, b: FeatureTally) -> FeatureTally {
    for (id, count) in b {
        *a.entry(id).or_insert(0) += count;
    }
    a
}
