//! Tie-preserving best-match aggregation
//!
//! Reduces the stream of scored candidate alignments for one read down to
//! the set of candidates sharing the maximum score. The reduction has two
//! operations:
//!
//! - [`BestSet::merge`] folds one new record into an accumulator;
//! - [`BestSet::combine`] merges two already-reduced accumulators.
//!
//! `combine` is associative and commutative and `merge` is
//! order-independent, so partial results computed over any partitioning of
//! the records — across threads, workers, or reduction trees — collapse to
//! the same final set. That algebraic guarantee is the property that makes
//! the reduction safe to parallelize; the equivalent logic appeared in
//! several divergent copies upstream and lives only here now.
//!
//! Equal-score insertion is a set union: a record exactly equal to one
//! already held (same candidate id, same alignment) is skipped, which is
//! what makes `combine(s, s) == s` hold for any reduced set.
//!
//! # Examples
//!
//! ```
//! use readquant::{AlignmentResult, BestSet, CandidateRecord};
//!
//! let best = BestSet::new()
//!     .merge(CandidateRecord::new("tx1", AlignmentResult { score: 8, query_aligned: "ACGT".into(), ref_aligned: "ACGT".into() }))
//!     .merge(CandidateRecord::new("tx2", AlignmentResult { score: 6, query_aligned: "ACG".into(), ref_aligned: "ACG".into() }))
//!     .merge(CandidateRecord::new("tx3", AlignmentResult { score: 8, query_aligned: "ACGT".into(), ref_aligned: "ACGT".into() }));
//!
//! assert_eq!(best.score(), Some(8));
//! let ids: Vec<_> = best.candidate_ids().collect();
//! assert_eq!(ids, ["tx1", "tx3"]); // the tie survives, arrival order kept
//! ```

use crate::alignment::{AlignmentResult, AlignmentScore};
use std::cmp::Ordering;

/// One scored candidate alignment for a read
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRecord<S> {
    /// Identifier of the reference the read was aligned against
    pub candidate_id: String,
    /// The alignment the candidate achieved
    pub alignment: AlignmentResult<S>,
}

impl<S: AlignmentScore> CandidateRecord<S> {
    /// Create a record from a candidate id and its alignment
    pub fn new(candidate_id: impl Into<String>, alignment: AlignmentResult<S>) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            alignment,
        }
    }

    /// The record's alignment score
    pub fn score(&self) -> S {
        self.alignment.score
    }
}

/// The tie-preserving set of top-scoring candidate records for one read
///
/// Every held record shares the same score; the set is empty only before
/// the first merge. Records keep their arrival order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BestSet<S> {
    records: Vec<CandidateRecord<S>>,
}

impl<S: AlignmentScore> BestSet<S> {
    /// The empty accumulator
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Fold one record into the accumulator
    ///
    /// A strictly higher score replaces the set, an equal score joins it
    /// (exact duplicates are skipped), a lower score is discarded.
    pub fn merge(mut self, record: CandidateRecord<S>) -> Self {
        let Some(best) = self.score() else {
            self.records.push(record);
            return self;
        };

        match record.score().partial_cmp(&best) {
            Some(Ordering::Greater) => Self {
                records: vec![record],
            },
            Some(Ordering::Equal) => {
                if !self.records.contains(&record) {
                    self.records.push(record);
                }
                self
            }
            _ => self,
        }
    }

    /// Merge two already-reduced accumulators
    ///
    /// Associative and commutative (up to record order): an empty side is
    /// the identity, otherwise the higher-scoring set wins and equal
    /// scores take the union of both sets.
    pub fn combine(mut self, other: Self) -> Self {
        let (Some(own), Some(theirs)) = (self.score(), other.score()) else {
            return if self.records.is_empty() { other } else { self };
        };

        match own.partial_cmp(&theirs) {
            Some(Ordering::Greater) => self,
            Some(Ordering::Less) => other,
            _ => {
                for record in other.records {
                    if !self.records.contains(&record) {
                        self.records.push(record);
                    }
                }
                self
            }
        }
    }

    /// The common score of the held records, `None` while empty
    pub fn score(&self) -> Option<S> {
        self.records.first().map(CandidateRecord::score)
    }

    /// The held records, in arrival order
    pub fn records(&self) -> &[CandidateRecord<S>] {
        &self.records
    }

    /// Number of tied candidates currently held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether no record has been merged yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the surviving candidate ids in arrival order
    pub fn candidate_ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.candidate_id.as_str())
    }

    /// Emit the surviving candidate ids, one per tied candidate
    ///
    /// This is the per-read output consumed by feature counting: a read
    /// with k tied best candidates emits k ids.
    pub fn into_candidate_ids(self) -> Vec<String> {
        self.records.into_iter().map(|r| r.candidate_id).collect()
    }
}

impl<S: AlignmentScore> FromIterator<CandidateRecord<S>> for BestSet<S> {
    fn from_iter<I: IntoIterator<Item = CandidateRecord<S>>>(records: I) -> Self {
        records.into_iter().fold(Self::new(), Self::merge)
    }
}
