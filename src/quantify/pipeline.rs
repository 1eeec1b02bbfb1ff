//! Batch quantification over structured records
//!
//! A pure, in-memory composition of the three core operations: align each
//! read against every candidate reference, reduce the per-read results to
//! the tie-preserving best set, and tally the surviving candidate ids per
//! feature.
//!
//! The per-read reduction runs over the candidates with rayon, folding
//! partial [`BestSet`]s with `merge` and joining them with `combine` — the
//! same algebra an external distributed runner would apply across workers,
//! exercised here across threads. No I/O happens at this layer: the caller
//! supplies already-parsed records and receives a [`FeatureTally`].
//!
//! # Examples
//!
//! ```
//! use readquant::{quantify, QuantifyConfig, ReadRecord, ReferenceRecord, Sequence};
//!
//! let reads = vec![ReadRecord::new("read1", Sequence::new("ACGT")?)];
//! let references = vec![
//!     ReferenceRecord::new("tx1", Sequence::new("ACGTACGT")?),
//!     ReferenceRecord::new("tx2", Sequence::new("TTTT")?),
//! ];
//!
//! let tally = quantify(&reads, &references, &QuantifyConfig::default())?;
//! assert_eq!(tally["tx1"], 1);
//! assert!(!tally.contains_key("tx2"));
//! # Ok::<(), readquant::ReadquantError>(())
//! ```

use crate::alignment::{
    align, align_weighted, AlignmentResult, AlignmentScore, SubstitutionMatrix,
    DEFAULT_GAP_PENALTY,
};
use crate::error::Result;
use crate::quantify::best_match::{BestSet, CandidateRecord};
use crate::quantify::feature_count::{tally_features, FeatureTally};
use crate::sequence::{QualityTrack, Sequence};
use rayon::prelude::*;

/// A read to be quantified, with an optional quality track
///
/// Reads carrying a quality track are aligned with the quality-weighted
/// engine; reads without one use plain integer scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadRecord {
    /// Read identifier (e.g. a cell barcode)
    pub id: String,
    /// Read bases
    pub sequence: Sequence,
    /// Per-base Phred scores, if available
    pub quality: Option<QualityTrack>,
}

impl ReadRecord {
    /// Create an unweighted read record
    pub fn new(id: impl Into<String>, sequence: Sequence) -> Self {
        Self {
            id: id.into(),
            sequence,
            quality: None,
        }
    }

    /// Create a quality-weighted read record
    pub fn with_quality(
        id: impl Into<String>,
        sequence: Sequence,
        quality: QualityTrack,
    ) -> Self {
        Self {
            id: id.into(),
            sequence,
            quality: Some(quality),
        }
    }
}

/// A candidate reference sequence (e.g. a transcript)
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRecord {
    /// Candidate identifier (e.g. a transcript id)
    pub id: String,
    /// Reference bases
    pub sequence: Sequence,
}

impl ReferenceRecord {
    /// Create a reference record
    pub fn new(id: impl Into<String>, sequence: Sequence) -> Self {
        Self {
            id: id.into(),
            sequence,
        }
    }
}

/// Scoring configuration for batch quantification
#[derive(Debug, Clone, PartialEq)]
pub struct QuantifyConfig {
    /// Substitution score table
    pub substitution: SubstitutionMatrix,
    /// Linear per-position gap penalty (negative)
    pub gap_penalty: i32,
}

impl Default for QuantifyConfig {
    /// Canonical scoring: match +2, mismatch −1, `N` wildcard 0, gap −2
    fn default() -> Self {
        Self {
            substitution: SubstitutionMatrix::default(),
            gap_penalty: DEFAULT_GAP_PENALTY,
        }
    }
}

/// Reduce one read's candidate alignments to its best-match ids
///
/// Aligns the read against every reference in parallel and reduces with
/// `merge`/`combine`; the returned ids preserve ties (one id per tied
/// candidate). A read with no references yields no ids.
///
/// # Errors
///
/// Propagates the first alignment failure ([`crate::ReadquantError`]);
/// nothing is skipped silently.
pub fn best_candidates(
    read: &ReadRecord,
    references: &[ReferenceRecord],
    config: &QuantifyConfig,
) -> Result<Vec<String>> {
    match &read.quality {
        Some(quality) => reduce_candidates(references, |reference| {
            align_weighted(
                &read.sequence,
                quality,
                &reference.sequence,
                &config.substitution,
                config.gap_penalty,
            )
        }),
        None => reduce_candidates(references, |reference| {
            align(
                &read.sequence,
                &reference.sequence,
                &config.substitution,
                config.gap_penalty,
            )
        }),
    }
}

/// Quantify a batch of reads against a set of candidate references
///
/// For every read the best-scoring candidates are found (ties preserved)
/// and each surviving candidate id is counted once. The result maps every
/// feature to the number of reads (tie emissions included) that selected
/// it.
pub fn quantify(
    reads: &[ReadRecord],
    references: &[ReferenceRecord],
    config: &QuantifyConfig,
) -> Result<FeatureTally> {
    let mut emissions = Vec::new();
    for read in reads {
        emissions.extend(best_candidates(read, references, config)?);
    }
    Ok(tally_features(emissions))
}

/// Parallel fold/reduce of candidate alignments into a best set
fn reduce_candidates<S, F>(
    references: &[ReferenceRecord],
    align_one: F,
) -> Result<Vec<String>>
where
    S: AlignmentScore + Send,
    F: Fn(&ReferenceRecord) -> Result<AlignmentResult<S>> + Send + Sync,
{
    let best = references
        .par_iter()
        .map(|reference| {
            align_one(reference)
                .map(|alignment| CandidateRecord::new(reference.id.clone(), alignment))
        })
        .try_fold(BestSet::new, |set, record| record.map(|r| set.merge(r)))
        .try_reduce(BestSet::new, |a, b| Ok(a.combine(b)))?;

    Ok(best.into_candidate_ids())
}
