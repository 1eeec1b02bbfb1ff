//! # readquant
//!
//! Local sequence alignment and best-match feature quantification for
//! short biological reads.
//!
//! readquant is the compute core of a read-to-transcript quantification
//! pipeline: it aligns reads against candidate reference sequences with
//! Smith-Waterman local alignment (optionally weighted by per-base Phred
//! quality), reduces each read's candidates to the tie-preserving set of
//! best matches, and tallies how many reads selected each feature.
//!
//! Parsing (FASTA/FASTQ), file I/O, and job orchestration live outside
//! this crate: callers hand in structured records and call pure functions.
//! The reduction operators are associative and commutative, so partial
//! results computed over any partitioning of the input combine to the same
//! answer — the property that makes the pipeline safe to parallelize or
//! distribute.
//!
//! # Components
//!
//! - [`alignment`]: substitution scoring and the Smith-Waterman kernel
//!   ([`align`], [`align_weighted`], score-only variants).
//! - [`mod@quantify`]: best-match reduction ([`BestSet`]), feature counting
//!   ([`tally_features`], [`combine_tallies`]), and the batch pipeline
//!   ([`fn@quantify`]).
//! - [`sequence`]: validated [`Sequence`] and [`QualityTrack`] value types.
//! - [`error`]: [`ReadquantError`] and the crate [`Result`] alias.
//!
//! # Examples
//!
//! Align one read against one reference:
//!
//! ```
//! use readquant::{align, Sequence, SubstitutionMatrix, DEFAULT_GAP_PENALTY};
//!
//! let read = Sequence::new("ACACACTA")?;
//! let reference = Sequence::new("AGCACACA")?;
//!
//! let result = align(&read, &reference, &SubstitutionMatrix::default(), DEFAULT_GAP_PENALTY)?;
//! assert_eq!(result.score, 10);
//! assert_eq!(result.query_aligned, "ACACA");
//! # Ok::<(), readquant::ReadquantError>(())
//! ```
//!
//! Quantify a read batch against a transcript set:
//!
//! ```
//! use readquant::{quantify, QuantifyConfig, QualityTrack, ReadRecord, ReferenceRecord, Sequence};
//!
//! let reads = vec![ReadRecord::with_quality(
//!     "AAACCCAAGAAACACT", // cell barcode
//!     Sequence::new("ACGTACGT")?,
//!     QualityTrack::from_phred33("IIIIIIII")?,
//! )];
//! let references = vec![
//!     ReferenceRecord::new("ENST0001", Sequence::new("TTACGTACGTTT")?),
//!     ReferenceRecord::new("ENST0002", Sequence::new("GGGGGGGG")?),
//! ];
//!
//! let tally = quantify(&reads, &references, &QuantifyConfig::default())?;
//! assert_eq!(tally["ENST0001"], 1);
//! # Ok::<(), readquant::ReadquantError>(())
//! ```

pub mod alignment;
pub mod error;
pub mod quantify;
pub mod sequence;

// Flat re-exports: the crate's contract surface
pub use alignment::{
    align, align_score, align_weighted, align_weighted_score, AlignmentResult, AlignmentScore,
    SubstitutionMatrix, DEFAULT_GAP_PENALTY, DEFAULT_MATCH_SCORE, DEFAULT_MISMATCH_SCORE,
};
pub use error::{ReadquantError, Result};
pub use quantify::{
    best_candidates, combine_tallies, quantify, tally_features, BestSet, CandidateRecord,
    FeatureTally, QuantifyConfig, ReadRecord, ReferenceRecord,
};
pub use sequence::{QualityTrack, Sequence, ALPHABET, FULL_CONFIDENCE_PHRED, GAP};
