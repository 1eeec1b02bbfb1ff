//! Sequence alignment: substitution scoring and the Smith-Waterman kernel
//!
//! This module holds the compute core of the crate:
//!
//! - **Substitution scoring**: a total 5×5 score table over `ACGTN` with a
//!   wildcard `N`, plus the linear gap penalty defaults.
//! - **Smith-Waterman local alignment**: full DP fill with traceback
//!   ([`align`], [`align_weighted`]) and rolling-row score-only variants
//!   ([`align_score`], [`align_weighted_score`]) for memory-bounded
//!   scoring.
//!
//! Every function here is pure: inputs are read, a fresh result is
//! returned, nothing is shared or mutated. Alignments of independent
//! read/reference pairs can therefore run fully in parallel with no
//! locking.
//!
//! # Examples
//!
//! ```
//! use readquant::{align, Sequence, SubstitutionMatrix, DEFAULT_GAP_PENALTY};
//!
//! let read = Sequence::new("TGTTACGG")?;
//! let reference = Sequence::new("GGTTGACTA")?;
//!
//! let result = align(&read, &reference, &SubstitutionMatrix::default(), DEFAULT_GAP_PENALTY)?;
//! assert_eq!(result.score, 8);
//! # Ok::<(), readquant::ReadquantError>(())
//! ```

pub mod scoring;
pub mod smith_waterman;

// Re-export public API
pub use scoring::{
    AlignmentScore, SubstitutionMatrix, DEFAULT_GAP_PENALTY, DEFAULT_MATCH_SCORE,
    DEFAULT_MISMATCH_SCORE,
};
pub use smith_waterman::{
    align, align_score, align_weighted, align_weighted_score, AlignmentResult,
};
