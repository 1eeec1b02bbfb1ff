//! Best-match aggregation and feature counting
//!
//! Everything downstream of the alignment kernel: reducing a read's scored
//! candidates to its tie-preserving best set, emitting the surviving
//! candidate ids, counting emissions per feature, and the batch pipeline
//! that composes the three stages over structured records.
//!
//! The reduction operators (`merge`, `combine`, `combine_tallies`) are
//! associative and order-independent, so any partitioning of the input —
//! threads here, distributed workers elsewhere — reduces to the same
//! result.
//!
//! # Examples
//!
//! ```
//! use readquant::{quantify, QuantifyConfig, ReadRecord, ReferenceRecord, Sequence};
//!
//! let reads = vec![
//!     ReadRecord::new("read1", Sequence::new("ACGTACGT")?),
//!     ReadRecord::new("read2", Sequence::new("ACGTACGT")?),
//! ];
//! let references = vec![ReferenceRecord::new("tx1", Sequence::new("TTACGTACGTTT")?)];
//!
//! let tally = quantify(&reads, &references, &QuantifyConfig::default())?;
//! assert_eq!(tally["tx1"], 2);
//! # Ok::<(), readquant::ReadquantError>(())
//! ```

pub mod best_match;
pub mod feature_count;
pub mod pipeline;

// Re-export public API
pub use best_match::{BestSet, CandidateRecord};
pub use feature_count::{combine_tallies, tally_features, FeatureTally};
pub use pipeline::{best_candidates, quantify, QuantifyConfig, ReadRecord, ReferenceRecord};
