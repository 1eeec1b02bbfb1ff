//! Smith-Waterman local sequence alignment
//!
//! # Algorithm
//!
//! Smith-Waterman finds the optimal **local** alignment between two
//! sequences using dynamic programming. Unlike global alignment
//! (Needleman-Wunsch), it aligns the best-scoring pair of subsequences,
//! which is what read-to-transcript matching needs.
//!
//! The recurrence, with a linear gap cost:
//!
//! ```text
//! H(i,j) = max(
//!     H(i-1, j-1) + substitution(query[i-1], ref[j-1]),  // Diagonal
//!     H(i-1, j) + gap_penalty,                           // Up (gap in ref)
//!     H(i, j-1) + gap_penalty,                           // Left (gap in query)
//!     0                                                  // Local alignment floor
//! )
//! ```
//!
//! Ties among the three non-zero branches resolve in the fixed priority
//! diagonal > up > left. The single best cell is tracked during the fill
//! (first occurrence wins, row-major order) and the alignment is rebuilt by
//! walking traceback pointers until a zero cell.
//!
//! # Quality weighting
//!
//! With a Phred quality track on the query, each diagonal substitution term
//! is scaled by `phred / 40.0` (Phred 40 gives full weight, Phred 0 zero
//! weight, no clamping). Gap penalties are never scaled. Weighted scores are
//! `f64`; unweighted scores stay `i32`.
//!
//! # Examples
//!
//! ```
//! use readquant::{align, Sequence, SubstitutionMatrix, DEFAULT_GAP_PENALTY};
//!
//! let read = Sequence::new("ACGTACGT")?;
//! let reference = Sequence::new("ACGTACGT")?;
//! let matrix = SubstitutionMatrix::default();
//!
//! let result = align(&read, &reference, &matrix, DEFAULT_GAP_PENALTY)?;
//! assert_eq!(result.score, 16); // 8 matches × 2 = 16
//! assert_eq!(result.query_aligned, "ACGTACGT");
//! # Ok::<(), readquant::ReadquantError>(())
//! ```

use crate::alignment::scoring::{AlignmentScore, SubstitutionMatrix};
use crate::error::{ReadquantError, Result};
use crate::sequence::{QualityTrack, Sequence, GAP};

/// Result of a local alignment
///
/// Holds the best local score and the two equal-length aligned strings with
/// `-` marking gaps. The score type is `i32` for unweighted alignment and
/// `f64` for quality-weighted alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentResult<S> {
    /// Best local alignment score (never below zero)
    pub score: S,
    /// Aligned query subsequence, gapped
    pub query_aligned: String,
    /// Aligned reference subsequence, gapped
    pub ref_aligned: String,
}

impl<S> AlignmentResult<S> {
    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.query_aligned.len()
    }

    /// Check whether the alignment is empty (no similarity found)
    pub fn is_empty(&self) -> bool {
        self.query_aligned.is_empty()
    }
}

/// Direction for traceback in the DP matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Diagonal, // Match/mismatch (from H[i-1][j-1])
    Up,       // Gap in reference (from H[i-1][j])
    Left,     // Gap in query (from H[i][j-1])
    None,     // Zero cell, never traced through
}

/// DP matrix cell
#[derive(Debug, Clone, Copy)]
struct Cell<S> {
    score: S,
    direction: Direction,
}

/// Smith-Waterman local alignment of a read against a reference
///
/// # Arguments
///
/// * `query` - Read sequence (DP rows)
/// * `reference` - Reference sequence (DP columns)
/// * `matrix` - Substitution score table
/// * `gap_penalty` - Linear per-position gap cost (negative)
///
/// # Errors
///
/// [`ReadquantError::EmptyInput`] if either sequence is empty.
///
/// # Example
///
/// ```
/// use readquant::{align, Sequence, SubstitutionMatrix};
///
/// let read = Sequence::new("TGTTACGG")?;
/// let reference = Sequence::new("GGTTGACTA")?;
/// let result = align(&read, &reference, &SubstitutionMatrix::default(), -2)?;
///
/// assert_eq!(result.score, 8);
/// assert_eq!(result.query_aligned, "GTT-AC");
/// assert_eq!(result.ref_aligned, "GTTGAC");
/// # Ok::<(), readquant::ReadquantError>(())
/// ```
pub fn align(
    query: &Sequence,
    reference: &Sequence,
    matrix: &SubstitutionMatrix,
    gap_penalty: i32,
) -> Result<AlignmentResult<i32>> {
    check_nonempty(query, reference)?;

    let query_codes = query.codes();
    let ref_codes = reference.codes();

    Ok(align_impl(
        query.as_bytes(),
        reference.as_bytes(),
        |i, j| matrix.score_by_code(query_codes[i], ref_codes[j]),
        gap_penalty,
    ))
}

/// Quality-weighted Smith-Waterman local alignment
///
/// Identical to [`align`] except each diagonal substitution term is scaled
/// by the query position's confidence weight (`phred / 40.0`). Gap
/// penalties are not scaled. The score is `f64`.
///
/// # Errors
///
/// [`ReadquantError::EmptyInput`] if either sequence is empty;
/// [`ReadquantError::LengthMismatch`] if the quality track length differs
/// from the query length.
///
/// # Example
///
/// ```
/// use readquant::{align_weighted, QualityTrack, Sequence, SubstitutionMatrix};
///
/// let read = Sequence::new("ACGT")?;
/// let reference = Sequence::new("ACGT")?;
/// // Phred 40 everywhere: full weight, same result as unweighted
/// let quality = QualityTrack::from_phred33("IIII")?;
///
/// let result = align_weighted(&read, &quality, &reference, &SubstitutionMatrix::default(), -2)?;
/// assert_eq!(result.score, 8.0);
/// # Ok::<(), readquant::ReadquantError>(())
/// ```
pub fn align_weighted(
    query: &Sequence,
    quality: &QualityTrack,
    reference: &Sequence,
    matrix: &SubstitutionMatrix,
    gap_penalty: i32,
) -> Result<AlignmentResult<f64>> {
    check_nonempty(query, reference)?;
    check_quality_len(query, quality)?;

    let query_codes = query.codes();
    let ref_codes = reference.codes();
    let weights = quality.weights();

    Ok(align_impl(
        query.as_bytes(),
        reference.as_bytes(),
        |i, j| f64::from(matrix.score_by_code(query_codes[i], ref_codes[j])) * weights[i],
        f64::from(gap_penalty),
    ))
}

/// Best local alignment score without traceback
///
/// Uses two rolling rows instead of the full matrix, bounding memory by
/// O(reference length) independent of read length. Produces exactly the
/// same score as [`align`].
pub fn align_score(
    query: &Sequence,
    reference: &Sequence,
    matrix: &SubstitutionMatrix,
    gap_penalty: i32,
) -> Result<i32> {
    check_nonempty(query, reference)?;

    let query_codes = query.codes();
    let ref_codes = reference.codes();

    Ok(score_impl(
        query.len(),
        reference.len(),
        |i, j| matrix.score_by_code(query_codes[i], ref_codes[j]),
        gap_penalty,
    ))
}

/// Best quality-weighted local alignment score without traceback
///
/// Rolling-row counterpart of [`align_weighted`]; same score, O(reference
/// length) memory.
pub fn align_weighted_score(
    query: &Sequence,
    quality: &QualityTrack,
    reference: &Sequence,
    matrix: &SubstitutionMatrix,
    gap_penalty: i32,
) -> Result<f64> {
    check_nonempty(query, reference)?;
    check_quality_len(query, quality)?;

    let query_codes = query.codes();
    let ref_codes = reference.codes();
    let weights = quality.weights();

    Ok(score_impl(
        query.len(),
        reference.len(),
        |i, j| f64::from(matrix.score_by_code(query_codes[i], ref_codes[j])) * weights[i],
        f64::from(gap_penalty),
    ))
}

fn check_nonempty(query: &Sequence, reference: &Sequence) -> Result<()> {
    if query.is_empty() || reference.is_empty() {
        return Err(ReadquantError::EmptyInput);
    }
    Ok(())
}

fn check_quality_len(query: &Sequence, quality: &QualityTrack) -> Result<()> {
    if quality.len() != query.len() {
        return Err(ReadquantError::LengthMismatch {
            sequence_len: query.len(),
            quality_len: quality.len(),
        });
    }
    Ok(())
}

/// Full DP fill plus traceback, generic over the score domain
///
/// `substitution(i, j)` supplies the (possibly quality-scaled) score of
/// pairing `query[i]` with `reference[j]`.
fn align_impl<S, F>(
    query: &[u8],
    reference: &[u8],
    substitution: F,
    gap_penalty: S,
) -> AlignmentResult<S>
where
    S: AlignmentScore,
    F: Fn(usize, usize) -> S,
{
    let m = query.len();
    let n = reference.len();

    // (m+1) × (n+1); row and column 0 are the empty-prefix boundary
    let mut matrix = vec![
        vec![
            Cell {
                score: S::ZERO,
                direction: Direction::None,
            };
            n + 1
        ];
        m + 1
    ];

    let mut max_score = S::ZERO;
    let mut max_i = 0;
    let mut max_j = 0;

    for i in 1..=m {
        for j in 1..=n {
            let diagonal = matrix[i - 1][j - 1].score + substitution(i - 1, j - 1);
            let up = matrix[i - 1][j].score + gap_penalty;
            let left = matrix[i][j - 1].score + gap_penalty;

            // max(0, diagonal, up, left); strict comparisons keep the fixed
            // tie priority diagonal > up > left, and a zero maximum records
            // no pointer
            let mut cell = Cell {
                score: S::ZERO,
                direction: Direction::None,
            };
            if diagonal > cell.score {
                cell = Cell {
                    score: diagonal,
                    direction: Direction::Diagonal,
                };
            }
            if up > cell.score {
                cell = Cell {
                    score: up,
                    direction: Direction::Up,
                };
            }
            if left > cell.score {
                cell = Cell {
                    score: left,
                    direction: Direction::Left,
                };
            }
            matrix[i][j] = cell;

            // First occurrence wins on ties (row-major scan)
            if cell.score > max_score {
                max_score = cell.score;
                max_i = i;
                max_j = j;
            }
        }
    }

    let (query_aligned, ref_aligned) = traceback(&matrix, query, reference, max_i, max_j);

    AlignmentResult {
        score: max_score,
        query_aligned,
        ref_aligned,
    }
}

/// Walk traceback pointers from the best cell to the nearest zero cell
fn traceback<S: AlignmentScore>(
    matrix: &[Vec<Cell<S>>],
    query: &[u8],
    reference: &[u8],
    start_i: usize,
    start_j: usize,
) -> (String, String) {
    let mut query_aligned = String::new();
    let mut ref_aligned = String::new();
    let mut i = start_i;
    let mut j = start_j;

    loop {
        match matrix[i][j].direction {
            Direction::Diagonal => {
                query_aligned.push(query[i - 1] as char);
                ref_aligned.push(reference[j - 1] as char);
                i -= 1;
                j -= 1;
            }
            Direction::Up => {
                query_aligned.push(query[i - 1] as char);
                ref_aligned.push(GAP);
                i -= 1;
            }
            Direction::Left => {
                query_aligned.push(GAP);
                ref_aligned.push(reference[j - 1] as char);
                j -= 1;
            }
            Direction::None => break,
        }
    }

    // Accumulated backwards
    (
        query_aligned.chars().rev().collect(),
        ref_aligned.chars().rev().collect(),
    )
}

/// Score-only DP with two rolling rows
fn score_impl<S, F>(m: usize, n: usize, substitution: F, gap_penalty: S) -> S
where
    S: AlignmentScore,
    F: Fn(usize, usize) -> S,
{
    let mut prev_row = vec![S::ZERO; n + 1];
    let mut curr_row = vec![S::ZERO; n + 1];
    let mut max_score = S::ZERO;

    for i in 1..=m {
        curr_row[0] = S::ZERO;
        for j in 1..=n {
            let diagonal = prev_row[j - 1] + substitution(i - 1, j - 1);
            let up = prev_row[j] + gap_penalty;
            let left = curr_row[j - 1] + gap_penalty;

            let mut score = S::ZERO;
            if diagonal > score {
                score = diagonal;
            }
            if up > score {
                score = up;
            }
            if left > score {
                score = left;
            }
            curr_row[j] = score;

            if score > max_score {
                max_score = score;
            }
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    max_score
}
