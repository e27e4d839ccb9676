//! Nearest dictionary word selection for a misspelled word.
//!
//! Selection is a single left-to-right scan over the candidates that keeps a
//! running best. A candidate replaces the running best when it is strictly
//! closer by edit distance; on equal distance the tie-break cascade decides:
//!
//! 1. a candidate sharing the target's first byte beats a best that does not;
//! 2. with equal first-byte status, the smaller length gap to the target wins;
//! 3. otherwise the earlier candidate is kept.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Result, SpellerError};
use crate::spelling::levenshtein::edit_distance;

/// The dictionary entry chosen for a target word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    /// The chosen entry, borrowed from the candidate list.
    pub word: &'a str,
    /// Edit distance between the entry and the target.
    pub distance: usize,
    /// Position of the entry in the candidate list.
    pub index: usize,
}

impl<'a> MatchResult<'a> {
    fn evaluate(target: &str, word: &'a str, index: usize) -> Self {
        MatchResult {
            word,
            distance: edit_distance(word, target),
            index,
        }
    }
}

/// Returns true when `candidate` should replace `current` as the best match.
///
/// The relation is lexicographic over (distance, first-byte mismatch, length
/// gap), so folding partition winners in order reproduces the sequential scan.
fn prefers(target: &str, current: &MatchResult<'_>, candidate: &MatchResult<'_>) -> bool {
    if candidate.distance != current.distance {
        return candidate.distance < current.distance;
    }

    let current_same_first = shares_first_byte(current.word, target);
    let candidate_same_first = shares_first_byte(candidate.word, target);

    if candidate_same_first != current_same_first {
        return candidate_same_first;
    }

    length_gap(candidate.word, target) < length_gap(current.word, target)
}

fn shares_first_byte(word: &str, target: &str) -> bool {
    word.as_bytes().first() == target.as_bytes().first()
}

fn length_gap(word: &str, target: &str) -> usize {
    word.len().abs_diff(target.len())
}

/// Sequential cascade over one run of candidates. `offset` is the position of
/// the run's first element in the full candidate list.
fn scan<'a, S: AsRef<str>>(
    target: &str,
    candidates: &'a [S],
    offset: usize,
) -> Option<MatchResult<'a>> {
    candidates
        .iter()
        .enumerate()
        .fold(None, |best, (i, candidate)| {
            let candidate = MatchResult::evaluate(target, candidate.as_ref(), offset + i);
            match best {
                Some(current) if !prefers(target, &current, &candidate) => Some(current),
                _ => Some(candidate),
            }
        })
}

/// Select the best dictionary entry for `target`, returning its distance and
/// position as well.
///
/// Fails with [`SpellerError::EmptyDictionary`] when `candidates` is empty.
pub fn best_match_result<'a, S: AsRef<str>>(
    target: &str,
    candidates: &'a [S],
) -> Result<MatchResult<'a>> {
    scan(target, candidates, 0).ok_or(SpellerError::EmptyDictionary)
}

/// Select the best dictionary entry for `target`.
///
/// The number of candidates considered is `candidates.len()`.
///
/// # Examples
///
/// ```
/// use speller::spelling::best_match;
///
/// let words = ["light", "sight", "tight"];
/// assert_eq!(best_match("ligth", &words).unwrap(), "light");
/// ```
pub fn best_match<'a, S: AsRef<str>>(target: &str, candidates: &'a [S]) -> Result<&'a str> {
    best_match_result(target, candidates).map(|result| result.word)
}

/// Parallel variant of [`best_match_result`].
///
/// The candidates are split into `partitions` contiguous runs that are scanned
/// on the rayon pool. Winners are then folded in partition order with the same
/// cascade, so the result is identical to the sequential scan.
pub fn par_best_match_result<'a, S: AsRef<str> + Sync>(
    target: &str,
    candidates: &'a [S],
    partitions: usize,
) -> Result<MatchResult<'a>> {
    if candidates.is_empty() {
        return Err(SpellerError::EmptyDictionary);
    }

    let chunk_size = candidates.len().div_ceil(partitions.max(1));

    let winners: Vec<Option<MatchResult<'a>>> = candidates
        .par_chunks(chunk_size)
        .enumerate()
        .map(|(n, chunk)| scan(target, chunk, n * chunk_size))
        .collect();

    winners
        .into_iter()
        .flatten()
        .reduce(|current, candidate| {
            if prefers(target, &current, &candidate) {
                candidate
            } else {
                current
            }
        })
        .ok_or(SpellerError::EmptyDictionary)
}

/// Parallel variant of [`best_match`].
pub fn par_best_match<'a, S: AsRef<str> + Sync>(
    target: &str,
    candidates: &'a [S],
    partitions: usize,
) -> Result<&'a str> {
    par_best_match_result(target, candidates, partitions).map(|result| result.word)
}
