//! Levenshtein distance calculation for spelling correction.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-byte edits (insertions, deletions, or
/// substitutions) required to change `a` into `b`. Inputs are compared
/// byte-for-byte with no case folding.
///
/// Only two rows of the dynamic-programming table are kept, each sized to the
/// shorter input plus one, so memory is `O(min(len(a), len(b)))`.
///
/// # Examples
///
/// ```
/// use speller::spelling::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    // Distance is symmetric, so the shorter input always indexes the rows.
    let (outer, inner) = if a.len() >= b.len() {
        (a.as_bytes(), b.as_bytes())
    } else {
        (b.as_bytes(), a.as_bytes())
    };

    if inner.is_empty() {
        return outer.len();
    }

    // prev_row[j] holds the distance between outer[..i] and inner[..j]
    let mut prev_row: Vec<usize> = (0..=inner.len()).collect();
    let mut curr_row = vec![0; inner.len() + 1];

    for (i, &outer_byte) in outer.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &inner_byte) in inner.iter().enumerate() {
            let cost = if outer_byte == inner_byte { 0 } else { 1 };

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[inner.len()]
}
