//! Text file statistics
//!
//! Pure counting functions over an ordered sequence of lines. Lines are
//! right-trimmed at ingestion (see [`crate::io::read_lines`]); nothing in
//! this module touches the filesystem.
//!
//! # Counting Rules
//!
//! - **Lines**: the length of the sequence.
//! - **Words**: whitespace-delimited tokens across all lines, punctuation
//!   included.
//! - **Characters**: non-space characters, with the word-level punctuation
//!   strip rule applied to each character on its own; a character that is
//!   itself punctuation strips to empty and drops out of the count.
//! - **Longest lines**: maximum raw character length; ties are returned
//!   right-trimmed, as a set.
//! - **Longest words**: maximum character length after stripping leading and
//!   trailing punctuation from each token; ties are returned as a set.
//!
//! ## Character-count quirk
//!
//! `count_chars` excludes punctuation while `count_words` includes it: the
//! comma in `a,b` contributes to the word total but not to the character
//! total. That asymmetry comes from applying a word-level strip rule to
//! single characters and is kept as-is; tests pin it down.
//!
//! All lengths are Unicode scalar counts, not byte counts.

use crate::core::CountSummary;
use std::collections::BTreeSet;

/// Strip leading and trailing ASCII punctuation from a word.
fn trim_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Character length in Unicode scalars.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Number of lines in the sequence.
pub fn count_lines(lines: &[String]) -> usize {
    lines.len()
}

/// Total whitespace-delimited words across all lines, punctuation included.
pub fn count_words(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| line.split_whitespace().count())
        .sum()
}

/// Non-space characters across all lines, excluding characters that are
/// themselves punctuation (see the module docs for the quirk this keeps).
pub fn count_chars(lines: &[String]) -> usize {
    lines
        .iter()
        .flat_map(|line| line.chars())
        .filter(|&c| c != ' ' && !c.is_ascii_punctuation())
        .count()
}

/// Every line attaining the maximum raw character length, right-trimmed.
///
/// Duplicate content collapses to one entry. Empty input yields an empty
/// set.
pub fn longest_lines(lines: &[String]) -> BTreeSet<String> {
    let Some(max) = lines.iter().map(|line| char_len(line)).max() else {
        return BTreeSet::new();
    };

    lines
        .iter()
        .filter(|line| char_len(line) == max)
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Every stripped word attaining the maximum stripped character length.
///
/// Words are whitespace-delimited tokens with leading and trailing
/// punctuation removed before comparison. Input with no words yields an
/// empty set.
pub fn longest_words(lines: &[String]) -> BTreeSet<String> {
    let stripped: Vec<&str> = lines
        .iter()
        .flat_map(|line| line.split_whitespace())
        .map(trim_punctuation)
        .collect();

    let Some(max) = stripped.iter().map(|word| char_len(word)).max() else {
        return BTreeSet::new();
    };

    stripped
        .into_iter()
        .filter(|word| char_len(word) == max)
        .map(str::to_string)
        .collect()
}

/// Compute the aggregate counts for the sequence.
pub fn summarize(lines: &[String]) -> CountSummary {
    CountSummary {
        lines: count_lines(lines),
        words: count_words(lines),
        chars: count_chars(lines),
    }
}
