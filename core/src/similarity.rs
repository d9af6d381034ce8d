//! Name similarity used for "did you mean" suggestions and filtered help.
//!
//! Two strings are compared in tiers, strongest first: substring
//! containment, Levenshtein edit distance, then character-set histogram
//! overlap. [`is_similar`] reports the first tier that matches.
//!
//! # Examples
//!
//! ```
//! use paramkit_core::similarity::{Similarity, is_similar};
//!
//! assert_eq!(is_similar("pdec", "pdecc"), Similarity::Substring);
//! assert_eq!(is_similar("pdec", "pdc"), Similarity::EditDistance);
//! assert_eq!(is_similar("listen", "silent"), Similarity::Histogram);
//! assert_eq!(is_similar("xyz", "abcuvw"), Similarity::None);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Strings at or above this length (in chars) are not compared by edit
/// distance.
pub const LEVENSHTEIN_MAX_LEN: usize = 100;

/// Similarity tier, ordered from weakest to strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Similarity {
    /// Nothing in common.
    #[default]
    None,
    /// Same set of distinct characters.
    Histogram,
    /// Close in edit distance.
    EditDistance,
    /// One string contains the other.
    Substring,
}

impl Similarity {
    /// Returns `true` for any tier other than [`Similarity::None`].
    pub fn is_match(self) -> bool {
        self != Self::None
    }
}

/// Case-insensitive containment test in either direction.
///
/// Empty strings never match.
pub fn has_keyword(text: &str, keyword: &str) -> Similarity {
    if text.is_empty() || keyword.is_empty() {
        return Similarity::None;
    }
    let text = text.to_lowercase();
    let keyword = keyword.to_lowercase();
    if text.contains(&keyword) || keyword.contains(&text) {
        Similarity::Substring
    } else {
        Similarity::None
    }
}

/// Levenshtein distance between `a` and `b`, counted in chars.
///
/// Returns `None` when either string reaches [`LEVENSHTEIN_MAX_LEN`].
pub fn levenshtein(a: &str, b: &str) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len() >= LEVENSHTEIN_MAX_LEN || b.len() >= LEVENSHTEIN_MAX_LEN {
        return None;
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut row = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            row[j + 1] = substitution.min(prev[j + 1] + 1).min(row[j] + 1);
        }
        std::mem::swap(&mut prev, &mut row);
    }
    Some(prev[b.len()])
}

/// Returns `true` if every distinct character of each string (case-folded)
/// also occurs in the other.
pub fn has_similar_histogram(a: &str, b: &str) -> bool {
    let chars_a: BTreeSet<char> = a.chars().flat_map(char::to_lowercase).collect();
    let chars_b: BTreeSet<char> = b.chars().flat_map(char::to_lowercase).collect();
    !chars_a.is_empty() && chars_a == chars_b
}

/// Classifies how similar a declared `candidate` name is to a user-typed
/// `filter`, returning the strongest matching tier.
pub fn is_similar(candidate: &str, filter: &str) -> Similarity {
    if candidate.is_empty() || filter.is_empty() {
        return Similarity::None;
    }
    if has_keyword(candidate, filter).is_match() {
        return Similarity::Substring;
    }

    let folded_candidate = candidate.to_lowercase();
    let folded_filter = filter.to_lowercase();
    if let Some(distance) = levenshtein(&folded_filter, &folded_candidate) {
        let candidate_len = folded_candidate.chars().count();
        let filter_len = folded_filter.chars().count();
        let close = distance == 1 || distance <= candidate_len / 2;
        let degenerate = distance >= candidate_len || distance >= filter_len;
        if close && !degenerate {
            return Similarity::EditDistance;
        }
    }

    if has_similar_histogram(filter, candidate) {
        return Similarity::Histogram;
    }
    Similarity::None
}

/// Searches free text (a description) for `keyword`.
///
/// Reports [`Similarity::Substring`] when the text contains the keyword and
/// [`Similarity::Histogram`] when a single word of the text has the same
/// characters as the keyword.
pub fn find_keyword(text: &str, keyword: &str) -> Similarity {
    if has_keyword(text, keyword).is_match() {
        return Similarity::Substring;
    }
    if keyword.is_empty() {
        return Similarity::None;
    }
    let word_match = text
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .any(|word| has_similar_histogram(word, keyword));
    if word_match {
        Similarity::Histogram
    } else {
        Similarity::None
    }
}
