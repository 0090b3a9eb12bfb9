//! Text metrics used to grade quiz answers.

use std::collections::HashSet;

/// Common English function words ignored by [`keyword_overlap`].
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall", "can", "to",
    "of", "in", "for", "on", "with", "at", "by", "from", "as", "into", "through", "during",
    "before", "after", "above", "below", "between", "out", "off", "over", "under", "again",
    "further", "then", "once", "it", "its", "this", "that", "these", "those", "i", "me", "my",
    "we", "our", "you", "your", "he", "him", "his", "she", "her", "they", "them", "their", "what",
    "which", "who", "whom", "when", "where", "why", "how", "all", "each", "every", "both", "few",
    "more", "most", "other", "some", "such", "no", "not", "only", "same", "so", "than", "too",
    "very", "just", "about", "also", "and", "but", "or", "if", "because", "until", "while", "up",
    "down",
];

/// Minimum token length considered a keyword.
const MIN_KEYWORD_LEN: usize = 3;

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Lower-cased alphabetic tokens of at least three letters, minus stopwords.
fn keywords(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| token.len() >= MIN_KEYWORD_LEN && !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Whether two texts share at least one meaningful keyword.
pub fn keyword_overlap(user_text: &str, reference_text: &str) -> bool {
    let reference = keywords(reference_text);
    keywords(user_text)
        .iter()
        .any(|token| reference.contains(token))
}
