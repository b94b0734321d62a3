//! Exception dictionary for English titles.

/// Words that stay lowercase unless a positional rule forces
/// capitalization: articles, short prepositions, and conjunctions.
///
/// Sorted, for binary search.
pub const IGNORED_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "is", "of",
    "on", "or", "the", "to", "via", "vs",
];

#[cfg(test)]
mod tests {
    use super::IGNORED_WORDS;

    #[test]
    fn dictionary_is_sorted() {
        let mut sorted = IGNORED_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, IGNORED_WORDS);
    }
}
