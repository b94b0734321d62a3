//! Title case transformation for English text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod en;

/// Error returned when a word separator cannot be used for splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SeparatorError {
    /// The separator was empty or longer than one character.
    #[error("separator must be a single character")]
    NotSingleChar,
    /// The separator was a whitespace character other than a space.
    /// Whitespace runs are collapsed to single spaces before splitting,
    /// so such a separator can never match.
    #[error("separator must not be whitespace other than a space")]
    Whitespace,
}

/// Rules for the title case transformation.
///
/// Most words get an initial capital letter, with these exceptions and
/// overrides:
///
/// 1. The first word of a sentence is capitalized.
/// 2. The last word of the title is capitalized.
/// 3. Words following an opening bracket are capitalized like first words.
/// 4. Articles, short prepositions, and conjunctions stay lowercase unless
///    rules 1-3 apply ("a", "of", "the", ...).
/// 5. A leading run of punctuation or symbols is kept as-is and the word
///    behind it is capitalized: "$$$money" becomes "$$$Money".
/// 6. Dashed compounds are formatted segment by segment:
///    "super-awesome-post" becomes "Super-Awesome-Post".
/// 7. Words that already contain an uppercase letter are never touched.
///    We assume the author knows what they are doing: "eBay", "iPad",
///    "McCormick".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCaser {
    /// The separator character between words.
    #[serde(default = "default_separator")]
    separator: char,
}

fn default_separator() -> char {
    ' '
}

impl Default for TitleCaser {
    fn default() -> Self {
        Self { separator: ' ' }
    }
}

/// A word and the character offset at which it starts in the title.
///
/// Offsets count Unicode scalar values, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexedWord {
    offset: usize,
    text: String,
}

impl TitleCaser {
    /// Construct a transformer that splits words on spaces.
    pub fn new() -> Self {
        Default::default()
    }

    /// Construct a transformer with a custom word separator.
    ///
    /// The separator must be exactly one character and must not be
    /// whitespace other than a plain space.
    pub fn with_separator(separator: &str) -> Result<Self, SeparatorError> {
        let mut chars = separator.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c == ' ' || !c.is_whitespace() => Ok(Self::for_separator(c)),
            (Some(_), None) => Err(SeparatorError::Whitespace),
            _ => Err(SeparatorError::NotSingleChar),
        }
    }

    fn for_separator(separator: char) -> Self {
        Self { separator }
    }

    /// The separator character between words.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Put the `title` argument into title case.
    ///
    /// `None`, empty, and whitespace-only input all produce an empty
    /// string. Runs of whitespace (including newlines) are collapsed to
    /// single spaces and the ends are trimmed before any word is
    /// classified.
    pub fn apply(&self, title: Option<&str>) -> String {
        let title = match title {
            Some(title) => collapse_whitespace(title),
            None => return String::new(),
        };
        if title.is_empty() {
            return String::new();
        }

        let mut chars: Vec<char> = title.chars().collect();
        let words = self.split_words(&mut chars);
        let last_text = words.last().map(|word| word.text.clone());

        for word in &words {
            // Positional equality is irrelevant here: a word recurring as
            // the literal final word counts as last everywhere.
            let is_last = Some(&word.text) == last_text.as_ref();
            if should_capitalize(&chars, word, is_last) {
                let end = word.offset + word.text.chars().count();
                // ASCII casing preserves the character count, so offsets
                // captured during the split stay valid across rewrites.
                chars.splice(word.offset..end, uppercase_word(&word.text).chars());
            }
        }

        chars.into_iter().collect()
    }

    /// Collect the words of the title together with their character
    /// offsets, skipping empty segments between repeated separators.
    ///
    /// Dashed compounds are formatted through a recursive pass with `-`
    /// as the separator and spliced back in place before any later
    /// offset is captured, since the splice may shift the tail.
    fn split_words(&self, chars: &mut Vec<char>) -> Vec<IndexedWord> {
        let mut words = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            if chars[pos] == self.separator {
                pos += 1;
                continue;
            }

            let start = pos;
            while pos < chars.len() && chars[pos] != self.separator {
                pos += 1;
            }

            let mut text: String = chars[start..pos].iter().collect();
            if is_dashed_compound(&text) {
                text = Self::for_separator('-').apply(Some(&text));
                chars.splice(start..pos, text.chars());
                pos = start + text.chars().count();
            }

            words.push(IndexedWord { offset: start, text });
        }

        words
    }
}

/// Condition to see if the given word should be capitalized.
///
/// Positional rules beat the ignore list; an existing uppercase letter
/// beats everything.
fn should_capitalize(chars: &[char], word: &IndexedWord, is_last: bool) -> bool {
    (is_sentence_start(chars, word.offset) || is_last || !is_ignored_word(&word.text))
        && !has_uppercase_letter(&word.text)
}

/// Whether the word starting at `offset` begins a new sentence.
///
/// True for the very first word, and for any word whose title character
/// two positions back is punctuation. This covers two-character sequences
/// like ". " and "! " as well as an opening bracket followed by a space.
/// Deliberately a heuristic, not a sentence parser.
fn is_sentence_start(chars: &[char], offset: usize) -> bool {
    offset == 0 || offset >= 2 && is_punctuation(chars[offset - 2])
}

/// Whether `c` counts as punctuation or a symbol.
///
/// Used both for sentence detection and for prefix stripping, so currency
/// signs, brackets, dashes, and the ellipsis all qualify.
fn is_punctuation(c: char) -> bool {
    !c.is_whitespace() && !c.is_alphanumeric()
}

/// Whether the word is on the capitalization exception list.
fn is_ignored_word(word: &str) -> bool {
    let word = word.to_ascii_lowercase();
    en::IGNORED_WORDS.binary_search(&word.as_str()).is_ok()
}

/// Whether the word already contains an uppercase ASCII letter.
fn has_uppercase_letter(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_uppercase())
}

/// Whether the word is a compound that warrants a dash-separated pass.
///
/// Pure separator runs like `---` do not qualify, so they fall through to
/// the prefix-stripping path unchanged.
fn is_dashed_compound(word: &str) -> bool {
    word.contains('-') && word.chars().filter(|&c| c != '-').count() > 1
}

/// Capitalize a single word, preserving any leading punctuation.
///
/// A leading run of punctuation or symbol characters is split off and
/// reattached unchanged. The remainder gets an uppercase first letter per
/// whitespace-delimited token and lowercase elsewhere; mid-word
/// punctuation like the asterisk in "sh*t" is left where it is.
fn uppercase_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();

    while let Some(&c) = chars.peek() {
        if !is_punctuation(c) {
            break;
        }
        out.push(c);
        chars.next();
    }

    let mut at_token_start = true;
    for c in chars {
        if c.is_whitespace() {
            at_token_start = true;
            out.push(c);
        } else if at_token_start {
            at_token_start = false;
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }

    out
}

/// Collapse all whitespace runs to single spaces and trim the ends.
fn collapse_whitespace(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_start_detection() {
        let chars: Vec<char> = "crap. oh".chars().collect();
        assert!(is_sentence_start(&chars, 0));
        assert!(is_sentence_start(&chars, 6));

        let chars: Vec<char> = "very plain".chars().collect();
        assert!(!is_sentence_start(&chars, 5));
    }

    #[test]
    fn punctuation_classes() {
        for c in ['.', '!', '?', ':', '$', '[', '*', '-', '\u{2014}', '\u{2026}'] {
            assert!(is_punctuation(c), "{c:?} should be punctuation");
        }
        for c in ['a', 'Z', '7', ' ', '\t', '\u{e9}'] {
            assert!(!is_punctuation(c), "{c:?} should not be punctuation");
        }
    }

    #[test]
    fn dashed_compound_detection() {
        assert!(is_dashed_compound("super-awesome"));
        assert!(is_dashed_compound("jet--"));
        assert!(!is_dashed_compound("plain"));
        assert!(!is_dashed_compound("---"));
        assert!(!is_dashed_compound("-a"));
    }

    #[test]
    fn uppercase_keeps_punctuation_prefix() {
        assert_eq!(uppercase_word("$$$money"), "$$$Money");
        assert_eq!(uppercase_word("[yikes"), "[Yikes");
        assert_eq!(uppercase_word("sh*t"), "Sh*t");
        assert_eq!(uppercase_word("it's"), "It's");
        assert_eq!(uppercase_word("---"), "---");
        assert_eq!(uppercase_word("1234"), "1234");
    }

    #[test]
    fn author_casing_wins() {
        let caser = TitleCaser::new();
        assert_eq!(caser.apply(Some("eBay")), "eBay");
        assert_eq!(caser.apply(Some("the LEGOS of lore")), "The LEGOS of Lore");
    }

    #[test]
    fn dash_recursion_scopes_rules_to_the_compound() {
        let caser = TitleCaser::new();
        assert_eq!(caser.apply(Some("super-awesome-post")), "Super-Awesome-Post");
        // "so" is not on the exception list; "much!" is the compound's
        // last segment.
        assert_eq!(caser.apply(Some("not-so-much!")), "Not-So-Much!");
    }

    #[test]
    fn custom_separator() {
        let caser = TitleCaser::with_separator("_").unwrap();
        assert_eq!(caser.separator(), '_');
        assert_eq!(caser.apply(Some("war_and_peace")), "War_and_Peace");
    }

    #[test]
    fn separator_validation() {
        assert_eq!(
            TitleCaser::with_separator(""),
            Err(SeparatorError::NotSingleChar)
        );
        assert_eq!(
            TitleCaser::with_separator("--"),
            Err(SeparatorError::NotSingleChar)
        );
        assert_eq!(
            TitleCaser::with_separator("\t"),
            Err(SeparatorError::Whitespace)
        );
        assert!(TitleCaser::with_separator(" ").is_ok());
        assert!(TitleCaser::with_separator("-").is_ok());
    }

    #[test]
    fn config_round_trip() {
        let caser = TitleCaser::with_separator("-").unwrap();
        let json = serde_json::to_string(&caser).unwrap();
        assert_eq!(serde_json::from_str::<TitleCaser>(&json).unwrap(), caser);

        // The separator field falls back to a space when absent.
        let caser: TitleCaser = serde_json::from_str("{}").unwrap();
        assert_eq!(caser, TitleCaser::new());
    }
}
