/*!
Titlecaser converts arbitrary strings into English title case: most words
get an initial capital letter, while a fixed set of minor words (articles,
short prepositions, conjunctions) stays lowercase unless a stronger
positional rule applies. Sentence boundaries, bracketed clauses, dashed
compounds, punctuation prefixes, and words with intentional casing such as
brand names are all handled.

The crate is a pure library: one synchronous transformation over a private
string buffer, safe to call from any number of threads.

# Usage

```rust
use titlecaser::title_case;

assert_eq!(title_case(Some("this sh*t is a test")), "This Sh*t is a Test");
assert_eq!(
    title_case(Some("i think eBay is the greatest site!")),
    "I Think eBay is the Greatest Site!"
);

// Degenerate input degrades to an empty result instead of failing.
assert_eq!(title_case(None), "");
assert_eq!(title_case(Some("   \n  ")), "");
```

Words are separated by spaces by default. A [`TitleCaser`] with a custom
separator can be built for other conventions; the capitalization rules are
then scoped between separators in the same way:

```rust
use titlecaser::TitleCaser;

let caser = TitleCaser::with_separator("-").unwrap();
assert_eq!(caser.apply(Some("state-of-the-art")), "State-of-the-Art");
```

# Rules

1. The first word of a sentence is capitalized. Sentence starts are
   detected with a punctuation heuristic, not a grammar: a word counts as
   sentence-initial when the character two positions before it is
   punctuation, which covers `. `, `! `, `? `, `: `, and an opening
   bracket followed by a space.
2. The last word of the title is capitalized, even if it is a minor word.
3. Minor words like "a", "of", and "the" otherwise keep their lowercase
   form.
4. Leading punctuation is preserved and skipped: `$$$money` becomes
   `$$$Money`.
5. Dashed compounds are formatted segment by segment with the same rules:
   `not-so-much!` becomes `Not-So-Much!`.
6. A word that already contains an uppercase letter is left untouched,
   wherever it appears. The author knows best: `eBay`, `McCormick`,
   `LEGOS`.

Only ASCII casing is applied; offsets are tracked in Unicode scalar
values, so non-ASCII text passes through unharmed.
*/

#![warn(missing_docs)]

pub mod lang;

pub use lang::{SeparatorError, TitleCaser};

/// Convert `title` to title case with the default space separator.
///
/// `None`, empty, and whitespace-only input all yield an empty string.
pub fn title_case(title: Option<&str>) -> String {
    TitleCaser::new().apply(title)
}
