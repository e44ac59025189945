//! Reference ordering
//!
//! Bibliography entries are listed alphabetically as a Portuguese reader would
//! expect: `Árvore` sorts next to `arvore`, not after `Zebra`. The comparison
//! runs in levels, the way locale collation does:
//!
//! 1. base letters, ignoring accents and case (`ç` compares as `c`), with
//!    whitespace before punctuation before digits before letters;
//! 2. accents (unaccented first);
//! 3. case (lowercase first);
//! 4. raw code points, so distinct strings never compare equal.
//!
//! The sort is stable; identical entries keep their input order.

use super::document::is_present;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Drop blank entries and sort the rest.
pub fn order_references<S: AsRef<str>>(references: &[S]) -> Vec<String> {
    let mut ordered: Vec<String> = references
        .iter()
        .map(|reference| -> &str { reference.as_ref() })
        .filter(|reference| is_present(reference))
        .map(str::to_string)
        .collect();
    ordered.sort_by_cached_key(|reference| CollationKey::new(reference));
    tracing::trace!(
        kept = ordered.len(),
        dropped = references.len() - ordered.len(),
        "ordered references"
    );
    ordered
}

/// Compare two strings with the collation used for references.
pub fn collate(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_whitespace() {
            CharClass::Whitespace
        } else if ch.is_numeric() {
            CharClass::Digit
        } else if ch.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Punctuation
        }
    }
}

/// Field order is the comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<bool>,
    raw: String,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        let mut primary = Vec::new();
        let mut secondary: Vec<Vec<char>> = Vec::new();
        let mut tertiary = Vec::new();

        for ch in text.nfd() {
            if is_combining_mark(ch) {
                match secondary.last_mut() {
                    Some(marks) => marks.push(ch),
                    // A leading mark has no base to attach to; weigh it as its own symbol.
                    None => {
                        primary.push((CharClass::Punctuation, ch));
                        secondary.push(Vec::new());
                        tertiary.push(false);
                    }
                }
                continue;
            }
            let class = CharClass::of(ch);
            for lower in ch.to_lowercase() {
                primary.push((class, lower));
                secondary.push(Vec::new());
                tertiary.push(ch.is_uppercase());
            }
        }

        CollationKey {
            primary,
            secondary,
            tertiary,
            raw: text.to_string(),
        }
    }
}
