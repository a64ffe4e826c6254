//! Century extraction from free text.
//!
//! Two extractors produce a set of century numbers:
//!
//! - **Roman text**: standalone Roman numeral tokens (`XVI`, `xix`), plus the
//!   French ordinal form written in capitals (`XVIe`, `XIXème`, `Ier`) when it
//!   decodes to at most [`MAX_BARE_CENTURY`].
//! - **Numeric years**: digit runs, where `n <= 30` is a bare century and
//!   anything larger is a calendar year.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::roman::{roman_to_int, to_roman};

/// Largest number read as a century rather than a year, and largest value an
/// ordinal-suffixed numeral may decode to.
pub const MAX_BARE_CENTURY: u32 = 30;

/// Standalone Roman numerals, any case.
static ROMAN_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[IVXLCDM]+\b").expect("Invalid Roman token regex"));

/// Capital Roman numerals carrying a French ordinal suffix.
///
/// Lowercase words such as `de` or `le` must never match, hence no `(?i)`.
/// Capitalised words (`De`, `Le`, `Ce`, `Me`) still match and are dropped by
/// the century bound in [`roman_tokens`].
static ROMAN_ORDINAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([IVXLCDM]+)(?:er|ème|eme|e)\b").expect("Invalid Roman ordinal regex")
});

static DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digit run regex"));

/// Century of a calendar year; year 1500 is in century 15, 1501 in 16.
pub fn century_of_year(year: u32) -> u32 {
    year.saturating_sub(1) / 100 + 1
}

/// Century designated by a number found in text, or `None` for zero.
pub fn century_of_number(n: u32) -> Option<u32> {
    match n {
        0 => None,
        1..=MAX_BARE_CENTURY => Some(n),
        _ => Some(century_of_year(n)),
    }
}

/// Centuries named by digit runs in `text`.
///
/// Returns `None` when no run yields a century.
pub fn numeric_centuries(text: &str) -> Option<BTreeSet<u32>> {
    let centuries: BTreeSet<u32> = DIGITS_REGEX
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .filter_map(century_of_number)
        .collect();
    (!centuries.is_empty()).then_some(centuries)
}

fn roman_tokens(text: &str) -> Vec<&str> {
    let bare = ROMAN_TOKEN_REGEX.find_iter(text).map(|m| m.as_str());
    let ordinal = ROMAN_ORDINAL_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|token| roman_to_int(token).is_some_and(|n| n <= MAX_BARE_CENTURY));
    bare.chain(ordinal).collect()
}

/// Centuries named by Roman numerals in `text`.
///
/// Falls back to [`numeric_centuries`] only when the text holds no Roman token
/// at all; tokens that fail to decode do not trigger the fallback.
pub fn roman_centuries(text: &str) -> Option<BTreeSet<u32>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let tokens = roman_tokens(text);
    if tokens.is_empty() {
        return numeric_centuries(text);
    }
    let centuries: BTreeSet<u32> = tokens.into_iter().filter_map(roman_to_int).collect();
    (!centuries.is_empty()).then_some(centuries)
}

/// Renders `XVIe` for one century, `XVIe–XIXe` (en dash) for several.
///
/// Only the endpoints of a span are shown.
pub fn render_label(centuries: &BTreeSet<u32>) -> Option<String> {
    let first = centuries.first()?;
    let last = centuries.last()?;
    if first == last {
        Some(format!("{}e", to_roman(*first)))
    } else {
        Some(format!("{}e–{}e", to_roman(*first), to_roman(*last)))
    }
}

/// Century label from text holding years or bare century numbers.
pub fn label_from_years(text: &str) -> Option<String> {
    numeric_centuries(text).as_ref().and_then(render_label)
}

/// Century label from text holding Roman centuries, with the numeric fallback.
pub fn label_from_roman_text(text: &str) -> Option<String> {
    roman_centuries(text).as_ref().and_then(render_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_boundaries() {
        assert_eq!(century_of_year(1500), 15);
        assert_eq!(century_of_year(1501), 16);
        assert_eq!(century_of_year(100), 1);
        assert_eq!(century_of_year(101), 2);
    }

    #[test]
    fn small_numbers_are_centuries() {
        assert_eq!(century_of_number(16), Some(16));
        assert_eq!(century_of_number(30), Some(30));
        assert_eq!(century_of_number(31), Some(1));
        assert_eq!(century_of_number(0), None);
    }

    #[test]
    fn numeric_ignores_overflowing_runs() {
        assert_eq!(
            numeric_centuries("99999999999999999999 ; 1620"),
            Some(BTreeSet::from([17]))
        );
        assert_eq!(numeric_centuries("sans date"), None);
        assert_eq!(numeric_centuries("0"), None);
    }

    #[test]
    fn roman_tokens_include_ordinals() {
        assert_eq!(
            roman_centuries("XVIe s. ; XIXe s."),
            Some(BTreeSet::from([16, 19]))
        );
        assert_eq!(roman_centuries("XIIème siècle"), Some(BTreeSet::from([12])));
        assert_eq!(roman_centuries("Ier s."), Some(BTreeSet::from([1])));
        assert_eq!(roman_centuries("xvi"), Some(BTreeSet::from([16])));
    }

    #[test]
    fn lowercase_words_with_suffix_are_not_numerals() {
        // "de" would decode to 500 if ordinals were case-insensitive
        assert_eq!(
            roman_centuries("XVe de la fin"),
            Some(BTreeSet::from([15]))
        );
    }

    #[test]
    fn capitalised_words_with_suffix_are_not_numerals() {
        assert_eq!(
            label_from_roman_text("De la fin du XVe"),
            Some("XVe".to_string())
        );
        assert_eq!(label_from_roman_text("Le XVIe"), Some("XVIe".to_string()));
        assert_eq!(label_from_roman_text("Ce logis"), None);
        assert_eq!(
            label_from_roman_text("Me 1620"),
            Some("XVIIe".to_string())
        );
        assert_eq!(label_from_roman_text("Ve et Xe"), Some("Ve–Xe".to_string()));
    }

    #[test]
    fn words_made_of_roman_letters_decode() {
        // known imprecision: "civil" reads as C + (L - I - V - I)
        assert_eq!(roman_centuries("bâti civil"), Some(BTreeSet::from([143])));
    }

    #[test]
    fn roman_falls_back_to_digits() {
        assert_eq!(
            roman_centuries("16e siècle;19e siècle"),
            Some(BTreeSet::from([16, 19]))
        );
        assert_eq!(roman_centuries("   "), None);
    }

    #[test]
    fn render_single_and_span() {
        assert_eq!(render_label(&BTreeSet::from([16])), Some("XVIe".to_string()));
        assert_eq!(
            render_label(&BTreeSet::from([19, 12, 16])),
            Some("XIIe–XIXe".to_string())
        );
        assert_eq!(render_label(&BTreeSet::new()), None);
    }
}
