//! Label text generation for numbered lists
//!
//! All functions here are pure and total: an index outside the range a
//! numbering system can express is written with arabic digits instead.

use doc_model::NumFormat;
use serde::{Deserialize, Serialize};

/// Largest value expressible in standard roman notation
const MAX_ROMAN: i64 = 3999;

/// Numbering system of a numbered list level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericStyle {
    /// 1, 2, 3, ...
    #[default]
    Arabic,
    /// A, B, ... Z, AA, AB, ... (or lowercase)
    Alphabetic { lowercase: bool },
    /// I, II, III, IV, ... (or lowercase)
    Roman { lowercase: bool },
}

impl NumericStyle {
    /// Numbering system described by a format descriptor
    ///
    /// Returns `None` when the descriptor asks for letters and numerals at once.
    pub fn from_format(format: &NumFormat) -> Option<Self> {
        match (format.alphabetical, format.roman) {
            (true, true) => None,
            (false, true) => Some(Self::Roman {
                lowercase: format.lowercase,
            }),
            (true, false) => Some(Self::Alphabetic {
                lowercase: format.lowercase,
            }),
            (false, false) => Some(Self::Arabic),
        }
    }

    /// Write an index in this numbering system
    pub fn format(&self, index: i64) -> String {
        match *self {
            NumericStyle::Arabic => index.to_string(),
            NumericStyle::Alphabetic { lowercase } => format_alphabetic(index, lowercase),
            NumericStyle::Roman { lowercase } => format_roman(index, lowercase),
        }
    }
}

/// Full label text: prefix, formatted index, suffix
///
/// Without a numbering system the label is only the prefix and suffix.
pub fn render_label(index: i64, style: Option<NumericStyle>, prefix: &str, suffix: &str) -> String {
    let mut label = String::with_capacity(prefix.len() + suffix.len() + 4);
    label.push_str(prefix);
    if let Some(style) = style {
        label.push_str(&style.format(index));
    }
    label.push_str(suffix);
    label
}

/// Format a number as letters (a, b, ... z, aa, ab, ...)
pub fn format_alphabetic(value: i64, lowercase: bool) -> String {
    if value < 1 {
        return value.to_string();
    }

    let base = if lowercase { b'a' } else { b'A' };
    let mut letters = Vec::new();
    let mut n = value;
    while n > 0 {
        n -= 1;
        letters.push((base + (n % 26) as u8) as char);
        n /= 26;
    }

    letters.iter().rev().collect()
}

/// Format a number as roman numerals using subtractive notation
pub fn format_roman(value: i64, lowercase: bool) -> String {
    if !(1..=MAX_ROMAN).contains(&value) {
        return value.to_string();
    }

    let numerals = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut result = String::new();
    let mut n = value;
    for (num, roman) in numerals {
        while n >= num {
            result.push_str(roman);
            n -= num;
        }
    }

    if lowercase {
        result.to_lowercase()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_alphabetic() {
        assert_eq!(format_alphabetic(1, false), "A");
        assert_eq!(format_alphabetic(26, false), "Z");
        assert_eq!(format_alphabetic(27, false), "AA");
        assert_eq!(format_alphabetic(28, false), "AB");
        assert_eq!(format_alphabetic(52, false), "AZ");
        assert_eq!(format_alphabetic(703, false), "AAA");
        assert_eq!(format_alphabetic(1, true), "a");
        assert_eq!(format_alphabetic(26, true), "z");
        assert_eq!(format_alphabetic(27, true), "aa");
    }

    #[test]
    fn test_format_roman() {
        assert_eq!(format_roman(1, false), "I");
        assert_eq!(format_roman(4, false), "IV");
        assert_eq!(format_roman(9, false), "IX");
        assert_eq!(format_roman(40, false), "XL");
        assert_eq!(format_roman(90, false), "XC");
        assert_eq!(format_roman(1994, false), "MCMXCIV");
        assert_eq!(format_roman(3999, false), "MMMCMXCIX");
        assert_eq!(format_roman(1, true), "i");
        assert_eq!(format_roman(4, true), "iv");
        assert_eq!(format_roman(1994, true), "mcmxciv");
    }

    #[test]
    fn test_out_of_range_falls_back_to_digits() {
        assert_eq!(format_alphabetic(0, false), "0");
        assert_eq!(format_alphabetic(-3, true), "-3");
        assert_eq!(format_roman(0, false), "0");
        assert_eq!(format_roman(4000, false), "4000");
    }

    #[test]
    fn test_render_label_with_affixes() {
        assert_eq!(render_label(5, Some(NumericStyle::Arabic), "(", ")"), "(5)");
        assert_eq!(
            render_label(3, Some(NumericStyle::Alphabetic { lowercase: true }), "", "."),
            "c."
        );
        assert_eq!(
            render_label(12, Some(NumericStyle::Roman { lowercase: false }), "Chapter ", ":"),
            "Chapter XII:"
        );
    }

    #[test]
    fn test_render_label_without_numbering() {
        assert_eq!(render_label(7, None, "", ")"), ")");
        assert_eq!(render_label(1, None, "\u{00A7} ", ""), "\u{00A7} ");
        assert_eq!(render_label(1, None, "", ""), "");
    }

    #[test]
    fn test_style_from_format() {
        assert_eq!(
            NumericStyle::from_format(&NumFormat::arabic()),
            Some(NumericStyle::Arabic)
        );
        assert_eq!(
            NumericStyle::from_format(&NumFormat::alphabetical(true)),
            Some(NumericStyle::Alphabetic { lowercase: true })
        );
        assert_eq!(
            NumericStyle::from_format(&NumFormat::roman(false)),
            Some(NumericStyle::Roman { lowercase: false })
        );

        let contradictory = NumFormat {
            alphabetical: true,
            roman: true,
            lowercase: false,
        };
        assert_eq!(NumericStyle::from_format(&contradictory), None);
    }

    proptest! {
        #[test]
        fn prop_lowercase_is_lowercased_uppercase(n in 1i64..5000) {
            prop_assert_eq!(format_alphabetic(n, true), format_alphabetic(n, false).to_lowercase());
            prop_assert_eq!(format_roman(n, true), format_roman(n, false).to_lowercase());
        }

        #[test]
        fn prop_alphabetic_is_bijective_base_26(n in 1i64..1_000_000) {
            let letters = format_alphabetic(n, false);
            let decoded = letters
                .bytes()
                .fold(0i64, |acc, b| acc * 26 + i64::from(b - b'A' + 1));
            prop_assert_eq!(decoded, n);
        }

        #[test]
        fn prop_roman_uses_only_numeral_letters(n in 1i64..=3999) {
            let roman = format_roman(n, false);
            prop_assert!(!roman.is_empty());
            prop_assert!(roman.chars().all(|c| "MDCLXVI".contains(c)));
            prop_assert!(!roman.contains("IIII"));
            prop_assert!(!roman.contains("XXXX"));
        }
    }
}
