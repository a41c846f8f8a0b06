//! Masked identifier rendering for cards, accounts and document codes.
//!
//! Masking substitutes characters inside a fixed window and inserts
//! separators at fixed offsets; it never drops characters. Malformed
//! masks fail open: the original value is returned so a report renders
//! with an unmasked field rather than aborting.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

const CARD_NUMBER_18_CHARS: usize = 18;
const MASK_CHAR: char = '*';
const SEPARATOR: char = ' ';

lazy_static! {
    static ref ISSUER_CODE_PLAIN: Regex = Regex::new(r"^\d{6}$").unwrap();
    static ref ISSUER_CODE_MASKED: Regex = Regex::new(r"^\d{3}-\d{3}$").unwrap();
}

/// Format a card number for display.
///
/// Numbers shorter than 18 characters get a separator every 4 and the
/// mask window 6..=11; longer numbers shift both by one position. The
/// character count is preserved exactly.
pub fn format_card_number(card_number: &str) -> String {
    let chars: Vec<char> = card_number.trim().chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    if chars.len() < CARD_NUMBER_18_CHARS {
        layout(&chars, &[4, 8, 12], 6..12)
    } else {
        layout(&chars, &[5, 9, 13], 7..13)
    }
}

/// Format an account number: separators before offsets 3, 5 and 8,
/// no masking.
pub fn format_account_number(account_number: &str) -> String {
    let chars: Vec<char> = account_number.trim().chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    layout(&chars, &[3, 5, 8], 0..0)
}

fn layout(chars: &[char], breaks: &[usize], mask: Range<usize>) -> String {
    let mut out = String::with_capacity(chars.len() + breaks.len());
    for (i, &c) in chars.iter().enumerate() {
        if breaks.contains(&i) {
            out.push(SEPARATOR);
        }
        out.push(if mask.contains(&i) { MASK_CHAR } else { c });
    }
    out
}

/// Apply a fixed-width input mask to a value.
///
/// Mask characters: `#` digit, `?` letter, `U`/`L` letter mapped to
/// upper/lower case, `A` letter or digit, `H` hex digit, `*` anything,
/// `'` escapes the next character; everything else is a literal
/// inserted into the output. The value supplies placeholder positions
/// only. Any mismatch returns the value unchanged.
pub fn mask_string(value: &str, mask: &str) -> String {
    apply_mask(value, mask).unwrap_or_else(|| value.to_string())
}

fn apply_mask(value: &str, mask: &str) -> Option<String> {
    let mut out = String::with_capacity(mask.len());
    let mut values = value.chars();
    let mut mask_chars = mask.chars();

    while let Some(m) = mask_chars.next() {
        match m {
            // Dangling escape is a malformed mask
            '\'' => out.push(mask_chars.next()?),
            '#' | '?' | 'A' | '*' | 'U' | 'L' | 'H' => {
                let c = values.next()?;
                let accepted = match m {
                    '#' => c.is_ascii_digit(),
                    '?' | 'U' | 'L' => c.is_alphabetic(),
                    'A' => c.is_alphanumeric(),
                    'H' => c.is_ascii_hexdigit(),
                    _ => true,
                };
                if !accepted {
                    return None;
                }
                match m {
                    'U' => out.extend(c.to_uppercase()),
                    'L' => out.extend(c.to_lowercase()),
                    _ => out.push(c),
                }
            }
            literal => out.push(literal),
        }
    }

    // Leftover value characters do not fit the mask
    if values.next().is_some() {
        return None;
    }
    Some(out)
}

/// Render a 6-digit document issuer code as `XXX-XXX`; anything
/// already in that form, or not a 6-digit string, passes through.
pub fn mask_client_doc_issuer_code(input: &str) -> String {
    if ISSUER_CODE_MASKED.is_match(input) {
        return input.to_string();
    }
    if ISSUER_CODE_PLAIN.is_match(input) {
        return format!("{}-{}", &input[..3], &input[3..]);
    }
    input.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_under_18_chars() {
        assert_eq!(format_card_number("1234567890123456"), "1234 56** **** 3456");
    }

    #[test]
    fn test_card_number_18_chars_shifts_layout() {
        assert_eq!(
            format_card_number("123456789012345678"),
            "12345 67** **** 45678"
        );
    }

    #[test]
    fn test_card_number_preserves_character_count() {
        for input in ["1234567890123456", "123456789012345678", "1234"] {
            let formatted = format_card_number(input);
            let without_separators: String =
                formatted.chars().filter(|c| *c != SEPARATOR).collect();
            assert_eq!(without_separators.chars().count(), input.chars().count());
        }
    }

    #[test]
    fn test_card_number_trims_and_handles_empty() {
        assert_eq!(format_card_number(""), "");
        assert_eq!(format_card_number("  1234  "), "1234");
    }

    #[test]
    fn test_account_number() {
        assert_eq!(format_account_number("40817810000012345678"), "408 17 810 000012345678");
        assert_eq!(format_account_number(""), "");
    }

    #[test]
    fn test_mask_string_applies_template() {
        assert_eq!(mask_string("1234567890", "(###) ###-##-##"), "(123) 456-78-90");
        assert_eq!(mask_string("ab12", "UU-##"), "AB-12");
    }

    #[test]
    fn test_mask_string_escapes_literal() {
        assert_eq!(mask_string("77", "'#=##"), "#=77");
    }

    #[test]
    fn test_mask_string_fails_open() {
        // Value too short for the mask
        assert_eq!(mask_string("12", "####"), "12");
        // Value too long for the mask
        assert_eq!(mask_string("12345", "####"), "12345");
        // Character class mismatch
        assert_eq!(mask_string("12ab", "####"), "12ab");
        // Dangling escape in the mask itself
        assert_eq!(mask_string("12", "##'"), "12");
    }

    #[test]
    fn test_issuer_code() {
        assert_eq!(mask_client_doc_issuer_code("123456"), "123-456");
        assert_eq!(mask_client_doc_issuer_code("123-456"), "123-456");
        assert_eq!(mask_client_doc_issuer_code("12x456"), "12x456");
        assert_eq!(mask_client_doc_issuer_code("1234567"), "1234567");
    }
}
