//! Locale and format-symbol configuration.
//!
//! All locale data is immutable and constructed once; functions receive
//! it explicitly instead of consulting process-wide formatter state.

use chrono::Locale;

use crate::value::{RenderError, RenderResult};

/// The base locale every function defaults to.
pub const BASE_LOCALE: Locale = Locale::ru_RU;

/// Symbols used when rendering grouped decimal amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericSymbols {
    /// Separator between thousands groups
    pub group_separator: char,
    /// Separator before the fractional digits
    pub decimal_separator: char,
}

impl Default for NumericSymbols {
    fn default() -> Self {
        Self {
            group_separator: ' ',
            decimal_separator: '.',
        }
    }
}

impl NumericSymbols {
    /// Symbols with a custom decimal separator.
    pub fn with_decimal_separator(separator: char) -> Self {
        Self {
            decimal_separator: separator,
            ..Self::default()
        }
    }

    /// Symbols with a custom grouping separator.
    pub fn with_group_separator(separator: char) -> Self {
        Self {
            group_separator: separator,
            ..Self::default()
        }
    }
}

/// Russian month names in the genitive case, as used inside a dated
/// phrase («5» января 2024г.).
const RU_MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Genitive Russian month name for a 1-based month number.
pub fn month_genitive(month: u32) -> &'static str {
    RU_MONTHS_GENITIVE[(month as usize - 1) % 12]
}

/// Resolve a locale tag supplied by a template to a chrono locale.
///
/// Short tags for the languages reports actually use are mapped
/// directly; anything else must be a full `ll_CC` tag. An unknown tag
/// is a typed error rather than a silent fallback.
pub fn resolve_locale(tag: &str) -> RenderResult<Locale> {
    match tag {
        "ru" => Ok(Locale::ru_RU),
        "en" => Ok(Locale::en_US),
        other => Locale::try_from(other).map_err(|_| RenderError::locale(other)),
    }
}
