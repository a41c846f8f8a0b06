//! Russian grammatical-number agreement.
//!
//! A count selects one of three noun forms {singular, few, many} via
//! the standard Slavic rule; the month/year helpers compose it into
//! human phrases for loan terms and similar durations.

const MONTHS_IN_YEAR: u64 = 12;

/// Title set for months: 1 месяц, 2 месяца, 5 месяцев.
pub const TITLES_MONTHS: [&str; 3] = ["месяц", "месяца", "месяцев"];

/// Title set for years: 1 год, 2 года, 5 лет.
pub const TITLES_YEARS: [&str; 3] = ["год", "года", "лет"];

/// Select the grammatically correct title for a count.
///
/// Counts ending in 5..=20 (by `% 100`) always take the "many" form;
/// otherwise the last digit decides: 1 is singular, 2..=4 few,
/// everything else many.
pub fn decl_of_num<'a>(number: u64, titles: &[&'a str; 3]) -> &'a str {
    let tail = number % 100;
    if (5..20).contains(&tail) {
        return titles[2];
    }
    match number % 10 {
        1 => titles[0],
        2..=4 => titles[1],
        _ => titles[2],
    }
}

/// Format a month count, collapsing to years where possible:
/// `3 месяца`, `2 года`, `2 года 3 месяца`.
pub fn format_months(number: u64) -> String {
    let months = number % MONTHS_IN_YEAR;
    let years = number / MONTHS_IN_YEAR;

    if years == 0 {
        return format!("{} {}", months, decl_of_num(months, &TITLES_MONTHS));
    }
    if months == 0 {
        return format!("{} {}", years, decl_of_num(years, &TITLES_YEARS));
    }
    format!(
        "{} {} {} {}",
        years,
        decl_of_num(years, &TITLES_YEARS),
        months,
        decl_of_num(months, &TITLES_MONTHS)
    )
}

/// Format a month count without collapsing: `15 месяцев`.
pub fn format_only_months(months: u64) -> String {
    format!("{} {}", months, decl_of_num(months, &TITLES_MONTHS))
}

/// Format in years when the count is an exact number of years,
/// otherwise in months only.
pub fn format_year_or_months(months: u64) -> String {
    if months % MONTHS_IN_YEAR != 0 {
        return format_only_months(months);
    }
    format_months(months)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declension_by_last_digit() {
        assert_eq!(decl_of_num(1, &TITLES_MONTHS), "месяц");
        assert_eq!(decl_of_num(2, &TITLES_MONTHS), "месяца");
        assert_eq!(decl_of_num(4, &TITLES_MONTHS), "месяца");
        assert_eq!(decl_of_num(5, &TITLES_MONTHS), "месяцев");
        assert_eq!(decl_of_num(0, &TITLES_MONTHS), "месяцев");
    }

    #[test]
    fn test_declension_teens_are_many() {
        for n in 5..20 {
            assert_eq!(decl_of_num(n, &TITLES_YEARS), "лет", "n = {}", n);
        }
        assert_eq!(decl_of_num(21, &TITLES_YEARS), "год");
        assert_eq!(decl_of_num(22, &TITLES_YEARS), "года");
        assert_eq!(decl_of_num(111, &TITLES_YEARS), "лет");
        assert_eq!(decl_of_num(112, &TITLES_YEARS), "лет");
    }

    #[test]
    fn test_declension_stable_modulo_100() {
        for n in 0..100u64 {
            assert_eq!(
                decl_of_num(n, &TITLES_MONTHS),
                decl_of_num(n + 100, &TITLES_MONTHS),
                "n = {}",
                n
            );
        }
    }

    #[test]
    fn test_format_months() {
        assert_eq!(format_months(3), "3 месяца");
        assert_eq!(format_months(12), "1 год");
        assert_eq!(format_months(24), "2 года");
        assert_eq!(format_months(15), "1 год 3 месяца");
        assert_eq!(format_months(0), "0 месяцев");
    }

    #[test]
    fn test_format_only_months() {
        assert_eq!(format_only_months(15), "15 месяцев");
        assert_eq!(format_only_months(1), "1 месяц");
    }

    #[test]
    fn test_format_year_or_months() {
        assert_eq!(format_year_or_months(15), "15 месяцев");
        assert_eq!(format_year_or_months(24), "2 года");
        assert_eq!(format_year_or_months(12), "1 год");
    }
}
