//! Small text utilities: fallbacks, fixed markup, word-boundary
//! splitting, list joining, names, phones and addresses.
//!
//! Missing or non-matching input generally degrades to a defined
//! fallback or passes through unchanged; a rendered document with one
//! plain field beats an aborted render.

use lazy_static::lazy_static;
use regex::Regex;

use crate::value::{RenderError, RenderResult, Value};

const HTML_SPACE: &str = "&nbsp";

lazy_static! {
    static ref MOBILE_RE: Regex =
        Regex::new(r"^\+?[78]?(\d{3})(\d{3})(\d{2})(\d{2})$").unwrap();
}

/// Substitute a default when the value is absent or displays as empty
/// or blank.
pub fn default_if_empty(value: &Value, default_value: &str) -> String {
    if value.is_none() {
        return default_value.to_string();
    }
    let text = value.display();
    if text.trim().is_empty() {
        default_value.to_string()
    } else {
        text
    }
}

/// Render a yes/no answer; an absent value renders as a bold dash.
pub fn yes_no(value: Option<bool>) -> String {
    match value {
        None => "<b> - </b>".to_string(),
        Some(true) => "<b> Да </b>".to_string(),
        Some(false) => "<b> Нет </b>".to_string(),
    }
}

/// Checkbox glyph with a gray background.
pub fn gray_checkbox(checked: bool) -> String {
    format!(
        "<span style=\"font-family:'Symbols'; background-color:'#C2C2C2';font-weight:'bold'\">{}</span>",
        if checked { "&#x1F5F9;" } else { "&#9744;" }
    )
}

/// Checkbox glyph.
pub fn checkbox(checked: bool) -> String {
    format!(
        "<span style=\"font-family:'Symbols'\">{}</span>",
        if checked { "&#x1f5f7;" } else { "&#9744;" }
    )
}

/// Checked or unchecked ballot-box glyph.
pub fn checkmark(checked: bool) -> String {
    format!(
        "<span style=\"font-family:'Symbols'\">{}</span>",
        if checked { "&#9745;" } else { "&#9744;" }
    )
}

/// Checkmark glyph, or an empty span when unchecked.
pub fn checkmark_or_empty(checked: bool) -> String {
    format!(
        "<span style=\"font-family:'Symbols'\">{}</span>",
        if checked { "&#10004;" } else { "" }
    )
}

/// Wrap a value's display form in bold markup.
pub fn make_bold(content: &Value) -> String {
    format!("<b>{}</b>", content.display())
}

/// Join non-empty, non-blank values with a separator, wrapping the
/// whole result in a prefix and suffix.
fn build_joined<'a, I>(values: I, separator: &str, prefix: &str, suffix: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect::<Vec<_>>()
        .join(separator);
    format!("{}{}{}", prefix, joined, suffix)
}

/// Join values with a separator, skipping empty and blank entries.
pub fn values_array(separator: &str, values: &[String]) -> String {
    build_joined(values.iter().map(String::as_str), separator, "", "")
}

/// All-or-nothing join: `None` when any value is empty or blank.
pub fn values_array_if_exists(separator: &str, values: &[String]) -> Option<String> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return None;
    }
    Some(values_array(separator, values))
}

/// Join a value list with a separator, optionally wrapped.
pub fn values_list(separator: &str, prefix: &str, suffix: &str, values: &[String]) -> String {
    build_joined(values.iter().map(String::as_str), separator, prefix, suffix)
}

/// Join values with a 1-based index interpolated into a format
/// template: `%d` receives the index, `%s` the value. Empty values are
/// skipped and do not advance the index.
pub fn values_format_with_index(format: &str, separator: &str, values: &[String]) -> String {
    values
        .iter()
        .filter(|v| !v.is_empty())
        .enumerate()
        .map(|(i, value)| {
            format
                .replacen("%d", &(i + 1).to_string(), 1)
                .replacen("%s", value, 1)
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Find the latest space keeping the head at or under `length` chars.
fn find_split_index(chars: &[char], length: i64) -> usize {
    if length == 0 {
        return 0;
    }
    if chars.len() as i64 <= length {
        return chars.len();
    }
    let mut index = 0;
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            if (i as i64) - 1 < length {
                index = i;
            } else {
                return index;
            }
        }
    }
    index
}

/// The head of a word-boundary split: the longest prefix of whole
/// words fitting in `length` characters, trimmed.
pub fn get_head_of_string(original: &str, length: i64) -> String {
    let chars: Vec<char> = original.chars().collect();
    let split = find_split_index(&chars, length);
    chars[..split].iter().collect::<String>().trim().to_string()
}

/// The tail left over after [`get_head_of_string`], trimmed.
pub fn get_tail_of_string(original: &str, length: i64) -> String {
    let chars: Vec<char> = original.chars().collect();
    let split = find_split_index(&chars, length);
    chars[split..].iter().collect::<String>().trim().to_string()
}

/// Uppercase the first character only.
pub fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase the first character only.
pub fn lower_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Reformat a Russian mobile number to `+7 XXX XXX-XX-XX`;
/// non-matching input passes through unchanged.
pub fn get_russian_phone(phone_number: &str) -> String {
    match MOBILE_RE.captures(phone_number) {
        Some(groups) => format!(
            "+7 {} {}-{}-{}",
            &groups[1], &groups[2], &groups[3], &groups[4]
        ),
        None => phone_number.to_string(),
    }
}

/// Extract the city from a postal-style address: the substring between
/// the `г.` marker and the next comma. Without a marker or a following
/// comma the whole address passes through.
pub fn extract_city(address: &str) -> String {
    let start = match address.find("г.") {
        Some(i) => i + "г.".len(),
        None => return address.to_string(),
    };
    match address[start..].find(',') {
        Some(comma) => address[start..start + comma].to_string(),
        None => address.to_string(),
    }
}

/// Abbreviate a full name to `Фамилия И.О.` (or `Фамилия И.` without a
/// middle name). An empty first name is an error.
pub fn build_fio(
    last_name: &str,
    first_name: &str,
    middle_name: Option<&str>,
) -> RenderResult<String> {
    let first_initial = first_name
        .chars()
        .next()
        .ok_or_else(|| RenderError::argument("first name must not be empty"))?;

    match middle_name.and_then(|m| m.chars().next()) {
        Some(middle_initial) => Ok(format!(
            "{} {}.{}.",
            last_name, first_initial, middle_initial
        )),
        None => Ok(format!("{} {}.", last_name, first_initial)),
    }
}

/// Insert `value` into `destination` at a character position.
///
/// An out-of-range position or an empty destination/value returns the
/// destination unchanged; with `skip_if_exist` the insertion is also
/// skipped when the first occurrence of `value` already starts exactly
/// at that position.
pub fn paste(destination: &str, value: &str, position: usize, skip_if_exist: bool) -> String {
    if destination.is_empty() || value.is_empty() || destination.chars().count() < position {
        return destination.to_string();
    }

    if skip_if_exist {
        if let Some(byte_index) = destination.find(value) {
            if destination[..byte_index].chars().count() == position {
                return destination.to_string();
            }
        }
    }

    let byte_position = destination
        .char_indices()
        .nth(position)
        .map(|(b, _)| b)
        .unwrap_or(destination.len());
    format!(
        "{}{}{}",
        &destination[..byte_position],
        value,
        &destination[byte_position..]
    )
}

/// The character at a position, or a single space when out of range.
pub fn get_char_at_pos(string: &str, index: i64) -> char {
    if index < 0 {
        return ' ';
    }
    string.chars().nth(index as usize).unwrap_or(' ')
}

/// Repeat the HTML whitespace entity `count` times.
pub fn add_html_white_space(count: i64) -> String {
    HTML_SPACE.repeat(count.max(0) as usize)
}
