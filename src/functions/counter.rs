//! Row counters over the caller-owned variable scope.
//!
//! The only stateful pair in the catalog. The scope belongs to the
//! engine's render; concurrent renders must each supply their own.

use crate::value::{RenderResult, Value, Variables};

/// Return the counter's pre-increment value as a string, then bump it.
/// An absent counter starts at 1.
pub fn inc_count(vars: &mut Variables, key: &str) -> RenderResult<String> {
    let current = match vars.get(key) {
        Some(value) => value.as_int()?,
        None => 1,
    };
    vars.define(key, Value::Int(current + 1));
    Ok(current.to_string())
}

/// The counter's current value as a string, or `None` when it was
/// never incremented.
pub fn get_count(vars: &Variables, key: &str) -> RenderResult<Option<String>> {
    match vars.get(key) {
        Some(value) => Ok(Some(value.as_int()?.to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_one() {
        let mut vars = Variables::new();
        assert_eq!(inc_count(&mut vars, "k").unwrap(), "1");
        assert_eq!(vars.get("k"), Some(&Value::Int(2)));
        assert_eq!(get_count(&vars, "k").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_counters_are_independent() {
        let mut vars = Variables::new();
        inc_count(&mut vars, "a").unwrap();
        inc_count(&mut vars, "a").unwrap();
        assert_eq!(inc_count(&mut vars, "a").unwrap(), "3");
        assert_eq!(get_count(&vars, "b").unwrap(), None);
    }

    #[test]
    fn test_counter_rejects_non_integer_binding() {
        let mut vars = Variables::new();
        vars.define("k", Value::Str("oops".into()));
        assert!(inc_count(&mut vars, "k").is_err());
    }
}
