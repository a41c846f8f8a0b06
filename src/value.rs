//! Value types for the report-function catalog.
//!
//! The rendering engine hands every argument over as a [`Value`]; the
//! catalog validates the shape it needs and raises a typed
//! [`RenderError`] on mismatch.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use rust_decimal::Decimal;

// ============================================================================
// The Value Enum
// ============================================================================

/// An argument or result value exchanged with the rendering engine.
///
/// This covers every shape the catalog's functions accept or produce.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The absence of a meaningful value (missing report data)
    #[default]
    None,
    /// A boolean: `true`, `false`
    Bool(bool),
    /// An integer: `120`, `-5`
    Int(i64),
    /// An arbitrary-precision decimal amount
    Decimal(Decimal),
    /// A string: `"hello"`
    Str(String),
    /// A calendar date without time-of-day
    Date(NaiveDate),
    /// A local date-time without zone
    DateTime(NaiveDateTime),
    /// A zone-aware instant
    Instant(DateTime<FixedOffset>),
    /// An array of values
    Array(Vec<Value>),
}

/// Type identifiers for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValType {
    None,
    Bool,
    Int,
    Decimal,
    Str,
    Date,
    DateTime,
    Instant,
    Array,
}

impl ValType {
    pub fn name(&self) -> &'static str {
        match self {
            ValType::None => "none",
            ValType::Bool => "bool",
            ValType::Int => "int",
            ValType::Decimal => "decimal",
            ValType::Str => "str",
            ValType::Date => "date",
            ValType::DateTime => "datetime",
            ValType::Instant => "instant",
            ValType::Array => "array",
        }
    }
}

impl fmt::Display for ValType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Value {
    /// The type of this value.
    pub fn val_type(&self) -> ValType {
        match self {
            Value::None => ValType::None,
            Value::Bool(_) => ValType::Bool,
            Value::Int(_) => ValType::Int,
            Value::Decimal(_) => ValType::Decimal,
            Value::Str(_) => ValType::Str,
            Value::Date(_) => ValType::Date,
            Value::DateTime(_) => ValType::DateTime,
            Value::Instant(_) => ValType::Instant,
            Value::Array(_) => ValType::Array,
        }
    }

    /// The type name of this value, for error messages.
    pub fn type_name(&self) -> &'static str {
        self.val_type().name()
    }

    /// Extract a string slice, or a type mismatch error.
    pub fn as_str(&self) -> RenderResult<&str> {
        match self {
            Value::Str(s) => Ok(s),
            v => Err(RenderError::type_mismatch("str", v.type_name())),
        }
    }

    /// Extract an integer, or a type mismatch error.
    pub fn as_int(&self) -> RenderResult<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            v => Err(RenderError::type_mismatch("int", v.type_name())),
        }
    }

    /// Extract a boolean, or a type mismatch error.
    pub fn as_bool(&self) -> RenderResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            v => Err(RenderError::type_mismatch("bool", v.type_name())),
        }
    }

    /// Extract a decimal, or a type mismatch error.
    pub fn as_decimal(&self) -> RenderResult<&Decimal> {
        match self {
            Value::Decimal(d) => Ok(d),
            v => Err(RenderError::type_mismatch("decimal", v.type_name())),
        }
    }

    /// The display form substituted into rendered text.
    ///
    /// `None` renders as the empty string; everything else renders the
    /// way a template author would expect to read it.
    pub fn display(&self) -> String {
        match self {
            Value::None => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Decimal(d) => d.to_string(),
            Value::Str(s) => s.clone(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            Value::Instant(i) => i.to_rfc3339(),
            Value::Array(items) => items
                .iter()
                .map(Value::display)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Whether this value is `None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

// ============================================================================
// Variables (per-render scope)
// ============================================================================

/// Caller-owned variable scope for one render.
///
/// The catalog never owns this map's lifecycle: the engine creates one
/// per render and passes it to every call. Only the counter pair
/// mutates it. (IndexMap preserves insertion order.)
#[derive(Debug, Clone, Default)]
pub struct Variables {
    bindings: IndexMap<String, Value>,
}

impl Variables {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Self {
            bindings: IndexMap::new(),
        }
    }

    /// Define a variable in this scope.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Get a variable from this scope.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Check if a variable exists in this scope.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Get all bindings in this scope.
    pub fn bindings(&self) -> &IndexMap<String, Value> {
        &self.bindings
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// The kind of render-function error.
#[derive(Debug, Clone)]
pub enum RenderErrorKind {
    /// Type mismatch
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    /// Function argument error (wrong arity or shape)
    ArgumentError(String),
    /// A string could not be parsed as a decimal number
    NumberFormat(String),
    /// A date string or pattern could not be parsed
    DateFormat(String),
    /// An unknown locale tag was supplied
    UnknownLocale(String),
}

impl fmt::Display for RenderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderErrorKind::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {}, got {}", expected, got)
            }
            RenderErrorKind::ArgumentError(msg) => write!(f, "argument error: {}", msg),
            RenderErrorKind::NumberFormat(text) => {
                write!(f, "not a decimal number: `{}`", text)
            }
            RenderErrorKind::DateFormat(msg) => write!(f, "date error: {}", msg),
            RenderErrorKind::UnknownLocale(tag) => write!(f, "unknown locale: `{}`", tag),
        }
    }
}

/// A typed failure from a report function, with optional function context.
#[derive(Debug, Clone)]
pub struct RenderError {
    /// The kind of error
    pub kind: RenderErrorKind,
    /// The catalog name of the function that raised it, when known
    pub function: Option<String>,
}

impl RenderError {
    /// Create a new error from a kind.
    pub fn new(kind: RenderErrorKind) -> Self {
        Self {
            kind,
            function: None,
        }
    }

    /// Attach the catalog function name to this error.
    pub fn in_function(mut self, name: impl Into<String>) -> Self {
        self.function = Some(name.into());
        self
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(expected: &'static str, got: &'static str) -> Self {
        Self::new(RenderErrorKind::TypeMismatch { expected, got })
    }

    /// Create an argument error.
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::new(RenderErrorKind::ArgumentError(msg.into()))
    }

    /// Create a number format error.
    pub fn number(text: impl Into<String>) -> Self {
        Self::new(RenderErrorKind::NumberFormat(text.into()))
    }

    /// Create a date error.
    pub fn date(msg: impl Into<String>) -> Self {
        Self::new(RenderErrorKind::DateFormat(msg.into()))
    }

    /// Create an unknown locale error.
    pub fn locale(tag: impl Into<String>) -> Self {
        Self::new(RenderErrorKind::UnknownLocale(tag.into()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RenderErrorKind {
        &self.kind
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.function {
            write!(f, "{}: {}", name, self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl std::error::Error for RenderError {}

impl From<RenderErrorKind> for RenderError {
    fn from(kind: RenderErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for report-function calls.
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = RenderError::type_mismatch("decimal", "str");
        assert_eq!(err.to_string(), "type mismatch: expected decimal, got str");
    }

    #[test]
    fn test_error_with_function_context() {
        let err = RenderError::number("12x").in_function("amountInDecimalFormat");
        assert_eq!(
            err.to_string(),
            "amountInDecimalFormat: not a decimal number: `12x`"
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(5).as_int().unwrap(), 5);
        assert!(Value::Str("x".into()).as_int().is_err());
        assert_eq!(Value::Str("x".into()).as_str().unwrap(), "x");
    }

    #[test]
    fn test_display_none_is_empty() {
        assert_eq!(Value::None.display(), "");
        assert_eq!(Value::Bool(true).display(), "true");
    }

    #[test]
    fn test_variables_define_get() {
        let mut vars = Variables::new();
        assert!(!vars.contains("row"));
        vars.define("row", Value::Int(2));
        assert_eq!(vars.get("row"), Some(&Value::Int(2)));
    }
}
