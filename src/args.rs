//! Schema-driven command-line flag parsing.
//!
//! [`parse_options`] turns a raw argument list into a typed map. Flags are
//! tokens starting with `--`; `--flag=value` carries a value, `--flag` alone
//! is a boolean, and everything else collects into a positional `argv` list.
//! An [`OptionsSchema`] declares per-flag coercion (integer, float, or
//! separator-split array); undeclared flags stay strings.
//!
//! The argument list is an explicit parameter — callers typically pass the
//! result of `std::env::args().skip(1)` — so the parser itself never touches
//! process-global state.

use std::collections::BTreeMap;

/// Per-flag coercion rule.
#[derive(Debug, Clone)]
pub enum Coerce {
    /// Parse the value as an `i64`.
    Integer,

    /// Parse the value as an `f64`.
    Float,

    /// Split the value on a separator into a list of strings.
    Array {
        /// Separator to split on (`","` unless declared otherwise).
        separator: String,
    },
}

/// Declares how flag values are coerced.
///
/// Flag names are stored in normalized form (dashes replaced by
/// underscores), matching the keys produced by [`parse_options`].
#[derive(Debug, Clone, Default)]
pub struct OptionsSchema {
    rules: BTreeMap<String, Coerce>,
}

impl OptionsSchema {
    /// An empty schema: every flag value stays a string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `flag` as an integer.
    #[must_use]
    pub fn integer(mut self, flag: &str) -> Self {
        self.rules.insert(normalize_key(flag), Coerce::Integer);
        self
    }

    /// Declare `flag` as a float.
    #[must_use]
    pub fn float(mut self, flag: &str) -> Self {
        self.rules.insert(normalize_key(flag), Coerce::Float);
        self
    }

    /// Declare `flag` as a comma-separated array.
    #[must_use]
    pub fn array(self, flag: &str) -> Self {
        self.array_with_separator(flag, ",")
    }

    /// Declare `flag` as an array split on `separator`.
    #[must_use]
    pub fn array_with_separator(mut self, flag: &str, separator: &str) -> Self {
        self.rules.insert(
            normalize_key(flag),
            Coerce::Array {
                separator: separator.to_string(),
            },
        );
        self
    }

    fn rule(&self, key: &str) -> Option<&Coerce> {
        self.rules.get(key)
    }
}

/// A parsed flag value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptValue {
    /// A bare `--flag`.
    Flag(bool),

    /// An uncoerced (or failed-to-coerce) value.
    Str(String),

    /// A value declared [`Coerce::Integer`].
    Int(i64),

    /// A value declared [`Coerce::Float`].
    Float(f64),

    /// A value declared [`Coerce::Array`].
    List(Vec<String>),
}

/// The result of [`parse_options`]: typed flags plus positional arguments.
#[derive(Debug, Default)]
pub struct ParsedOptions {
    options: BTreeMap<String, OptValue>,

    /// Positional (non-flag) arguments, in input order.
    pub argv: Vec<String>,
}

impl ParsedOptions {
    /// Raw value for a (normalized) flag name.
    #[must_use]
    pub fn get(&self, flag: &str) -> Option<&OptValue> {
        self.options.get(flag)
    }

    /// Whether the flag appeared at all.
    #[must_use]
    pub fn is_set(&self, flag: &str) -> bool {
        self.options.contains_key(flag)
    }

    /// String value of a flag, if it carried one.
    #[must_use]
    pub fn get_str(&self, flag: &str) -> Option<&str> {
        match self.options.get(flag) {
            Some(OptValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Integer value of a flag coerced via [`Coerce::Integer`].
    #[must_use]
    pub fn get_int(&self, flag: &str) -> Option<i64> {
        match self.options.get(flag) {
            Some(OptValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Float value of a flag coerced via [`Coerce::Float`].
    #[must_use]
    pub fn get_float(&self, flag: &str) -> Option<f64> {
        match self.options.get(flag) {
            Some(OptValue::Float(n)) => Some(*n),
            _ => None,
        }
    }

    /// List value of a flag coerced via [`Coerce::Array`].
    #[must_use]
    pub fn get_list(&self, flag: &str) -> Option<&[String]> {
        match self.options.get(flag) {
            Some(OptValue::List(items)) => Some(items),
            _ => None,
        }
    }
}

/// Normalize a flag name: dashes become underscores.
fn normalize_key(flag: &str) -> String {
    flag.replace('-', "_")
}

/// Parse an argument list against a schema.
///
/// - `--key=value`: the key is the text before the first `=` (minus the
///   leading `--`, dashes normalized to underscores); the value is the
///   segment between the first and second `=` — anything after a second
///   `=` is discarded. The value is coerced per the schema; a value that
///   fails numeric coercion is kept as the raw string.
/// - `--key`: boolean flag, stored as `true`.
/// - anything else: appended to [`ParsedOptions::argv`] in order.
///
/// Later occurrences of the same flag overwrite earlier ones.
#[must_use]
pub fn parse_options<S: AsRef<str>>(args: &[S], schema: &OptionsSchema) -> ParsedOptions {
    let mut parsed = ParsedOptions::default();

    for arg in args {
        let arg = arg.as_ref();
        let Some(body) = arg.strip_prefix("--") else {
            parsed.argv.push(arg.to_string());
            continue;
        };

        if body.contains('=') {
            let mut parts = body.split('=');
            let key = normalize_key(parts.next().unwrap_or_default());
            let raw = parts.next().unwrap_or_default();
            let value = coerce(raw, schema.rule(&key));
            parsed.options.insert(key, value);
        } else {
            parsed.options.insert(normalize_key(body), OptValue::Flag(true));
        }
    }

    parsed
}

/// Apply a coercion rule to a raw flag value.
fn coerce(raw: &str, rule: Option<&Coerce>) -> OptValue {
    match rule {
        Some(Coerce::Integer) => raw
            .parse::<i64>()
            .map_or_else(|_| OptValue::Str(raw.to_string()), OptValue::Int),
        Some(Coerce::Float) => raw
            .parse::<f64>()
            .map_or_else(|_| OptValue::Str(raw.to_string()), OptValue::Float),
        Some(Coerce::Array { separator }) => OptValue::List(
            raw.split(separator.as_str())
                .map(ToString::to_string)
                .collect(),
        ),
        None => OptValue::Str(raw.to_string()),
    }
}
