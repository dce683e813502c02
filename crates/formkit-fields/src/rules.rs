//! Composable validation rules.
//!
//! A [`FieldSchema`] is a declarative value contract: an expected value type
//! plus an ordered chain of [`Rule`]s, each a constraint paired with the
//! message reported when it fails. Schemas are plain data, so tests and
//! tooling can introspect exactly which constraints a configuration
//! produced, and checking a value never touches state outside the schema.

use chrono::NaiveDate;

use formkit_core::Value;

/// The primitive shape a schema expects a submitted value to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// A string (text, textarea, select, radio).
    Text,
    /// An integer or float.
    Number,
    /// A boolean.
    Bool,
    /// A calendar date.
    Date,
    /// A list of strings (multi-select).
    TextList,
}

impl ValueType {
    /// Returns `true` if the value has this shape.
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::Text => matches!(value, Value::String(_)),
            Self::Number => matches!(value, Value::Int(_) | Value::Float(_)),
            Self::Bool => matches!(value, Value::Bool(_)),
            Self::Date => matches!(value, Value::Date(_)),
            Self::TextList => matches!(value, Value::List(_)),
        }
    }

    /// A short name for error messages.
    const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Bool => "boolean",
            Self::Date => "date",
            Self::TextList => "list",
        }
    }
}

/// A single checkable constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// A value must be submitted (non-null, non-empty string/list).
    Required,
    /// The boolean must be `true` ("must agree", for required checkboxes).
    MustBeTrue,
    /// The selection or list must be non-empty.
    NonEmpty,
    /// Minimum string length.
    MinLength(usize),
    /// Maximum string length.
    MaxLength(usize),
    /// Minimum numeric value.
    MinValue(f64),
    /// Maximum numeric value.
    MaxValue(f64),
    /// Earliest accepted date.
    MinDate(NaiveDate),
    /// Latest accepted date.
    MaxDate(NaiveDate),
}

impl Constraint {
    /// Returns `true` if this constraint is about presence rather than shape,
    /// and therefore still applies when no value was submitted.
    const fn applies_to_empty(&self) -> bool {
        matches!(self, Self::Required | Self::MustBeTrue | Self::NonEmpty)
    }

    /// Checks a present, type-correct value against this constraint.
    fn is_satisfied_by(&self, value: &Value) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::MustBeTrue => matches!(value, Value::Bool(true)),
            Self::NonEmpty => !value.is_empty(),
            Self::MinLength(min) => match value {
                Value::String(s) => s.len() >= *min,
                _ => true,
            },
            Self::MaxLength(max) => match value {
                Value::String(s) => s.len() <= *max,
                _ => true,
            },
            Self::MinValue(min) => numeric(value).map_or(true, |n| n >= *min),
            Self::MaxValue(max) => numeric(value).map_or(true, |n| n <= *max),
            Self::MinDate(min) => match value {
                Value::Date(d) => d >= min,
                _ => true,
            },
            Self::MaxDate(max) => match value {
                Value::Date(d) => d <= max,
                _ => true,
            },
        }
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        _ => None,
    }
}

/// One constraint with the message reported when it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// The checked constraint.
    pub constraint: Constraint,
    /// The message surfaced to the end user on failure.
    pub message: String,
}

/// A declarative validation contract for one field's value.
///
/// Built by chaining [`rule`](Self::rule) calls; checked with
/// [`check`](Self::check). Rule failures accumulate rather than
/// short-circuiting, so the user sees every problem at once.
///
/// # Examples
///
/// ```
/// use formkit_core::Value;
/// use formkit_fields::rules::{Constraint, FieldSchema};
///
/// let schema = FieldSchema::text()
///     .rule(Constraint::Required, "Required")
///     .rule(Constraint::MinLength(3), "Minimum 3 characters");
///
/// assert!(schema.check(&Value::from("abcd")).is_ok());
/// assert_eq!(schema.check(&Value::from("ab")).unwrap_err().len(), 1);
/// assert_eq!(schema.check(&Value::Null).unwrap_err(), vec!["Required"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// The expected value shape.
    pub value_type: ValueType,
    /// The constraint chain, in declaration order.
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    /// Creates a schema expecting the given value type with no constraints.
    pub const fn of(value_type: ValueType) -> Self {
        Self {
            value_type,
            rules: Vec::new(),
        }
    }

    /// A schema expecting a string.
    pub const fn text() -> Self {
        Self::of(ValueType::Text)
    }

    /// A schema expecting a number.
    pub const fn number() -> Self {
        Self::of(ValueType::Number)
    }

    /// A schema expecting a boolean.
    pub const fn boolean() -> Self {
        Self::of(ValueType::Bool)
    }

    /// A schema expecting a date.
    pub const fn date() -> Self {
        Self::of(ValueType::Date)
    }

    /// A schema expecting a list of strings.
    pub const fn text_list() -> Self {
        Self::of(ValueType::TextList)
    }

    /// Appends a constraint with its failure message.
    #[must_use]
    pub fn rule(mut self, constraint: Constraint, message: impl Into<String>) -> Self {
        self.rules.push(Rule {
            constraint,
            message: message.into(),
        });
        self
    }

    /// Returns `true` if the schema carries a presence constraint.
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| r.constraint.applies_to_empty())
    }

    /// Checks a submitted value against this schema.
    ///
    /// An empty value (null, empty string, empty list) fails only the
    /// presence constraints; bound constraints are skipped so an optional
    /// field may be left blank. A present value of the wrong shape is a
    /// single type error. Otherwise every rule is evaluated and failures
    /// accumulate in rule order.
    pub fn check(&self, value: &Value) -> Result<(), Vec<String>> {
        if value.is_empty() {
            let errors: Vec<String> = self
                .rules
                .iter()
                .filter(|r| r.constraint.applies_to_empty())
                .map(|r| r.message.clone())
                .collect();
            return if errors.is_empty() { Ok(()) } else { Err(errors) };
        }

        if !self.value_type.matches(value) {
            return Err(vec![format!("Expected a {} value", self.value_type.name())]);
        }

        let errors: Vec<String> = self
            .rules
            .iter()
            .filter(|r| !r.constraint.is_satisfied_by(value))
            .map(|r| r.message.clone())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
