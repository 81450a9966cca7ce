//! The payload model and the not-found sentinel.
//!
//! This module defines the [`Value`] enum which represents every shape of
//! data a [`Navigator`] may wrap: scalars, sequences, string-keyed maps,
//! [`Record`]s and the [`NOT_FOUND`] sentinel that stands in for "no value
//! at this location".
//!
//! [`Navigator`]: crate::Navigator

use std::{collections::BTreeMap, fmt::{Display, Formatter}};

use crate::{DelveError, DelveResult, Record};

/// The sentinel produced when a navigation step resolves to nothing.
///
/// There is exactly one notion of absence in this crate; because the
/// sentinel is a unit variant of [`Value`], comparing any value against
/// `NOT_FOUND` with `==` is an identity check, and the sentinel can never
/// be confused with a domain value such as [`Value::Null`], zero or an
/// empty string.
pub const NOT_FOUND: Value = Value::NotFound;

/// All value shapes that may be wrapped by a [`Navigator`]
///
/// [`Navigator`]: crate::Navigator
#[derive(Debug, Clone)]
pub enum Value {
    /// An empty (null) value; present data, distinct from [`Value::NotFound`]
    Null,
    /// A boolean
    Boolean(bool),
    /// A 128-bit signed integer
    SignedInt(i128),
    /// A 128-bit unsigned integer
    UnsignedInt(u128),
    /// A floating point number
    Float(f64),
    /// A UTF-8 string
    String(String),
    /// An ordered sequence of values
    Sequence(Vec<Value>),
    /// A string-keyed mapping
    Map(BTreeMap<String, Value>),
    /// A record-like value with named members and optional keyed entries
    Record(Record),
    /// The absence sentinel; use [`NOT_FOUND`] rather than naming the
    /// variant directly
    NotFound,
}

/// The shape that corresponds to a variant of [`Value`], used in
/// diagnostics and error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Boolean`]
    Boolean,
    /// [`Value::SignedInt`]
    SignedInt,
    /// [`Value::UnsignedInt`]
    UnsignedInt,
    /// [`Value::Float`]
    Float,
    /// [`Value::String`]
    String,
    /// [`Value::Sequence`]
    Sequence,
    /// [`Value::Map`]
    Map,
    /// [`Value::Record`]
    Record,
    /// [`Value::NotFound`]
    NotFound,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::SignedInt => "signed integer",
            ValueKind::UnsignedInt => "unsigned integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Sequence => "sequence",
            ValueKind::Map => "map",
            ValueKind::Record => "record",
            ValueKind::NotFound => "NOT_FOUND",
        };
        write!(f, "{name}")
    }
}

impl Value {
    /// Get the [`ValueKind`] that corresponds to this variant of [`Value`]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::SignedInt(_) => ValueKind::SignedInt,
            Value::UnsignedInt(_) => ValueKind::UnsignedInt,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Map(_) => ValueKind::Map,
            Value::Record(_) => ValueKind::Record,
            Value::NotFound => ValueKind::NotFound,
        }
    }

    /// True when this value is the [`NOT_FOUND`] sentinel
    pub fn is_not_found(&self) -> bool {
        matches!(self, Value::NotFound)
    }

    /// The truth value of this [`Value`].
    ///
    /// Empty and zero values are false, everything else is true. The
    /// sentinel has no truth value: asking for one always fails with
    /// [`DelveError::InvalidOperation`], because "absent" is neither true
    /// nor false.
    pub fn truthy(&self) -> DelveResult<bool> {
        match self {
            Value::NotFound => Err(DelveError::InvalidOperation(
                "NOT_FOUND does not support truthy operations".into(),
            )),
            Value::Null => Ok(false),
            Value::Boolean(value) => Ok(*value),
            Value::SignedInt(number) => Ok(*number != 0),
            Value::UnsignedInt(number) => Ok(*number != 0),
            Value::Float(number) => Ok(*number != 0.0),
            Value::String(string) => Ok(!string.is_empty()),
            Value::Sequence(items) => Ok(!items.is_empty()),
            Value::Map(entries) => Ok(!entries.is_empty()),
            Value::Record(record) => Ok(!record.is_empty()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::SignedInt(number) => write!(f, "{number}"),
            Value::UnsignedInt(number) => write!(f, "{number}"),
            Value::Float(number) => write!(f, "{number}"),
            Value::String(string) => write!(f, "{string:?}"),
            Value::Sequence(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Record(record) => write!(f, "{record}"),
            Value::NotFound => write!(f, "<NOT_FOUND>"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::SignedInt(a), Value::SignedInt(b)) => a == b,
            (Value::UnsignedInt(a), Value::UnsignedInt(b)) => a == b,
            // Integers compare by magnitude across signedness so that data
            // parsed from JSON and data built from Rust literals agree
            (Value::SignedInt(a), Value::UnsignedInt(b))
            | (Value::UnsignedInt(b), Value::SignedInt(a)) => {
                u128::try_from(*a).map(|a| a == *b).unwrap_or(false)
            }
            (Value::Float(a), Value::Float(b)) => a.to_le_bytes() == b.to_le_bytes(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::NotFound, Value::NotFound) => true,
            _ => false,
        }
    }
}
