//! Per-hop navigation selectors.
//!
//! A [`Selector`] names one step of navigation: either a field/key lookup
//! or a position within a sequence. Conversions from strings and integers
//! keep call sites terse: `nav.dig("host")`, `nav.dig(0)`.

use std::fmt::{Display, Formatter};

/// One navigation step applied to a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A named lookup, resolved member-first then key (and broadcast across
    /// sequence payloads)
    Field(String),
    /// A positional lookup within a sequence; negative values count from
    /// the end
    Index(i64),
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Field(name.to_owned())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::Field(name)
    }
}

impl From<i64> for Selector {
    fn from(index: i64) -> Self {
        Selector::Index(index)
    }
}

impl From<i32> for Selector {
    fn from(index: i32) -> Self {
        Selector::Index(index.into())
    }
}

impl From<usize> for Selector {
    fn from(index: usize) -> Self {
        Selector::Index(index as i64)
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Field(name) => write!(f, ".{name}"),
            Selector::Index(index) => write!(f, "[{index}]"),
        }
    }
}
