//! Record-like payloads with named members and keyed entries.
//!
//! A [`Record`] stands in for values that expose both member access
//! (`record.name`) and container access (`record["name"]`). Member lookup
//! always takes priority over entry lookup during navigation, so a member
//! shadows an entry stored under the same name.

use std::{collections::BTreeMap, fmt::{Display, Formatter}};

use serde::Serialize;

use crate::Value;

/// A structured value with named members and an optional keyed side table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    fields: BTreeMap<String, Value>,
    entries: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty [`Record`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named member to this [`Record`]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Add a keyed entry to this [`Record`]
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Look up a named member
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Look up a keyed entry
    pub fn get_entry(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// True when this [`Record`] has no members and no entries
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.entries.is_empty()
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "record(")?;
        for (index, (name, value)) in self.fields.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        if !self.entries.is_empty() {
            write!(f, "; ")?;
            for (index, (key, value)) in self.entries.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "[{key:?}]: {value}")?;
            }
        }
        write!(f, ")")
    }
}
