//! The per-step resolution algorithm.
//!
//! Resolution is a pure function of payload and selector. Capabilities are
//! probed in a fixed priority order instead of relying on failure-driven
//! control flow:
//!
//! 1. Record member lookup ([`Selector::Field`] against a record's named
//!    members) always wins, shadowing a same-named keyed entry.
//! 2. Container lookup: a record's keyed entries, a map key, or a sequence
//!    position (negative positions count from the end).
//! 3. A [`Selector::Field`] applied to a sequence broadcasts: each element
//!    is resolved member-then-key on its own, and the per-element outcomes
//!    (value or [`NOT_FOUND`]) become a new sequence. Positional selectors
//!    never broadcast.
//! 4. Every other combination is missing, including any lookup on the
//!    sentinel itself.
//!
//! [`NOT_FOUND`]: crate::NOT_FOUND

use crate::{Selector, Value};

/// The outcome of applying one [`Selector`] to a payload
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Resolution {
    /// The selector resolved to a single value
    Found(Value),
    /// The selector was applied across every element of a sequence payload;
    /// unresolved elements are [`Value::NotFound`]
    Broadcast(Vec<Value>),
    /// Nothing was found at this step
    Missing,
}

/// Apply `selector` to `payload`, including sequence broadcast
pub(crate) fn resolve(payload: &Value, selector: &Selector) -> Resolution {
    match (payload, selector) {
        (Value::Sequence(items), Selector::Field(_)) => Resolution::Broadcast(
            items
                .iter()
                .map(|item| match resolve_element(item, selector) {
                    Resolution::Found(value) => value,
                    _ => Value::NotFound,
                })
                .collect(),
        ),
        _ => resolve_element(payload, selector),
    }
}

/// Apply `selector` to a single value, member-then-key, without broadcast.
///
/// This is the two-step resolution used both for scalar payloads and for
/// each element of a broadcast or pluck.
pub(crate) fn resolve_element(element: &Value, selector: &Selector) -> Resolution {
    let found = match (element, selector) {
        (Value::Record(record), Selector::Field(name)) => record
            .get_field(name)
            .or_else(|| record.get_entry(name)),
        (Value::Map(entries), Selector::Field(name)) => entries.get(name.as_str()),
        (Value::Sequence(items), Selector::Index(index)) => index_sequence(items, *index),
        _ => None,
    };

    match found {
        Some(value) => Resolution::Found(value.clone()),
        None => Resolution::Missing,
    }
}

/// Positional lookup with Python-style negative indexing; out-of-range
/// positions are missing, not errors
fn index_sequence(items: &[Value], index: i64) -> Option<&Value> {
    let position = if index < 0 {
        items.len().checked_sub(index.unsigned_abs() as usize)?
    } else {
        index as usize
    };
    items.get(position)
}
