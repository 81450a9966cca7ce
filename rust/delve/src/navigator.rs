//! The chaining wrapper over one payload.
//!
//! A [`Navigator`] wraps exactly one [`Value`] together with two behavior
//! flags, and never mutates either after construction. Every navigation or
//! configuration operation produces a new handle; children inherit the
//! parent's flags. Handles are cheap to clone (the payload and flags live
//! behind an [`Arc`]) and safe to share across threads.

use std::{
    fmt::{Display, Formatter},
    sync::Arc,
};

use crate::{
    DelveError, DelveResult, NOT_FOUND, Selector, Value,
    resolve::{Resolution, resolve, resolve_element},
};

const NO_ITEMS: &[Value] = &[];

#[derive(Debug)]
struct Inner {
    payload: Value,
    raise_on_missing: bool,
    empty_iteration_on_missing: bool,
}

/// A wrapper that allows chained extraction from nested data without
/// presence checks at every step.
///
/// Navigation that finds nothing wraps the [`NOT_FOUND`] sentinel instead
/// of failing, so a whole chain can be written up front and checked once at
/// the end with [`Navigator::get`]. Two flags adjust this behavior per
/// instance and are inherited by children:
///
/// - `raise_on_missing` turns absence into [`DelveError::NotFound`] at the
///   navigation step instead of producing a sentinel-wrapped child.
/// - `empty_iteration_on_missing` lets [`Navigator::iter`] and
///   [`Navigator::pluck`] treat a sentinel payload as an empty sequence.
#[derive(Debug, Clone)]
pub struct Navigator {
    inner: Arc<Inner>,
}

impl Navigator {
    /// Wrap `payload` with both flags disabled
    pub fn new(payload: impl Into<Value>) -> Self {
        Self::from_parts(payload.into(), false, false)
    }

    fn from_parts(payload: Value, raise_on_missing: bool, empty_iteration_on_missing: bool) -> Self {
        Navigator {
            inner: Arc::new(Inner {
                payload,
                raise_on_missing,
                empty_iteration_on_missing,
            }),
        }
    }

    /// Produce a child wrapping `payload` with this instance's flags
    fn child(&self, payload: Value) -> Self {
        Self::from_parts(
            payload,
            self.inner.raise_on_missing,
            self.inner.empty_iteration_on_missing,
        )
    }

    /// Borrow the wrapped payload
    pub fn payload(&self) -> &Value {
        &self.inner.payload
    }

    /// Whether absence fails with [`DelveError::NotFound`] during navigation
    pub fn raise_on_missing(&self) -> bool {
        self.inner.raise_on_missing
    }

    /// Whether a sentinel payload iterates as an empty sequence
    pub fn empty_iteration_on_missing(&self) -> bool {
        self.inner.empty_iteration_on_missing
    }

    /// True when both handles refer to the same underlying instance.
    ///
    /// The `with_*` configuration methods return a handle to the same
    /// instance when the requested flag value already matches; callers may
    /// rely on this.
    pub fn ptr_eq(a: &Navigator, b: &Navigator) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Enable or disable failing with [`DelveError::NotFound`] when a
    /// navigation step finds nothing.
    ///
    /// Returns a handle to this same instance when the flag already has the
    /// requested value; otherwise a new instance wrapping the same payload,
    /// with the other flag carried over unchanged.
    pub fn with_raise_on_missing(&self, raise_on_missing: bool) -> Navigator {
        if self.inner.raise_on_missing == raise_on_missing {
            self.clone()
        } else {
            Self::from_parts(
                self.inner.payload.clone(),
                raise_on_missing,
                self.inner.empty_iteration_on_missing,
            )
        }
    }

    /// Enable or disable treating a sentinel payload as an empty sequence
    /// during [`Navigator::iter`] and [`Navigator::pluck`].
    ///
    /// Returns a handle to this same instance when the flag already has the
    /// requested value; otherwise a new instance wrapping the same payload,
    /// with the other flag carried over unchanged.
    pub fn with_empty_iteration_on_missing(&self, empty_iteration_on_missing: bool) -> Navigator {
        if self.inner.empty_iteration_on_missing == empty_iteration_on_missing {
            self.clone()
        } else {
            Self::from_parts(
                self.inner.payload.clone(),
                self.inner.raise_on_missing,
                empty_iteration_on_missing,
            )
        }
    }

    /// Navigate one step, producing a child over the resolved value.
    ///
    /// Field selectors resolve member-first then key, and broadcast across
    /// sequence payloads; index selectors resolve positionally. A step that
    /// finds nothing produces a child wrapping [`NOT_FOUND`], unless
    /// `raise_on_missing` is enabled, in which case it fails with
    /// [`DelveError::NotFound`]. With `raise_on_missing` enabled a
    /// broadcast also fails if any element was left unresolved.
    pub fn dig(&self, selector: impl Into<Selector>) -> DelveResult<Navigator> {
        let selector = selector.into();
        match resolve(&self.inner.payload, &selector) {
            Resolution::Found(value) => Ok(self.child(value)),
            Resolution::Broadcast(values) => {
                if self.inner.raise_on_missing && values.iter().any(Value::is_not_found) {
                    Err(DelveError::NotFound)
                } else {
                    Ok(self.child(Value::Sequence(values)))
                }
            }
            Resolution::Missing => {
                if self.inner.raise_on_missing {
                    Err(DelveError::NotFound)
                } else {
                    Ok(self.child(NOT_FOUND))
                }
            }
        }
    }

    /// Iterate a sequence payload as child [`Navigator`]s, one per element,
    /// each wrapping the raw element with inherited flags.
    ///
    /// A sentinel payload iterates as zero items when
    /// `empty_iteration_on_missing` is enabled and fails with
    /// [`DelveError::InvalidOperation`] otherwise. Payloads that are
    /// present but not sequences always fail, whatever the flags; that is
    /// misuse, not absence. Each call produces a fresh pass.
    pub fn iter(&self) -> DelveResult<Iter<'_>> {
        let items = match &self.inner.payload {
            Value::Sequence(items) => items.as_slice(),
            Value::NotFound if self.inner.empty_iteration_on_missing => NO_ITEMS,
            Value::NotFound => {
                return Err(DelveError::InvalidOperation(
                    "cannot iterate NOT_FOUND unless empty iteration is enabled".into(),
                ));
            }
            other => {
                return Err(DelveError::InvalidOperation(format!(
                    "cannot iterate a {} payload",
                    other.kind()
                )));
            }
        };

        Ok(Iter {
            items: items.iter(),
            origin: self,
        })
    }

    /// Resolve `selector` against every element of a sequence payload and
    /// collect the outcomes into one child [`Navigator`].
    ///
    /// Cardinality is preserved: elements that resolve to nothing appear as
    /// [`NOT_FOUND`] in the collected sequence, unless `raise_on_missing`
    /// is enabled, in which case the first such element fails the whole
    /// call with [`DelveError::NotFound`]. A sentinel payload yields a
    /// child over an empty sequence when `empty_iteration_on_missing` is
    /// enabled; everything that is not a sequence otherwise fails with
    /// [`DelveError::InvalidOperation`] regardless of flags.
    pub fn pluck(&self, selector: impl Into<Selector>) -> DelveResult<Navigator> {
        let selector = selector.into();
        let items = match &self.inner.payload {
            Value::Sequence(items) => items.as_slice(),
            Value::NotFound if self.inner.empty_iteration_on_missing => NO_ITEMS,
            Value::NotFound => {
                return Err(DelveError::InvalidOperation(
                    "cannot pluck from NOT_FOUND unless empty iteration is enabled".into(),
                ));
            }
            other => {
                return Err(DelveError::InvalidOperation(format!(
                    "cannot pluck from a {} payload",
                    other.kind()
                )));
            }
        };

        let mut resolved = Vec::with_capacity(items.len());
        for item in items {
            match resolve_element(item, &selector) {
                Resolution::Found(value) => resolved.push(value),
                _ => {
                    if self.inner.raise_on_missing {
                        return Err(DelveError::NotFound);
                    }
                    resolved.push(NOT_FOUND);
                }
            }
        }

        Ok(self.child(Value::Sequence(resolved)))
    }

    /// Unwrap the payload, passing the sentinel through untouched.
    ///
    /// This and [`Navigator::get_or`] are the authorized exits from the
    /// wrapper; inspect the result with [`Value::is_not_found`] when the
    /// path may have been absent.
    pub fn get(&self) -> Value {
        self.inner.payload.clone()
    }

    /// Unwrap the payload, substituting `default` for absence.
    ///
    /// A sentinel payload becomes `default`; within a sequence payload,
    /// first-level sentinel holes left behind by a broadcast or pluck are
    /// replaced by `default` as well.
    pub fn get_or(&self, default: impl Into<Value>) -> Value {
        let default = default.into();
        match &self.inner.payload {
            Value::NotFound => default,
            Value::Sequence(items) => Value::Sequence(
                items
                    .iter()
                    .map(|item| {
                        if item.is_not_found() {
                            default.clone()
                        } else {
                            item.clone()
                        }
                    })
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    /// A [`Navigator`] has no truth value; this always fails with
    /// [`DelveError::InvalidOperation`]. Extract data with
    /// [`Navigator::get`] first.
    pub fn truthy(&self) -> DelveResult<bool> {
        Err(DelveError::InvalidOperation(
            "Navigator does not support truthy operations; extract data with get() first".into(),
        ))
    }
}

impl Display for Navigator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.payload)
    }
}

/// One finite pass over the elements of a sequence payload.
///
/// Produced by [`Navigator::iter`]; yields a child [`Navigator`] per
/// element.
#[derive(Debug)]
pub struct Iter<'a> {
    items: std::slice::Iter<'a, Value>,
    origin: &'a Navigator,
}

impl Iterator for Iter<'_> {
    type Item = Navigator;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|item| self.origin.child(item.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::Record;

    fn servers() -> Value {
        let host = |name: &str| {
            Value::Map(BTreeMap::from([(
                "host".to_owned(),
                Value::from(name),
            )]))
        };
        Value::Sequence(vec![host("a.example"), Value::Null, host("b.example")])
    }

    #[test]
    fn test_dig_resolves_map_keys() {
        let nav = Navigator::new(BTreeMap::from([("num".to_owned(), Value::from(1))]));
        assert_eq!(nav.dig("num").unwrap().get(), Value::from(1));
    }

    #[test]
    fn test_dig_wraps_sentinel_when_missing() {
        let nav = Navigator::new(BTreeMap::from([("num".to_owned(), Value::from(1))]));
        assert!(nav.dig("bubba").unwrap().get().is_not_found());
    }

    #[test]
    fn test_chained_digs_propagate_the_sentinel() {
        let nav = Navigator::new(Value::from(1));
        let deep = nav.dig("a").unwrap().dig("b").unwrap().dig(0).unwrap();
        assert!(deep.get().is_not_found());
    }

    #[test]
    fn test_dig_raises_when_configured() {
        let nav = Navigator::new(BTreeMap::<String, Value>::new()).with_raise_on_missing(true);
        assert_eq!(nav.dig("nonexistent").unwrap_err(), DelveError::NotFound);
    }

    #[test]
    fn test_member_access_wins_over_entry_access() {
        let nav = Navigator::new(Record::new().field("a", 7).entry("a", 8));
        assert_eq!(nav.dig("a").unwrap().get(), Value::from(7));
    }

    #[test]
    fn test_dig_broadcasts_field_selectors_across_sequences() {
        let nav = Navigator::new(servers());
        assert_eq!(
            nav.dig("host").unwrap().get(),
            Value::Sequence(vec![
                Value::from("a.example"),
                NOT_FOUND,
                Value::from("b.example")
            ])
        );
    }

    #[test]
    fn test_broadcast_raises_on_holes_when_configured() {
        let nav = Navigator::new(servers()).with_raise_on_missing(true);
        assert_eq!(nav.dig("host").unwrap_err(), DelveError::NotFound);
    }

    #[test]
    fn test_with_flags_preserve_identity_when_unchanged() {
        let nav = Navigator::new(Value::Null);
        assert!(Navigator::ptr_eq(&nav, &nav.with_raise_on_missing(false)));
        assert!(Navigator::ptr_eq(
            &nav,
            &nav.with_empty_iteration_on_missing(false)
        ));
    }

    #[test]
    fn test_with_flags_produce_new_instances_on_change() {
        let nav = Navigator::new(Value::Null).with_empty_iteration_on_missing(true);
        let raised = nav.with_raise_on_missing(true);

        assert!(!Navigator::ptr_eq(&nav, &raised));
        assert!(raised.raise_on_missing());
        // The other flag is carried over unchanged
        assert!(raised.empty_iteration_on_missing());
        assert_eq!(raised.get(), nav.get());
    }

    #[test]
    fn test_children_inherit_flags() {
        let nav = Navigator::new(servers())
            .with_raise_on_missing(true)
            .with_empty_iteration_on_missing(true);
        let child = nav.dig(0).unwrap();

        assert!(child.raise_on_missing());
        assert!(child.empty_iteration_on_missing());
    }

    #[test]
    fn test_iter_yields_one_child_per_element() {
        let nav = Navigator::new(servers());
        let hosts: Vec<Value> = nav
            .iter()
            .unwrap()
            .map(|child| child.dig("host").unwrap().get())
            .collect();

        assert_eq!(
            hosts,
            vec![
                Value::from("a.example"),
                NOT_FOUND,
                Value::from("b.example")
            ]
        );
    }

    #[test]
    fn test_iter_is_restartable_per_call() {
        let nav = Navigator::new(servers());
        assert_eq!(nav.iter().unwrap().len(), 3);
        assert_eq!(nav.iter().unwrap().len(), 3);
    }

    #[test]
    fn test_iter_of_sentinel_requires_opt_in() {
        let nav = Navigator::new(Value::from(1)).dig("missing").unwrap();
        assert!(matches!(
            nav.iter(),
            Err(DelveError::InvalidOperation(_))
        ));

        let relaxed = nav.with_empty_iteration_on_missing(true);
        assert_eq!(relaxed.iter().unwrap().count(), 0);
    }

    #[test]
    fn test_iter_of_non_sequence_always_fails() {
        let nav = Navigator::new(Value::from(1)).with_empty_iteration_on_missing(true);
        assert!(matches!(
            nav.iter(),
            Err(DelveError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_pluck_collects_resolved_values() {
        let nav = Navigator::new(servers());
        assert_eq!(
            nav.pluck("host").unwrap().get(),
            Value::Sequence(vec![
                Value::from("a.example"),
                NOT_FOUND,
                Value::from("b.example")
            ])
        );
    }

    #[test]
    fn test_pluck_raises_on_first_hole_when_configured() {
        let nav = Navigator::new(servers()).with_raise_on_missing(true);
        assert_eq!(nav.pluck("host").unwrap_err(), DelveError::NotFound);
    }

    #[test]
    fn test_pluck_of_non_sequence_always_fails() {
        let nav = Navigator::new(Value::from(1));
        assert!(matches!(
            nav.pluck("z"),
            Err(DelveError::InvalidOperation(_))
        ));
        assert!(matches!(
            nav.with_empty_iteration_on_missing(true).pluck("z"),
            Err(DelveError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_pluck_of_sentinel_with_opt_in_is_an_empty_sequence() {
        let nav = Navigator::new(Value::from(1))
            .dig("missing")
            .unwrap()
            .with_empty_iteration_on_missing(true);
        assert_eq!(nav.pluck("host").unwrap().get(), Value::Sequence(Vec::new()));
    }

    #[test]
    fn test_get_or_substitutes_for_absence() {
        let nav = Navigator::new(BTreeMap::<String, Value>::new());
        assert_eq!(
            nav.dig("bubba").unwrap().get_or("something"),
            Value::from("something")
        );
    }

    #[test]
    fn test_get_or_fills_broadcast_holes() {
        let nav = Navigator::new(servers());
        assert_eq!(
            nav.dig("host").unwrap().get_or("unknown"),
            Value::Sequence(vec![
                Value::from("a.example"),
                Value::from("unknown"),
                Value::from("b.example")
            ])
        );
    }

    #[test]
    fn test_get_passes_present_payloads_through() {
        let nav = Navigator::new(Value::from(7));
        assert_eq!(nav.get(), Value::from(7));
        assert_eq!(nav.get_or("fallback"), Value::from(7));
    }

    #[test]
    fn test_navigator_has_no_truth_value() {
        let nav = Navigator::new(Value::from(true));
        assert!(matches!(
            nav.truthy(),
            Err(DelveError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_display_delegates_to_payload() {
        let nav = Navigator::new(Value::from(1)).dig("x").unwrap();
        assert_eq!(nav.to_string(), "<NOT_FOUND>");
    }
}
