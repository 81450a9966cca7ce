#![warn(missing_docs)]

//! # Delve
//!
//! Chained navigation over heterogeneous nested data without presence
//! checks at every step.
//!
//! A [`Navigator`] wraps one piece of data and resolves one [`Selector`]
//! per hop: member access first, then key or position. A step that finds
//! nothing wraps the [`NOT_FOUND`] sentinel instead of failing, and the
//! sentinel propagates through the rest of the chain, so a deep path can
//! be written in one expression and checked once at the end. Field lookups
//! applied to a sequence broadcast across its elements.
//!
//! Absence stays a value by default. Opting in per instance,
//! `raise_on_missing` turns it into [`DelveError::NotFound`] at the
//! navigation step and `empty_iteration_on_missing` lets an absent payload
//! iterate as an empty sequence. Genuine misuse, such as iterating a
//! scalar or asking for the truth value of the sentinel, always fails with
//! [`DelveError::InvalidOperation`]; no flag suppresses it.
//!
//! ## Example
//!
//! ```
//! use delve::{NOT_FOUND, Navigator, Value};
//! use serde_json::json;
//!
//! let config = Navigator::new(json!({
//!     "servers": [
//!         { "host": "a.example" },
//!         { "host": "b.example" }
//!     ],
//!     "retries": 3
//! }));
//!
//! let hosts = config.dig("servers")?.pluck("host")?.get();
//! assert_eq!(hosts, Value::from(json!(["a.example", "b.example"])));
//!
//! // Nothing at this path; the sentinel came back instead of an error
//! let timeout = config.dig("timeout")?.dig("seconds")?.get();
//! assert_eq!(timeout, NOT_FOUND);
//! # Ok::<(), delve::DelveError>(())
//! ```

/// Conversions between [`Value`] and ordinary Rust / JSON data.
pub mod conversions;
/// Error types for navigation and unwrapping.
pub mod error;
/// The chaining wrapper over one payload.
pub mod navigator;
/// Record-like payloads with named members and keyed entries.
pub mod record;
mod resolve;
/// Per-hop navigation selectors.
pub mod selector;
/// The payload model and the not-found sentinel.
pub mod value;

pub use error::{DelveError, DelveResult};
pub use navigator::{Iter, Navigator};
pub use record::Record;
pub use selector::Selector;
pub use value::{NOT_FOUND, Value, ValueKind};
