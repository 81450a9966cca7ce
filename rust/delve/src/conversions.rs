//! Conversions between [`Value`] and ordinary Rust / JSON data.
//!
//! `From` impls cover the primitives, sequences, maps and [`Record`]s so
//! that [`Navigator::new`] accepts plain Rust data. JSON parsed with
//! `serde_json` converts losslessly into a [`Value`]; conversion back is
//! fallible because neither the sentinel nor records have a JSON
//! representation.
//!
//! [`Navigator::new`]: crate::Navigator::new

use std::collections::BTreeMap;

use serde::{Serialize, Serializer, ser::Error as _};

use crate::{DelveError, Record, Value};

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::SignedInt(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::SignedInt(value.into())
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Value::SignedInt(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UnsignedInt(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UnsignedInt(value.into())
    }
}

impl From<u128> for Value {
    fn from(value: u128) -> Self {
        Value::UnsignedInt(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T> From<BTreeMap<String, T>> for Value
where
    T: Into<Value>,
{
    fn from(entries: BTreeMap<String, T>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        )
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Sequence(items.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(entries: I) -> Self {
        Value::Map(entries.into_iter().collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Boolean(value),
            serde_json::Value::Number(number) => {
                if let Some(signed) = number.as_i64() {
                    Value::SignedInt(signed.into())
                } else if let Some(unsigned) = number.as_u64() {
                    Value::UnsignedInt(unsigned.into())
                } else {
                    Value::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(string) => Value::String(string),
            serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(entries) => entries
                .into_iter()
                .map(|(key, value)| (key, Value::from(value)))
                .collect(),
        }
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = DelveError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Boolean(value) => Ok(value.into()),
            Value::SignedInt(number) => i64::try_from(number).map(Into::into).map_err(|_| {
                DelveError::InvalidOperation("integer is out of JSON range".into())
            }),
            Value::UnsignedInt(number) => u64::try_from(number).map(Into::into).map_err(|_| {
                DelveError::InvalidOperation("integer is out of JSON range".into())
            }),
            Value::Float(number) => serde_json::Number::from_f64(number)
                .map(serde_json::Value::Number)
                .ok_or_else(|| {
                    DelveError::InvalidOperation(
                        "non-finite float has no JSON representation".into(),
                    )
                }),
            Value::String(string) => Ok(string.into()),
            Value::Sequence(items) => items
                .into_iter()
                .map(serde_json::Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(serde_json::Value::Array),
            Value::Map(entries) => entries
                .into_iter()
                .map(|(key, value)| Ok((key, serde_json::Value::try_from(value)?)))
                .collect::<Result<serde_json::Map<_, _>, DelveError>>()
                .map(serde_json::Value::Object),
            Value::Record(_) => Err(DelveError::InvalidOperation(
                "records have no canonical JSON representation".into(),
            )),
            Value::NotFound => Err(DelveError::InvalidOperation(
                "NOT_FOUND has no JSON representation; substitute a default with get_or".into(),
            )),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(value) => serializer.serialize_bool(*value),
            Value::SignedInt(number) => serializer.serialize_i128(*number),
            Value::UnsignedInt(number) => serializer.serialize_u128(*number),
            Value::Float(number) => serializer.serialize_f64(*number),
            Value::String(string) => serializer.serialize_str(string),
            Value::Sequence(items) => items.serialize(serializer),
            Value::Map(entries) => entries.serialize(serializer),
            Value::Record(record) => record.serialize(serializer),
            Value::NotFound => Err(S::Error::custom(
                "NOT_FOUND cannot be serialized; substitute a default with get_or first",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::NOT_FOUND;

    #[test]
    fn test_json_converts_to_value() {
        let value = Value::from(json!({
            "name": "ada",
            "age": 36,
            "scores": [1.5, -2, null]
        }));

        assert_eq!(
            value,
            Value::Map(BTreeMap::from([
                ("name".to_owned(), Value::from("ada")),
                ("age".to_owned(), Value::from(36)),
                (
                    "scores".to_owned(),
                    Value::Sequence(vec![Value::from(1.5), Value::from(-2), Value::Null])
                ),
            ]))
        );
    }

    #[test]
    fn test_value_converts_back_to_json() {
        let original = json!({ "a": [1, "two", false], "b": null });
        let roundtrip = serde_json::Value::try_from(Value::from(original.clone())).unwrap();
        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_sentinel_has_no_json_representation() {
        assert!(matches!(
            serde_json::Value::try_from(NOT_FOUND),
            Err(DelveError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_record_has_no_json_representation() {
        let value = Value::Record(Record::new().field("a", 1));
        assert!(matches!(
            serde_json::Value::try_from(value),
            Err(DelveError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_option_and_scalar_conversions() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(3i64)), Value::from(3));
        assert_eq!(Value::from(vec![1i64, 2, 3]).kind().to_string(), "sequence");
    }

    #[test]
    fn test_serialize_rejects_the_sentinel() {
        assert!(serde_json::to_string(&NOT_FOUND).is_err());
        assert!(serde_json::to_string(&Value::from(7)).is_ok());
    }
}
