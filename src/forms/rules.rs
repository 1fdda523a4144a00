//! Field helpers shared by the serde_valid forms.
//!
//! Each form field is an [`Input`] (with `#[serde(default)]`), which records
//! whether the key was absent, null, of the wrong JSON type, or carried a
//! usable value.
//! Strings are trimmed and blank strings count as null. Numeric fields also
//! accept numeric strings such as `"10"`.
//!
//! Presence and type checks run as `custom` validators; range checks use the
//! stock `max_length`/`minimum` validators through [`Input`]'s trait impls.
//! The resulting [`Errors`] are flattened into a [`FieldErrors`] map.

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_valid::validation::{Error, Errors};
use serde_valid::{MaxLengthError, MinimumError, ValidateMaxLength, ValidateMinimum};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Input<T> {
    /// Key not present in the body.
    Missing,
    Null,
    /// Present but of the wrong JSON type.
    Invalid,
    Value(T),
}

impl<T> Default for Input<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T> Input<T> {
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl ValidateMaxLength for Input<String> {
    fn validate_max_length(&self, max_length: usize) -> Result<(), MaxLengthError> {
        match self {
            Self::Value(text) => text.validate_max_length(max_length),
            _ => Ok(()),
        }
    }
}

impl ValidateMinimum<f64> for Input<f64> {
    fn validate_minimum(&self, minimum: f64) -> Result<(), MinimumError> {
        match self {
            Self::Value(number) => number.validate_minimum(minimum),
            _ => Ok(()),
        }
    }
}

/// Strings are trimmed; a blank string reads as null.
impl<'de> Deserialize<'de> for Input<String> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = match Value::deserialize(deserializer)? {
            Value::Null => Input::Null,
            Value::String(text) => match text.trim() {
                "" => Input::Null,
                trimmed => Input::Value(trimmed.to_string()),
            },
            _ => Input::Invalid,
        };
        Ok(input)
    }
}

/// JSON numbers and numeric strings. Non-finite values are invalid.
impl<'de> Deserialize<'de> for Input<f64> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = match Value::deserialize(deserializer)? {
            Value::Null => return Ok(Input::Null),
            Value::String(text) if text.trim().is_empty() => return Ok(Input::Null),
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };

        Ok(number
            .filter(|number| number.is_finite())
            .map_or(Input::Invalid, Input::Value))
    }
}

pub fn required<T>(input: &Input<T>, field: &str) -> Result<(), Error> {
    match input {
        Input::Missing | Input::Null => Err(Error::Custom(format!(
            "The {} field is required.",
            field
        ))),
        _ => Ok(()),
    }
}

pub fn string<T>(input: &Input<T>, field: &str) -> Result<(), Error> {
    match input {
        Input::Invalid => Err(Error::Custom(format!(
            "The {} field must be a string.",
            field
        ))),
        _ => Ok(()),
    }
}

pub fn numeric<T>(input: &Input<T>, field: &str) -> Result<(), Error> {
    match input {
        Input::Invalid => Err(Error::Custom(format!(
            "The {} field must be a number.",
            field
        ))),
        _ => Ok(()),
    }
}

/// Request body as a form. Anything that is not a JSON object reads as `{}`.
pub fn parse_body<T>(body: &[u8]) -> T
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_slice::<Value>(body) {
        Ok(payload @ Value::Object(_)) => serde_json::from_value(payload).unwrap_or_default(),
        _ => T::default(),
    }
}

/// Field name to human readable messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: String) {
        self.0.entry(field.to_string()).or_default().push(message);
    }

    /// Total number of messages across all fields.
    pub fn count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// First message, with a hint about how many more there are.
    pub fn summary(&self) -> String {
        let first = self
            .0
            .values()
            .flatten()
            .next()
            .cloned()
            .unwrap_or_else(|| "The given data was invalid.".to_string());

        match self.count().saturating_sub(1) {
            0 => first,
            1 => format!("{} (and 1 more error)", first),
            more => format!("{} (and {} more errors)", first, more),
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl From<Errors> for FieldErrors {
    fn from(errors: Errors) -> Self {
        let mut fields = FieldErrors::default();
        let Errors::Object(object) = errors else {
            return fields;
        };

        for (field, errors) in object.properties {
            match errors {
                Errors::NewType(messages) => {
                    for message in messages {
                        fields.add(&field, message.to_string());
                    }
                }
                nested => fields.add(&field, nested.to_string()),
            }
        }
        fields
    }
}
