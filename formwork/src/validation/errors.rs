use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A model-level error that is not tied to a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneralError {
    Message(String),
    List(Vec<String>),
}

impl fmt::Display for GeneralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => write!(f, "{message}"),
            Self::List(messages) => write!(f, "{}", messages.join("; ")),
        }
    }
}

/// What a model-level validator returns.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelErrors {
    /// A single message or a list, not attributable to a field
    General(GeneralError),
    /// Errors keyed by field, in the order the model reported them
    Keyed(Vec<(String, ValidationError)>),
}

impl ModelErrors {
    pub fn message(message: impl Into<String>) -> Self {
        Self::General(GeneralError::Message(message.into()))
    }

    pub fn list<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::General(GeneralError::List(
            messages.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn keyed<I, K, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<String>,
        E: Into<ValidationError>,
    {
        Self::Keyed(
            errors
                .into_iter()
                .map(|(k, e)| (k.into(), e.into()))
                .collect(),
        )
    }
}

impl fmt::Display for ModelErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General(general) => write!(f, "{general}"),
            Self::Keyed(errors) => {
                for (i, (key, error)) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {error}")?;
                }
                Ok(())
            }
        }
    }
}

/// An entry of the `_others` bucket.
#[derive(Debug, Clone, PartialEq)]
pub enum OtherError {
    /// A model error that was not a key mapping
    General(GeneralError),
    /// A keyed model error that could not be attached to its field, either
    /// because the field already failed its own validation or because no
    /// such field exists
    Demoted { key: String, error: ValidationError },
}

impl Serialize for OtherError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::General(general) => general.serialize(serializer),
            Self::Demoted { key, error } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(key, error)?;
                map.end()
            }
        }
    }
}

/// Aggregated result of [`Form::validate`](crate::Form::validate).
///
/// Keyed errors keep the order they were recorded in: field errors in field
/// order, then model errors that filled gaps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    fields: Vec<(String, ValidationError)>,
    others: Vec<OtherError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `key`, replacing any earlier one.
    pub fn insert(&mut self, key: impl Into<String>, error: ValidationError) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = error,
            None => self.fields.push((key, error)),
        }
    }

    pub fn push_other(&mut self, other: OtherError) {
        self.others.push(other);
    }

    pub fn get(&self, key: &str) -> Option<&ValidationError> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keyed errors in recording order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.fields.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// The `_others` bucket.
    pub fn others(&self) -> &[OtherError] {
        &self.others
    }

    /// Number of keyed errors plus entries in `_others`.
    pub fn len(&self) -> usize {
        self.fields.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.others.is_empty()
    }

    /// `None` when nothing was recorded.
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl Serialize for FormErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_others = !self.others.is_empty();
        let len = self.fields.len() + usize::from(has_others);
        let mut map = serializer.serialize_map(Some(len))?;
        for (key, error) in &self.fields {
            map.serialize_entry(key, error)?;
        }
        if has_others {
            map.serialize_entry("_others", &self.others)?;
        }
        map.end()
    }
}
