//! Form schemas: which fields exist, how each is edited, how they group.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::validation::Validator;

/// Editor type used when a field schema names none.
pub const DEFAULT_EDITOR: &str = "Text";

fn default_editor() -> String {
    DEFAULT_EDITOR.to_string()
}

/// One choice of a `Select` editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SelectOptionRepr")]
pub struct SelectOption {
    pub val: Value,
    pub label: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SelectOptionRepr {
    Plain(String),
    Full { val: Value, label: String },
}

impl From<SelectOptionRepr> for SelectOption {
    fn from(repr: SelectOptionRepr) -> Self {
        match repr {
            SelectOptionRepr::Plain(s) => Self {
                val: Value::String(s.clone()),
                label: s,
            },
            SelectOptionRepr::Full { val, label } => Self { val, label },
        }
    }
}

impl SelectOption {
    pub fn new(val: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            val: val.into(),
            label: label.into(),
        }
    }
}

impl From<&str> for SelectOption {
    fn from(s: &str) -> Self {
        Self::new(s, s)
    }
}

/// Schema for a single field.
///
/// The form never looks inside; it hands this to the field, which picks an
/// editor by `editor` and reads presentation hints from the rest.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    /// Editor type tag, looked up in the [`EditorRegistry`](crate::EditorRegistry).
    #[serde(rename = "type", default = "default_editor")]
    pub editor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub editor_attrs: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub field_attrs: Map<String, Value>,
    #[serde(skip)]
    pub validators: Vec<Validator>,
    /// Keys this crate does not interpret, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR)
    }
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("editor", &self.editor)
            .field("title", &self.title)
            .field("help", &self.help)
            .field("options", &self.options)
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}

impl FieldSchema {
    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
            title: None,
            help: None,
            options: Vec::new(),
            editor_attrs: Map::new(),
            field_attrs: Map::new(),
            validators: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn text() -> Self {
        Self::new(DEFAULT_EDITOR)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn option(mut self, option: impl Into<SelectOption>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn editor_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.editor_attrs.insert(key.into(), value.into());
        self
    }

    pub fn field_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.field_attrs.insert(key.into(), value.into());
        self
    }

    /// Parse one schema entry. A bare string is shorthand for `{"type": ...}`.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::String(editor) => Ok(Self::new(editor)),
            other => serde_json::from_value(other),
        }
    }
}

/// Ordered mapping from field key to [`FieldSchema`].
///
/// Keys are unique; iteration follows insertion order, which is the default
/// field order of a form.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entries: Vec<(String, FieldSchema)>,
    index: HashMap<String, usize>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. Re-adding a key replaces its schema in place.
    pub fn field(mut self, key: impl Into<String>, schema: FieldSchema) -> Self {
        self.insert(key, schema);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, schema: FieldSchema) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = schema,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, schema));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldSchema> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldSchema)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, FieldSchema)>>(iter: I) -> Self {
        let mut schema = Self::new();
        for (key, field) in iter {
            schema.insert(key, field);
        }
        schema
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        let mut schema = Self::new();
        for (key, value) in map {
            let field = FieldSchema::from_value(value)
                .map_err(|e| D::Error::custom(format!("field '{key}': {e}")))?;
            schema.insert(key, field);
        }
        Ok(schema)
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, field) in &self.entries {
            map.serialize_entry(key, field)?;
        }
        map.end()
    }
}

/// Where a form gets its schema from.
#[derive(Clone)]
pub enum SchemaSource {
    Static(Schema),
    /// Invoked once, at form construction.
    Producer(Arc<dyn Fn() -> Schema + Send + Sync>),
}

impl SchemaSource {
    pub fn producer<F>(f: F) -> Self
    where
        F: Fn() -> Schema + Send + Sync + 'static,
    {
        Self::Producer(Arc::new(f))
    }

    /// Produce the concrete schema.
    pub fn resolve(&self) -> Schema {
        match self {
            Self::Static(schema) => schema.clone(),
            Self::Producer(produce) => produce(),
        }
    }
}

impl fmt::Debug for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(schema) => f.debug_tuple("Static").field(schema).finish(),
            Self::Producer(_) => write!(f, "Producer(...)"),
        }
    }
}

impl From<Schema> for SchemaSource {
    fn from(schema: Schema) -> Self {
        Self::Static(schema)
    }
}

/// One entry of a form's fieldset layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FieldsetSchemaRepr")]
pub struct FieldsetSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,
    pub fields: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldsetSchemaRepr {
    Keys(Vec<String>),
    Described {
        #[serde(default)]
        legend: Option<String>,
        fields: Vec<String>,
    },
}

impl From<FieldsetSchemaRepr> for FieldsetSchema {
    fn from(repr: FieldsetSchemaRepr) -> Self {
        match repr {
            FieldsetSchemaRepr::Keys(fields) => Self {
                legend: None,
                fields,
            },
            FieldsetSchemaRepr::Described { legend, fields } => Self { legend, fields },
        }
    }
}

impl FieldsetSchema {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            legend: None,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }
}

impl From<Vec<&str>> for FieldsetSchema {
    fn from(fields: Vec<&str>) -> Self {
        Self::new(fields)
    }
}

impl From<Vec<String>> for FieldsetSchema {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}
