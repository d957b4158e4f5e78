//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, RwLock};

use formdom::Element;
use formwork::editor::{Editor, EditorBase, EditorOptions, EditorRegistry, editor_factory};
use formwork::model::{Model, SetOptions, SharedModel, Values};
use formwork::schema::{DEFAULT_EDITOR, Schema, SchemaSource};
use formwork::validation::{ModelErrors, validator};
use formwork::{FieldSchema, ModelError, ValidationError};
use serde_json::Value;
use simplelog::{Config, LevelFilter, TestLogger};

/// Ordered record of editor calls, as `"key:call"`.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().map(|calls| calls.clone()).unwrap_or_default()
}

/// An editor that records every call it receives in a [`CallLog`].
pub struct SpyEditor {
    base: EditorBase,
    value: Value,
    log: CallLog,
}

impl SpyEditor {
    fn record(&self, call: &str) {
        if let Ok(mut calls) = self.log.lock() {
            calls.push(format!("{}:{call}", self.base.key()));
        }
    }
}

impl Editor for SpyEditor {
    fn key(&self) -> &str {
        self.base.key()
    }

    fn id(&self) -> &str {
        self.base.id()
    }

    fn value(&self) -> Value {
        self.value.clone()
    }

    fn set_value(&mut self, value: Value) {
        self.record("set_value");
        self.value = value;
    }

    fn validate(&self) -> Option<ValidationError> {
        self.record("validate");
        self.base.validate(&self.value)
    }

    fn focus(&mut self) {
        self.record("focus");
        self.base.focus();
    }

    fn blur(&mut self) {
        self.record("blur");
        self.base.blur();
    }

    fn has_focus(&self) -> bool {
        self.base.has_focus()
    }

    fn render(&mut self) -> Element {
        self.record("render");
        let el = Element::input(self.value.to_string());
        self.base.mount(el)
    }

    fn remove(&mut self) {
        self.record("remove");
        self.base.remove();
    }

    fn is_mounted(&self) -> bool {
        self.base.is_mounted()
    }
}

/// Built-in editors, with the default type replaced by a [`SpyEditor`].
pub fn spy_editors(log: &CallLog) -> EditorRegistry {
    let log = log.clone();
    EditorRegistry::default().with(
        DEFAULT_EDITOR,
        editor_factory(move |options: EditorOptions<'_>| {
            Box::new(SpyEditor {
                base: EditorBase::new(&options),
                value: options.value,
                log: log.clone(),
            })
        }),
    )
}

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// A model that records every write and answers validation from a script.
#[derive(Default)]
pub struct RecordingModel {
    pub attributes: Values,
    pub schema: Option<Schema>,
    pub errors: Option<ModelErrors>,
    pub reject: Option<String>,
    pub writes: Vec<(Values, SetOptions)>,
}

impl Model for RecordingModel {
    fn schema(&self) -> Option<SchemaSource> {
        self.schema.clone().map(SchemaSource::Static)
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.attributes.get(key).cloned()
    }

    fn set(&mut self, values: &Values, options: &SetOptions) -> Result<(), ModelError> {
        if let Some(reason) = &self.reject {
            return Err(ModelError::Rejected {
                reason: reason.clone(),
            });
        }
        self.writes.push((values.clone(), *options));
        self.attributes
            .extend(values.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(())
    }

    fn validate(&self, _values: &Values) -> Option<ModelErrors> {
        self.errors.clone()
    }
}

pub type Recorded = Arc<RwLock<RecordingModel>>;

pub fn recording(model: RecordingModel) -> Recorded {
    Arc::new(RwLock::new(model))
}

pub fn bind(model: &Recorded) -> SharedModel {
    model.clone()
}

pub fn writes(model: &Recorded) -> usize {
    model.read().map(|m| m.writes.len()).unwrap_or_default()
}

/// Text field that fails with kind `required` when empty.
pub fn required() -> FieldSchema {
    FieldSchema::text().validator(validator(|value| {
        let empty = match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };
        empty.then(|| ValidationError::new("required", "Required"))
    }))
}

/// `{name: {}, age: {}}`.
pub fn name_age() -> Schema {
    Schema::new()
        .field("name", FieldSchema::default())
        .field("age", FieldSchema::default())
}
