//! The external data model a form can be bound to.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::schema::{Schema, SchemaSource};
use crate::validation::ModelErrors;

/// Ordered bag of field values, keyed by field key.
pub type Values = Map<String, Value>;

/// A model shared between a form and its caller.
pub type SharedModel = Arc<RwLock<dyn Model>>;

/// Options passed through to [`Model::set`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Suppress change notifications on the model side.
    pub silent: bool,
    /// Ask the model to run its own validator before applying the write.
    pub validate: bool,
}

impl SetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    pub fn validate(mut self) -> Self {
        self.validate = true;
        self
    }
}

/// An external data model.
///
/// The form reads it to seed field values and writes it once per successful
/// commit. A write either applies completely or returns an error.
pub trait Model: Send + Sync {
    /// Schema the model describes itself with, if any.
    fn schema(&self) -> Option<SchemaSource> {
        None
    }

    /// Current value of one attribute.
    fn get(&self, key: &str) -> Option<Value>;

    /// Apply `values`. A rejection leaves the model unchanged.
    fn set(&mut self, values: &Values, options: &SetOptions) -> Result<(), ModelError>;

    /// Whole-model validation of a candidate value set. `None` means valid or
    /// no validator.
    fn validate(&self, _values: &Values) -> Option<ModelErrors> {
        None
    }
}

/// Share a model with a form.
pub fn shared<M: Model + 'static>(model: M) -> SharedModel {
    Arc::new(RwLock::new(model))
}

/// Read-lock a shared model, recovering from poisoning.
pub(crate) fn read_model<R>(model: &SharedModel, f: impl FnOnce(&dyn Model) -> R) -> R {
    let guard = model.read().unwrap_or_else(PoisonError::into_inner);
    f(&*guard)
}

/// Write-lock a shared model, recovering from poisoning.
pub(crate) fn write_model<R>(model: &SharedModel, f: impl FnOnce(&mut dyn Model) -> R) -> R {
    let mut guard = model.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}

type ModelValidator = Arc<dyn Fn(&Values) -> Option<ModelErrors> + Send + Sync>;
type WriteGuard = Arc<dyn Fn(&Values) -> Result<(), String> + Send + Sync>;

/// An in-memory attribute bag implementing [`Model`].
#[derive(Clone, Default)]
pub struct MemoryModel {
    attributes: Values,
    schema: Option<Schema>,
    validator: Option<ModelValidator>,
    guard: Option<WriteGuard>,
    revision: u64,
}

impl fmt::Debug for MemoryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryModel")
            .field("attributes", &self.attributes)
            .field("schema", &self.schema)
            .field("has_validator", &self.validator.is_some())
            .field("has_guard", &self.guard.is_some())
            .field("revision", &self.revision)
            .finish()
    }
}

impl MemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(attributes: Values) -> Self {
        Self {
            attributes,
            ..Default::default()
        }
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Install a model-level validator.
    pub fn validator<F>(mut self, f: F) -> Self
    where
        F: Fn(&Values) -> Option<ModelErrors> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(f));
        self
    }

    /// Install a write guard. It sees the incoming values and may refuse them.
    pub fn guard<F>(mut self, f: F) -> Self
    where
        F: Fn(&Values) -> Result<(), String> + Send + Sync + 'static,
    {
        self.guard = Some(Arc::new(f));
        self
    }

    pub fn attributes(&self) -> &Values {
        &self.attributes
    }

    /// Number of writes applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Model for MemoryModel {
    fn schema(&self) -> Option<SchemaSource> {
        self.schema.clone().map(SchemaSource::Static)
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.attributes.get(key).cloned()
    }

    fn set(&mut self, values: &Values, options: &SetOptions) -> Result<(), ModelError> {
        if let Some(guard) = &self.guard {
            guard(values).map_err(|reason| ModelError::Rejected { reason })?;
        }

        if options.validate {
            let mut candidate = self.attributes.clone();
            candidate.extend(values.iter().map(|(k, v)| (k.clone(), v.clone())));
            if let Some(errors) = Model::validate(self, &candidate) {
                return Err(ModelError::Invalid(errors));
            }
        }

        self.attributes
            .extend(values.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.revision += 1;
        log::trace!(
            "memory model write applied: keys={} silent={} revision={}",
            values.len(),
            options.silent,
            self.revision
        );
        Ok(())
    }

    fn validate(&self, values: &Values) -> Option<ModelErrors> {
        self.validator.as_ref().and_then(|validate| validate(values))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn values(v: Value) -> Values {
        match v {
            Value::Object(map) => map,
            _ => Values::new(),
        }
    }

    #[test]
    fn test_set_merges_and_counts() {
        let mut model = MemoryModel::new().attribute("a", 1);
        model
            .set(&values(json!({"b": 2})), &SetOptions::new())
            .expect("applies");
        assert_eq!(model.get("a"), Some(json!(1)));
        assert_eq!(model.get("b"), Some(json!(2)));
        assert_eq!(model.revision(), 1);
    }

    #[test]
    fn test_guard_rejects_without_applying() {
        let mut model = MemoryModel::new().guard(|_| Err("read only".into()));
        let err = model
            .set(&values(json!({"a": 1})), &SetOptions::new())
            .expect_err("rejected");
        assert_eq!(
            err,
            ModelError::Rejected {
                reason: "read only".into()
            }
        );
        assert!(model.attributes().is_empty());
        assert_eq!(model.revision(), 0);
    }

    #[test]
    fn test_validate_option_runs_validator_on_merged_attributes() {
        let mut model = MemoryModel::new()
            .attribute("min", 5)
            .validator(|attrs| {
                let min = attrs.get("min").and_then(Value::as_i64)?;
                let max = attrs.get("max").and_then(Value::as_i64)?;
                (max < min).then(|| ModelErrors::keyed([("max", "must be >= min")]))
            });

        let bad = values(json!({"max": 3}));
        assert!(model.set(&bad, &SetOptions::new().validate()).is_err());
        assert!(model.set(&bad, &SetOptions::new()).is_ok());
    }

    #[test]
    fn test_shared_model_coerces() {
        let model = shared(MemoryModel::new().attribute("x", "y"));
        let value = read_model(&model, |m| m.get("x"));
        assert_eq!(value, Some(json!("y")));
    }
}
