//! The form: owns fields and fieldsets built from a schema, and mediates
//! between them and an optional bound model.

mod lifecycle;
mod render;
mod validate;
mod values;

use formdom::View;
use serde_json::Value;
use uuid::Uuid;

use crate::config::{FormConfig, FormDefaults};
use crate::error::{FormError, Result};
use crate::field::{Binding, Field, FieldOptions};
use crate::fieldset::{FieldMap, Fieldset};
use crate::model::{SharedModel, Values, read_model};
use crate::schema::{FieldSchema, FieldsetSchema, Schema};
use crate::template::{FormTemplateData, Template};

/// Unique identifier for a form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(Uuid);

impl FormId {
    /// Create a new unique form ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Id given to the form's root element.
    pub fn element_id(&self) -> String {
        format!("form-{}", self.0.simple())
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A form composed from a schema.
///
/// Fields are created once, at construction, and live as long as the form.
/// Fieldsets refer to them by key.
pub struct Form {
    id: FormId,
    schema: Schema,
    model: Option<SharedModel>,
    data: Option<Values>,
    id_prefix: Option<String>,
    selected_fields: Vec<String>,
    fields: FieldMap,
    fieldsets: Vec<Fieldset>,
    template: Template<FormTemplateData>,
    view: View,
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("id", &self.id)
            .field("selected_fields", &self.selected_fields)
            .field("fields", &self.fields)
            .field("fieldsets", &self.fieldsets)
            .field("bound", &self.model.is_some())
            .field("mounted", &self.view.is_mounted())
            .finish_non_exhaustive()
    }
}

impl Form {
    /// Build a form with the built-in defaults.
    pub fn new(config: FormConfig) -> Result<Self> {
        Self::with_defaults(&FormDefaults::default(), config)
    }

    /// Build a form, letting `config` override `defaults`.
    ///
    /// The schema comes from the config, then the model, then the defaults,
    /// else it is empty. One field is created per selected key, in order;
    /// fieldsets are created afterwards and may only name selected keys.
    pub fn with_defaults(defaults: &FormDefaults, config: FormConfig) -> Result<Self> {
        let FormConfig {
            schema,
            model,
            data,
            fieldsets,
            fields,
            id_prefix,
            field,
            fieldset,
            template,
            field_template,
            fieldset_template,
            editors,
        } = config;

        let id = FormId::new();
        let schema = schema
            .or_else(|| model.as_ref().and_then(|m| read_model(m, |m| m.schema())))
            .or_else(|| defaults.schema.clone())
            .map(|source| source.resolve())
            .unwrap_or_default();

        let selected_fields =
            fields.unwrap_or_else(|| schema.keys().map(str::to_string).collect());

        let field_factory = field.unwrap_or_else(|| defaults.field.clone());
        let fieldset_factory = fieldset.unwrap_or_else(|| defaults.fieldset.clone());
        let field_template = field_template.unwrap_or_else(|| defaults.field_template.clone());
        let fieldset_template =
            fieldset_template.unwrap_or_else(|| defaults.fieldset_template.clone());
        let template = template.unwrap_or_else(|| defaults.template.clone());
        let editors = editors.as_ref().unwrap_or(&defaults.editors);

        let mut field_map = FieldMap::new();
        for key in &selected_fields {
            let field_schema = match schema.get(key) {
                Some(field_schema) => field_schema.clone(),
                None => {
                    log::warn!("form {id}: field {key:?} is not in the schema, using defaults");
                    FieldSchema::default()
                }
            };

            let binding = match (&model, &data) {
                (Some(model), _) => Binding::Model(model.clone()),
                (None, Some(data)) => Binding::Value(data.get(key).cloned().unwrap_or(Value::Null)),
                (None, None) => Binding::Value(Value::Null),
            };

            let field = field_factory(FieldOptions {
                form: id,
                key,
                schema: field_schema,
                id_prefix: id_prefix.as_deref(),
                binding,
                editors,
                template: field_template.clone(),
            })?;
            if field.key() != key {
                return Err(FormError::Config(format!(
                    "field factory returned {:?} for key {key:?}",
                    field.key()
                )));
            }
            field_map.push(field)?;
        }

        let fieldset_schemas =
            fieldsets.unwrap_or_else(|| vec![FieldsetSchema::new(selected_fields.iter())]);
        let fieldsets = fieldset_schemas
            .into_iter()
            .map(|schema| fieldset_factory(schema, &field_map, fieldset_template.clone()))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "form {id} created: fields={} fieldsets={} bound={}",
            field_map.len(),
            fieldsets.len(),
            model.is_some()
        );

        Ok(Self {
            id,
            schema,
            model,
            data,
            id_prefix,
            selected_fields,
            fields: field_map,
            fieldsets,
            template,
            view: View::new(),
        })
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    /// The resolved schema, including keys that were not selected.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Keys fields were created for, in order.
    pub fn selected_fields(&self) -> &[String] {
        &self.selected_fields
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut Field> {
        self.fields.get_mut(key)
    }

    pub fn fieldsets(&self) -> &[Fieldset] {
        &self.fieldsets
    }

    pub fn model(&self) -> Option<&SharedModel> {
        self.model.as_ref()
    }

    /// Raw initial data, when the form was built from a data bag.
    pub fn data(&self) -> Option<&Values> {
        self.data.as_ref()
    }

    pub fn id_prefix(&self) -> Option<&str> {
        self.id_prefix.as_deref()
    }

    fn field_or_err(&self, key: &str) -> Result<&Field> {
        self.fields.get(key).ok_or_else(|| FormError::FieldNotFound {
            key: key.to_string(),
        })
    }

    fn field_mut_or_err(&mut self, key: &str) -> Result<&mut Field> {
        self.fields.get_mut(key).ok_or_else(|| FormError::FieldNotFound {
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{MemoryModel, shared};

    fn schema() -> Schema {
        Schema::new()
            .field("name", FieldSchema::text())
            .field("age", FieldSchema::new("Number"))
    }

    #[test]
    fn test_form_id_unique() {
        assert_ne!(FormId::new(), FormId::new());
        let id = FormId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }

    #[test]
    fn test_selected_fields_default_to_schema_order() {
        let form = Form::new(FormConfig::new().schema(schema())).expect("form");
        assert_eq!(form.selected_fields(), ["name", "age"]);
        assert_eq!(form.fields().keys().collect::<Vec<_>>(), vec!["name", "age"]);
        assert_eq!(form.fieldsets().len(), 1);
        assert_eq!(form.fieldsets()[0].keys().collect::<Vec<_>>(), vec!["name", "age"]);
    }

    #[test]
    fn test_schema_falls_back_to_model_then_defaults() {
        let model = shared(MemoryModel::new().with_schema(schema()));
        let form = Form::new(FormConfig::new().model(model)).expect("form");
        assert_eq!(form.selected_fields(), ["name", "age"]);

        let defaults = FormDefaults::new().schema(Schema::new().field("x", FieldSchema::text()));
        let form = Form::with_defaults(&defaults, FormConfig::new()).expect("form");
        assert_eq!(form.selected_fields(), ["x"]);

        let form = Form::new(FormConfig::new()).expect("form");
        assert!(form.fields().is_empty());
    }

    #[test]
    fn test_model_wins_over_data() {
        let model = shared(MemoryModel::new().attribute("name", "from model"));
        let mut data = Values::new();
        data.insert("name".into(), json!("from data"));
        let form = Form::new(FormConfig::new().schema(schema()).model(model).data(data))
            .expect("form");
        assert_eq!(form.field("name").map(Field::value), Some(json!("from model")));
    }

    #[test]
    fn test_unknown_fieldset_key_is_rejected() {
        let config = FormConfig::new()
            .schema(schema())
            .fields(["name"])
            .fieldsets([vec!["name", "age"]]);
        let err = Form::new(config).expect_err("age is not selected");
        assert!(matches!(err, FormError::UnknownFieldsetKey { key } if key == "age"));
    }

    #[test]
    fn test_duplicate_selection_is_rejected() {
        let config = FormConfig::new().schema(schema()).fields(["name", "name"]);
        let err = Form::new(config).expect_err("duplicate");
        assert!(matches!(err, FormError::DuplicateField { key } if key == "name"));
    }
}
