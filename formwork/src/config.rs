//! Form configuration: per-instance options and class-level defaults.

use serde::Deserialize;

use crate::editor::EditorRegistry;
use crate::error::Result;
use crate::field::{Field, FieldFactory, field_factory};
use crate::fieldset::{Fieldset, FieldsetFactory, fieldset_factory};
use crate::model::{SharedModel, Values};
use crate::schema::{FieldsetSchema, Schema, SchemaSource};
use crate::template::{
    FieldTemplateData, FieldsetTemplateData, FormTemplateData, Template,
    default_field_template, default_fieldset_template, default_form_template,
};

/// Options for one form instance. Everything is optional.
///
/// # Example
///
/// ```ignore
/// let config = FormConfig::new()
///     .schema(schema)
///     .data(values)
///     .fields(["name", "age"])
///     .id_prefix("signup_");
/// let form = Form::new(config)?;
/// ```
#[derive(Clone, Default)]
pub struct FormConfig {
    /// Schema, taking precedence over the model's and the defaults'.
    pub schema: Option<SchemaSource>,
    /// Bound model. Takes precedence over `data`.
    pub model: Option<SharedModel>,
    /// Raw initial values, used when no model is bound.
    pub data: Option<Values>,
    /// Fieldset layout. Defaults to one fieldset with every selected field.
    pub fieldsets: Option<Vec<FieldsetSchema>>,
    /// Keys to create fields for. Defaults to every schema key.
    pub fields: Option<Vec<String>>,
    /// Prefix for generated editor ids.
    pub id_prefix: Option<String>,
    pub field: Option<FieldFactory>,
    pub fieldset: Option<FieldsetFactory>,
    pub template: Option<Template<FormTemplateData>>,
    pub field_template: Option<Template<FieldTemplateData>>,
    pub fieldset_template: Option<Template<FieldsetTemplateData>>,
    pub editors: Option<EditorRegistry>,
}

/// The serializable subset of [`FormConfig`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct FormDocument {
    #[serde(default)]
    schema: Option<Schema>,
    #[serde(default)]
    data: Option<Values>,
    #[serde(default)]
    fields: Option<Vec<String>>,
    #[serde(default)]
    fieldsets: Option<Vec<FieldsetSchema>>,
    #[serde(default)]
    id_prefix: Option<String>,
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `schema`, `data`, `fields`, `fieldsets` and `idPrefix` from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: FormDocument = serde_json::from_str(json)?;
        Ok(Self {
            schema: doc.schema.map(SchemaSource::Static),
            data: doc.data,
            fields: doc.fields,
            fieldsets: doc.fieldsets,
            id_prefix: doc.id_prefix,
            ..Default::default()
        })
    }

    pub fn schema(mut self, schema: impl Into<SchemaSource>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn model(mut self, model: SharedModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn data(mut self, data: Values) -> Self {
        self.data = Some(data);
        self
    }

    pub fn fieldsets<I, F>(mut self, fieldsets: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldsetSchema>,
    {
        self.fieldsets = Some(fieldsets.into_iter().map(Into::into).collect());
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = Some(prefix.into());
        self
    }

    /// Replace how fields are constructed for this form.
    pub fn field_factory(mut self, factory: FieldFactory) -> Self {
        self.field = Some(factory);
        self
    }

    /// Replace how fieldsets are constructed for this form.
    pub fn fieldset_factory(mut self, factory: FieldsetFactory) -> Self {
        self.fieldset = Some(factory);
        self
    }

    pub fn template(mut self, template: Template<FormTemplateData>) -> Self {
        self.template = Some(template);
        self
    }

    pub fn field_template(mut self, template: Template<FieldTemplateData>) -> Self {
        self.field_template = Some(template);
        self
    }

    pub fn fieldset_template(mut self, template: Template<FieldsetTemplateData>) -> Self {
        self.fieldset_template = Some(template);
        self
    }

    pub fn editors(mut self, editors: EditorRegistry) -> Self {
        self.editors = Some(editors);
        self
    }
}

/// Defaults shared by many forms; per-instance [`FormConfig`] values
/// override them once, at construction.
#[derive(Clone)]
pub struct FormDefaults {
    /// Used when neither the config nor the model supplies a schema.
    pub schema: Option<SchemaSource>,
    pub template: Template<FormTemplateData>,
    pub field_template: Template<FieldTemplateData>,
    pub fieldset_template: Template<FieldsetTemplateData>,
    pub field: FieldFactory,
    pub fieldset: FieldsetFactory,
    pub editors: EditorRegistry,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            schema: None,
            template: default_form_template(),
            field_template: default_field_template(),
            fieldset_template: default_fieldset_template(),
            field: field_factory(Field::new),
            fieldset: fieldset_factory(Fieldset::new),
            editors: EditorRegistry::default(),
        }
    }
}

impl FormDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(mut self, schema: impl Into<SchemaSource>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn editors(mut self, editors: EditorRegistry) -> Self {
        self.editors = editors;
        self
    }

    pub fn template(mut self, template: Template<FormTemplateData>) -> Self {
        self.template = template;
        self
    }

    pub fn field_template(mut self, template: Template<FieldTemplateData>) -> Self {
        self.field_template = template;
        self
    }

    pub fn fieldset_template(mut self, template: Template<FieldsetTemplateData>) -> Self {
        self.fieldset_template = template;
        self
    }

    pub fn field_factory(mut self, factory: FieldFactory) -> Self {
        self.field = factory;
        self
    }

    pub fn fieldset_factory(mut self, factory: FieldsetFactory) -> Self {
        self.fieldset = factory;
        self
    }
}
