//! Field: one editor plus its key, label, help text and error display.

use std::fmt;
use std::sync::Arc;

use formdom::{Element, View, find_by_data_mut};
use serde_json::Value;

use crate::editor::{Editor, EditorOptions, EditorRegistry};
use crate::error::{CommitError, Result, ValidationError};
use crate::form::FormId;
use crate::model::{SetOptions, SharedModel, Values, read_model, write_model};
use crate::schema::FieldSchema;
use crate::template::{ERROR_CLASS, FieldTemplateData, Template, slots};
use crate::validation::FormErrors;

/// Where a field's initial value comes from.
#[derive(Clone)]
pub enum Binding {
    /// Read the key from a bound model.
    Model(SharedModel),
    /// A value supplied directly (from a data bag, or `null`).
    Value(Value),
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(_) => write!(f, "Model(..)"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// Everything a [`FieldFactory`] receives.
#[derive(Clone)]
pub struct FieldOptions<'a> {
    /// The form creating this field.
    pub form: FormId,
    pub key: &'a str,
    pub schema: FieldSchema,
    pub id_prefix: Option<&'a str>,
    pub binding: Binding,
    pub editors: &'a EditorRegistry,
    pub template: Template<FieldTemplateData>,
}

/// Builds a field. The default is [`Field::new`].
pub type FieldFactory = Arc<dyn for<'a> Fn(FieldOptions<'a>) -> Result<Field> + Send + Sync>;

/// Wrap a closure as a [`FieldFactory`].
pub fn field_factory<F>(f: F) -> FieldFactory
where
    F: for<'a> Fn(FieldOptions<'a>) -> Result<Field> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// `firstName` -> `First Name`.
pub fn humanize(key: &str) -> String {
    let mut title = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            title.push(' ');
        }
        if i == 0 {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
    }
    title
}

/// Element id for a field's editor: dots become underscores, then the
/// prefix (if any) is prepended.
pub fn editor_id(key: &str, prefix: Option<&str>) -> String {
    let id = key.replace('.', "_");
    match prefix {
        Some(prefix) => format!("{prefix}{id}"),
        None => id,
    }
}

/// A labelled, validated wrapper around one [`Editor`].
pub struct Field {
    key: String,
    schema: FieldSchema,
    title: String,
    editor_id: String,
    editor: Box<dyn Editor>,
    model: Option<SharedModel>,
    template: Template<FieldTemplateData>,
    error: Option<String>,
    view: View,
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("key", &self.key)
            .field("editor", &self.schema.editor)
            .field("editor_id", &self.editor_id)
            .field("value", &self.editor.value())
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl Field {
    pub fn new(options: FieldOptions<'_>) -> Result<Self> {
        let FieldOptions {
            form,
            key,
            schema,
            id_prefix,
            binding,
            editors,
            template,
        } = options;

        let editor_id = editor_id(key, id_prefix);
        let title = schema.title.clone().unwrap_or_else(|| humanize(key));

        let (value, model) = match binding {
            Binding::Model(model) => {
                let value = read_model(&model, |m| m.get(key)).unwrap_or(Value::Null);
                (value, Some(model))
            }
            Binding::Value(value) => (value, None),
        };

        let editor = editors.create(EditorOptions {
            key,
            id: &editor_id,
            schema: &schema,
            value,
        })?;
        log::trace!("field created: form={form} key={key} editor={}", schema.editor);

        Ok(Self {
            key: key.to_string(),
            schema,
            title,
            editor_id,
            editor,
            model,
            template,
            error: None,
            view: View::new(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn editor_id(&self) -> &str {
        &self.editor_id
    }

    pub fn editor(&self) -> &dyn Editor {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> &mut dyn Editor {
        self.editor.as_mut()
    }

    pub fn model(&self) -> Option<&SharedModel> {
        self.model.as_ref()
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// The editor's current value; never cached.
    pub fn value(&self) -> Value {
        self.editor.value()
    }

    pub fn set_value(&mut self, value: Value) {
        self.editor.set_value(value);
    }

    /// Validate and write this one value to the bound model.
    pub fn commit(&mut self, options: &SetOptions) -> std::result::Result<(), CommitError> {
        if let Some(error) = self.validate() {
            let mut errors = FormErrors::new();
            errors.insert(self.key.clone(), error);
            return Err(CommitError::Invalid(errors));
        }

        let model = self.model.as_ref().ok_or(CommitError::Unbound)?;
        let mut values = Values::new();
        values.insert(self.key.clone(), self.editor.value());
        write_model(model, |m| m.set(&values, options))?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Validation and error display
    // -------------------------------------------------------------------------

    /// Validate via the editor and show or clear the result.
    pub fn validate(&mut self) -> Option<ValidationError> {
        let error = self.editor.validate();
        match &error {
            Some(error) => self.set_error(error.message.clone()),
            None => self.clear_error(),
        }
        error
    }

    /// Show `message` as this field's error.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.refresh_error();
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.refresh_error();
    }

    /// The error currently shown, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn refresh_error(&mut self) {
        if let Some(el) = self.view.element_mut() {
            apply_error(el, self.error.as_deref());
        }
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focus(&mut self) {
        self.editor.focus();
    }

    pub fn blur(&mut self) {
        self.editor.blur();
    }

    pub fn has_focus(&self) -> bool {
        self.editor.has_focus()
    }

    // -------------------------------------------------------------------------
    // Render lifecycle
    // -------------------------------------------------------------------------

    /// Build the field's render unit from current state and mount it.
    /// Returns a copy for the parent to compose.
    pub fn render(&mut self) -> Element {
        let data = FieldTemplateData {
            key: self.key.clone(),
            title: self.title.clone(),
            help: self.schema.help.clone(),
            editor_id: self.editor_id.clone(),
            field_attrs: self.schema.field_attrs.clone(),
        };
        let mut el = (self.template)(&data);
        el.data.insert(slots::FIELD.to_string(), self.key.clone());

        let editor_el = self.editor.render();
        match find_by_data_mut(&mut el, slots::EDITOR) {
            Some(slot) => slot.push_child(editor_el),
            None => el.push_child(editor_el),
        }
        apply_error(&mut el, self.error.as_deref());

        self.view.set_element(el).clone()
    }

    pub fn element(&self) -> Option<&Element> {
        self.view.element()
    }

    /// Remove the editor's render unit, then the field's own.
    pub fn remove(&mut self) {
        self.editor.remove();
        self.view.remove();
    }

    pub fn is_mounted(&self) -> bool {
        self.view.is_mounted()
    }
}

/// Show `error` on a field render unit, or clear it.
pub(crate) fn apply_error(el: &mut Element, error: Option<&str>) {
    match error {
        Some(_) => el.add_class(ERROR_CLASS),
        None => el.remove_class(ERROR_CLASS),
    }
    if let Some(slot) = find_by_data_mut(el, slots::ERROR) {
        slot.set_text(error.unwrap_or_default());
    }
}
