//! Fieldsets: layout groupings over fields the form owns.

use std::collections::HashMap;
use std::sync::Arc;

use formdom::{Element, View, find_by_data_mut};

use crate::error::{FormError, Result};
use crate::field::Field;
use crate::schema::FieldsetSchema;
use crate::template::{FieldsetTemplateData, Template, slots};

/// The form's fields, in selection order, addressable by key.
///
/// Owned by the form. Fieldsets receive it by reference and look fields up
/// by key; they never add or remove entries.
#[derive(Debug, Default)]
pub struct FieldMap {
    fields: Vec<Field>,
    index: HashMap<String, usize>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field at the end. Keys must be unique.
    pub(crate) fn push(&mut self, field: Field) -> Result<()> {
        let key = field.key().to_string();
        if self.index.contains_key(&key) {
            return Err(FormError::DuplicateField { key });
        }
        self.index.insert(key, self.fields.len());
        self.fields.push(field);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.index.get(key).map(|&i| &self.fields[i])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Field> {
        self.index.get(key).map(|&i| &mut self.fields[i])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builds a fieldset. The default is [`Fieldset::new`].
pub type FieldsetFactory = Arc<
    dyn Fn(FieldsetSchema, &FieldMap, Template<FieldsetTemplateData>) -> Result<Fieldset>
        + Send
        + Sync,
>;

/// Wrap a closure as a [`FieldsetFactory`].
pub fn fieldset_factory<F>(f: F) -> FieldsetFactory
where
    F: Fn(FieldsetSchema, &FieldMap, Template<FieldsetTemplateData>) -> Result<Fieldset>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// An ordered group of fields, referenced by key.
pub struct Fieldset {
    schema: FieldsetSchema,
    template: Template<FieldsetTemplateData>,
    view: View,
}

impl std::fmt::Debug for Fieldset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fieldset")
            .field("schema", &self.schema)
            .field("mounted", &self.view.is_mounted())
            .finish()
    }
}

impl Fieldset {
    /// Every key in `schema` must name a field in `fields`.
    pub fn new(
        schema: FieldsetSchema,
        fields: &FieldMap,
        template: Template<FieldsetTemplateData>,
    ) -> Result<Self> {
        if let Some(key) = schema.fields.iter().find(|k| !fields.contains_key(k)) {
            return Err(FormError::UnknownFieldsetKey { key: key.clone() });
        }

        Ok(Self {
            schema,
            template,
            view: View::new(),
        })
    }

    pub fn schema(&self) -> &FieldsetSchema {
        &self.schema
    }

    pub fn legend(&self) -> Option<&str> {
        self.schema.legend.as_deref()
    }

    /// Referenced keys, in fieldset order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.schema.fields.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schema.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schema.fields.is_empty()
    }

    /// The field at `index` in this fieldset's order.
    pub fn field_at<'f>(&self, index: usize, fields: &'f FieldMap) -> Option<&'f Field> {
        let key = self.schema.fields.get(index)?;
        fields.get(key)
    }

    pub fn field_at_mut<'f>(
        &self,
        index: usize,
        fields: &'f mut FieldMap,
    ) -> Option<&'f mut Field> {
        let key = self.schema.fields.get(index)?;
        fields.get_mut(key)
    }

    /// Render the chrome, then render and append each referenced field.
    pub fn render(&mut self, fields: &mut FieldMap) -> Result<Element> {
        let data = FieldsetTemplateData {
            legend: self.schema.legend.clone(),
        };
        let mut el = (self.template)(&data);

        let mut rendered = Vec::with_capacity(self.schema.fields.len());
        for key in &self.schema.fields {
            let field = fields
                .get_mut(key)
                .ok_or_else(|| FormError::FieldNotFound { key: key.clone() })?;
            rendered.push(field.render());
        }

        match find_by_data_mut(&mut el, slots::FIELDS) {
            Some(slot) => rendered.into_iter().for_each(|f| slot.push_child(f)),
            None => rendered.into_iter().for_each(|f| el.push_child(f)),
        }

        Ok(self.view.set_element(el).clone())
    }

    pub fn element(&self) -> Option<&Element> {
        self.view.element()
    }

    /// Remove this fieldset's own render unit. Fields are left alone.
    pub fn remove(&mut self) {
        self.view.remove();
    }

    pub fn is_mounted(&self) -> bool {
        self.view.is_mounted()
    }
}
