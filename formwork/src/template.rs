//! Templates: functions from template data to a render unit with slots.
//!
//! A template only builds chrome. The component then looks up the slots it
//! knows about (elements carrying one of the [`slots`] data keys) and fills
//! them.

use std::sync::Arc;

use formdom::Element;
use serde_json::{Map, Value};

use crate::editor::attr_text;

/// Builds a component's chrome from its template data.
pub type Template<D> = Arc<dyn Fn(&D) -> Element + Send + Sync>;

/// Wrap a closure as a [`Template`].
pub fn template<D, F>(f: F) -> Template<D>
where
    F: Fn(&D) -> Element + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Data keys marking composition slots.
pub mod slots {
    /// Form chrome: insert fields here. The value selects them: `*` for all
    /// selected fields, or a comma-separated key list. In fieldset chrome the
    /// value is ignored and the fieldset's own fields go here.
    pub const FIELDS: &str = "fields";
    /// Form chrome: insert every fieldset here.
    pub const FIELDSETS: &str = "fieldsets";
    /// Field chrome: mount the editor here.
    pub const EDITOR: &str = "editor";
    /// Field chrome: the current error message goes here.
    pub const ERROR: &str = "error";
    /// Root of a field's render unit: the field key.
    pub const FIELD: &str = "field";
    /// Root of an editor's render unit: the field key.
    pub const KEY: &str = "key";

    /// Data keys user attributes may not overwrite.
    pub const RESERVED: [&str; 6] = [FIELDS, FIELDSETS, EDITOR, ERROR, FIELD, KEY];

    pub fn is_reserved(name: &str) -> bool {
        RESERVED.contains(&name)
    }
}

/// Class added to a field's render unit while it shows an error.
pub const ERROR_CLASS: &str = "error";

#[derive(Debug, Clone)]
pub struct FormTemplateData {
    /// Id of the form's root element.
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct FieldTemplateData {
    pub key: String,
    pub title: String,
    pub help: Option<String>,
    pub editor_id: String,
    pub field_attrs: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct FieldsetTemplateData {
    pub legend: Option<String>,
}

/// `form` with a single fieldsets slot.
pub fn default_form_template() -> Template<FormTemplateData> {
    template(|data: &FormTemplateData| {
        Element::tag("form")
            .id(data.id.clone())
            .child(Element::box_().data(slots::FIELDSETS, ""))
    })
}

/// `fieldset` with an optional legend; fields are appended after it.
pub fn default_fieldset_template() -> Template<FieldsetTemplateData> {
    template(|data: &FieldsetTemplateData| {
        let el = Element::tag("fieldset").data(slots::FIELDS, "");
        match &data.legend {
            Some(legend) => el.child(Element::text(legend.clone()).with_tag("legend")),
            None => el,
        }
    })
}

/// Label, editor slot, error slot, help text.
///
/// Field attributes become data attributes on the root, except names that
/// would collide with a slot.
pub fn default_field_template() -> Template<FieldTemplateData> {
    template(|data: &FieldTemplateData| {
        let mut el = Element::box_().data(slots::FIELD, data.key.clone());
        for (name, value) in &data.field_attrs {
            if slots::is_reserved(name) {
                log::warn!("field {:?}: attribute {name:?} is reserved, skipped", data.key);
                continue;
            }
            el = el.data(name.clone(), attr_text(value));
        }

        let mut body = Element::box_()
            .child(Element::box_().data(slots::EDITOR, ""))
            .child(Element::box_().data(slots::ERROR, ""));
        if let Some(help) = &data.help {
            body = body.child(Element::text(help.clone()).data("help", ""));
        }

        el.child(
            Element::text(data.title.clone())
                .with_tag("label")
                .data("for", data.editor_id.clone()),
        )
        .child(body)
    })
}
