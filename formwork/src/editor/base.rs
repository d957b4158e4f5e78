use formdom::{Element, View};
use serde_json::{Map, Value};

use super::{EditorOptions, attr_text};
use crate::error::ValidationError;
use crate::template::slots;
use crate::validation::{Validator, first_error};

/// State every built-in editor shares: identity, validators, focus and the
/// mounted render unit.
///
/// Custom editors can embed it to get the same behavior.
#[derive(Clone)]
pub struct EditorBase {
    key: String,
    id: String,
    validators: Vec<Validator>,
    attrs: Map<String, Value>,
    focused: bool,
    view: View,
}

impl std::fmt::Debug for EditorBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBase")
            .field("key", &self.key)
            .field("id", &self.id)
            .field("validators", &self.validators.len())
            .field("focused", &self.focused)
            .field("mounted", &self.view.is_mounted())
            .finish()
    }
}

impl EditorBase {
    pub fn new(options: &EditorOptions<'_>) -> Self {
        Self {
            key: options.key.to_string(),
            id: options.id.to_string(),
            validators: options.schema.validators.clone(),
            attrs: options.schema.editor_attrs.clone(),
            focused: false,
            view: View::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Editor attribute from the field schema, as text.
    pub fn attr(&self, name: &str) -> Option<String> {
        self.attrs.get(name).map(attr_text)
    }

    /// First failing validator for `value`.
    pub fn validate(&self, value: &Value) -> Option<ValidationError> {
        first_error(&self.validators, value)
    }

    pub fn focus(&mut self) {
        self.set_focused(true);
    }

    pub fn blur(&mut self) {
        self.set_focused(false);
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if let Some(el) = self.view.element_mut() {
            el.focused = focused;
        }
    }

    /// Stamp identity, attributes and focus onto `element`, mount it, and
    /// return a copy for the parent to compose. Attributes named like a slot
    /// are left out.
    pub fn mount(&mut self, mut element: Element) -> Element {
        element.id = self.id.clone();
        element.focused = self.focused;
        for (name, value) in &self.attrs {
            if !slots::is_reserved(name) {
                element.data.insert(name.clone(), attr_text(value));
            }
        }
        element.data.insert(slots::KEY.to_string(), self.key.clone());
        self.view.set_element(element).clone()
    }

    pub fn element(&self) -> Option<&Element> {
        self.view.element()
    }

    pub fn remove(&mut self) {
        self.view.remove();
    }

    pub fn is_mounted(&self) -> bool {
        self.view.is_mounted()
    }
}
