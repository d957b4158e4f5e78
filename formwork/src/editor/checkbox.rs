use formdom::Element;
use serde_json::Value;

use super::{Editor, EditorBase, EditorOptions};
use crate::error::ValidationError;

const CHECKED: char = '■';
const UNCHECKED: char = '□';

/// Boolean toggle.
#[derive(Debug, Clone)]
pub struct CheckboxEditor {
    base: EditorBase,
    checked: bool,
}

/// Truthiness of a JSON value: `false`, `null`, `0`, and `""` are off.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl CheckboxEditor {
    pub fn new(options: EditorOptions<'_>) -> Self {
        Self {
            base: EditorBase::new(&options),
            checked: truthy(&options.value),
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

impl Editor for CheckboxEditor {
    fn key(&self) -> &str {
        self.base.key()
    }

    fn id(&self) -> &str {
        self.base.id()
    }

    fn value(&self) -> Value {
        Value::Bool(self.checked)
    }

    fn set_value(&mut self, value: Value) {
        self.checked = truthy(&value);
    }

    fn validate(&self) -> Option<ValidationError> {
        self.base.validate(&self.value())
    }

    fn focus(&mut self) {
        self.base.focus();
    }

    fn blur(&mut self) {
        self.base.blur();
    }

    fn has_focus(&self) -> bool {
        self.base.has_focus()
    }

    fn render(&mut self) -> Element {
        let indicator = if self.checked { CHECKED } else { UNCHECKED };
        let el = Element::text(indicator.to_string())
            .with_tag("checkbox")
            .focusable(true)
            .data("checked", self.checked.to_string());
        self.base.mount(el)
    }

    fn remove(&mut self) {
        self.base.remove();
    }

    fn is_mounted(&self) -> bool {
        self.base.is_mounted()
    }
}
