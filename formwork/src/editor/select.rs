use formdom::Element;
use serde_json::Value;

use super::{Editor, EditorBase, EditorOptions, attr_text};
use crate::error::ValidationError;
use crate::schema::SelectOption;

/// Pick one of the schema's `options`.
///
/// A blank initial value selects the first option. Values outside the option
/// list are kept as-is; nothing is shown as selected for them.
#[derive(Debug, Clone)]
pub struct SelectEditor {
    base: EditorBase,
    options: Vec<SelectOption>,
    value: Value,
}

impl SelectEditor {
    pub fn new(options: EditorOptions<'_>) -> Self {
        let choices = options.schema.options.clone();
        let value = match &options.value {
            Value::Null => choices.first().map_or(Value::Null, |o| o.val.clone()),
            other => other.clone(),
        };
        Self {
            base: EditorBase::new(&options),
            options: choices,
            value,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Label of the selected option, if the value is one of the options.
    pub fn selected_label(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.val == self.value)
            .map(|o| o.label.as_str())
    }
}

impl Editor for SelectEditor {
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
        self.value = value;
    }

    fn validate(&self) -> Option<ValidationError> {
        self.base.validate(&self.value)
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
        let choices = self.options.iter().map(|option| {
            let el = Element::text(option.label.clone())
                .with_tag("option")
                .data("value", attr_text(&option.val));
            if option.val == self.value {
                el.class("selected").data("selected", "true")
            } else {
                el
            }
        });
        let el = Element::tag("select").focusable(true).children(choices);
        self.base.mount(el)
    }

    fn remove(&mut self) {
        self.base.remove();
    }

    fn is_mounted(&self) -> bool {
        self.base.is_mounted()
    }
}
