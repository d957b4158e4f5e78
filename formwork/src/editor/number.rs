use formdom::Element;
use serde_json::{Number, Value};

use super::{Editor, EditorBase, EditorOptions};
use crate::error::ValidationError;

/// Numeric editor. Holds a JSON number, or nothing when left blank.
#[derive(Debug, Clone)]
pub struct NumberEditor {
    base: EditorBase,
    value: Option<Number>,
}

/// Interpret `value` as a number. Strings are parsed as integers first,
/// then as floats; blanks and anything unparseable are empty.
fn to_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                Some(Number::from(i))
            } else {
                s.parse::<f64>().ok().and_then(Number::from_f64)
            }
        }
        _ => None,
    }
}

impl NumberEditor {
    pub fn new(options: EditorOptions<'_>) -> Self {
        Self {
            base: EditorBase::new(&options),
            value: to_number(&options.value),
        }
    }
}

impl Editor for NumberEditor {
    fn key(&self) -> &str {
        self.base.key()
    }

    fn id(&self) -> &str {
        self.base.id()
    }

    fn value(&self) -> Value {
        self.value.clone().map_or(Value::Null, Value::Number)
    }

    fn set_value(&mut self, value: Value) {
        self.value = to_number(&value);
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
        let text = self.value.as_ref().map(Number::to_string).unwrap_or_default();
        let el = Element::input(text).data("type", "number");
        self.base.mount(el)
    }

    fn remove(&mut self) {
        self.base.remove();
    }

    fn is_mounted(&self) -> bool {
        self.base.is_mounted()
    }
}
