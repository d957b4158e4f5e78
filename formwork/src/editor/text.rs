use formdom::Element;
use serde_json::Value;

use super::{Editor, EditorBase, EditorOptions, attr_text};
use crate::error::ValidationError;

/// Presentation variant of a [`TextEditor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextKind {
    #[default]
    Text,
    Password,
    TextArea,
    /// Kept in the form's values but not focusable.
    Hidden,
}

/// Free-text editor.
///
/// The value is kept exactly as given, so data that is not a string reads
/// back unchanged; it is only turned into text for display.
#[derive(Debug, Clone)]
pub struct TextEditor {
    base: EditorBase,
    kind: TextKind,
    value: Value,
}

impl TextEditor {
    pub fn new(options: EditorOptions<'_>, kind: TextKind) -> Self {
        Self {
            base: EditorBase::new(&options),
            kind,
            value: options.value,
        }
    }

    pub fn kind(&self) -> TextKind {
        self.kind
    }

    /// Current value as display text. `null` shows as empty.
    pub fn text(&self) -> String {
        attr_text(&self.value)
    }
}

impl Editor for TextEditor {
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
        if self.kind != TextKind::Hidden {
            self.base.focus();
        }
    }

    fn blur(&mut self) {
        self.base.blur();
    }

    fn has_focus(&self) -> bool {
        self.base.has_focus()
    }

    fn render(&mut self) -> Element {
        let mut el = Element::input(self.text());
        if let Some(placeholder) = self.base.attr("placeholder") {
            el = el.placeholder(placeholder);
        }
        el = match self.kind {
            TextKind::Text => el,
            TextKind::Password => el.password(),
            TextKind::TextArea => el.multiline().with_tag("textarea"),
            TextKind::Hidden => el.focusable(false).data("hidden", "true"),
        };
        self.base.mount(el)
    }

    fn remove(&mut self) {
        self.base.remove();
    }

    fn is_mounted(&self) -> bool {
        self.base.is_mounted()
    }
}
