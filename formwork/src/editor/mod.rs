//! Editors: the input controls a field wraps.
//!
//! The form only ever talks to an editor through the [`Editor`] trait.
//! Which concrete editor a field gets is decided by the field schema's type
//! tag, looked up in an [`EditorRegistry`].

mod base;
mod checkbox;
mod number;
mod registry;
mod select;
mod text;

pub use base::EditorBase;
pub use checkbox::CheckboxEditor;
pub use number::NumberEditor;
pub use registry::{EditorFactory, EditorRegistry, editor_factory};
pub use select::SelectEditor;
pub use text::{TextEditor, TextKind};

use formdom::Element;
use serde_json::Value;

use crate::error::ValidationError;
use crate::schema::FieldSchema;

/// Everything a factory needs to build one editor.
#[derive(Debug, Clone)]
pub struct EditorOptions<'a> {
    /// Field key the editor edits.
    pub key: &'a str,
    /// Element id for the editor's render unit.
    pub id: &'a str,
    pub schema: &'a FieldSchema,
    /// Initial value.
    pub value: Value,
}

/// One interactive control bound to one value.
pub trait Editor: Send + Sync {
    fn key(&self) -> &str;

    /// Element id of the render unit.
    fn id(&self) -> &str;

    /// Current value.
    fn value(&self) -> Value;

    fn set_value(&mut self, value: Value);

    /// Run the editor's validators against the current value.
    fn validate(&self) -> Option<ValidationError>;

    fn focus(&mut self);

    fn blur(&mut self);

    fn has_focus(&self) -> bool;

    /// Build a fresh render unit and mount it.
    fn render(&mut self) -> Element;

    /// Detach the render unit.
    fn remove(&mut self);

    fn is_mounted(&self) -> bool;
}

/// Render a JSON value as attribute text. Strings are unquoted.
pub(crate) fn attr_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
