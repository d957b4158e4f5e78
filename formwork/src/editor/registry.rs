use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{
    CheckboxEditor, Editor, EditorOptions, NumberEditor, SelectEditor, TextEditor, TextKind,
};
use crate::error::{FormError, Result};

/// Builds an editor from its options.
pub type EditorFactory = Arc<dyn Fn(EditorOptions<'_>) -> Box<dyn Editor> + Send + Sync>;

/// Wrap a closure as an [`EditorFactory`].
pub fn editor_factory<F>(f: F) -> EditorFactory
where
    F: Fn(EditorOptions<'_>) -> Box<dyn Editor> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Maps editor type tags to factories.
///
/// `EditorRegistry::default()` knows the built-in types (`Text`, `Password`,
/// `TextArea`, `Hidden`, `Number`, `Checkbox`, `Select`); `empty()` knows
/// none. Registering an existing tag replaces it.
#[derive(Clone)]
pub struct EditorRegistry {
    factories: HashMap<String, EditorFactory>,
}

impl fmt::Debug for EditorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types = self.types();
        types.sort_unstable();
        f.debug_struct("EditorRegistry")
            .field("types", &types)
            .finish()
    }
}

impl Default for EditorRegistry {
    fn default() -> Self {
        let text = |kind: TextKind| {
            editor_factory(move |options| Box::new(TextEditor::new(options, kind)))
        };

        Self::empty()
            .with("Text", text(TextKind::Text))
            .with("Password", text(TextKind::Password))
            .with("TextArea", text(TextKind::TextArea))
            .with("Hidden", text(TextKind::Hidden))
            .with("Number", editor_factory(|options| Box::new(NumberEditor::new(options))))
            .with(
                "Checkbox",
                editor_factory(|options| Box::new(CheckboxEditor::new(options))),
            )
            .with("Select", editor_factory(|options| Box::new(SelectEditor::new(options))))
    }
}

impl EditorRegistry {
    /// A registry with no editor types.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register `factory` under `editor`, builder style.
    pub fn with(mut self, editor: impl Into<String>, factory: EditorFactory) -> Self {
        self.register(editor, factory);
        self
    }

    pub fn register(&mut self, editor: impl Into<String>, factory: EditorFactory) {
        self.factories.insert(editor.into(), factory);
    }

    pub fn contains(&self, editor: &str) -> bool {
        self.factories.contains_key(editor)
    }

    pub fn types(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Build the editor the options' schema asks for.
    pub fn create(&self, options: EditorOptions<'_>) -> Result<Box<dyn Editor>> {
        let editor = options.schema.editor.as_str();
        let factory = self
            .factories
            .get(editor)
            .ok_or_else(|| FormError::UnknownEditor {
                editor: editor.to_string(),
                key: options.key.to_string(),
            })?;
        Ok(factory(options))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::schema::FieldSchema;

    #[test]
    fn test_default_knows_builtins() {
        let registry = EditorRegistry::default();
        for tag in ["Text", "Password", "TextArea", "Hidden", "Number", "Checkbox", "Select"] {
            assert!(registry.contains(tag), "missing {tag}");
        }
    }

    #[test]
    fn test_unknown_type_fails() {
        let schema = FieldSchema::new("Colour");
        let result = EditorRegistry::default().create(EditorOptions {
            key: "fav",
            id: "fav",
            schema: &schema,
            value: Value::Null,
        });
        assert!(matches!(
            result,
            Err(FormError::UnknownEditor { ref editor, ref key }) if editor == "Colour" && key == "fav"
        ));
    }

    #[test]
    fn test_registered_factory_is_used() {
        let registry = EditorRegistry::empty().with(
            "Upper",
            editor_factory(|options| {
                let value = json!(options.value.as_str().unwrap_or_default().to_uppercase());
                Box::new(TextEditor::new(EditorOptions { value, ..options }, TextKind::Text))
            }),
        );
        let schema = FieldSchema::new("Upper");
        let editor = registry
            .create(EditorOptions {
                key: "shout",
                id: "shout",
                schema: &schema,
                value: json!("hi"),
            })
            .expect("registered");
        assert_eq!(editor.value(), json!("HI"));
    }
}
