use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// One node of a rendered component tree.
///
/// Elements are plain values: a component renders a fresh tree and hands it
/// to its [`View`](crate::View), parents compose children by appending them.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    /// Semantic tag (`form`, `fieldset`, `label`, `input`, ...).
    pub tag: String,

    // Content
    pub content: Content,

    // Attributes
    /// Named attributes. Composition slots are marked with data keys such as
    /// `fields`, `fieldsets`, `editor` and `error`.
    pub data: HashMap<String, String>,
    pub classes: Vec<String>,

    // Interaction
    pub focusable: bool,
    /// Whether this element currently holds focus. Set by the owning editor.
    pub focused: bool,
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            content: Content::None,
            data: HashMap::new(),
            classes: Vec::new(),
            focusable: false,
            focused: false,
            disabled: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    /// Create an element with the given tag.
    pub fn tag(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: "span".to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create a focusable input element holding `value`.
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            tag: "input".to_string(),
            content: Content::Input {
                value: value.into(),
                placeholder: None,
                mask: None,
                multiline: false,
            },
            focusable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    // Input content
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::Input { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Mask the input value (displays `•` for each character).
    pub fn password(mut self) -> Self {
        if let Content::Input { mask, .. } = &mut self.content {
            *mask = Some('•');
        }
        self
    }

    pub fn multiline(mut self) -> Self {
        if let Content::Input { multiline, .. } = &mut self.content {
            *multiline = true;
        }
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Attributes
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Append a child in place. Text or input content is replaced.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Replace the content with plain text; an empty string clears it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.content = if text.is_empty() {
            Content::None
        } else {
            Content::Text(text)
        };
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }
}
