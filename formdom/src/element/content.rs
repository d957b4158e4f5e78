/// What an element holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// A single-value input slot (text boxes, number fields, toggles).
    Input {
        value: String,
        placeholder: Option<String>,
        /// Display mask for password inputs.
        mask: Option<char>,
        multiline: bool,
    },
    Children(Vec<super::Element>),
}

impl Content {
    pub fn children(&self) -> &[super::Element] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(s) => s.is_empty(),
            Self::Input { .. } => false,
            Self::Children(c) => c.is_empty(),
        }
    }
}
