//! Plain-text dump of an element tree.

use std::fmt::Write;

use crate::element::{Content, Element};

/// Render `root` as an indented outline, one element per line.
///
/// ```text
/// form
///   fieldset
///     label "Name"
///     input [Ada]
/// ```
///
/// Data attributes are omitted; classes are appended as `.class`.
pub fn outline(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, 0, &mut out);
    out
}

fn write_element(el: &Element, depth: usize, out: &mut String) {
    let _ = write!(out, "{:indent$}{}", "", el.tag, indent = depth * 2);
    for class in &el.classes {
        let _ = write!(out, ".{class}");
    }
    if el.focused {
        out.push_str(" *");
    }

    match &el.content {
        Content::None => out.push('\n'),
        Content::Text(text) => {
            let _ = writeln!(out, " {text:?}");
        }
        Content::Input { value, mask, .. } => {
            let shown: String = match mask {
                Some(m) => value.chars().map(|_| *m).collect(),
                None => value.clone(),
            };
            let _ = writeln!(out, " [{shown}]");
        }
        Content::Children(children) => {
            out.push('\n');
            for child in children {
                write_element(child, depth + 1, out);
            }
        }
    }
}
