mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element carrying the data attribute `key`, in document order.
pub fn find_by_data<'a>(root: &'a Element, key: &str) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_by_data(root, key, &mut result);
    result
}

fn collect_by_data<'a>(el: &'a Element, key: &str, result: &mut Vec<&'a Element>) {
    if el.data.contains_key(key) {
        result.push(el);
    }

    for child in el.content.children() {
        collect_by_data(child, key, result);
    }
}

/// First element carrying the data attribute `key` (depth-first), mutably.
pub fn find_by_data_mut<'a>(root: &'a mut Element, key: &str) -> Option<&'a mut Element> {
    if root.data.contains_key(key) {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_by_data_mut(child, key) {
                return Some(found);
            }
        }
    }

    None
}

/// Apply `f` to every element whose data attribute `key` equals `value`.
///
/// The subtree of a match is not searched further. Returns the number of
/// matches.
pub fn update_by_data<F>(root: &mut Element, key: &str, value: &str, f: &mut F) -> usize
where
    F: FnMut(&mut Element),
{
    if root.get_data(key).is_some_and(|v| v == value) {
        f(root);
        return 1;
    }

    match &mut root.content {
        Content::Children(children) => children
            .iter_mut()
            .map(|child| update_by_data(child, key, value, f))
            .sum(),
        _ => 0,
    }
}

/// Collect all focusable element IDs in tab order (depth-first).
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(root, &mut result);
    result
}

fn collect_focusable_recursive(el: &Element, result: &mut Vec<String>) {
    if el.focusable && !el.disabled {
        result.push(el.id.clone());
    }

    for child in el.content.children() {
        collect_focusable_recursive(child, result);
    }
}
