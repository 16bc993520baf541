mod content;
mod node;

pub use content::Content;
pub use node::Element;

use crate::selector::Selector;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    for child in root.elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Collect every element matching `selector`, in document order.
///
/// The root itself is included when it matches.
pub fn find_all<'a>(root: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_matching(root, selector, &mut found);
    found
}

fn collect_matching<'a>(el: &'a Element, selector: &Selector, out: &mut Vec<&'a Element>) {
    if selector.matches(el) {
        out.push(el);
    }
    for child in el.elements() {
        collect_matching(child, selector, out);
    }
}
