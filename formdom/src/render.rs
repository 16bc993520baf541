//! HTML serialisation of element trees.

use crate::element::{Content, Element};

/// Serialise an element tree to HTML.
///
/// Attributes are written in insertion order after `id` and `class`.
/// Boolean attributes carry an empty value (`disabled=""`).
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    let mut nodes = 0usize;
    write_element(root, &mut out, &mut nodes);
    log::trace!("[render] serialised {} nodes ({} bytes)", nodes, out.len());
    out
}

fn write_element(el: &Element, out: &mut String, nodes: &mut usize) {
    *nodes += 1;

    out.push('<');
    out.push_str(&el.tag);
    if let Some(id) = &el.id {
        write_attr(out, "id", id);
    }
    if let Some(class) = el.class_attribute() {
        write_attr(out, "class", &class);
    }
    for (name, value) in &el.attrs {
        write_attr(out, name, value);
    }
    out.push('>');

    if el.is_void() {
        return;
    }

    match &el.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out, nodes);
            }
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
