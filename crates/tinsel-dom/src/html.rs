//! HTML serializer.
//!
//! Walks a subtree of the arena and writes markup. Block children are put on
//! their own indented lines; text-only elements stay inline. Everything under
//! a `pre` is written without added whitespace so the art keeps its columns.

use crate::node::Element;
use crate::{Dom, DomError, NodeId};

impl Dom {
    /// Serialize `id` and its subtree.
    pub fn to_html(&self, id: NodeId) -> Result<String, DomError> {
        let mut html = String::new();
        generate_node(self, id, &mut html, 0, false)?;
        Ok(html)
    }

    /// Serialize `id` and its subtree without any added whitespace. This is
    /// the form to hand a live page, where indentation would become text
    /// nodes between elements.
    pub fn to_html_compact(&self, id: NodeId) -> Result<String, DomError> {
        let mut html = String::new();
        generate_node(self, id, &mut html, 0, true)?;
        Ok(html)
    }

    /// Serialize the children of `id`, as `innerHTML` would.
    pub fn inner_html(&self, id: NodeId) -> Result<String, DomError> {
        let compact = self.get(id)?.tag == "pre";
        self.children_html(id, compact)
    }

    /// [`Dom::inner_html`] without any added whitespace.
    pub fn inner_html_compact(&self, id: NodeId) -> Result<String, DomError> {
        self.children_html(id, true)
    }

    fn children_html(&self, id: NodeId, compact: bool) -> Result<String, DomError> {
        let mut html = String::new();
        let el = self.get(id)?;
        if let Some(ref text) = el.text {
            html.push_str(&escape_text(text));
        }
        for &child in &el.children {
            generate_node(self, child, &mut html, 0, compact)?;
        }
        Ok(html)
    }
}

fn generate_node(
    dom: &Dom,
    id: NodeId,
    out: &mut String,
    depth: usize,
    compact: bool,
) -> Result<(), DomError> {
    let el = dom.get(id)?;

    if !compact {
        out.push_str(&"  ".repeat(depth));
    }
    open_tag(el, out);

    if let Some(ref text) = el.text {
        out.push_str(&escape_text(text));
    }

    if !el.children.is_empty() {
        if compact || el.tag == "pre" {
            for &child in &el.children {
                generate_node(dom, child, out, 0, true)?;
            }
        } else {
            out.push('\n');
            for &child in &el.children {
                generate_node(dom, child, out, depth + 1, false)?;
            }
            out.push_str(&"  ".repeat(depth));
        }
    }

    out.push_str(&format!("</{}>", el.tag));
    if !compact {
        out.push('\n');
    }
    Ok(())
}

fn open_tag(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);

    if let Some(ref class) = el.class {
        out.push_str(&format!(" class=\"{}\"", escape_attr(class)));
    }

    if !el.style.is_empty() {
        let declarations: Vec<String> = el
            .style
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        out.push_str(&format!(
            " style=\"{}\"",
            escape_attr(&declarations.join("; "))
        ));
    }

    out.push('>');
}

/// Escape text content.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
