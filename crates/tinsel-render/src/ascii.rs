//! ASCII tree renderer.
//!
//! One `span` per character, classified by [`Glyph`], inside one `div` per
//! row, inside a `pre`. A star `div` sits above the `pre`.

use tinsel_dom::{Dom, DomError, NodeId};
use tinsel_shapes::{Glyph, TreeShape};

use crate::{element, STAR_TEXT};

pub const DEFAULT_CLASS: &str = "ascii-tree";
pub const DEFAULT_WRAPPER_CLASS: &str = "tree-wrapper";
pub const STAR_CLASS: &str = "tree-star";

/// Options for [`render_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiOptions {
    pub data: TreeShape,
    /// Class set on the `pre` content node.
    pub class_name: String,
    pub wrapper_class: String,
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self {
            data: TreeShape::default(),
            class_name: DEFAULT_CLASS.to_string(),
            wrapper_class: DEFAULT_WRAPPER_CLASS.to_string(),
        }
    }
}

/// Nodes created by [`render_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiTree {
    pub wrapper: NodeId,
    pub content: NodeId,
    pub star: NodeId,
}

/// Render an ASCII tree into `container`, replacing whatever it held.
pub fn render_tree(
    dom: &mut Dom,
    container: Option<NodeId>,
    options: &AsciiOptions,
) -> Result<Option<AsciiTree>, DomError> {
    let Some(container) = container else {
        return Ok(None);
    };

    dom.clear_children(container)?;

    let wrapper = element(dom, "div", Some(options.wrapper_class.as_str()), None)?;
    let star = element(dom, "div", Some(STAR_CLASS), Some(STAR_TEXT))?;
    let content = element(dom, "pre", Some(options.class_name.as_str()), None)?;

    let rows = options.data.rows();
    for row in &rows {
        let line = dom.create_element("div");
        for ch in row.chars() {
            let glyph = Glyph::classify(ch);
            let mut buf = [0; 4];
            let text = glyph.display_char().encode_utf8(&mut buf);
            let leaf = element(dom, "span", glyph.class_name(), Some(&*text))?;
            dom.append_child(line, leaf)?;
        }
        dom.append_child(content, line)?;
    }

    dom.append_child(wrapper, star)?;
    dom.append_child(wrapper, content)?;
    dom.append_child(container, wrapper)?;

    log::debug!(
        "rendered ascii tree: {} rows into {container} (class {})",
        rows.len(),
        options.class_name
    );

    Ok(Some(AsciiTree {
        wrapper,
        content,
        star,
    }))
}
