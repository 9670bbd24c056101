//! Standalone HTML page assembly.

use tinsel_dom::{Dom, DomError, NodeId};
use tinsel_render::{AsciiOptions, FancyOptions, RandomSource};

/// Id of the element the tree is mounted into.
pub const MOUNT_ID: &str = "tree-root";

fn mount() -> (Dom, NodeId) {
    let mut dom = Dom::new();
    let root = dom.create_element("div");
    (dom, root)
}

pub fn ascii(options: &AsciiOptions) -> Result<String, DomError> {
    let (mut dom, root) = mount();
    tinsel_render::render_tree(&mut dom, Some(root), options)?;
    dom.inner_html(root)
}

pub fn fancy(options: &FancyOptions, rng: &mut impl RandomSource) -> Result<String, DomError> {
    let (mut dom, root) = mount();
    tinsel_render::render_fancy_tree(&mut dom, Some(root), options, rng)?;
    dom.inner_html(root)
}

/// Wrap rendered tree markup in a complete document.
pub fn document(title: &str, tree_html: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!(
        "  <title>{}</title>\n",
        tinsel_dom::html::escape_text(title)
    ));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<div id=\"{MOUNT_ID}\">\n"));
    html.push_str(tree_html);
    html.push_str("</div>\n");
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tinsel_shapes::{TreeShape, TreeSize};

    #[test]
    fn test_document_shell() {
        let html = document("tree", "<div></div>\n");
        assert_eq!(
            html,
            "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n  <title>tree</title>\n</head>\n<body>\n<div id=\"tree-root\">\n<div></div>\n</div>\n</body>\n</html>\n"
        );
    }

    #[test]
    fn test_title_escaped() {
        assert!(document("<x>", "").contains("<title>&lt;x&gt;</title>"));
    }

    #[test]
    fn test_ascii_page_body() {
        let options = AsciiOptions {
            data: TreeShape::Builtin(TreeSize::Large),
            ..AsciiOptions::default()
        };
        let body = ascii(&options).unwrap();
        assert!(body.starts_with("<div class=\"tree-wrapper\">"));
        assert_eq!(body.matches("<div><span").count(), 14);
    }

    #[test]
    fn test_fancy_seed_reproducible() {
        let options = FancyOptions::default();
        let a = fancy(&options, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = fancy(&options, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.matches("fancy-ornament").count(), 12);
    }
}
