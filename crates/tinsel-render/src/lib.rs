//! tinsel renderers
//!
//! Builds decorative Christmas trees into a [`Dom`] container:
//!
//! ```text
//! render_tree(dom, container, AsciiOptions)              → AsciiTree { wrapper, content, star }
//! render_fancy_tree(dom, container, FancyOptions, rng)   → FancyTree { wrapper, star }
//! log_tree(selector, sink)                               → one line per row
//! ```
//!
//! Every render clears the container first, so re-rendering replaces the
//! previous tree. A `None` container is a no-op that returns `Ok(None)`.

pub mod ascii;
pub mod debug;
pub mod fancy;

pub use ascii::{render_tree, AsciiOptions, AsciiTree};
pub use debug::{log_tree, LogFacade, LogSink};
pub use fancy::{render_fancy_tree, FancyOptions, FancyTree, LayerGeometry, Ornament};

pub use tinsel_dom::{Dom, DomError, NodeId};
pub use tinsel_shapes::{Glyph, TreeShape, TreeSize};

/// Text of the star placed above both tree styles.
pub const STAR_TEXT: &str = "★";

/// Source of uniform samples in `[0, 1)` for ornament placement.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: rand::RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        rand::Rng::gen::<f64>(self)
    }
}

/// Create an element with a class and optional text in one call.
pub(crate) fn element(
    dom: &mut Dom,
    tag: &str,
    class: Option<&str>,
    text: Option<&str>,
) -> Result<NodeId, DomError> {
    let id = dom.create_element(tag);
    if let Some(class) = class {
        dom.set_class(id, class)?;
    }
    if let Some(text) = text {
        dom.set_text(id, text)?;
    }
    Ok(id)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Replays a fixed list of samples, wrapping around at the end.
    pub struct Scripted {
        samples: Vec<f64>,
        pos: usize,
    }

    impl Scripted {
        pub fn new(samples: &[f64]) -> Self {
            Self {
                samples: samples.to_vec(),
                pos: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            let value = self.samples[self.pos % self.samples.len()];
            self.pos += 1;
            value
        }
    }

    /// A document with a `body` mount point and an unrelated probe node.
    pub fn page() -> (Dom, NodeId, NodeId) {
        let mut dom = Dom::new();
        let body = dom.create_element("body");
        let probe = dom.create_element("div");
        dom.set_class(probe, "probe").unwrap();
        dom.set_text(probe, "untouched").unwrap();
        (dom, body, probe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_samples_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_element_helper() {
        let mut dom = Dom::new();
        let id = element(&mut dom, "div", Some("tree-star"), Some(STAR_TEXT)).unwrap();
        assert_eq!(dom.class_name(id).unwrap(), Some("tree-star"));
        assert_eq!(dom.text(id).unwrap(), Some("★"));

        let bare = element(&mut dom, "span", None, None).unwrap();
        assert_eq!(dom.class_name(bare).unwrap(), None);
        assert_eq!(dom.text(bare).unwrap(), None);
    }
}
