//! CSS "fancy" tree renderer.
//!
//! Stacks progressively narrower layers under a star, scatters ornaments
//! over each layer and finishes with a trunk. Only per-instance values
//! (widths, stacking, offsets, ornament placement and colour) are inline
//! styles; the rest is left to the page stylesheet through class names.

use tinsel_dom::{Dom, DomError, NodeId};
use tinsel_shapes::TreeSize;

use crate::{element, RandomSource, STAR_TEXT};

pub const WRAPPER_CLASS: &str = "fancy-wrapper";
pub const STAR_CLASS: &str = "fancy-star";
pub const LAYER_CLASS: &str = "fancy-layer";
pub const ORNAMENT_CLASS: &str = "fancy-ornament";
pub const TRUNK_CLASS: &str = "fancy-trunk";

/// Options for [`render_fancy_tree`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FancyOptions {
    pub size: TreeSize,
}

/// Nodes created by [`render_fancy_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FancyTree {
    pub wrapper: NodeId,
    pub star: NodeId,
}

pub fn layer_count(size: TreeSize) -> usize {
    match size {
        TreeSize::Large => 7,
        TreeSize::Small => 4,
    }
}

pub fn ornament_count(size: TreeSize) -> usize {
    match size {
        TreeSize::Large => 6,
        TreeSize::Small => 3,
    }
}

/// Placement of one layer. Layers narrow by `60 / count` percent per step,
/// stack topmost-first and shift up 6px per step so they overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerGeometry {
    /// Percent of the wrapper width.
    pub width: f64,
    pub z_index: i64,
    /// Vertical offset in pixels.
    pub offset_y: i64,
}

impl LayerGeometry {
    pub fn for_layer(index: usize, count: usize) -> Self {
        let step = 60.0 / count as f64;
        Self {
            width: 100.0 - index as f64 * step,
            z_index: 100 - index as i64,
            offset_y: -6 * index as i64,
        }
    }

    fn apply(&self, dom: &mut Dom, layer: NodeId) -> Result<(), DomError> {
        dom.set_style(layer, "width", &format!("{}%", self.width))?;
        dom.set_style(layer, "z-index", &self.z_index.to_string())?;
        dom.set_style(layer, "transform", &format!("translateY({}px)", self.offset_y))?;
        Ok(())
    }
}

/// One ornament: position in percent of its layer and an integer hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ornament {
    pub left: f64,
    pub top: f64,
    pub hue: u32,
}

impl Ornament {
    /// Map three unit samples onto `left ∈ [10, 90)`, `top ∈ [20, 80)` and
    /// `hue ∈ [10, 169]`.
    pub fn from_samples(left: f64, top: f64, hue: f64) -> Self {
        Self {
            left: 10.0 + left * 80.0,
            top: 20.0 + top * 60.0,
            hue: 10 + (hue * 160.0).floor() as u32,
        }
    }

    /// Draw left, top and hue in that order.
    pub fn sample(rng: &mut impl RandomSource) -> Self {
        let left = rng.next_unit();
        let top = rng.next_unit();
        let hue = rng.next_unit();
        Self::from_samples(left, top, hue)
    }

    pub fn color(&self) -> String {
        format!("hsl({} 90% 60%)", self.hue)
    }

    fn apply(&self, dom: &mut Dom, node: NodeId) -> Result<(), DomError> {
        dom.set_style(node, "left", &format!("{}%", self.left))?;
        dom.set_style(node, "top", &format!("{}%", self.top))?;
        dom.set_style(node, "background", &self.color())?;
        Ok(())
    }
}

/// Render a layered CSS tree into `container`, replacing whatever it held.
pub fn render_fancy_tree(
    dom: &mut Dom,
    container: Option<NodeId>,
    options: &FancyOptions,
    rng: &mut impl RandomSource,
) -> Result<Option<FancyTree>, DomError> {
    let Some(container) = container else {
        return Ok(None);
    };

    dom.clear_children(container)?;

    let wrapper = element(dom, "div", Some(WRAPPER_CLASS), None)?;
    let star = element(dom, "div", Some(STAR_CLASS), Some(STAR_TEXT))?;
    dom.append_child(wrapper, star)?;

    let layers = layer_count(options.size);
    let ornaments = ornament_count(options.size);
    for index in 0..layers {
        let layer = element(dom, "div", Some(LAYER_CLASS), None)?;
        LayerGeometry::for_layer(index, layers).apply(dom, layer)?;

        for _ in 0..ornaments {
            let node = element(dom, "span", Some(ORNAMENT_CLASS), None)?;
            Ornament::sample(rng).apply(dom, node)?;
            dom.append_child(layer, node)?;
        }

        dom.append_child(wrapper, layer)?;
    }

    let trunk = element(dom, "div", Some(TRUNK_CLASS), None)?;
    dom.append_child(wrapper, trunk)?;
    dom.append_child(container, wrapper)?;

    log::debug!(
        "rendered fancy tree: size {}, {layers} layers x {ornaments} ornaments into {container}",
        options.size
    );

    Ok(Some(FancyTree { wrapper, star }))
}
