//! tinsel shapes
//!
//! The two built-in ASCII tree silhouettes and the character classification
//! the renderers use to style them. The built-in tables are `'static` data
//! and classification is a pure function; only custom [`TreeShape`]s own
//! their rows.
//!
//! # Example
//!
//! ```
//! use tinsel_shapes::{Glyph, TreeSize};
//!
//! let rows = TreeSize::from_selector("large").rows();
//! assert_eq!(rows.len(), 14);
//! assert_eq!(Glyph::classify('O'), Glyph::Light);
//! ```

pub mod glyph;
pub mod shape;

pub use glyph::Glyph;
pub use shape::{TreeShape, TreeSize, LARGE_TREE, SMALL_TREE};
