//! Built-in tree silhouettes.

/// The small ASCII tree: 10 rows of 17 columns.
pub const SMALL_TREE: &[&str] = &[
    "        *        ",
    "       .o.       ",
    "      ..o..      ",
    "     .o...o.     ",
    "    ..o.o.o..    ",
    "   .o..o..o..o.  ",
    "  ..o.o.o.o.o.o. ",
    " ............... ",
    "        ||       ",
    "        ||       ",
];

/// The large ASCII tree: 14 rows. The lower rows are one column wider than
/// the crown; the widths are kept exactly as drawn.
pub const LARGE_TREE: &[&str] = &[
    "             *             ",
    "            .o.            ",
    "           ..o..           ",
    "          .o...o.          ",
    "         ..o.o.o..         ",
    "        .o..o..o..o.       ",
    "       ..o.o.o.o.o.o..     ",
    "      .o..o..o..o..o..o.   ",
    "     ..o.o.o.o.o.o.o.o.o..  ",
    "    .o..o..o..o..o..o..o.. ",
    "   ..o.o.o.o.o.o.o.o.o.o.o.",
    "  ......................... ",
    "            |||||           ",
    "            |||||           ",
];

/// Size selector shared by every renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TreeSize {
    #[default]
    Small,
    Large,
}

impl TreeSize {
    /// `"large"` selects [`TreeSize::Large`]; any other selector, including
    /// the empty string, falls back to [`TreeSize::Small`].
    pub fn from_selector(selector: &str) -> Self {
        if selector == "large" {
            TreeSize::Large
        } else {
            TreeSize::Small
        }
    }

    /// Rows of the built-in shape for this size.
    pub fn rows(self) -> &'static [&'static str] {
        match self {
            TreeSize::Small => SMALL_TREE,
            TreeSize::Large => LARGE_TREE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TreeSize::Small => "small",
            TreeSize::Large => "large",
        }
    }
}

/// Rows fed to the ASCII renderer: a built-in silhouette or caller-supplied
/// rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeShape {
    Builtin(TreeSize),
    Custom(Vec<String>),
}

impl TreeShape {
    /// Build a custom shape from text, one row per line. Leading and
    /// trailing spaces are part of the row.
    pub fn from_text(text: &str) -> Self {
        TreeShape::Custom(text.lines().map(str::to_string).collect())
    }

    pub fn rows(&self) -> Vec<&str> {
        match self {
            TreeShape::Builtin(size) => size.rows().to_vec(),
            TreeShape::Custom(rows) => rows.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for TreeShape {
    fn default() -> Self {
        TreeShape::Builtin(TreeSize::Small)
    }
}

impl From<TreeSize> for TreeShape {
    fn from(size: TreeSize) -> Self {
        TreeShape::Builtin(size)
    }
}

impl std::fmt::Display for TreeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
