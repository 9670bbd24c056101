/// Style category of a single tree character.
///
/// Classification is total: every `char` lands in exactly one variant, and
/// anything unrecognized is carried through as [`Glyph::Plain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Light,
    Star,
    Trunk,
    Dot,
    Plain(char),
}

impl Glyph {
    pub fn classify(ch: char) -> Self {
        match ch {
            'o' | 'O' => Glyph::Light,
            '*' => Glyph::Star,
            '|' => Glyph::Trunk,
            '.' => Glyph::Dot,
            other => Glyph::Plain(other),
        }
    }

    /// CSS class for the leaf node, `None` for plain text.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Glyph::Light => Some("light"),
            Glyph::Star => Some("star"),
            Glyph::Trunk => Some("trunk"),
            Glyph::Dot => Some("dot"),
            Glyph::Plain(_) => None,
        }
    }

    /// Character shown in the leaf node. Lights are always drawn lowercase.
    pub fn display_char(self) -> char {
        match self {
            Glyph::Light => 'o',
            Glyph::Star => '*',
            Glyph::Trunk => '|',
            Glyph::Dot => '.',
            Glyph::Plain(ch) => ch,
        }
    }
}

impl From<char> for Glyph {
    fn from(ch: char) -> Self {
        Glyph::classify(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LARGE_TREE, SMALL_TREE};

    #[test]
    fn test_classify_known() {
        assert_eq!(Glyph::classify('o'), Glyph::Light);
        assert_eq!(Glyph::classify('O'), Glyph::Light);
        assert_eq!(Glyph::classify('*'), Glyph::Star);
        assert_eq!(Glyph::classify('|'), Glyph::Trunk);
        assert_eq!(Glyph::classify('.'), Glyph::Dot);
    }

    #[test]
    fn test_classify_plain_passthrough() {
        for ch in [' ', 'x', '#', '★', '\t', '0'] {
            assert_eq!(Glyph::classify(ch), Glyph::Plain(ch));
            assert_eq!(Glyph::classify(ch).display_char(), ch);
            assert_eq!(Glyph::classify(ch).class_name(), None);
        }
    }

    #[test]
    fn test_uppercase_light_drawn_lowercase() {
        assert_eq!(Glyph::classify('O').display_char(), 'o');
    }

    #[test]
    fn test_class_names() {
        assert_eq!(Glyph::Light.class_name(), Some("light"));
        assert_eq!(Glyph::Star.class_name(), Some("star"));
        assert_eq!(Glyph::Trunk.class_name(), Some("trunk"));
        assert_eq!(Glyph::Dot.class_name(), Some("dot"));
    }

    #[test]
    fn test_classification_is_deterministic() {
        for ch in SMALL_TREE.iter().chain(LARGE_TREE).flat_map(|row| row.chars()) {
            assert_eq!(Glyph::classify(ch), Glyph::from(ch));
        }
    }

    #[test]
    fn test_built_in_trees_only_use_known_glyphs() {
        let unexpected: Vec<char> = SMALL_TREE
            .iter()
            .chain(LARGE_TREE)
            .flat_map(|row| row.chars())
            .filter(|&ch| matches!(Glyph::classify(ch), Glyph::Plain(c) if c != ' '))
            .collect();
        assert!(unexpected.is_empty(), "unexpected glyphs: {unexpected:?}");
    }
}
