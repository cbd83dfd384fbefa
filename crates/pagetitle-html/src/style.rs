//! IRC formatting codes for the inline style tags kept in titles.

use core::str::FromStr;

use strum_macros::{Display, EnumString};

/// An inline HTML style tag with an IRC formatting equivalent.
///
/// Parsing is ASCII case-insensitive, so `B` and `b` are both bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum StyleTag {
    /// `<b>` → `0x02`
    #[strum(serialize = "b")]
    Bold,
    /// `<i>` → `0x1D`
    #[strum(serialize = "i")]
    Italic,
    /// `<u>` → `0x1F`
    #[strum(serialize = "u")]
    Underline,
    /// `<s>` → `0x1E`
    #[strum(serialize = "s")]
    Strikethrough,
}

impl StyleTag {
    /// Resolve a tag name, if it names a style tag.
    #[must_use]
    pub fn from_tag_name(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }

    /// The control byte an IRC client reads as a toggle for this style.
    #[must_use]
    pub const fn control_code(self) -> char {
        match self {
            Self::Bold => '\x02',
            Self::Italic => '\x1D',
            Self::Underline => '\x1F',
            Self::Strikethrough => '\x1E',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_tags_map_to_control_codes() {
        assert_eq!(StyleTag::from_tag_name("b").map(StyleTag::control_code), Some('\x02'));
        assert_eq!(StyleTag::from_tag_name("I").map(StyleTag::control_code), Some('\x1D'));
        assert_eq!(StyleTag::from_tag_name("u").map(StyleTag::control_code), Some('\x1F'));
        assert_eq!(StyleTag::from_tag_name("S").map(StyleTag::control_code), Some('\x1E'));
    }

    #[test]
    fn other_tags_are_not_styles() {
        assert_eq!(StyleTag::from_tag_name("br"), None);
        assert_eq!(StyleTag::from_tag_name("strong"), None);
        assert_eq!(StyleTag::from_tag_name(""), None);
    }
}
