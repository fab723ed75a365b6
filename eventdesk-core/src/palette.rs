//! The fixed color palette events are tagged with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the 18 browser-safe named colors an event can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Pink,
    Brown,
    Black,
    White,
    Gray,
    Cyan,
    Magenta,
    Lime,
    Teal,
    Navy,
    Olive,
    Maroon,
}

impl Color {
    /// Every palette entry, in the order pickers present them.
    pub const ALL: [Color; 18] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
        Color::Pink,
        Color::Brown,
        Color::Black,
        Color::White,
        Color::Gray,
        Color::Cyan,
        Color::Magenta,
        Color::Lime,
        Color::Teal,
        Color::Navy,
        Color::Olive,
        Color::Maroon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Brown => "brown",
            Color::Black => "black",
            Color::White => "white",
            Color::Gray => "gray",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::Lime => "lime",
            Color::Teal => "teal",
            Color::Navy => "navy",
            Color::Olive => "olive",
            Color::Maroon => "maroon",
        }
    }

    /// Whether `name` is exactly one of the palette names.
    pub fn is_member(name: &str) -> bool {
        name.parse::<Color>().is_ok()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = String;

    /// Palette names are matched exactly; "Blue" is not "blue".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown color '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_eighteen_distinct_names() {
        let mut names: Vec<_> = Color::ALL.iter().map(|c| c.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 18);
    }

    #[test]
    fn parse_known_names() {
        assert_eq!("blue".parse::<Color>().unwrap(), Color::Blue);
        assert_eq!("maroon".parse::<Color>().unwrap(), Color::Maroon);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Blue".parse::<Color>().is_err());
        assert!(!Color::is_member("RED"));
    }

    #[test]
    fn rejects_names_outside_palette() {
        assert!(!Color::is_member("chartreuse"));
        assert!(!Color::is_member(""));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Color::Teal).unwrap(), "\"teal\"");
    }
}
