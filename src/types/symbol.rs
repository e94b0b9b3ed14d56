//! Gesture symbols and their light colors

use serde::{Deserialize, Serialize};

/// One classified gesture: the dominant direction of an averaged reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbol {
    /// Push along +X (red)
    PosX,
    /// Push along -X (orange)
    NegX,
    /// Push along +Y (yellow)
    PosY,
    /// Push along -Y (green)
    NegY,
    /// Push along +Z (blue)
    PosZ,
    /// Push along -Z (violet)
    NegZ,
}

impl Symbol {
    /// All symbols in index order
    pub const ALL: [Symbol; 6] = [
        Symbol::PosX,
        Symbol::NegX,
        Symbol::PosY,
        Symbol::NegY,
        Symbol::PosZ,
        Symbol::NegZ,
    ];

    /// Stable index 0..=5, also the row in the color table
    pub fn index(&self) -> u8 {
        match self {
            Symbol::PosX => 0,
            Symbol::NegX => 1,
            Symbol::PosY => 2,
            Symbol::NegY => 3,
            Symbol::PosZ => 4,
            Symbol::NegZ => 5,
        }
    }

    /// One-letter code named after the symbol's color (r o y g b v)
    pub fn letter(&self) -> char {
        match self {
            Symbol::PosX => 'r',
            Symbol::NegX => 'o',
            Symbol::PosY => 'y',
            Symbol::NegY => 'g',
            Symbol::PosZ => 'b',
            Symbol::NegZ => 'v',
        }
    }

    pub fn from_letter(letter: char) -> Option<Symbol> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.letter() == letter.to_ascii_lowercase())
    }

    /// Signed axis label, e.g. "+x"
    pub fn axis_label(&self) -> &'static str {
        match self {
            Symbol::PosX => "+x",
            Symbol::NegX => "-x",
            Symbol::PosY => "+y",
            Symbol::NegY => "-y",
            Symbol::PosZ => "+z",
            Symbol::NegZ => "-z",
        }
    }

    pub fn from_axis_label(label: &str) -> Option<Symbol> {
        let label = label.to_ascii_lowercase();
        Self::ALL.iter().copied().find(|s| s.axis_label() == label)
    }

    /// Unit direction of this symbol as (x, y, z)
    pub fn direction(&self) -> (f32, f32, f32) {
        match self {
            Symbol::PosX => (1.0, 0.0, 0.0),
            Symbol::NegX => (-1.0, 0.0, 0.0),
            Symbol::PosY => (0.0, 1.0, 0.0),
            Symbol::NegY => (0.0, -1.0, 0.0),
            Symbol::PosZ => (0.0, 0.0, 1.0),
            Symbol::NegZ => (0.0, 0.0, -1.0),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Render a symbol sequence as its letter string, e.g. "bbyggrb"
pub fn letters(symbols: &[Symbol]) -> String {
    symbols.iter().map(Symbol::letter).collect()
}

/// 24-bit RGB color for a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Pixel off
    pub const OFF: Rgb = Rgb(0x000000);

    pub const RED: Rgb = Rgb(0xff0000);
    pub const ORANGE: Rgb = Rgb(0xffa500);
    pub const YELLOW: Rgb = Rgb(0xffff00);
    pub const GREEN: Rgb = Rgb(0x00ff00);
    pub const BLUE: Rgb = Rgb(0x0000ff);
    pub const VIOLET: Rgb = Rgb(0xee82ee);

    pub fn red(&self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub fn green(&self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub fn blue(&self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_follows_declaration_order() {
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index() as usize, i);
        }
    }

    #[test]
    fn test_letters_follow_color_names() {
        assert_eq!(letters(&Symbol::ALL), "roygbv");
        assert_eq!(Symbol::from_letter('B'), Some(Symbol::PosZ));
        assert_eq!(Symbol::from_letter('q'), None);
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(Symbol::from_axis_label("-Y"), Some(Symbol::NegY));
        assert_eq!(Symbol::from_axis_label("y"), None);
    }

    #[test]
    fn test_rgb_components() {
        let c = Rgb::VIOLET;
        assert_eq!((c.red(), c.green(), c.blue()), (0xee, 0x82, 0xee));
        assert_eq!(Rgb::ORANGE.to_string(), "#ffa500");
    }
}
