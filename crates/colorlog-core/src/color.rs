//! ANSI terminal colors

/// Terminal foreground colors used for log records
///
/// Discriminants are the ANSI foreground codes written into the escape
/// sequence. Yellow and White use the bright-range codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Color {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 93,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    Grey = 37,
    White = 97,
}

impl Color {
    /// ANSI foreground code for this color
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_codes() {
        assert_eq!(Color::Black.code(), 30);
        assert_eq!(Color::Red.code(), 31);
        assert_eq!(Color::Green.code(), 32);
        assert_eq!(Color::Yellow.code(), 93);
        assert_eq!(Color::Blue.code(), 34);
        assert_eq!(Color::Magenta.code(), 35);
        assert_eq!(Color::Cyan.code(), 36);
        assert_eq!(Color::Grey.code(), 37);
        assert_eq!(Color::White.code(), 97);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names_are_lowercase() {
        let json = serde_json::to_string(&Color::Magenta).unwrap();
        assert_eq!(json, "\"magenta\"");
    }
}
