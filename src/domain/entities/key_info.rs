use std::fmt;
use std::str::FromStr;

/// Last key pressed, described the way browsers report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInfo {
    /// Produced value, e.g. `"a"`, `"A"`, `"Enter"`.
    pub key: String,
    /// Physical key name, e.g. `"KeyA"`, `"Digit1"`, `"ArrowLeft"`.
    pub code: String,
    /// Legacy numeric key code, e.g. `65` or `13`. Zero when unknown.
    pub key_code: u32,
}

impl KeyInfo {
    /// Creates a key description.
    #[must_use]
    pub fn new(key: impl Into<String>, code: impl Into<String>, key_code: u32) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            key_code,
        }
    }
}

impl fmt::Display for KeyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key: {} | Code: {} | KeyCode: {}",
            self.key, self.code, self.key_code
        )
    }
}

/// A `#RRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl HexColor {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from six hex digits (values `0..16`), most significant first.
    #[must_use]
    pub fn from_digits(digits: [u8; 6]) -> Self {
        let pair = |hi: u8, lo: u8| ((hi & 0x0F) << 4) | (lo & 0x0F);
        Self::new(
            pair(digits[0], digits[1]),
            pair(digits[2], digits[3]),
            pair(digits[4], digits[5]),
        )
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("missing `#` in color `{s}`"))?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected six hex digits in `{s}`"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("{s}: {e}"))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}
