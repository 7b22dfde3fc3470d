//! Text colors understood by the markup tags.

/// 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_hex(0x000000);
    pub const DARK_BLUE: Color = Color::from_hex(0x0000AA);
    pub const DARK_GREEN: Color = Color::from_hex(0x00AA00);
    pub const DARK_AQUA: Color = Color::from_hex(0x00AAAA);
    pub const DARK_RED: Color = Color::from_hex(0xAA0000);
    pub const DARK_PURPLE: Color = Color::from_hex(0xAA00AA);
    pub const GOLD: Color = Color::from_hex(0xFFAA00);
    pub const GRAY: Color = Color::from_hex(0xAAAAAA);
    pub const DARK_GRAY: Color = Color::from_hex(0x555555);
    pub const BLUE: Color = Color::from_hex(0x5555FF);
    pub const GREEN: Color = Color::from_hex(0x55FF55);
    pub const AQUA: Color = Color::from_hex(0x55FFFF);
    pub const RED: Color = Color::from_hex(0xFF5555);
    pub const LIGHT_PURPLE: Color = Color::from_hex(0xFF55FF);
    pub const YELLOW: Color = Color::from_hex(0xFFFF55);
    pub const WHITE: Color = Color::from_hex(0xFFFFFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse `#rrggbb`.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }

    /// Look up one of the named colors (`gray` and `grey` both work).
    pub fn named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Self::BLACK,
            "dark_blue" => Self::DARK_BLUE,
            "dark_green" => Self::DARK_GREEN,
            "dark_aqua" => Self::DARK_AQUA,
            "dark_red" => Self::DARK_RED,
            "dark_purple" => Self::DARK_PURPLE,
            "gold" => Self::GOLD,
            "gray" | "grey" => Self::GRAY,
            "dark_gray" | "dark_grey" => Self::DARK_GRAY,
            "blue" => Self::BLUE,
            "green" => Self::GREEN,
            "aqua" => Self::AQUA,
            "red" => Self::RED,
            "light_purple" => Self::LIGHT_PURPLE,
            "yellow" => Self::YELLOW,
            "white" => Self::WHITE,
            _ => return None,
        };
        Some(color)
    }

    /// Named color or `#rrggbb`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::named(s).or_else(|| Self::parse_hex(s))
    }
}
