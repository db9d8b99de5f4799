//! Stroke color: hex (#RGB, #RGBA, #RRGGBB, #RRGGBBAA) and platform named colors.

/// sRGB color with alpha, 8 bits per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Opaque black, the default guide-box stroke.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex or named color string.
    ///
    /// Accepts:
    /// - `#RGB` / `RGB`: 3-digit hex, alpha = 0xFF
    /// - `#RGBA` / `RGBA`: 4-digit hex
    /// - `#RRGGBB` / `RRGGBB`: 6-digit hex, alpha = 0xFF
    /// - `#RRGGBBAA` / `RRGGBBAA`: 8-digit hex
    /// - named colors (case-insensitive): `black`, `red`, `darkgray`, etc.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if let Some(c) = parse_hex(hex) {
            return Some(c);
        }

        lookup_named(s)
    }

    /// `#RRGGBB` for opaque colors, `#RRGGBBAA` otherwise.
    #[cfg(feature = "alloc")]
    pub fn to_hex(self) -> alloc::string::String {
        if self.a == 255 {
            alloc::format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            alloc::format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => Some(Color::rgb(
            expand_nibble(bytes[0])?,
            expand_nibble(bytes[1])?,
            expand_nibble(bytes[2])?,
        )),
        4 => Some(Color {
            r: expand_nibble(bytes[0])?,
            g: expand_nibble(bytes[1])?,
            b: expand_nibble(bytes[2])?,
            a: expand_nibble(bytes[3])?,
        }),
        6 => Some(Color::rgb(
            parse_byte(&bytes[0..2])?,
            parse_byte(&bytes[2..4])?,
            parse_byte(&bytes[4..6])?,
        )),
        8 => Some(Color {
            r: parse_byte(&bytes[0..2])?,
            g: parse_byte(&bytes[2..4])?,
            b: parse_byte(&bytes[4..6])?,
            a: parse_byte(&bytes[6..8])?,
        }),
        _ => None,
    }
}

/// 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn parse_byte(pair: &[u8]) -> Option<u8> {
    Some(hex_val(pair[0])? << 4 | hex_val(pair[1])?)
}

fn lookup_named(name: &str) -> Option<Color> {
    // Lowercase into a scratch buffer; the longest name is 11 bytes.
    let mut buf = [0u8; 16];
    let name_bytes = name.as_bytes();
    if name_bytes.len() > buf.len() {
        return None;
    }
    for (i, &b) in name_bytes.iter().enumerate() {
        buf[i] = b.to_ascii_lowercase();
    }
    let lower = core::str::from_utf8(&buf[..name_bytes.len()]).ok()?;

    NAMED_COLORS
        .binary_search_by_key(&lower, |&(n, _)| n)
        .ok()
        .map(|idx| NAMED_COLORS[idx].1)
}

/// Named colors understood by the platform color parser, sorted for binary search.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("aqua", Color::rgb(0x00, 0xFF, 0xFF)),
    ("black", Color::BLACK),
    ("blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("cyan", Color::rgb(0x00, 0xFF, 0xFF)),
    ("darkgray", Color::rgb(0x44, 0x44, 0x44)),
    ("darkgrey", Color::rgb(0x44, 0x44, 0x44)),
    ("fuchsia", Color::rgb(0xFF, 0x00, 0xFF)),
    ("gray", Color::rgb(0x88, 0x88, 0x88)),
    ("green", Color::GREEN),
    ("grey", Color::rgb(0x88, 0x88, 0x88)),
    ("lightgray", Color::rgb(0xCC, 0xCC, 0xCC)),
    ("lightgrey", Color::rgb(0xCC, 0xCC, 0xCC)),
    ("lime", Color::rgb(0x00, 0xFF, 0x00)),
    ("magenta", Color::rgb(0xFF, 0x00, 0xFF)),
    ("maroon", Color::rgb(0x80, 0x00, 0x00)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("olive", Color::rgb(0x80, 0x80, 0x00)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("red", Color::RED),
    ("silver", Color::rgb(0xC0, 0xC0, 0xC0)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
    ("transparent", Color::TRANSPARENT),
    ("white", Color::WHITE),
    ("yellow", Color::rgb(0xFF, 0xFF, 0x00)),
];
