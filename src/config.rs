//! Guide-box configuration and its query-string form.
//!
//! # Example
//!
//! ```
//! use faceframe::config::{self, OverlayConfig};
//! use faceframe::Color;
//!
//! let result = config::parse("boxWidth=360&boxHeight=480&color=%23ff0000");
//! assert!(result.warnings.is_empty());
//! assert_eq!(
//!     result.config,
//!     OverlayConfig::default()
//!         .with_box_width(360)
//!         .with_box_height(480)
//!         .with_stroke_color(Color::RED)
//! );
//! ```

use crate::color::Color;
use crate::error::GeometryError;
use crate::overlay::{DEFAULT_BOX_HEIGHT, DEFAULT_BOX_WIDTH, OverlayRequest};

/// Stroke width of the guide box outline, in surface units.
pub const STROKE_WIDTH: f32 = 10.0;

/// How the guide box looks and how large it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct OverlayConfig {
    pub box_width: i32,
    pub box_height: i32,
    pub stroke_color: Color,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            box_width: DEFAULT_BOX_WIDTH,
            box_height: DEFAULT_BOX_HEIGHT,
            stroke_color: Color::BLACK,
        }
    }
}

impl OverlayConfig {
    pub fn with_box_width(mut self, px: i32) -> Self {
        self.box_width = px;
        self
    }

    pub fn with_box_height(mut self, px: i32) -> Self {
        self.box_height = px;
        self
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Takes effect on the next planned frame.
    pub fn set_box_width(&mut self, px: i32) {
        self.box_width = px;
    }

    /// Takes effect on the next planned frame.
    pub fn set_box_height(&mut self, px: i32) {
        self.box_height = px;
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    pub fn request(&self) -> OverlayRequest {
        OverlayRequest::new(self.box_width, self.box_height)
    }

    /// Check the box size without a surface.
    pub fn validate(&self) -> Result<(), GeometryError> {
        // A 2x2 surface accepts every box the calculator accepts.
        self.request().place(2, 2).map(|_| ())
    }
}

#[cfg(feature = "alloc")]
pub use query::{ParseResult, ParseWarning, parse};

#[cfg(feature = "alloc")]
mod query {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::OverlayConfig;
    use crate::color::Color;

    /// Result of parsing a configuration query string.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ParseResult {
        /// Parsed configuration; defaults fill anything missing or invalid.
        pub config: OverlayConfig,
        /// Non-fatal parse warnings.
        pub warnings: Vec<ParseWarning>,
    }

    /// Non-fatal warning from configuration parsing.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ParseWarning {
        /// A key appeared more than once (last valid value wins).
        DuplicateKey { key: String, value: String },
        /// A key was not recognized.
        KeyNotRecognized { key: String, value: String },
        /// A key was recognized but its value could not be parsed.
        ValueInvalid {
            key: &'static str,
            value: String,
            reason: &'static str,
        },
    }

    #[derive(Copy, Clone, PartialEq, Eq)]
    enum Field {
        BoxWidth,
        BoxHeight,
        StrokeColor,
    }

    impl Field {
        fn from_key(key: &str) -> Option<Self> {
            match key {
                "boxwidth" | "box_width" | "w" => Some(Self::BoxWidth),
                "boxheight" | "box_height" | "h" => Some(Self::BoxHeight),
                "color" | "stroke" | "strokecolor" | "stroke_color" => Some(Self::StrokeColor),
                _ => None,
            }
        }

        fn name(self) -> &'static str {
            match self {
                Self::BoxWidth => "boxwidth",
                Self::BoxHeight => "boxheight",
                Self::StrokeColor => "color",
            }
        }
    }

    /// Parse a `key=value&key=value` configuration string.
    ///
    /// Keys are case-insensitive. Values are percent-decoded; `+` decodes to
    /// a space.
    pub fn parse(query: &str) -> ParseResult {
        let mut config = OverlayConfig::default();
        let mut warnings = Vec::new();
        let mut seen: Vec<Field> = Vec::new();

        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = percent_decode(raw_key).to_ascii_lowercase();
            let value = percent_decode(raw_value);

            let Some(field) = Field::from_key(&key) else {
                warnings.push(ParseWarning::KeyNotRecognized { key, value });
                continue;
            };
            if seen.contains(&field) {
                warnings.push(ParseWarning::DuplicateKey {
                    key,
                    value: value.clone(),
                });
            } else {
                seen.push(field);
            }

            if let Err(reason) = apply(&mut config, field, &value) {
                warnings.push(ParseWarning::ValueInvalid {
                    key: field.name(),
                    value,
                    reason,
                });
            }
        }

        if !warnings.is_empty() {
            log::debug!("config parsed with {} warning(s)", warnings.len());
        }
        ParseResult { config, warnings }
    }

    fn apply(config: &mut OverlayConfig, field: Field, value: &str) -> Result<(), &'static str> {
        match field {
            Field::BoxWidth => config.box_width = parse_extent(value)?,
            Field::BoxHeight => config.box_height = parse_extent(value)?,
            Field::StrokeColor => {
                config.stroke_color =
                    Color::parse(value).ok_or("expected hex (#RRGGBB) or a color name")?;
            }
        }
        Ok(())
    }

    fn parse_extent(value: &str) -> Result<i32, &'static str> {
        let px: i32 = value.trim().parse().map_err(|_| "expected an integer")?;
        if px < 2 {
            return Err("box extent must be at least 2");
        }
        Ok(px)
    }

    fn percent_decode(s: &str) -> String {
        let bytes = s.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'+' => out.push(b' '),
                b'%' if i + 2 < bytes.len() => {
                    match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                        (Some(hi), Some(lo)) => {
                            out.push(hi << 4 | lo);
                            i += 2;
                        }
                        _ => out.push(b'%'),
                    }
                }
                b => out.push(b),
            }
            i += 1;
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    fn hex_val(ch: u8) -> Option<u8> {
        (ch as char).to_digit(16).map(|d| d as u8)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = OverlayConfig::default();
        assert_eq!((c.box_width, c.box_height), (400, 500));
        assert_eq!(c.stroke_color, Color::BLACK);
        assert_eq!(STROKE_WIDTH, 10.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn setters() {
        let mut c = OverlayConfig::default();
        c.set_box_width(200);
        c.set_box_height(260);
        c.set_stroke_color(Color::GREEN);
        assert_eq!(c.request(), OverlayRequest::new(200, 260));
        assert_eq!(c.stroke_color, Color::GREEN);
    }

    #[test]
    fn validate_rejects_bad_box() {
        assert!(OverlayConfig::default().with_box_width(0).validate().is_err());
        assert!(OverlayConfig::default().with_box_height(-10).validate().is_err());
        assert!(OverlayConfig::default().with_box_height(1).validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_camel_case_with_defaults() {
        let c: OverlayConfig = serde_json::from_str(r#"{"boxWidth": 320}"#).unwrap();
        assert_eq!(c, OverlayConfig::default().with_box_width(320));

        let json = serde_json::to_string(&OverlayConfig::default()).unwrap();
        assert!(json.contains("\"boxHeight\":500"), "{json}");
    }
}
