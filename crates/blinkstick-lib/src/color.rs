//! Named colors — the CSS/X11 extended color set plus `"off"`.
//!
//! Lookup is case-sensitive exact match over a table built once at first
//! use. Unknown names fail with [`BlinkstickError::ColorNotFound`] rather
//! than defaulting.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{BlinkstickError, Result};

/// An RGBA color. Alpha is always fully opaque here; it exists for interop
/// with the 4-channel device color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully-black opaque sentinel representing "light off".
    pub const OFF: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 0xFF }
    }

    /// Scale each RGB channel by `j / steps` using truncating integer
    /// division. Alpha is preserved unchanged. `steps` must be non-zero.
    pub fn scaled(self, j: u32, steps: u32) -> Color {
        debug_assert!(steps > 0, "scaled() requires steps > 0");
        let scale = |c: u8| (c as u32 * j / steps) as u8;
        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Resolve a color name to its table entry.
///
/// Case-sensitive: `"red"` resolves, `"Red"` does not.
pub fn resolve(name: &str) -> Result<Color> {
    table()
        .get(name)
        .copied()
        .ok_or_else(|| BlinkstickError::ColorNotFound(name.to_string()))
}

/// All color names known to [`resolve`], in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    NAMED_COLORS.iter().map(|&(name, _)| name)
}

fn table() -> &'static HashMap<&'static str, Color> {
    static TABLE: OnceLock<HashMap<&'static str, Color>> = OnceLock::new();
    TABLE.get_or_init(|| NAMED_COLORS.iter().copied().collect())
}

/// The CSS/X11 extended color names, plus `"off"` as a synonym for black.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("aliceblue", Color::rgb(0xF0, 0xF8, 0xFF)),
    ("antiquewhite", Color::rgb(0xFA, 0xEB, 0xD7)),
    ("aqua", Color::rgb(0x00, 0xFF, 0xFF)),
    ("aquamarine", Color::rgb(0x7F, 0xFF, 0xD4)),
    ("azure", Color::rgb(0xF0, 0xFF, 0xFF)),
    ("beige", Color::rgb(0xF5, 0xF5, 0xDC)),
    ("bisque", Color::rgb(0xFF, 0xE4, 0xC4)),
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("blanchedalmond", Color::rgb(0xFF, 0xEB, 0xCD)),
    ("blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("blueviolet", Color::rgb(0x8A, 0x2B, 0xE2)),
    ("brown", Color::rgb(0xA5, 0x2A, 0x2A)),
    ("burlywood", Color::rgb(0xDE, 0xB8, 0x87)),
    ("cadetblue", Color::rgb(0x5F, 0x9E, 0xA0)),
    ("chartreuse", Color::rgb(0x7F, 0xFF, 0x00)),
    ("chocolate", Color::rgb(0xD2, 0x69, 0x1E)),
    ("coral", Color::rgb(0xFF, 0x7F, 0x50)),
    ("cornflowerblue", Color::rgb(0x64, 0x95, 0xED)),
    ("cornsilk", Color::rgb(0xFF, 0xF8, 0xDC)),
    ("crimson", Color::rgb(0xDC, 0x14, 0x3C)),
    ("cyan", Color::rgb(0x00, 0xFF, 0xFF)),
    ("darkblue", Color::rgb(0x00, 0x00, 0x8B)),
    ("darkcyan", Color::rgb(0x00, 0x8B, 0x8B)),
    ("darkgoldenrod", Color::rgb(0xB8, 0x86, 0x0B)),
    ("darkgray", Color::rgb(0xA9, 0xA9, 0xA9)),
    ("darkgrey", Color::rgb(0xA9, 0xA9, 0xA9)),
    ("darkgreen", Color::rgb(0x00, 0x64, 0x00)),
    ("darkkhaki", Color::rgb(0xBD, 0xB7, 0x6B)),
    ("darkmagenta", Color::rgb(0x8B, 0x00, 0x8B)),
    ("darkolivegreen", Color::rgb(0x55, 0x6B, 0x2F)),
    ("darkorange", Color::rgb(0xFF, 0x8C, 0x00)),
    ("darkorchid", Color::rgb(0x99, 0x32, 0xCC)),
    ("darkred", Color::rgb(0x8B, 0x00, 0x00)),
    ("darksalmon", Color::rgb(0xE9, 0x96, 0x7A)),
    ("darkseagreen", Color::rgb(0x8F, 0xBC, 0x8F)),
    ("darkslateblue", Color::rgb(0x48, 0x3D, 0x8B)),
    ("darkslategray", Color::rgb(0x2F, 0x4F, 0x4F)),
    ("darkslategrey", Color::rgb(0x2F, 0x4F, 0x4F)),
    ("darkturquoise", Color::rgb(0x00, 0xCE, 0xD1)),
    ("darkviolet", Color::rgb(0x94, 0x00, 0xD3)),
    ("deeppink", Color::rgb(0xFF, 0x14, 0x93)),
    ("deepskyblue", Color::rgb(0x00, 0xBF, 0xFF)),
    ("dimgray", Color::rgb(0x69, 0x69, 0x69)),
    ("dimgrey", Color::rgb(0x69, 0x69, 0x69)),
    ("dodgerblue", Color::rgb(0x1E, 0x90, 0xFF)),
    ("firebrick", Color::rgb(0xB2, 0x22, 0x22)),
    ("floralwhite", Color::rgb(0xFF, 0xFA, 0xF0)),
    ("forestgreen", Color::rgb(0x22, 0x8B, 0x22)),
    ("fuchsia", Color::rgb(0xFF, 0x00, 0xFF)),
    ("gainsboro", Color::rgb(0xDC, 0xDC, 0xDC)),
    ("ghostwhite", Color::rgb(0xF8, 0xF8, 0xFF)),
    ("gold", Color::rgb(0xFF, 0xD7, 0x00)),
    ("goldenrod", Color::rgb(0xDA, 0xA5, 0x20)),
    ("gray", Color::rgb(0x80, 0x80, 0x80)),
    ("grey", Color::rgb(0x80, 0x80, 0x80)),
    ("green", Color::rgb(0x00, 0x80, 0x00)),
    ("greenyellow", Color::rgb(0xAD, 0xFF, 0x2F)),
    ("honeydew", Color::rgb(0xF0, 0xFF, 0xF0)),
    ("hotpink", Color::rgb(0xFF, 0x69, 0xB4)),
    ("indianred", Color::rgb(0xCD, 0x5C, 0x5C)),
    ("indigo", Color::rgb(0x4B, 0x00, 0x82)),
    ("ivory", Color::rgb(0xFF, 0xFF, 0xF0)),
    ("khaki", Color::rgb(0xF0, 0xE6, 0x8C)),
    ("lavender", Color::rgb(0xE6, 0xE6, 0xFA)),
    ("lavenderblush", Color::rgb(0xFF, 0xF0, 0xF5)),
    ("lawngreen", Color::rgb(0x7C, 0xFC, 0x00)),
    ("lemonchiffon", Color::rgb(0xFF, 0xFA, 0xCD)),
    ("lightblue", Color::rgb(0xAD, 0xD8, 0xE6)),
    ("lightcoral", Color::rgb(0xF0, 0x80, 0x80)),
    ("lightcyan", Color::rgb(0xE0, 0xFF, 0xFF)),
    ("lightgoldenrodyellow", Color::rgb(0xFA, 0xFA, 0xD2)),
    ("lightgray", Color::rgb(0xD3, 0xD3, 0xD3)),
    ("lightgrey", Color::rgb(0xD3, 0xD3, 0xD3)),
    ("lightgreen", Color::rgb(0x90, 0xEE, 0x90)),
    ("lightpink", Color::rgb(0xFF, 0xB6, 0xC1)),
    ("lightsalmon", Color::rgb(0xFF, 0xA0, 0x7A)),
    ("lightseagreen", Color::rgb(0x20, 0xB2, 0xAA)),
    ("lightskyblue", Color::rgb(0x87, 0xCE, 0xFA)),
    ("lightslategray", Color::rgb(0x77, 0x88, 0x99)),
    ("lightslategrey", Color::rgb(0x77, 0x88, 0x99)),
    ("lightsteelblue", Color::rgb(0xB0, 0xC4, 0xDE)),
    ("lightyellow", Color::rgb(0xFF, 0xFF, 0xE0)),
    ("lime", Color::rgb(0x00, 0xFF, 0x00)),
    ("limegreen", Color::rgb(0x32, 0xCD, 0x32)),
    ("linen", Color::rgb(0xFA, 0xF0, 0xE6)),
    ("magenta", Color::rgb(0xFF, 0x00, 0xFF)),
    ("maroon", Color::rgb(0x80, 0x00, 0x00)),
    ("mediumaquamarine", Color::rgb(0x66, 0xCD, 0xAA)),
    ("mediumblue", Color::rgb(0x00, 0x00, 0xCD)),
    ("mediumorchid", Color::rgb(0xBA, 0x55, 0xD3)),
    ("mediumpurple", Color::rgb(0x93, 0x70, 0xD8)),
    ("mediumseagreen", Color::rgb(0x3C, 0xB3, 0x71)),
    ("mediumslateblue", Color::rgb(0x7B, 0x68, 0xEE)),
    ("mediumspringgreen", Color::rgb(0x00, 0xFA, 0x9A)),
    ("mediumturquoise", Color::rgb(0x48, 0xD1, 0xCC)),
    ("mediumvioletred", Color::rgb(0xC7, 0x15, 0x85)),
    ("midnightblue", Color::rgb(0x19, 0x19, 0x70)),
    ("mintcream", Color::rgb(0xF5, 0xFF, 0xFA)),
    ("mistyrose", Color::rgb(0xFF, 0xE4, 0xE1)),
    ("moccasin", Color::rgb(0xFF, 0xE4, 0xB5)),
    ("navajowhite", Color::rgb(0xFF, 0xDE, 0xAD)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("off", Color::rgb(0x00, 0x00, 0x00)),
    ("oldlace", Color::rgb(0xFD, 0xF5, 0xE6)),
    ("olive", Color::rgb(0x80, 0x80, 0x00)),
    ("olivedrab", Color::rgb(0x6B, 0x8E, 0x23)),
    ("orange", Color::rgb(0xFF, 0xA5, 0x00)),
    ("orangered", Color::rgb(0xFF, 0x45, 0x00)),
    ("orchid", Color::rgb(0xDA, 0x70, 0xD6)),
    ("palegoldenrod", Color::rgb(0xEE, 0xE8, 0xAA)),
    ("palegreen", Color::rgb(0x98, 0xFB, 0x98)),
    ("paleturquoise", Color::rgb(0xAF, 0xEE, 0xEE)),
    ("palevioletred", Color::rgb(0xD8, 0x70, 0x93)),
    ("papayawhip", Color::rgb(0xFF, 0xEF, 0xD5)),
    ("peachpuff", Color::rgb(0xFF, 0xDA, 0xB9)),
    ("peru", Color::rgb(0xCD, 0x85, 0x3F)),
    ("pink", Color::rgb(0xFF, 0xC0, 0xCB)),
    ("plum", Color::rgb(0xDD, 0xA0, 0xDD)),
    ("powderblue", Color::rgb(0xB0, 0xE0, 0xE6)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("red", Color::rgb(0xFF, 0x00, 0x00)),
    ("rosybrown", Color::rgb(0xBC, 0x8F, 0x8F)),
    ("royalblue", Color::rgb(0x41, 0x69, 0xE1)),
    ("saddlebrown", Color::rgb(0x8B, 0x45, 0x13)),
    ("salmon", Color::rgb(0xFA, 0x80, 0x72)),
    ("sandybrown", Color::rgb(0xF4, 0xA4, 0x60)),
    ("seagreen", Color::rgb(0x2E, 0x8B, 0x57)),
    ("seashell", Color::rgb(0xFF, 0xF5, 0xEE)),
    ("sienna", Color::rgb(0xA0, 0x52, 0x2D)),
    ("silver", Color::rgb(0xC0, 0xC0, 0xC0)),
    ("skyblue", Color::rgb(0x87, 0xCE, 0xEB)),
    ("slateblue", Color::rgb(0x6A, 0x5A, 0xCD)),
    ("slategray", Color::rgb(0x70, 0x80, 0x90)),
    ("slategrey", Color::rgb(0x70, 0x80, 0x90)),
    ("snow", Color::rgb(0xFF, 0xFA, 0xFA)),
    ("springgreen", Color::rgb(0x00, 0xFF, 0x7F)),
    ("steelblue", Color::rgb(0x46, 0x82, 0xB4)),
    ("tan", Color::rgb(0xD2, 0xB4, 0x8C)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
    ("thistle", Color::rgb(0xD8, 0xBF, 0xD8)),
    ("tomato", Color::rgb(0xFF, 0x63, 0x47)),
    ("turquoise", Color::rgb(0x40, 0xE0, 0xD0)),
    ("violet", Color::rgb(0xEE, 0x82, 0xEE)),
    ("wheat", Color::rgb(0xF5, 0xDE, 0xB3)),
    ("white", Color::rgb(0xFF, 0xFF, 0xFF)),
    ("whitesmoke", Color::rgb(0xF5, 0xF5, 0xF5)),
    ("yellow", Color::rgb(0xFF, 0xFF, 0x00)),
    ("yellowgreen", Color::rgb(0x9A, 0xCD, 0x32)),
];

#[cfg(test)]
mod tests {
    use super::*;

    // ── resolve ──

    #[test]
    fn resolve_red() {
        assert_eq!(resolve("red").unwrap(), Color::rgb(0xFF, 0x00, 0x00));
    }

    #[test]
    fn resolve_blue() {
        let c = resolve("blue").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0x00, 0x00, 0xFF, 0xFF));
    }

    #[test]
    fn resolve_lime_vs_green() {
        // CSS extended set: "green" is the dark green, "lime" is full green.
        assert_eq!(resolve("lime").unwrap(), Color::rgb(0x00, 0xFF, 0x00));
        assert_eq!(resolve("green").unwrap(), Color::rgb(0x00, 0x80, 0x00));
    }

    #[test]
    fn resolve_off_is_black() {
        assert_eq!(resolve("off").unwrap(), Color::OFF);
        assert_eq!(resolve("black").unwrap(), Color::OFF);
    }

    #[test]
    fn resolve_unknown_fails() {
        let err = resolve("notacolor").unwrap_err();
        assert!(matches!(err, BlinkstickError::ColorNotFound(name) if name == "notacolor"));
    }

    #[test]
    fn resolve_is_case_sensitive() {
        assert!(resolve("Red").is_err());
        assert!(resolve("RED").is_err());
        assert!(resolve("red").is_ok());
    }

    #[test]
    fn resolve_rejects_whitespace() {
        assert!(resolve(" red").is_err());
        assert!(resolve("red ").is_err());
        assert!(resolve("").is_err());
    }

    #[test]
    fn every_name_resolves() {
        for name in names() {
            assert!(resolve(name).is_ok(), "table name {name:?} must resolve");
        }
    }

    #[test]
    fn table_keys_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for name in names() {
            assert!(seen.insert(name), "duplicate table key {name:?}");
        }
    }

    #[test]
    fn table_has_full_extended_set() {
        // 147 CSS/X11 names plus "off".
        assert_eq!(names().count(), 148);
    }

    #[test]
    fn all_colors_fully_opaque() {
        for name in names() {
            assert_eq!(resolve(name).unwrap().a, 0xFF, "{name} must be opaque");
        }
    }

    // ── Color ──

    #[test]
    fn display_hex() {
        assert_eq!(resolve("dodgerblue").unwrap().to_string(), "#1E90FF");
        assert_eq!(Color::OFF.to_string(), "#000000");
    }

    #[test]
    fn scaled_endpoints() {
        let c = Color::rgb(0xFF, 0x80, 0x01);
        assert_eq!(c.scaled(0, 15), Color::rgb(0, 0, 0));
        assert_eq!(c.scaled(15, 15), c);
    }

    #[test]
    fn scaled_truncates() {
        // 200 * 1 / 3 = 66 (truncating division)
        let c = Color::rgb(200, 100, 7);
        let s = c.scaled(1, 3);
        assert_eq!((s.r, s.g, s.b), (66, 33, 2));
    }

    #[test]
    fn scaled_preserves_alpha() {
        let c = Color::rgb(10, 20, 30);
        for j in 0..=5 {
            assert_eq!(c.scaled(j, 5).a, 0xFF);
        }
    }

    #[test]
    fn scaled_is_monotonic_per_channel() {
        let c = Color::rgb(0xFF, 0x9A, 0x33);
        let steps = 15;
        let mut prev = c.scaled(0, steps);
        for j in 1..=steps {
            let cur = c.scaled(j, steps);
            assert!(cur.r >= prev.r && cur.g >= prev.g && cur.b >= prev.b);
            prev = cur;
        }
    }
}
