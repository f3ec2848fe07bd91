//! Color parsing and resource resolution.
//!
//! CSS colors come in with alpha last (`#RRGGBBAA`); Android wants alpha
//! first (`#AARRGGBB`). [`Argb`] normalizes everything into the Android
//! channel order, and [`resolve`] decides whether a value should become a
//! literal or a named color resource.

use indexmap::IndexMap;

/// A color in Android channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const BLACK: Argb = Argb::opaque(0x00, 0x00, 0x00);
    pub const WHITE: Argb = Argb::opaque(0xFF, 0xFF, 0xFF);
    pub const TRANSPARENT: Argb = Argb {
        a: 0,
        r: 0,
        g: 0,
        b: 0,
    };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Argb {
        Argb { a: 0xFF, r, g, b }
    }

    /// Unpacks `0xAARRGGBB`.
    pub const fn from_u32(packed: u32) -> Argb {
        Argb {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    pub const fn to_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Android hex form, `#AARRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.to_u32())
    }
}

/// Parses a CSS color value: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`,
/// `rgb()/rgba()`, or a small set of keyword colors. Returns `None` for
/// anything else (gradients, `currentColor`, custom properties).
pub fn parse(value: &str) -> Option<Argb> {
    let value = value.trim();
    if let Some(digits) = value.strip_prefix('#') {
        return parse_hex(digits);
    }
    let lower = value.to_ascii_lowercase();
    if lower.starts_with("rgb") {
        return parse_rgb_function(&lower);
    }
    named(&lower)
}

fn parse_hex(digits: &str) -> Option<Argb> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        // shorthand digits duplicate: #abc -> #aabbcc
        3 | 4 => {
            let mut channels = [0u8; 4];
            for (i, ch) in digits.chars().enumerate() {
                let d = ch.to_digit(16)? as u8;
                channels[i] = d * 17;
            }
            let a = if digits.len() == 4 { channels[3] } else { 0xFF };
            Some(Argb {
                a,
                r: channels[0],
                g: channels[1],
                b: channels[2],
            })
        }
        6 | 8 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            // CSS puts alpha last; Android wants it first
            let a = if digits.len() == 8 {
                u8::from_str_radix(&digits[6..8], 16).ok()?
            } else {
                0xFF
            };
            Some(Argb { a, r, g, b })
        }
        _ => None,
    }
}

fn parse_rgb_function(lower: &str) -> Option<Argb> {
    let inner = lower
        .strip_prefix("rgba")
        .or_else(|| lower.strip_prefix("rgb"))?
        .trim()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r = channel(parts.next()?)?;
    let g = channel(parts.next()?)?;
    let b = channel(parts.next()?)?;
    let a = match parts.next() {
        Some(raw) => alpha(raw)?,
        None => 0xFF,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(Argb { a, r, g, b })
}

fn channel(raw: &str) -> Option<u8> {
    let n: f64 = raw.parse().ok()?;
    Some(n.round().clamp(0.0, 255.0) as u8)
}

/// Fractional alpha rounded to the nearest 8-bit value; 0.5 lands on 0x80.
fn alpha(raw: &str) -> Option<u8> {
    let n: f64 = raw.parse().ok()?;
    Some((n.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn named(lower: &str) -> Option<Argb> {
    let argb = match lower {
        "white" => Argb::WHITE,
        "black" => Argb::BLACK,
        "transparent" => Argb::TRANSPARENT,
        "red" => Argb::opaque(0xFF, 0x00, 0x00),
        "green" => Argb::opaque(0x00, 0x80, 0x00),
        "blue" => Argb::opaque(0x00, 0x00, 0xFF),
        "gray" | "grey" => Argb::opaque(0x80, 0x80, 0x80),
        "yellow" => Argb::opaque(0xFF, 0xFF, 0x00),
        "orange" => Argb::opaque(0xFF, 0xA5, 0x00),
        "purple" => Argb::opaque(0x80, 0x00, 0x80),
        "cyan" => Argb::opaque(0x00, 0xFF, 0xFF),
        "magenta" => Argb::opaque(0xFF, 0x00, 0xFF),
        _ => return None,
    };
    Some(argb)
}

/// Known project colors, mapping exact ARGB values to resource names.
///
/// The table is built once and passed by reference into the generators so a
/// caller can supply its own palette.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    entries: IndexMap<Argb, String>,
}

impl ColorTable {
    pub fn empty() -> ColorTable {
        ColorTable::default()
    }

    /// The default palette: plain black/white/transparent, a gray ramp, and
    /// the two accent colors the starter resource pack ships with.
    pub fn builtin() -> ColorTable {
        const ENTRIES: &[(u32, &str)] = &[
            (0xFFFFFFFF, "white"),
            (0xFF000000, "black"),
            (0x00000000, "transparent"),
            (0xFFF5F5F5, "gray_50"),
            (0xFFEEEEEE, "gray_100"),
            (0xFFE0E0E0, "gray_200"),
            (0xFF9E9E9E, "gray_500"),
            (0xFF616161, "gray_700"),
            (0xFF212121, "gray_900"),
            (0xFFFF5252, "accent_red"),
            (0xFF1E88E5, "accent_blue"),
        ];
        let mut table = ColorTable::empty();
        for &(packed, name) in ENTRIES {
            table.entries.insert(Argb::from_u32(packed), name.to_string());
        }
        table
    }

    pub fn with_entry(mut self, color: Argb, name: impl Into<String>) -> ColorTable {
        self.entries.insert(color, name.into());
        self
    }

    /// Exact-match lookup; no nearest-color logic.
    pub fn lookup(&self, color: Argb) -> Option<&str> {
        self.entries.get(&color).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A color ready for emission: either a literal or a named resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    Literal(Argb),
    Resource(String),
}

impl ColorValue {
    pub fn to_xml(&self) -> String {
        match self {
            ColorValue::Literal(argb) => argb.to_hex(),
            ColorValue::Resource(name) => format!("@color/{}", name),
        }
    }

    pub fn to_compose(&self) -> String {
        match self {
            ColorValue::Literal(argb) => format!("Color(0x{:08X})", argb.to_u32()),
            ColorValue::Resource(name) => format!("colorResource(id = R.color.{})", name),
        }
    }
}

/// Resolves a CSS color value against the project palette.
///
/// `var(--token)` references become resources named after the token, unless
/// the reference carries a literal fallback (`var(--x, #fff)`), which wins.
/// Parsed colors that match a table entry become resources; the rest stay
/// literal. Unparseable input degrades to opaque black rather than failing.
pub fn resolve(value: &str, table: &ColorTable) -> ColorValue {
    let value = value.trim();
    if let Some(reference) = parse_var(value) {
        if let Some(fallback) = reference.fallback {
            if looks_literal(fallback) {
                return resolve_parsed(fallback, table);
            }
        }
        let name = sanitize_resource_name(reference.token.trim_start_matches("--"));
        if !name.is_empty() {
            return ColorValue::Resource(name);
        }
        return ColorValue::Literal(Argb::BLACK);
    }
    resolve_parsed(value, table)
}

fn resolve_parsed(value: &str, table: &ColorTable) -> ColorValue {
    match parse(value) {
        Some(argb) => match table.lookup(argb) {
            Some(name) => ColorValue::Resource(name.to_string()),
            None => ColorValue::Literal(argb),
        },
        None => ColorValue::Literal(Argb::BLACK),
    }
}

/// The token of a `var(--token)` or `var(--token, fallback)` reference,
/// dashes included. `None` when the value is not a custom-property
/// reference.
pub fn var_token(value: &str) -> Option<&str> {
    parse_var(value.trim()).map(|reference| reference.token)
}

struct VarReference<'a> {
    token: &'a str,
    fallback: Option<&'a str>,
}

fn parse_var(value: &str) -> Option<VarReference<'_>> {
    let inner = value.strip_prefix("var(")?.strip_suffix(')')?;
    match inner.split_once(',') {
        Some((token, fallback)) => Some(VarReference {
            token: token.trim(),
            fallback: Some(fallback.trim()),
        }),
        None => Some(VarReference {
            token: inner.trim(),
            fallback: None,
        }),
    }
}

fn looks_literal(value: &str) -> bool {
    value.starts_with('#') || value.to_ascii_lowercase().starts_with("rgb")
}

/// Makes an arbitrary token safe as an Android resource name: lowercase,
/// alphanumerics and underscores only, never starting with a digit.
pub fn sanitize_resource_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.trim().trim_start_matches('-').chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        return String::new();
    }
    let mut result = trimmed.to_string();
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_hex_duplicates_digits() {
        assert_eq!(parse("#fff"), Some(Argb::WHITE));
        assert_eq!(parse("#abc"), Some(Argb::opaque(0xAA, 0xBB, 0xCC)));
    }

    #[test]
    fn css_alpha_moves_to_the_front() {
        // CSS #RRGGBBAA, Android #AARRGGBB
        let parsed = parse("#ff000080").unwrap();
        assert_eq!(parsed.to_hex(), "#80FF0000");
        let short = parse("#f00a").unwrap();
        assert_eq!(short.to_hex(), "#AAFF0000");
    }

    #[test]
    fn six_digit_hex_is_opaque() {
        assert_eq!(parse("#1E88E5").unwrap().to_hex(), "#FF1E88E5");
    }

    #[test]
    fn rgba_alpha_rounds_to_nearest() {
        let half = parse("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(half.to_hex(), "#80FF0000");
        let opaque = parse("rgb(30, 136, 229)").unwrap();
        assert_eq!(opaque.to_hex(), "#FF1E88E5");
    }

    #[test]
    fn keyword_colors() {
        assert_eq!(parse("White"), Some(Argb::WHITE));
        assert_eq!(parse("transparent"), Some(Argb::TRANSPARENT));
        assert_eq!(parse("grey"), parse("gray"));
        assert_eq!(parse("chartreuse"), None);
    }

    #[test]
    fn garbage_does_not_parse() {
        assert_eq!(parse("#12345"), None);
        assert_eq!(parse("rgb(1, 2)"), None);
        assert_eq!(parse("linear-gradient(#fff, #000)"), None);
    }

    #[test]
    fn table_lookup_is_exact() {
        let table = ColorTable::builtin();
        assert_eq!(table.lookup(Argb::WHITE), Some("white"));
        assert_eq!(table.lookup(Argb::opaque(0xFE, 0xFE, 0xFE)), None);
    }

    #[test]
    fn resolve_prefers_resources_on_exact_match() {
        let table = ColorTable::builtin();
        assert_eq!(
            resolve("#fff", &table),
            ColorValue::Resource("white".to_string())
        );
        assert_eq!(
            resolve("#123456", &table),
            ColorValue::Literal(Argb::opaque(0x12, 0x34, 0x56))
        );
    }

    #[test]
    fn resolve_var_uses_literal_fallback() {
        let table = ColorTable::builtin();
        assert_eq!(
            resolve("var(--brand, #fff)", &table),
            ColorValue::Resource("white".to_string())
        );
        assert_eq!(
            resolve("var(--brand-primary)", &table),
            ColorValue::Resource("brand_primary".to_string())
        );
    }

    #[test]
    fn resolve_degrades_to_black() {
        let table = ColorTable::empty();
        assert_eq!(
            resolve("oklch(0.6 0.1 200)", &table),
            ColorValue::Literal(Argb::BLACK)
        );
    }

    #[test]
    fn emission_forms() {
        let literal = ColorValue::Literal(Argb::from_u32(0x80FF0000));
        assert_eq!(literal.to_xml(), "#80FF0000");
        assert_eq!(literal.to_compose(), "Color(0x80FF0000)");
        let resource = ColorValue::Resource("accent_blue".to_string());
        assert_eq!(resource.to_xml(), "@color/accent_blue");
        assert_eq!(
            resource.to_compose(),
            "colorResource(id = R.color.accent_blue)"
        );
    }

    #[test]
    fn var_token_extraction() {
        assert_eq!(var_token("var(--brand)"), Some("--brand"));
        assert_eq!(var_token("var(--brand, #fff)"), Some("--brand"));
        assert_eq!(var_token("#fff"), None);
    }

    #[test]
    fn resource_name_sanitization() {
        assert_eq!(sanitize_resource_name("--brand-primary"), "brand_primary");
        assert_eq!(sanitize_resource_name("Card BG"), "card_bg");
        assert_eq!(sanitize_resource_name("2xl"), "_2xl");
        assert_eq!(sanitize_resource_name("---"), "");
        assert_eq!(sanitize_resource_name("ok"), "ok");
    }
}
