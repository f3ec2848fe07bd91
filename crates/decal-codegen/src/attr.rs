//! Ordered attribute sets and multi-part CSS value parsing for the
//! attribute builders.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use decal_core::{CssProperty, StyleMap};
use decal_style::BoxSides;

/// Attributes for one markup tag, in insertion order until sorted.
///
/// Output order is a priority sort: namespace declarations, then the id,
/// then the two layout dimensions, then everything else in the order it was
/// inserted. Downstream consumers diff generated text, so the order has to
/// be deterministic.
#[derive(Debug, Clone, Default)]
pub struct AttributeSet {
    entries: IndexMap<String, String>,
}

impl AttributeSet {
    pub fn new() -> AttributeSet {
        AttributeSet::default()
    }

    /// Inserts or replaces an attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Inserts only when the attribute is not already present.
    pub fn set_if_absent(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !self.entries.contains_key(&name) {
            self.entries.insert(name, value.into());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drains into the final emission order.
    pub fn into_sorted(self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self.entries.into_iter().collect();
        entries.sort_by_key(|(name, _)| priority(name));
        entries
    }
}

fn priority(name: &str) -> u8 {
    if name.starts_with("xmlns:") {
        0
    } else if name == "android:id" {
        1
    } else if name == "android:layout_width" {
        2
    } else if name == "android:layout_height" {
        3
    } else {
        4
    }
}

/// Per-edge padding or margin values after merging shorthand and longhands.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Edges {
    pub top: Option<String>,
    pub right: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
}

impl Edges {
    pub(crate) fn any(&self) -> bool {
        self.top.is_some() || self.right.is_some() || self.bottom.is_some() || self.left.is_some()
    }

    /// The single shared value when all four edges are present and equal.
    pub(crate) fn uniform(&self) -> Option<&str> {
        match (&self.top, &self.right, &self.bottom, &self.left) {
            (Some(t), Some(r), Some(b), Some(l)) if t == r && r == b && b == l => {
                Some(t.as_str())
            }
            _ => None,
        }
    }
}

/// Expands a shorthand and overlays per-edge longhands on top, so
/// `padding: 8px; padding-left: 0` resolves the way a browser would.
pub(crate) fn merged_edges(
    style: &StyleMap,
    shorthand: CssProperty,
    longhands: [CssProperty; 4],
) -> Edges {
    let mut edges = match style.get(shorthand).and_then(BoxSides::parse) {
        Some(sides) => Edges {
            top: Some(sides.top),
            right: Some(sides.right),
            bottom: Some(sides.bottom),
            left: Some(sides.left),
        },
        None => Edges::default(),
    };
    let [top, right, bottom, left] = longhands;
    if let Some(value) = style.get(top) {
        edges.top = Some(value.to_string());
    }
    if let Some(value) = style.get(right) {
        edges.right = Some(value.to_string());
    }
    if let Some(value) = style.get(bottom) {
        edges.bottom = Some(value.to_string());
    }
    if let Some(value) = style.get(left) {
        edges.left = Some(value.to_string());
    }
    edges
}

/// A parsed `text-shadow: dx dy radius color` declaration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TextShadow {
    pub dx: f64,
    pub dy: f64,
    pub radius: f64,
    pub color: String,
}

/// Parses the 4-part text-shadow form. Other forms (multiple shadows,
/// color-first) do not occur in exported styles and are ignored.
pub(crate) fn parse_text_shadow(value: &str) -> Option<TextShadow> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"^(-?[\d.]+)px\s+(-?[\d.]+)px\s+(-?[\d.]+)px\s+(.+)$").expect("valid pattern")
    });
    let caps = pattern.captures(value.trim())?;
    Some(TextShadow {
        dx: caps[1].parse().ok()?,
        dy: caps[2].parse().ok()?,
        radius: caps[3].parse().ok()?,
        color: caps[4].trim().to_string(),
    })
}

/// A parsed `border: <width>px <style> <color>` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BorderShorthand {
    pub width_px: f64,
    pub color: String,
}

pub(crate) fn parse_border(value: &str) -> Option<BorderShorthand> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"^(-?[\d.]+)px\s+\w+\s+(.+)$").expect("valid pattern")
    });
    let caps = pattern.captures(value.trim())?;
    Some(BorderShorthand {
        width_px: caps[1].parse().ok()?,
        color: caps[2].trim().to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GradientAxis {
    Horizontal,
    Vertical,
}

/// A two-stop reading of a CSS linear gradient: axis plus first and last
/// color, already swapped for reversed directions.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GradientSpec {
    pub axis: GradientAxis,
    pub start: String,
    pub end: String,
}

pub(crate) fn parse_linear_gradient(value: &str) -> Option<GradientSpec> {
    let start_index = value.find("linear-gradient(")?;
    let inner = &value[start_index + "linear-gradient(".len()..];
    let inner = inner.strip_suffix(')').unwrap_or(inner);

    static COLORS: OnceLock<Regex> = OnceLock::new();
    let colors = COLORS.get_or_init(|| {
        Regex::new(r"#[0-9a-fA-F]{3,8}|rgba?\([^)]*\)").expect("valid pattern")
    });
    let stops: Vec<&str> = colors.find_iter(inner).map(|m| m.as_str()).collect();
    let (first, last) = match stops.as_slice() {
        [] => return None,
        [only] => (*only, *only),
        [first, .., last] => (*first, *last),
    };

    // Direction token is the first argument when present; default is top
    // to bottom.
    let head = inner.split(',').next().unwrap_or("").trim().to_lowercase();
    let (axis, reversed) = match head.as_str() {
        "to right" | "90deg" => (GradientAxis::Horizontal, false),
        "to left" | "270deg" => (GradientAxis::Horizontal, true),
        "to top" | "0deg" => (GradientAxis::Vertical, true),
        _ => (GradientAxis::Vertical, false),
    };

    let (start, end) = if reversed { (last, first) } else { (first, last) };
    Some(GradientSpec {
        axis,
        start: start.to_string(),
        end: end.to_string(),
    })
}

/// Whether a CSS transform centers the element on each axis through a
/// `-50%` translate. Returns `(horizontal, vertical)`.
pub(crate) fn translate_centers(transform: &str) -> (bool, bool) {
    static X: OnceLock<Regex> = OnceLock::new();
    static Y: OnceLock<Regex> = OnceLock::new();
    let x = X.get_or_init(|| Regex::new(r"(?i)translatex?\(\s*-50%").expect("valid pattern"));
    let y = Y.get_or_init(|| {
        Regex::new(r"(?i)(translatey\(\s*-50%|translate\([^)]*,\s*-50%)").expect("valid pattern")
    });
    (x.is_match(transform), y.is_match(transform))
}
