//! Flat CSS-like style maps attached to design nodes.
//!
//! Exporters hand us computed styles as plain `property: value` pairs.
//! [`StyleMap`] keeps them in insertion order and exposes typed lookup via
//! [`CssProperty`] so generator code never spells property names as bare
//! strings. Unrecognized keys are retained but never consulted.

use indexmap::IndexMap;

/// The closed set of CSS properties the generators understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssProperty {
    // sizing
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    // box model
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    // layout
    Display,
    FlexDirection,
    JustifyContent,
    AlignItems,
    FlexGrow,
    Overflow,
    OverflowX,
    OverflowY,
    // paint
    Background,
    BackgroundColor,
    BackgroundImage,
    BorderRadius,
    Border,
    BoxShadow,
    Opacity,
    ObjectFit,
    Visibility,
    // text
    Color,
    FontSize,
    FontFamily,
    FontWeight,
    FontStyle,
    TextAlign,
    TextTransform,
    TextOverflow,
    TextDecoration,
    TextShadow,
    LetterSpacing,
    LineHeight,
    WhiteSpace,
    // positioning
    Position,
    Top,
    Right,
    Bottom,
    Left,
    Transform,
}

impl CssProperty {
    /// The CSS spelling of this property.
    pub fn name(self) -> &'static str {
        match self {
            CssProperty::Width => "width",
            CssProperty::Height => "height",
            CssProperty::MinWidth => "min-width",
            CssProperty::MinHeight => "min-height",
            CssProperty::MaxWidth => "max-width",
            CssProperty::MaxHeight => "max-height",
            CssProperty::Padding => "padding",
            CssProperty::PaddingTop => "padding-top",
            CssProperty::PaddingRight => "padding-right",
            CssProperty::PaddingBottom => "padding-bottom",
            CssProperty::PaddingLeft => "padding-left",
            CssProperty::Margin => "margin",
            CssProperty::MarginTop => "margin-top",
            CssProperty::MarginRight => "margin-right",
            CssProperty::MarginBottom => "margin-bottom",
            CssProperty::MarginLeft => "margin-left",
            CssProperty::Display => "display",
            CssProperty::FlexDirection => "flex-direction",
            CssProperty::JustifyContent => "justify-content",
            CssProperty::AlignItems => "align-items",
            CssProperty::FlexGrow => "flex-grow",
            CssProperty::Overflow => "overflow",
            CssProperty::OverflowX => "overflow-x",
            CssProperty::OverflowY => "overflow-y",
            CssProperty::Background => "background",
            CssProperty::BackgroundColor => "background-color",
            CssProperty::BackgroundImage => "background-image",
            CssProperty::BorderRadius => "border-radius",
            CssProperty::Border => "border",
            CssProperty::BoxShadow => "box-shadow",
            CssProperty::Opacity => "opacity",
            CssProperty::ObjectFit => "object-fit",
            CssProperty::Visibility => "visibility",
            CssProperty::Color => "color",
            CssProperty::FontSize => "font-size",
            CssProperty::FontFamily => "font-family",
            CssProperty::FontWeight => "font-weight",
            CssProperty::FontStyle => "font-style",
            CssProperty::TextAlign => "text-align",
            CssProperty::TextTransform => "text-transform",
            CssProperty::TextOverflow => "text-overflow",
            CssProperty::TextDecoration => "text-decoration",
            CssProperty::TextShadow => "text-shadow",
            CssProperty::LetterSpacing => "letter-spacing",
            CssProperty::LineHeight => "line-height",
            CssProperty::WhiteSpace => "white-space",
            CssProperty::Position => "position",
            CssProperty::Top => "top",
            CssProperty::Right => "right",
            CssProperty::Bottom => "bottom",
            CssProperty::Left => "left",
            CssProperty::Transform => "transform",
        }
    }
}

/// Insertion-ordered `property -> value` map.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StyleMap(IndexMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        StyleMap(IndexMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inserts or replaces a declaration.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    /// Typed lookup. A present but blank value behaves as unset, the way
    /// exporters treat empty computed styles; an explicit `"none"` is
    /// preserved so callers can tell it apart from absence.
    pub fn get(&self, property: CssProperty) -> Option<&str> {
        self.raw(property.name())
    }

    /// Lookup by exact key, including properties outside [`CssProperty`].
    pub fn raw(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(value) if !value.trim().is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn has(&self, property: CssProperty) -> bool {
        self.get(property).is_some()
    }

    /// Parses a `prop: value; prop: value` declaration list. Malformed
    /// segments are skipped.
    pub fn from_declarations(declarations: &str) -> Self {
        declarations
            .split(';')
            .filter_map(|segment| {
                let (property, value) = segment.split_once(':')?;
                let property = property.trim();
                let value = value.trim();
                if property.is_empty() || value.is_empty() {
                    return None;
                }
                Some((property, value))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StyleMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
