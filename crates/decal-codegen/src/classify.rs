//! Widget classification from a style map.
//!
//! Classification is an ordered cascade: each rule either claims the style
//! or passes. Rule order is priority order; a card with `display: flex` is
//! still a card.

use decal_core::{CssProperty, StyleMap};

/// The UI primitive a style map most plausibly represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Vertically scrolling container.
    ScrollColumn,
    /// Horizontally scrolling container.
    ScrollRow,
    /// Elevated card.
    Card,
    /// Image content.
    Image,
    /// Horizontal flex container.
    FlexRow,
    /// Vertical flex container.
    FlexColumn,
    /// Text content.
    Text,
    /// Generic box: sized, painted, or padded, but nothing more specific.
    Plain,
    /// Free-positioned fallback for styles with no signal at all.
    Relative,
}

impl WidgetKind {
    /// Whether the target element wraps child content.
    pub fn is_container(self) -> bool {
        !matches!(self, WidgetKind::Text | WidgetKind::Image)
    }

    /// The unqualified Android widget this kind maps to.
    pub fn base_widget(self) -> &'static str {
        match self {
            WidgetKind::ScrollColumn => "ScrollView",
            WidgetKind::ScrollRow => "HorizontalScrollView",
            WidgetKind::Card => "CardView",
            WidgetKind::Image => "ImageView",
            WidgetKind::FlexRow | WidgetKind::FlexColumn => "LinearLayout",
            WidgetKind::Text => "TextView",
            WidgetKind::Plain => "View",
            WidgetKind::Relative => "RelativeLayout",
        }
    }

    /// The composable this kind maps to. `Relative` folds into `Box`;
    /// Compose has no free-positioning container worth pretending about.
    pub fn composable(self) -> &'static str {
        match self {
            WidgetKind::ScrollColumn | WidgetKind::FlexColumn => "Column",
            WidgetKind::ScrollRow | WidgetKind::FlexRow => "Row",
            WidgetKind::Card => "Card",
            WidgetKind::Image => "Image",
            WidgetKind::Text => "Text",
            WidgetKind::Plain | WidgetKind::Relative => "Box",
        }
    }
}

type Rule = fn(&StyleMap) -> Option<WidgetKind>;

/// The cascade, highest priority first.
const RULES: &[Rule] = &[scroll, shadow, image, flex, text, generic_box];

/// Picks exactly one [`WidgetKind`] for a style map. Never fails; a style
/// with no recognizable signal classifies as [`WidgetKind::Relative`].
pub fn classify(style: &StyleMap) -> WidgetKind {
    RULES
        .iter()
        .find_map(|rule| rule(style))
        .unwrap_or(WidgetKind::Relative)
}

fn is_scrolling(value: Option<&str>) -> bool {
    matches!(value, Some("scroll") | Some("auto"))
}

fn scroll(style: &StyleMap) -> Option<WidgetKind> {
    if is_scrolling(style.get(CssProperty::OverflowY))
        || is_scrolling(style.get(CssProperty::Overflow))
    {
        return Some(WidgetKind::ScrollColumn);
    }
    if is_scrolling(style.get(CssProperty::OverflowX)) {
        return Some(WidgetKind::ScrollRow);
    }
    None
}

fn shadow(style: &StyleMap) -> Option<WidgetKind> {
    match style.get(CssProperty::BoxShadow) {
        Some(value) if value != "none" => Some(WidgetKind::Card),
        _ => None,
    }
}

fn image(style: &StyleMap) -> Option<WidgetKind> {
    let url_background = |prop| {
        style
            .get(prop)
            .is_some_and(|value: &str| value.contains("url("))
    };
    if url_background(CssProperty::BackgroundImage)
        || url_background(CssProperty::Background)
        || style.has(CssProperty::ObjectFit)
    {
        return Some(WidgetKind::Image);
    }
    None
}

fn flex(style: &StyleMap) -> Option<WidgetKind> {
    if style.get(CssProperty::Display) != Some("flex") {
        return None;
    }
    if style.get(CssProperty::FlexDirection) == Some("column") {
        Some(WidgetKind::FlexColumn)
    } else {
        Some(WidgetKind::FlexRow)
    }
}

const TEXT_SIGNALS: &[CssProperty] = &[
    CssProperty::FontFamily,
    CssProperty::FontSize,
    CssProperty::Color,
    CssProperty::TextAlign,
    CssProperty::LineHeight,
    CssProperty::TextOverflow,
];

fn text(style: &StyleMap) -> Option<WidgetKind> {
    if TEXT_SIGNALS.iter().any(|&prop| style.has(prop)) {
        Some(WidgetKind::Text)
    } else {
        None
    }
}

const BOX_SIGNALS: &[CssProperty] = &[
    CssProperty::Width,
    CssProperty::Height,
    CssProperty::Background,
    CssProperty::BackgroundColor,
    CssProperty::Padding,
    CssProperty::Display,
];

fn generic_box(style: &StyleMap) -> Option<WidgetKind> {
    if BOX_SIGNALS.iter().any(|&prop| style.has(prop)) {
        Some(WidgetKind::Plain)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(declarations: &str) -> StyleMap {
        StyleMap::from_declarations(declarations)
    }

    #[test]
    fn scroll_overflow_wins() {
        assert_eq!(
            classify(&style("overflow-y: scroll; display: flex")),
            WidgetKind::ScrollColumn
        );
        assert_eq!(classify(&style("overflow: auto")), WidgetKind::ScrollColumn);
        assert_eq!(
            classify(&style("overflow-x: scroll")),
            WidgetKind::ScrollRow
        );
        assert_eq!(classify(&style("overflow: hidden")), WidgetKind::Relative);
    }

    #[test]
    fn shadow_outranks_flex() {
        let kind = classify(&style(
            "box-shadow: 0px 2px 4px rgba(0,0,0,0.2); display: flex",
        ));
        assert_eq!(kind, WidgetKind::Card);
    }

    #[test]
    fn shadow_none_is_not_a_card() {
        assert_eq!(
            classify(&style("box-shadow: none; display: flex")),
            WidgetKind::FlexRow
        );
    }

    #[test]
    fn url_backgrounds_and_object_fit_are_images() {
        assert_eq!(
            classify(&style("background-image: url(hero.png)")),
            WidgetKind::Image
        );
        assert_eq!(
            classify(&style("background: url(hero.png) no-repeat")),
            WidgetKind::Image
        );
        assert_eq!(classify(&style("object-fit: cover")), WidgetKind::Image);
        // gradients are not images
        assert_eq!(
            classify(&style("background-image: linear-gradient(#fff, #000)")),
            WidgetKind::Relative
        );
    }

    #[test]
    fn flex_direction_selects_axis() {
        assert_eq!(classify(&style("display: flex")), WidgetKind::FlexRow);
        assert_eq!(
            classify(&style("display: flex; flex-direction: column")),
            WidgetKind::FlexColumn
        );
        assert_eq!(
            classify(&style("display: flex; flex-direction: row-reverse")),
            WidgetKind::FlexRow
        );
    }

    #[test]
    fn text_signals() {
        assert_eq!(classify(&style("font-size: 14px")), WidgetKind::Text);
        assert_eq!(classify(&style("color: #333")), WidgetKind::Text);
        assert_eq!(classify(&style("text-align: center")), WidgetKind::Text);
        assert_eq!(classify(&style("line-height: 20px")), WidgetKind::Text);
    }

    #[test]
    fn sized_or_painted_styles_are_plain_boxes() {
        assert_eq!(classify(&style("width: 100px")), WidgetKind::Plain);
        assert_eq!(
            classify(&style("background-color: #eee; padding: 8px")),
            WidgetKind::Plain
        );
        assert_eq!(classify(&style("display: block")), WidgetKind::Plain);
    }

    #[test]
    fn empty_style_falls_back_to_relative() {
        assert_eq!(classify(&StyleMap::new()), WidgetKind::Relative);
    }
}
