//! Flat `<shape>` drawable fallback for layers without vector markup.

use std::sync::OnceLock;

use decal_core::{CssProperty, StyleMap};
use decal_style::{format_number, px_of, resolve, to_android, ColorTable, Unit};
use regex::Regex;

const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

/// Synthesizes a rectangle `<shape>` from flat styles: solid fill, corner
/// radius, stroke from the border shorthand, nominal size. `None` when the
/// style carries nothing a shape could express.
pub fn shape_drawable(style: &StyleMap, table: &ColorTable) -> Option<String> {
    let radius = style.get(CssProperty::BorderRadius).filter(|value| *value != "none");
    let border = style.get(CssProperty::Border).and_then(border_parts);
    let fill = fill_color(style);
    if radius.is_none() && border.is_none() && fill.is_none() {
        return None;
    }

    let mut lines = vec![
        format!("<shape xmlns:android=\"{}\"", ANDROID_NS),
        "  android:shape=\"rectangle\">".to_string(),
    ];
    if let Some(color) = fill {
        lines.push(format!(
            "  <solid android:color=\"{}\" />",
            resolve(color, table).to_xml()
        ));
    }
    if let Some(radius) = radius {
        // percentage radii have no fixed-dimension equivalent here
        if !radius.trim_end().ends_with('%') {
            lines.push(format!(
                "  <corners android:radius=\"{}\" />",
                to_android(radius, Unit::Dp)
            ));
        }
    }
    if let Some((width, color)) = border {
        lines.push(format!(
            "  <stroke android:width=\"{}dp\" android:color=\"{}\" />",
            width,
            resolve(&color, table).to_xml()
        ));
    }
    let mut size_attrs = Vec::new();
    if let Some(width) = style.get(CssProperty::Width).and_then(size_dp) {
        size_attrs.push(format!("android:width=\"{}\"", width));
    }
    if let Some(height) = style.get(CssProperty::Height).and_then(size_dp) {
        size_attrs.push(format!("android:height=\"{}\"", height));
    }
    if !size_attrs.is_empty() {
        lines.push(format!("  <size {} />", size_attrs.join(" ")));
    }
    lines.push("</shape>".to_string());
    Some(lines.join("\n"))
}

/// The first style value that can act as a flat fill.
fn fill_color(style: &StyleMap) -> Option<&str> {
    if let Some(color) = style.get(CssProperty::BackgroundColor) {
        return Some(color);
    }
    if let Some(background) = style.get(CssProperty::Background) {
        if decal_style::parse(background).is_some() {
            return Some(background);
        }
    }
    style.raw("fill")
}

/// Width and color out of a `1px solid #ccc` border shorthand.
fn border_parts(border: &str) -> Option<(String, String)> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern =
        PATTERN.get_or_init(|| Regex::new(r"^(-?[\d.]+)px\s+\w+\s+(.+)$").expect("valid pattern"));
    let captures = pattern.captures(border.trim())?;
    let width: f64 = captures[1].parse().ok()?;
    Some((format_number(width), captures[2].trim().to_string()))
}

fn size_dp(value: &str) -> Option<String> {
    let number = px_of(value).or_else(|| value.trim().parse().ok())?;
    Some(format!("{}dp", format_number(number)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(declarations: &str) -> StyleMap {
        StyleMap::from_declarations(declarations)
    }

    #[test]
    fn full_shape_from_styles() {
        let shape = shape_drawable(
            &style("background-color: #ffffff; border-radius: 8px; border: 1px solid #e0e0e0; width: 120px; height: 48px"),
            &ColorTable::builtin(),
        )
        .unwrap();
        assert_eq!(
            shape,
            "<shape xmlns:android=\"http://schemas.android.com/apk/res/android\"\n\
             \x20 android:shape=\"rectangle\">\n\
             \x20 <solid android:color=\"@color/white\" />\n\
             \x20 <corners android:radius=\"8dp\" />\n\
             \x20 <stroke android:width=\"1dp\" android:color=\"@color/gray_200\" />\n\
             \x20 <size android:width=\"120dp\" android:height=\"48dp\" />\n\
             </shape>"
        );
    }

    #[test]
    fn radius_alone_is_enough() {
        let shape = shape_drawable(&style("border-radius: 12px"), &ColorTable::empty()).unwrap();
        assert!(shape.contains("<corners android:radius=\"12dp\" />"));
        assert!(!shape.contains("<solid"));
        assert!(!shape.contains("<size"));
    }

    #[test]
    fn percentage_radius_is_skipped() {
        let shape = shape_drawable(
            &style("border-radius: 50%; background-color: #000"),
            &ColorTable::empty(),
        )
        .unwrap();
        assert!(!shape.contains("<corners"));
        assert!(shape.contains("<solid android:color=\"#FF000000\" />"));
    }

    #[test]
    fn literal_background_shorthand_fills() {
        let shape =
            shape_drawable(&style("background: rgb(255, 0, 0)"), &ColorTable::empty()).unwrap();
        assert!(shape.contains("<solid android:color=\"#FFFF0000\" />"));
    }

    #[test]
    fn url_background_is_not_a_fill() {
        assert_eq!(
            shape_drawable(
                &style("background: url(https://example.com/a.png)"),
                &ColorTable::empty()
            ),
            None
        );
    }

    #[test]
    fn nothing_expressible_returns_none() {
        assert_eq!(
            shape_drawable(&style("font-size: 14px"), &ColorTable::empty()),
            None
        );
        assert_eq!(shape_drawable(&StyleMap::new(), &ColorTable::empty()), None);
    }

    #[test]
    fn percent_sizes_are_omitted() {
        let shape = shape_drawable(
            &style("background-color: #fff; width: 100%; height: auto"),
            &ColorTable::empty(),
        )
        .unwrap();
        assert!(!shape.contains("<size"));
    }
}
