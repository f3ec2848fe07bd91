//! Vector drawable synthesis from parsed svg markup.
//!
//! Output mirrors the Android `VectorDrawable` format: a `<vector>` root
//! carrying viewport and dp dimensions, `<group>` elements for transformed
//! `<g>` groups, and every primitive shape collapsed into a `<path>` with
//! synthesized `android:pathData`. Gradient fills referenced through
//! `url(#id)` resolve against `<defs>` into an `aapt:attr` block.

use std::sync::OnceLock;

use decal_style::{format_number, resolve, ColorTable};
use indexmap::IndexMap;
use regex::Regex;

use crate::error::Result;
use crate::tree::{parse_svg, SvgElement};

const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";
const AAPT_NS: &str = "http://schemas.android.com/aapt";

/// Converts svg markup into vector drawable text.
///
/// Unsupported elements are dropped silently, groups that end up empty are
/// dropped entirely, and colors run through the shared resolution pipeline
/// so table hits come out as `@color/...` references.
pub fn vector_drawable(markup: &str, table: &ColorTable) -> Result<String> {
    let svg = parse_svg(markup)?;
    let (viewport_width, viewport_height) = viewport(&svg);
    let width = dimension(svg.attr("width"), &viewport_width);
    let height = dimension(svg.attr("height"), &viewport_height);

    let mut gradients = IndexMap::new();
    collect_gradients(&svg, false, &mut gradients);

    let body: Vec<String> = svg
        .children
        .iter()
        .filter_map(|child| emit_node(child, 1, &gradients, table))
        .collect();

    let mut lines = vec![
        format!("<vector xmlns:android=\"{}\"", ANDROID_NS),
        format!("  xmlns:aapt=\"{}\"", AAPT_NS),
        format!("  android:width=\"{}\"", width),
        format!("  android:height=\"{}\"", height),
        format!("  android:viewportWidth=\"{}\"", viewport_width),
        format!("  android:viewportHeight=\"{}\">", viewport_height),
    ];
    lines.extend(body);
    lines.push("</vector>".to_string());
    Ok(lines.join("\n"))
}

/// Viewport from the `viewBox`, defaulting to the 24x24 icon grid.
fn viewport(svg: &SvgElement) -> (String, String) {
    if let Some(view_box) = svg.attr("viewBox") {
        let parts: Vec<&str> = view_box
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();
        if let [_, _, width, height] = parts.as_slice() {
            return (width.to_string(), height.to_string());
        }
    }
    ("24.0".to_string(), "24.0".to_string())
}

/// Outer dimension in dp: explicit width/height attributes are preferred
/// (svg's default unit is px, so bare numbers convert too), falling back to
/// the viewport extent.
fn dimension(attr: Option<&str>, viewport: &str) -> String {
    let value = match attr {
        Some(value) => value.trim().to_string(),
        None => viewport.to_string(),
    };
    if let Some(px) = value.strip_suffix("px") {
        if let Ok(parsed) = px.trim().parse::<f64>() {
            return format!("{}dp", format_number(parsed));
        }
    }
    if let Ok(parsed) = value.parse::<f64>() {
        return format!("{}dp", format_number(parsed));
    }
    value
}

fn is_gradient(element: &SvgElement) -> bool {
    element.name.eq_ignore_ascii_case("linearGradient")
        || element.name.eq_ignore_ascii_case("radialGradient")
}

/// Indexes gradient definitions under `<defs>` by id. First definition of
/// an id wins.
fn collect_gradients<'a>(
    element: &'a SvgElement,
    inside_defs: bool,
    gradients: &mut IndexMap<String, &'a SvgElement>,
) {
    if inside_defs && is_gradient(element) {
        if let Some(id) = element.attr("id") {
            gradients.entry(id.to_string()).or_insert(element);
        }
    }
    let nested = inside_defs || element.name.eq_ignore_ascii_case("defs");
    for child in &element.children {
        collect_gradients(child, nested, gradients);
    }
}

fn emit_node(
    element: &SvgElement,
    indent: usize,
    gradients: &IndexMap<String, &SvgElement>,
    table: &ColorTable,
) -> Option<String> {
    let name = element.name.to_ascii_lowercase();
    if name == "g" {
        return emit_group(element, indent, gradients, table);
    }
    if matches!(
        name.as_str(),
        "path" | "rect" | "circle" | "ellipse" | "line" | "polyline" | "polygon"
    ) {
        return emit_shape(element, &name, indent, gradients, table);
    }
    None
}

fn translate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"translate\(\s*([^,\s)]+)[\s,]+([^\s,)]+)\s*\)").expect("valid pattern")
    })
}

fn scale_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"scale\(\s*([^,\s)]+)(?:[\s,]+([^\s,)]+))?\s*\)").expect("valid pattern")
    })
}

fn rotate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"rotate\(\s*(-?[\d.]+)").expect("valid pattern"))
}

fn emit_group(
    element: &SvgElement,
    indent: usize,
    gradients: &IndexMap<String, &SvgElement>,
    table: &ColorTable,
) -> Option<String> {
    let spaces = "  ".repeat(indent);
    let mut attrs = Vec::new();
    if let Some(transform) = element.attr("transform") {
        if let Some(captures) = translate_pattern().captures(transform) {
            attrs.push(format!("android:translateX=\"{}\"", captures[1].trim()));
            attrs.push(format!("android:translateY=\"{}\"", captures[2].trim()));
        }
        if let Some(captures) = scale_pattern().captures(transform) {
            let x = captures[1].trim().to_string();
            let y = captures
                .get(2)
                .map(|factor| factor.as_str().trim().to_string())
                .unwrap_or_else(|| x.clone());
            attrs.push(format!("android:scaleX=\"{}\"", x));
            attrs.push(format!("android:scaleY=\"{}\"", y));
        }
        if let Some(captures) = rotate_pattern().captures(transform) {
            attrs.push(format!("android:rotation=\"{}\"", captures[1].trim()));
        }
    }

    let children: Vec<String> = element
        .children
        .iter()
        .filter_map(|child| emit_node(child, indent + 1, gradients, table))
        .collect();
    if children.is_empty() {
        return None;
    }

    let mut lines = Vec::new();
    if attrs.is_empty() {
        lines.push(format!("{}<group>", spaces));
    } else {
        lines.push(format!("{}<group", spaces));
        for attr in &attrs {
            lines.push(format!("{}  {}", spaces, attr));
        }
        if let Some(last) = lines.last_mut() {
            last.push('>');
        }
    }
    lines.extend(children);
    lines.push(format!("{}</group>", spaces));
    Some(lines.join("\n"))
}

fn emit_shape(
    element: &SvgElement,
    name: &str,
    indent: usize,
    gradients: &IndexMap<String, &SvgElement>,
    table: &ColorTable,
) -> Option<String> {
    let spaces = "  ".repeat(indent);
    let path_data = path_data_for(element, name)?;
    let mut attrs = vec![format!("android:pathData=\"{}\"", path_data)];

    let fill = element.attr("fill");
    let mut gradient_block = None;
    match fill {
        Some("none") => {}
        Some(value) if value.starts_with("url(#") => {
            let id = value.trim_start_matches("url(#").trim_end_matches(')');
            match gradients.get(id) {
                Some(definition) => {
                    gradient_block = Some(emit_gradient(definition, indent + 1, table));
                }
                // path still emits, just without a resolved fill
                None => log::debug!("gradient reference #{} not found in defs", id),
            }
        }
        Some(value) => attrs.push(format!(
            "android:fillColor=\"{}\"",
            resolve(value, table).to_xml()
        )),
        None if name != "line" => attrs.push("android:fillColor=\"#FF000000\"".to_string()),
        None => {}
    }

    if let Some(stroke) = element.attr("stroke").filter(|value| *value != "none") {
        attrs.push(format!(
            "android:strokeColor=\"{}\"",
            resolve(stroke, table).to_xml()
        ));
        attrs.push(format!(
            "android:strokeWidth=\"{}\"",
            element.attr("stroke-width").unwrap_or("1")
        ));
        if let Some(cap) = element.attr("stroke-linecap") {
            attrs.push(format!("android:strokeLineCap=\"{}\"", cap));
        }
        if let Some(join) = element.attr("stroke-linejoin") {
            attrs.push(format!("android:strokeLineJoin=\"{}\"", join));
        }
    }
    if let Some(opacity) = element.attr("fill-opacity") {
        attrs.push(format!("android:fillAlpha=\"{}\"", opacity));
    }
    if let Some(opacity) = element.attr("stroke-opacity") {
        attrs.push(format!("android:strokeAlpha=\"{}\"", opacity));
    }

    let attr_lines: Vec<String> = attrs
        .iter()
        .map(|attr| format!("{}  {}", spaces, attr))
        .collect();
    match gradient_block {
        Some(gradient) => Some(format!(
            "{}<path\n{}>\n{}\n{}</path>",
            spaces,
            attr_lines.join("\n"),
            gradient,
            spaces
        )),
        None => Some(format!(
            "{}<path\n{}\n{}/>",
            spaces,
            attr_lines.join("\n"),
            spaces
        )),
    }
}

/// Path data for a primitive: raw `d` for paths, synthesized commands for
/// everything else. `None` drops the element.
fn path_data_for(element: &SvgElement, name: &str) -> Option<String> {
    let data = match name {
        "path" => element.attr("d")?.to_string(),
        "rect" => {
            let x = element.attr_or_zero("x");
            let y = element.attr_or_zero("y");
            let width = element.attr_or_zero("width");
            let height = element.attr_or_zero("height");
            format!(
                "M {},{} h {} v {} h -{} z",
                format_number(x),
                format_number(y),
                format_number(width),
                format_number(height),
                format_number(width)
            )
        }
        "circle" => {
            let radius = element.attr_or_zero("r");
            arcs(
                element.attr_or_zero("cx"),
                element.attr_or_zero("cy"),
                radius,
                radius,
            )
        }
        "ellipse" => arcs(
            element.attr_or_zero("cx"),
            element.attr_or_zero("cy"),
            element.attr_or_zero("rx"),
            element.attr_or_zero("ry"),
        ),
        "line" => format!(
            "M {},{} L {},{}",
            element.attr("x1").unwrap_or("0"),
            element.attr("y1").unwrap_or("0"),
            element.attr("x2").unwrap_or("0"),
            element.attr("y2").unwrap_or("0"),
        ),
        "polyline" | "polygon" => polygon_path(element.attr("points")?, name == "polygon")?,
        _ => return None,
    };
    if data.is_empty() {
        None
    } else {
        Some(data)
    }
}

/// A full circle or ellipse as two arc commands.
fn arcs(cx: f64, cy: f64, rx: f64, ry: f64) -> String {
    format!(
        "M {},{} a {},{} 0 1,0 {},0 a {},{} 0 1,0 -{},0",
        format_number(cx - rx),
        format_number(cy),
        format_number(rx),
        format_number(ry),
        format_number(rx * 2.0),
        format_number(rx),
        format_number(ry),
        format_number(rx * 2.0),
    )
}

fn polygon_path(points: &str, close: bool) -> Option<String> {
    let numbers: Vec<&str> = points
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    if numbers.len() < 4 {
        return None;
    }
    let mut data = String::new();
    for (index, pair) in numbers.chunks_exact(2).enumerate() {
        if index > 0 {
            data.push_str(" L ");
        } else {
            data.push_str("M ");
        }
        data.push_str(pair[0]);
        data.push(',');
        data.push_str(pair[1]);
    }
    if close {
        data.push_str(" z");
    }
    Some(data)
}

/// Gradient definition as a nested `aapt:attr` fill block.
fn emit_gradient(definition: &SvgElement, indent: usize, table: &ColorTable) -> String {
    let spaces = "  ".repeat(indent);
    let kind = if definition.name.eq_ignore_ascii_case("linearGradient") {
        "linear"
    } else {
        "radial"
    };
    let items: Vec<String> = definition
        .children
        .iter()
        .filter(|child| child.name.eq_ignore_ascii_case("stop"))
        .map(|stop| {
            let offset = stop.attr("offset").unwrap_or("0");
            let color = resolve(stop.attr("stop-color").unwrap_or("#000000"), table).to_xml();
            format!(
                "{}  <item android:offset=\"{}\" android:color=\"{}\" />",
                spaces, offset, color
            )
        })
        .collect();

    let mut lines = vec![
        format!("{}<aapt:attr name=\"android:fillColor\">", spaces),
        format!("{}  <gradient", spaces),
        format!("{}    android:type=\"{}\"", spaces, kind),
        format!(
            "{}    android:startX=\"{}\"",
            spaces,
            definition.attr("x1").unwrap_or("0")
        ),
        format!(
            "{}    android:startY=\"{}\"",
            spaces,
            definition.attr("y1").unwrap_or("0")
        ),
        format!(
            "{}    android:endX=\"{}\"",
            spaces,
            definition.attr("x2").unwrap_or("0")
        ),
        format!(
            "{}    android:endY=\"{}\">",
            spaces,
            definition.attr("y2").unwrap_or("0")
        ),
    ];
    lines.extend(items);
    lines.push(format!("{}  </gradient>", spaces));
    lines.push(format!("{}</aapt:attr>", spaces));
    lines.join("\n")
}
