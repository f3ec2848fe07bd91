//! Android layout XML generation.

use decal_core::{CssProperty, DesignNode, LayoutMode, StyleMap};
use decal_style::{
    format_number, px_of, resolve, sanitize_resource_name, to_android, var_token, ColorTable, Unit,
};
use indexmap::IndexMap;

use crate::attr::{merged_edges, parse_text_shadow, translate_centers, AttributeSet};
use crate::classify::{classify, WidgetKind};
use crate::generators::{
    empty_children_advisory, unsupported_advisory, walk_tree, CodeGenerator, Notation, TreeWriter,
};
use crate::id::{IdSource, RandomIds};

const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";
const APP_NS: &str = "http://schemas.android.com/apk/res-auto";

/// Base widget to concrete class mapping.
///
/// Defaults to the platform classes; a project using its own widgets can
/// remap, e.g. `TextView` to `com.example.ScaleTextView`. Unmapped names
/// fall through unchanged.
#[derive(Debug, Clone)]
pub struct WidgetMap {
    entries: IndexMap<String, String>,
}

impl WidgetMap {
    pub fn platform() -> WidgetMap {
        const DEFAULTS: &[(&str, &str)] = &[
            ("TextView", "TextView"),
            ("ImageView", "ImageView"),
            ("View", "View"),
            ("LinearLayout", "LinearLayout"),
            ("FrameLayout", "FrameLayout"),
            ("RelativeLayout", "RelativeLayout"),
            ("ScrollView", "ScrollView"),
            ("HorizontalScrollView", "HorizontalScrollView"),
            ("CardView", "androidx.cardview.widget.CardView"),
        ];
        let entries = DEFAULTS
            .iter()
            .map(|&(base, class)| (base.to_string(), class.to_string()))
            .collect();
        WidgetMap { entries }
    }

    /// Remaps one base widget to a concrete class.
    pub fn with_class(mut self, base: impl Into<String>, class: impl Into<String>) -> WidgetMap {
        self.entries.insert(base.into(), class.into());
        self
    }

    pub fn class_for<'a>(&'a self, base: &'a str) -> &'a str {
        self.entries.get(base).map(String::as_str).unwrap_or(base)
    }
}

impl Default for WidgetMap {
    fn default() -> WidgetMap {
        WidgetMap::platform()
    }
}

/// Generates Android layout XML.
pub struct XmlGenerator<I = RandomIds> {
    table: ColorTable,
    widgets: WidgetMap,
    ids: I,
}

impl XmlGenerator<RandomIds> {
    pub fn new() -> XmlGenerator<RandomIds> {
        XmlGenerator::with_ids(RandomIds)
    }
}

impl Default for XmlGenerator<RandomIds> {
    fn default() -> Self {
        XmlGenerator::new()
    }
}

impl<I: IdSource> XmlGenerator<I> {
    /// Builds a generator around an injected ID source. Tests pass a
    /// sequential stub here.
    pub fn with_ids(ids: I) -> XmlGenerator<I> {
        XmlGenerator {
            table: ColorTable::builtin(),
            widgets: WidgetMap::platform(),
            ids,
        }
    }

    pub fn with_table(mut self, table: ColorTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_widgets(mut self, widgets: WidgetMap) -> Self {
        self.widgets = widgets;
        self
    }

    fn style_attributes(&self, kind: WidgetKind, style: &StyleMap) -> AttributeSet {
        let mut attrs = AttributeSet::new();
        sizing(&mut attrs, style);
        match kind {
            WidgetKind::FlexColumn => attrs.set("android:orientation", "vertical"),
            WidgetKind::FlexRow => attrs.set("android:orientation", "horizontal"),
            _ => {}
        }
        background(&mut attrs, kind, style, &self.table);
        corner_radius(&mut attrs, kind, style);
        if kind == WidgetKind::Card {
            attrs.set("app:cardElevation", "4dp");
        }
        match kind {
            WidgetKind::Text => text_attributes(&mut attrs, style, &self.table),
            WidgetKind::Image => image_attributes(&mut attrs, style),
            _ => {}
        }
        box_model(&mut attrs, style);
        if let Some(opacity) = style.get(CssProperty::Opacity) {
            attrs.set("android:alpha", opacity);
        }
        if kind.is_container() {
            container_gravity(&mut attrs, kind, style);
        }
        absolute_position(&mut attrs, style);
        attrs
    }

    fn assemble_tag(&mut self, kind: WidgetKind, mut attrs: AttributeSet) -> String {
        let class = self.widgets.class_for(kind.base_widget()).to_string();
        if kind == WidgetKind::Text {
            attrs.set_if_absent("android:text", "@string/some_text");
            attrs.set("android:id", "@+id/some_id");
        } else {
            attrs.set("android:id", format!("@+id/view_{}", self.ids.next_suffix()));
        }
        attrs.set("xmlns:android", ANDROID_NS);
        if class.contains("CardView") {
            attrs.set("xmlns:app", APP_NS);
        }
        let mut lines = vec![format!("<{}", class)];
        for (name, value) in attrs.into_sorted() {
            lines.push(format!("  {}=\"{}\"", name, value));
        }
        lines.push("/>".to_string());
        lines.join("\n")
    }

    fn container_tag(&self, mode: LayoutMode) -> &str {
        let base = match mode {
            LayoutMode::None => "FrameLayout",
            LayoutMode::Horizontal | LayoutMode::Vertical => "LinearLayout",
        };
        self.widgets.class_for(base)
    }
}

impl<I: IdSource> CodeGenerator for XmlGenerator<I> {
    fn notation(&self) -> Notation {
        Notation::Xml
    }

    fn generate_style(&mut self, style: &StyleMap) -> String {
        let kind = classify(style);
        let attrs = self.style_attributes(kind, style);
        self.assemble_tag(kind, attrs)
    }

    fn generate_tree(&mut self, node: &DesignNode) -> String {
        walk_tree(self, node)
    }
}

impl<I: IdSource> TreeWriter for XmlGenerator<I> {
    fn indent_unit(&self) -> &'static str {
        "  "
    }

    fn text_leaf(&mut self, node: &DesignNode) -> Vec<String> {
        let text = node.characters.as_deref().unwrap_or("");
        vec![
            format!("<{}", self.widgets.class_for("TextView")),
            "  android:layout_width=\"wrap_content\"".to_string(),
            "  android:layout_height=\"wrap_content\"".to_string(),
            format!("  android:text=\"{}\"", escape_xml(text)),
            "/>".to_string(),
        ]
    }

    fn unknown_node(&mut self, node: &DesignNode) -> Vec<String> {
        log::debug!("no layout mapping for node kind of {:?}", node.name);
        vec![format!("<!-- {} -->", unsupported_advisory(&node.name))]
    }

    fn instance_annotation(&mut self, node: &DesignNode) -> Vec<String> {
        vec![format!("<!-- Component: {} -->", node.name)]
    }

    fn instance_replacement(&mut self, _node: &DesignNode) -> Option<Vec<String>> {
        None
    }

    fn empty_container(&mut self, node: &DesignNode) -> Vec<String> {
        vec![format!("<!-- {} -->", empty_children_advisory(&node.name))]
    }

    fn container_open(&mut self, node: &DesignNode, is_root: bool) -> Vec<String> {
        let tag = self.container_tag(node.layout_mode).to_string();
        let mut attrs = AttributeSet::new();
        if is_root {
            attrs.set("xmlns:android", ANDROID_NS);
        }
        let size = if is_root { "match_parent" } else { "wrap_content" };
        attrs.set("android:layout_width", size);
        attrs.set("android:layout_height", size);
        match node.layout_mode {
            LayoutMode::Vertical => attrs.set("android:orientation", "vertical"),
            LayoutMode::Horizontal => attrs.set("android:orientation", "horizontal"),
            LayoutMode::None => {}
        }
        if let Some(color) = node.background_color() {
            attrs.set("android:background", resolve(color, &self.table).to_xml());
        }
        if node.style.has(CssProperty::BorderRadius) {
            attrs.set("android:clipToOutline", "true");
            attrs.set_if_absent("android:background", "@drawable/bg_rounded");
        }
        let mut lines = vec![format!("<{}", tag)];
        for (name, value) in attrs.into_sorted() {
            lines.push(format!("  {}=\"{}\"", name, value));
        }
        lines.push(">".to_string());
        lines
    }

    fn container_close(&mut self, node: &DesignNode, _is_root: bool) -> Vec<String> {
        vec![format!("</{}>", self.container_tag(node.layout_mode))]
    }
}

fn android_size(value: &str) -> String {
    match value {
        "100%" => "match_parent".to_string(),
        "auto" => "wrap_content".to_string(),
        _ => to_android(value, Unit::Dp),
    }
}

fn sizing(attrs: &mut AttributeSet, style: &StyleMap) {
    let width = style
        .get(CssProperty::Width)
        .map(android_size)
        .unwrap_or_else(|| "wrap_content".to_string());
    let height = style
        .get(CssProperty::Height)
        .map(android_size)
        .unwrap_or_else(|| "wrap_content".to_string());
    attrs.set("android:layout_width", width);
    attrs.set("android:layout_height", height);
    if let Some(value) = style.get(CssProperty::MinWidth) {
        attrs.set("android:minWidth", android_size(value));
    }
    if let Some(value) = style.get(CssProperty::MinHeight) {
        attrs.set("android:minHeight", android_size(value));
    }
    if let Some(value) = style.get(CssProperty::MaxWidth) {
        attrs.set("android:maxWidth", android_size(value));
    }
    if let Some(value) = style.get(CssProperty::MaxHeight) {
        attrs.set("android:maxHeight", android_size(value));
    }
}

fn background(attrs: &mut AttributeSet, kind: WidgetKind, style: &StyleMap, table: &ColorTable) {
    let attr_name = if kind == WidgetKind::Card {
        "app:cardBackgroundColor"
    } else {
        "android:background"
    };
    if let Some(color) = style.get(CssProperty::BackgroundColor) {
        attrs.set(attr_name, resolve(color, table).to_xml());
        return;
    }
    let Some(value) = style.get(CssProperty::Background) else {
        return;
    };
    if value.contains("url(") {
        // raster backgrounds belong to the drawable pipeline
        return;
    }
    if let Some(token) = var_token(value) {
        let name = sanitize_resource_name(token);
        let reference = if name.is_empty() {
            "@drawable/bg_placeholder".to_string()
        } else {
            format!("@drawable/{}", name)
        };
        attrs.set("android:background", reference);
        return;
    }
    if decal_style::parse(value).is_some() {
        attrs.set(attr_name, resolve(value, table).to_xml());
    }
}

fn corner_radius(attrs: &mut AttributeSet, kind: WidgetKind, style: &StyleMap) {
    let Some(radius) = style.get(CssProperty::BorderRadius) else {
        return;
    };
    if kind == WidgetKind::Card {
        attrs.set("app:cardCornerRadius", to_android(radius, Unit::Dp));
    } else {
        attrs.set("android:clipToOutline", "true");
        attrs.set_if_absent("android:background", "@drawable/bg_rounded");
    }
}

fn text_attributes(attrs: &mut AttributeSet, style: &StyleMap, table: &ColorTable) {
    if let Some(color) = style.get(CssProperty::Color) {
        attrs.set("android:textColor", resolve(color, table).to_xml());
    }
    if let Some(size) = style.get(CssProperty::FontSize) {
        attrs.set("android:textSize", to_android(size, Unit::Sp));
    }
    let bold = style.get(CssProperty::FontWeight).is_some_and(is_bold);
    let italic = style.get(CssProperty::FontStyle) == Some("italic");
    match (bold, italic) {
        (true, true) => attrs.set("android:textStyle", "bold|italic"),
        (true, false) => attrs.set("android:textStyle", "bold"),
        (false, true) => attrs.set("android:textStyle", "italic"),
        (false, false) => {}
    }
    if style.get(CssProperty::TextTransform) == Some("uppercase") {
        attrs.set("android:textAllCaps", "true");
    }
    if let Some(spacing) = letter_spacing_em(style) {
        attrs.set("android:letterSpacing", spacing);
    }
    if let Some(align) = style.get(CssProperty::TextAlign) {
        let gravity = match align {
            "center" => Some("center"),
            "right" | "end" => Some("end"),
            "left" | "start" => Some("start"),
            _ => None,
        };
        if let Some(gravity) = gravity {
            attrs.set("android:gravity", gravity);
        }
    }
    if let Some(value) = style.get(CssProperty::TextShadow) {
        if let Some(shadow) = parse_text_shadow(value) {
            attrs.set("android:shadowDx", format_number(shadow.dx));
            attrs.set("android:shadowDy", format_number(shadow.dy));
            attrs.set("android:shadowRadius", format_number(shadow.radius));
            attrs.set("android:shadowColor", resolve(&shadow.color, table).to_xml());
        }
    }
    if let Some(family) = style.get(CssProperty::FontFamily) {
        attrs.set("android:fontFamily", font_bucket(family));
    }
    if let (Some(line_height), Some(font_size)) = (
        style.get(CssProperty::LineHeight).and_then(px_of),
        style.get(CssProperty::FontSize).and_then(px_of),
    ) {
        let extra = line_height - font_size;
        if extra > 0.0 {
            attrs.set("android:lineSpacingExtra", format!("{}sp", format_number(extra)));
            // re-center: extra leading goes below the line, nudge up by half
            attrs.set(
                "android:translationY",
                format!("-{}sp", format_number(extra / 2.0)),
            );
        }
    }
    if style.get(CssProperty::TextOverflow) == Some("ellipsis")
        && style.get(CssProperty::WhiteSpace) == Some("nowrap")
    {
        attrs.set("android:ellipsize", "end");
        attrs.set("android:maxLines", "1");
    }
}

/// Android letter spacing is in ems: em values pass through numerically, px
/// values divide by the font size when both are px.
fn letter_spacing_em(style: &StyleMap) -> Option<String> {
    let spacing = style.get(CssProperty::LetterSpacing)?;
    if let Some(em) = spacing.trim().strip_suffix("em") {
        let value: f64 = em.trim().parse().ok()?;
        return Some(format_number(value));
    }
    let px = px_of(spacing)?;
    let font_size = style.get(CssProperty::FontSize).and_then(px_of)?;
    if font_size == 0.0 {
        return None;
    }
    Some(format_number(px / font_size))
}

fn is_bold(value: &str) -> bool {
    value == "bold" || value.parse::<f64>().is_ok_and(|weight| weight >= 700.0)
}

fn font_bucket(family: &str) -> &'static str {
    let family = family.to_lowercase();
    if family.contains("mono") {
        "monospace"
    } else if family.contains("serif") && !family.contains("sans") {
        "serif"
    } else {
        "sans-serif"
    }
}

fn image_attributes(attrs: &mut AttributeSet, style: &StyleMap) {
    attrs.set("android:src", "@drawable/placeholder");
    let scale_type = match style.get(CssProperty::ObjectFit) {
        Some("cover") => Some("centerCrop"),
        Some("contain") => Some("centerInside"),
        _ => None,
    };
    if let Some(scale_type) = scale_type {
        attrs.set("android:scaleType", scale_type);
    }
}

fn box_model(attrs: &mut AttributeSet, style: &StyleMap) {
    emit_edges(
        attrs,
        style,
        CssProperty::Padding,
        [
            CssProperty::PaddingTop,
            CssProperty::PaddingRight,
            CssProperty::PaddingBottom,
            CssProperty::PaddingLeft,
        ],
        "android:padding",
        [
            "android:paddingTop",
            "android:paddingRight",
            "android:paddingBottom",
            "android:paddingLeft",
        ],
    );
    emit_edges(
        attrs,
        style,
        CssProperty::Margin,
        [
            CssProperty::MarginTop,
            CssProperty::MarginRight,
            CssProperty::MarginBottom,
            CssProperty::MarginLeft,
        ],
        "android:layout_margin",
        [
            "android:layout_marginTop",
            "android:layout_marginRight",
            "android:layout_marginBottom",
            "android:layout_marginLeft",
        ],
    );
}

fn emit_edges(
    attrs: &mut AttributeSet,
    style: &StyleMap,
    shorthand: CssProperty,
    longhands: [CssProperty; 4],
    uniform_attr: &str,
    edge_attrs: [&str; 4],
) {
    let edges = merged_edges(style, shorthand, longhands);
    if !edges.any() {
        return;
    }
    if let Some(value) = edges.uniform() {
        attrs.set(uniform_attr, to_android(value, Unit::Dp));
        return;
    }
    let values = [&edges.top, &edges.right, &edges.bottom, &edges.left];
    for (name, value) in edge_attrs.iter().zip(values) {
        if let Some(value) = value {
            attrs.set(*name, to_android(value, Unit::Dp));
        }
    }
}

fn container_gravity(attrs: &mut AttributeSet, kind: WidgetKind, style: &StyleMap) {
    let justify_center = style.get(CssProperty::JustifyContent) == Some("center");
    let align_center = style.get(CssProperty::AlignItems) == Some("center");
    if !justify_center && !align_center {
        return;
    }
    // main axis follows orientation: a column's justify-content is vertical
    let (center_vertical, center_horizontal) = if kind == WidgetKind::FlexColumn {
        (justify_center, align_center)
    } else {
        (align_center, justify_center)
    };
    let gravity = match (center_horizontal, center_vertical) {
        (true, true) => "center",
        (true, false) => "center_horizontal",
        (false, true) => "center_vertical",
        (false, false) => return,
    };
    attrs.set("android:gravity", gravity);
}

fn absolute_position(attrs: &mut AttributeSet, style: &StyleMap) {
    let top = style.get(CssProperty::Top);
    let bottom = style.get(CssProperty::Bottom);
    let left = style.get(CssProperty::Left);
    let right = style.get(CssProperty::Right);
    let positioned = style.get(CssProperty::Position) == Some("absolute")
        || top.is_some()
        || bottom.is_some()
        || left.is_some()
        || right.is_some();
    if !positioned {
        return;
    }
    let transform = style.get(CssProperty::Transform).unwrap_or("");
    let (center_x, center_y) = translate_centers(transform);
    position_axis(
        attrs,
        left,
        right,
        center_x,
        "android:layout_centerHorizontal",
        ("android:layout_alignParentLeft", "android:layout_marginLeft"),
        ("android:layout_alignParentRight", "android:layout_marginRight"),
    );
    position_axis(
        attrs,
        top,
        bottom,
        center_y,
        "android:layout_centerVertical",
        ("android:layout_alignParentTop", "android:layout_marginTop"),
        ("android:layout_alignParentBottom", "android:layout_marginBottom"),
    );
}

/// Offsets within this distance of each other read as "centered".
const CENTER_TOLERANCE: f64 = 5.0;

fn position_axis(
    attrs: &mut AttributeSet,
    start: Option<&str>,
    end: Option<&str>,
    translate_centered: bool,
    center_attr: &str,
    start_attrs: (&str, &str),
    end_attrs: (&str, &str),
) {
    // the 50% + translate(-50%) centering idiom
    if start == Some("50%") && translate_centered {
        attrs.set(center_attr, "true");
        return;
    }
    let start_px = start.and_then(offset_px);
    let end_px = end.and_then(offset_px);
    match (start_px, end_px) {
        (Some(a), Some(b)) if (a - b).abs() <= CENTER_TOLERANCE => {
            attrs.set(center_attr, "true");
        }
        (Some(a), Some(b)) => {
            // smaller offset wins the axis
            if a <= b {
                pin_edge(attrs, start_attrs, start);
            } else {
                pin_edge(attrs, end_attrs, end);
            }
        }
        (Some(_), None) => pin_edge(attrs, start_attrs, start),
        (None, Some(_)) => pin_edge(attrs, end_attrs, end),
        (None, None) => {}
    }
}

fn pin_edge(attrs: &mut AttributeSet, (align_attr, margin_attr): (&str, &str), value: Option<&str>) {
    attrs.set(align_attr, "true");
    if let Some(value) = value {
        attrs.set(margin_attr, to_android(value, Unit::Dp));
    }
}

fn offset_px(value: &str) -> Option<f64> {
    px_of(value).or_else(|| value.trim().parse().ok())
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
