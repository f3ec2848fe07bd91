//! Jetpack Compose builder-code generation.

use convert_case::{Case, Casing};
use decal_core::{CssProperty, DesignNode, LayoutMode, StyleMap};
use decal_style::{
    format_number, px_of, resolve, sanitize_resource_name, to_compose, var_token, ColorTable, Unit,
};

use crate::attr::{
    merged_edges, parse_border, parse_linear_gradient, parse_text_shadow, Edges, GradientAxis,
};
use crate::classify::{classify, WidgetKind};
use crate::generators::{
    empty_children_advisory, unsupported_advisory, walk_tree, CodeGenerator, Notation, TreeWriter,
};

/// Generates Jetpack Compose builder code.
///
/// Compose output carries no generated resource IDs, so unlike the XML
/// generator there is no ID source to inject.
pub struct ComposeGenerator {
    table: ColorTable,
}

impl ComposeGenerator {
    pub fn new() -> ComposeGenerator {
        ComposeGenerator {
            table: ColorTable::builtin(),
        }
    }

    pub fn with_table(mut self, table: ColorTable) -> Self {
        self.table = table;
        self
    }

    /// Wraps a subtree in a `@Composable fun` shell named after the node.
    pub fn compose_component(&mut self, node: &DesignNode) -> String {
        let name = composable_ident(&node.name).unwrap_or_else(|| "Component".to_string());
        let body = self.generate_tree(node);
        let mut lines = vec!["@Composable".to_string(), format!("fun {}() {{", name)];
        for line in body.lines() {
            if line.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("    {}", line));
            }
        }
        lines.push("}".to_string());
        lines.join("\n")
    }

    fn modifier_chain(&self, kind: WidgetKind, style: &StyleMap) -> Vec<String> {
        let mut chain = Vec::new();
        match style.get(CssProperty::Width) {
            Some("100%") => chain.push(".fillMaxWidth()".to_string()),
            Some("auto") => chain.push(".wrapContentWidth()".to_string()),
            Some(value) => push_dimension(&mut chain, "width", value),
            None => {}
        }
        match style.get(CssProperty::Height) {
            Some("100%") => chain.push(".fillMaxHeight()".to_string()),
            Some("auto") => chain.push(".wrapContentHeight()".to_string()),
            Some(value) => push_dimension(&mut chain, "height", value),
            None => {}
        }
        if let Some(grow) = style.get(CssProperty::FlexGrow) {
            if let Ok(weight) = grow.parse::<f64>() {
                if weight > 0.0 {
                    chain.push(format!(".weight({}f)", format_number(weight)));
                }
            }
        }
        // margin becomes outer padding, applied before any background
        push_padding(
            &mut chain,
            merged_edges(
                style,
                CssProperty::Margin,
                [
                    CssProperty::MarginTop,
                    CssProperty::MarginRight,
                    CssProperty::MarginBottom,
                    CssProperty::MarginLeft,
                ],
            ),
        );
        let shape = shape_expression(style);
        if let Some(shape) = &shape {
            chain.push(format!(".clip({})", shape));
        }
        self.background_modifier(&mut chain, style);
        if style.get(CssProperty::Display) == Some("none") {
            chain.push(".size(0.dp)".to_string());
        }
        if style.get(CssProperty::Visibility) == Some("hidden") {
            chain.push(".alpha(0f)".to_string());
        }
        if let Some(opacity) = style.get(CssProperty::Opacity) {
            if let Ok(alpha) = opacity.parse::<f64>() {
                chain.push(format!(".alpha({}f)", format_number(alpha)));
            }
        }
        if let Some(border) = style.get(CssProperty::Border).and_then(parse_border) {
            let shape = shape.as_deref().unwrap_or("RectangleShape");
            chain.push(format!(
                ".border({}.dp, {}, {})",
                format_number(border.width_px),
                self.color_expr(&border.color),
                shape,
            ));
        }
        push_padding(
            &mut chain,
            merged_edges(
                style,
                CssProperty::Padding,
                [
                    CssProperty::PaddingTop,
                    CssProperty::PaddingRight,
                    CssProperty::PaddingBottom,
                    CssProperty::PaddingLeft,
                ],
            ),
        );
        match kind {
            WidgetKind::ScrollColumn => {
                chain.push(".verticalScroll(rememberScrollState())".to_string());
            }
            WidgetKind::ScrollRow => {
                chain.push(".horizontalScroll(rememberScrollState())".to_string());
            }
            _ => {}
        }
        chain
    }

    fn background_modifier(&self, chain: &mut Vec<String>, style: &StyleMap) {
        let background = style.get(CssProperty::Background);
        let gradient = style
            .get(CssProperty::BackgroundImage)
            .and_then(parse_linear_gradient)
            .or_else(|| background.and_then(parse_linear_gradient));
        if let Some(gradient) = gradient {
            let brush = match gradient.axis {
                GradientAxis::Horizontal => "Brush.horizontalGradient",
                GradientAxis::Vertical => "Brush.verticalGradient",
            };
            chain.push(format!(
                ".background({}(listOf({}, {})))",
                brush,
                self.color_expr(&gradient.start),
                self.color_expr(&gradient.end),
            ));
            return;
        }
        if let Some(color) = style.get(CssProperty::BackgroundColor) {
            chain.push(format!(".background({})", self.color_expr(color)));
            return;
        }
        let Some(background) = background else {
            return;
        };
        if background.contains("url(") {
            // raster backgrounds belong to the drawable pipeline
            return;
        }
        if let Some(token) = var_token(background) {
            let mut name = sanitize_resource_name(token);
            if name.is_empty() {
                name = "bg_placeholder".to_string();
            }
            chain.push(format!(
                ".paint(painterResource(id = R.drawable.{}), contentScale = ContentScale.FillBounds)",
                name,
            ));
            return;
        }
        if decal_style::parse(background).is_some() {
            chain.push(format!(".background({})", self.color_expr(background)));
        }
    }

    fn color_expr(&self, value: &str) -> String {
        resolve(value, &self.table).to_compose()
    }

    fn kind_params(&self, kind: WidgetKind, style: &StyleMap) -> Vec<String> {
        match kind {
            WidgetKind::Text => self.text_params(style),
            WidgetKind::Image => image_params(style),
            WidgetKind::Card => card_params(style),
            WidgetKind::FlexColumn | WidgetKind::ScrollColumn => column_params(style),
            WidgetKind::FlexRow | WidgetKind::ScrollRow => row_params(style),
            WidgetKind::Plain | WidgetKind::Relative => box_params(style),
        }
    }

    fn text_params(&self, style: &StyleMap) -> Vec<String> {
        let mut params = vec!["text = \"Text\"".to_string()];
        if let Some(color) = style.get(CssProperty::Color) {
            params.push(format!("color = {}", self.color_expr(color)));
        }
        if let Some(size) = style.get(CssProperty::FontSize) {
            let converted = to_compose(size, Unit::Sp);
            if converted != size {
                params.push(format!("fontSize = {}", converted));
            }
        }
        if let Some(line_height) = style.get(CssProperty::LineHeight) {
            if let Some(unit) = text_unit(line_height) {
                params.push(format!("lineHeight = {}", unit));
            }
        }
        if let Some(spacing) = style.get(CssProperty::LetterSpacing) {
            if let Some(unit) = text_unit(spacing) {
                params.push(format!("letterSpacing = {}", unit));
            }
        }
        if let Some(weight) = style.get(CssProperty::FontWeight).and_then(font_weight) {
            params.push(format!("fontWeight = {}", weight));
        }
        if let Some(family) = style.get(CssProperty::FontFamily) {
            params.push(format!("fontFamily = {}", font_family(family)));
        }
        if style.get(CssProperty::FontStyle) == Some("italic") {
            params.push("fontStyle = FontStyle.Italic".to_string());
        }
        if let Some(decoration) = style
            .get(CssProperty::TextDecoration)
            .and_then(text_decoration)
        {
            params.push(format!("textDecoration = {}", decoration));
        }
        if let Some(align) = style.get(CssProperty::TextAlign).and_then(text_align) {
            params.push(format!("textAlign = {}", align));
        }
        if style.get(CssProperty::TextOverflow) == Some("ellipsis") {
            params.push("overflow = TextOverflow.Ellipsis".to_string());
            params.push("maxLines = 1".to_string());
        }
        if let Some(shadow) = style
            .get(CssProperty::TextShadow)
            .filter(|value| *value != "none")
            .and_then(parse_text_shadow)
        {
            params.push(format!(
                "style = TextStyle(shadow = Shadow(color = {}, offset = Offset({}f, {}f), blurRadius = {}f))",
                self.color_expr(&shadow.color),
                format_number(shadow.dx),
                format_number(shadow.dy),
                format_number(shadow.radius),
            ));
        }
        params
    }
}

impl Default for ComposeGenerator {
    fn default() -> ComposeGenerator {
        ComposeGenerator::new()
    }
}

impl CodeGenerator for ComposeGenerator {
    fn notation(&self) -> Notation {
        Notation::Compose
    }

    fn generate_style(&mut self, style: &StyleMap) -> String {
        let kind = classify(style);
        let mut params = vec![modifier_param(self.modifier_chain(kind, style))];
        params.extend(self.kind_params(kind, style));
        assemble_call(kind.composable(), &params, kind.is_container())
    }

    fn generate_tree(&mut self, node: &DesignNode) -> String {
        walk_tree(self, node)
    }
}

impl TreeWriter for ComposeGenerator {
    fn indent_unit(&self) -> &'static str {
        "    "
    }

    fn text_leaf(&mut self, node: &DesignNode) -> Vec<String> {
        let text = node.characters.as_deref().unwrap_or("");
        vec![format!("Text(text = \"{}\")", escape_kotlin(text))]
    }

    fn unknown_node(&mut self, node: &DesignNode) -> Vec<String> {
        log::debug!("no composable mapping for node kind of {:?}", node.name);
        vec![format!("// {}", unsupported_advisory(&node.name))]
    }

    fn instance_annotation(&mut self, _node: &DesignNode) -> Vec<String> {
        Vec::new()
    }

    fn instance_replacement(&mut self, node: &DesignNode) -> Option<Vec<String>> {
        match composable_ident(&node.name) {
            Some(ident) => Some(vec![format!("{}()", ident)]),
            None => {
                log::debug!(
                    "instance name {:?} has no usable identifier, keeping its structure",
                    node.name
                );
                None
            }
        }
    }

    fn empty_container(&mut self, node: &DesignNode) -> Vec<String> {
        vec![format!("// {}", empty_children_advisory(&node.name))]
    }

    fn container_open(&mut self, node: &DesignNode, is_root: bool) -> Vec<String> {
        let callable = match node.layout_mode {
            LayoutMode::Vertical => "Column",
            LayoutMode::Horizontal => "Row",
            LayoutMode::None => "Box",
        };
        let mut chain = Vec::new();
        if is_root {
            chain.push(".fillMaxSize()".to_string());
        }
        if let Some(shape) = shape_expression(&node.style) {
            chain.push(format!(".clip({})", shape));
        }
        if let Some(color) = node.background_color() {
            chain.push(format!(".background({})", self.color_expr(color)));
        }
        if chain.is_empty() {
            return vec![format!("{} {{", callable)];
        }
        let mut lines = vec![format!("{}(", callable), "    modifier = Modifier".to_string()];
        for link in &chain {
            lines.push(format!("        {}", link));
        }
        lines.push(") {".to_string());
        lines
    }

    fn container_close(&mut self, _node: &DesignNode, _is_root: bool) -> Vec<String> {
        vec!["}".to_string()]
    }
}

fn modifier_param(chain: Vec<String>) -> String {
    let mut param = "modifier = Modifier".to_string();
    for link in chain {
        param.push_str("\n        ");
        param.push_str(&link);
    }
    param
}

fn assemble_call(callable: &str, params: &[String], container: bool) -> String {
    let mut text = format!("{}(\n", callable);
    for (i, param) in params.iter().enumerate() {
        text.push_str("    ");
        text.push_str(param);
        if i + 1 < params.len() {
            text.push(',');
        }
        text.push('\n');
    }
    text.push(')');
    if container {
        text.push_str(" {\n    // Content\n}");
    }
    text
}

fn push_dimension(chain: &mut Vec<String>, name: &str, value: &str) {
    let converted = to_compose(value, Unit::Dp);
    if converted != value {
        chain.push(format!(".{}({})", name, converted));
    }
}

fn push_padding(chain: &mut Vec<String>, edges: Edges) {
    if !edges.any() {
        return;
    }
    if let Some(value) = edges.uniform() {
        chain.push(format!(".padding({})", to_compose(value, Unit::Dp)));
        return;
    }
    let mut args = Vec::new();
    // CSS left/right map onto start/end
    if let Some(left) = &edges.left {
        args.push(format!("start = {}", to_compose(left, Unit::Dp)));
    }
    if let Some(top) = &edges.top {
        args.push(format!("top = {}", to_compose(top, Unit::Dp)));
    }
    if let Some(right) = &edges.right {
        args.push(format!("end = {}", to_compose(right, Unit::Dp)));
    }
    if let Some(bottom) = &edges.bottom {
        args.push(format!("bottom = {}", to_compose(bottom, Unit::Dp)));
    }
    chain.push(format!(".padding({})", args.join(", ")));
}

fn shape_expression(style: &StyleMap) -> Option<String> {
    let radius = style.get(CssProperty::BorderRadius)?;
    if radius.trim() == "50%" {
        Some("CircleShape".to_string())
    } else {
        Some(format!("RoundedCornerShape({})", to_compose(radius, Unit::Dp)))
    }
}

/// Maps a CSS text length onto a Compose `TextUnit` expression: px becomes
/// sp, em stays em, bare numbers read as em multipliers.
fn text_unit(value: &str) -> Option<String> {
    let value = value.trim();
    if let Some(px) = px_of(value) {
        return Some(format!("{}.sp", format_number(px)));
    }
    if let Some(em) = value.strip_suffix("em") {
        let parsed: f64 = em.trim().parse().ok()?;
        return Some(format!("{}.em", format_number(parsed)));
    }
    let parsed: f64 = value.parse().ok()?;
    Some(format!("{}.em", format_number(parsed)))
}

fn font_weight(value: &str) -> Option<&'static str> {
    if value == "bold" {
        return Some("FontWeight.Bold");
    }
    if value == "normal" {
        return Some("FontWeight.Normal");
    }
    let weight = value.parse::<f64>().ok()?;
    let name = if weight <= 100.0 {
        "FontWeight.Thin"
    } else if weight <= 200.0 {
        "FontWeight.ExtraLight"
    } else if weight <= 300.0 {
        "FontWeight.Light"
    } else if weight <= 400.0 {
        "FontWeight.Normal"
    } else if weight <= 500.0 {
        "FontWeight.Medium"
    } else if weight <= 600.0 {
        "FontWeight.SemiBold"
    } else if weight <= 700.0 {
        "FontWeight.Bold"
    } else if weight <= 800.0 {
        "FontWeight.ExtraBold"
    } else {
        "FontWeight.Black"
    };
    Some(name)
}

fn font_family(family: &str) -> &'static str {
    let family = family.to_lowercase();
    if family.contains("mono") {
        "FontFamily.Monospace"
    } else if family.contains("serif") && !family.contains("sans") {
        "FontFamily.Serif"
    } else {
        "FontFamily.SansSerif"
    }
}

fn text_decoration(value: &str) -> Option<String> {
    let underline = value.contains("underline");
    let line_through = value.contains("line-through");
    match (underline, line_through) {
        (true, true) => Some(
            "TextDecoration.combine(listOf(TextDecoration.Underline, TextDecoration.LineThrough))"
                .to_string(),
        ),
        (true, false) => Some("TextDecoration.Underline".to_string()),
        (false, true) => Some("TextDecoration.LineThrough".to_string()),
        (false, false) => None,
    }
}

fn text_align(value: &str) -> Option<&'static str> {
    match value {
        "center" => Some("TextAlign.Center"),
        "right" | "end" => Some("TextAlign.End"),
        "left" | "start" => Some("TextAlign.Start"),
        "justify" => Some("TextAlign.Justify"),
        _ => None,
    }
}

fn image_params(style: &StyleMap) -> Vec<String> {
    let scale = match style.get(CssProperty::ObjectFit) {
        Some("contain") => "ContentScale.Fit",
        Some("fill") => "ContentScale.FillBounds",
        _ => "ContentScale.Crop",
    };
    vec![
        "painter = painterResource(id = R.drawable.placeholder)".to_string(),
        "contentDescription = null".to_string(),
        format!("contentScale = {}", scale),
    ]
}

fn card_params(style: &StyleMap) -> Vec<String> {
    let elevation = match style.get(CssProperty::BoxShadow) {
        Some(value) if value != "none" => "4.dp",
        _ => "0.dp",
    };
    vec![format!(
        "elevation = CardDefaults.cardElevation(defaultElevation = {})",
        elevation
    )]
}

fn column_params(style: &StyleMap) -> Vec<String> {
    let mut params = Vec::new();
    let arrangement = match style.get(CssProperty::JustifyContent) {
        Some("center") => Some("Arrangement.Center"),
        Some("flex-end") => Some("Arrangement.Bottom"),
        Some("space-between") => Some("Arrangement.SpaceBetween"),
        _ => None,
    };
    if let Some(arrangement) = arrangement {
        params.push(format!("verticalArrangement = {}", arrangement));
    }
    let alignment = match style.get(CssProperty::AlignItems) {
        Some("center") => Some("Alignment.CenterHorizontally"),
        Some("flex-end") => Some("Alignment.End"),
        _ => None,
    };
    if let Some(alignment) = alignment {
        params.push(format!("horizontalAlignment = {}", alignment));
    }
    params
}

fn row_params(style: &StyleMap) -> Vec<String> {
    let mut params = Vec::new();
    let arrangement = match style.get(CssProperty::JustifyContent) {
        Some("center") => Some("Arrangement.Center"),
        Some("flex-end") => Some("Arrangement.End"),
        Some("space-between") => Some("Arrangement.SpaceBetween"),
        _ => None,
    };
    if let Some(arrangement) = arrangement {
        params.push(format!("horizontalArrangement = {}", arrangement));
    }
    let alignment = match style.get(CssProperty::AlignItems) {
        Some("center") => Some("Alignment.CenterVertically"),
        Some("flex-end") => Some("Alignment.Bottom"),
        _ => None,
    };
    if let Some(alignment) = alignment {
        params.push(format!("verticalAlignment = {}", alignment));
    }
    params
}

fn box_params(style: &StyleMap) -> Vec<String> {
    if style.get(CssProperty::JustifyContent) == Some("center")
        && style.get(CssProperty::AlignItems) == Some("center")
    {
        vec!["contentAlignment = Alignment.Center".to_string()]
    } else {
        Vec::new()
    }
}

/// Pascal-cases a layer name into a Kotlin identifier. `None` when nothing
/// identifier-shaped survives.
fn composable_ident(name: &str) -> Option<String> {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    let ident = cleaned.to_case(Case::Pascal);
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        None
    } else {
        Some(ident)
    }
}

fn escape_kotlin(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use decal_core::{DesignNode, Fill, LayoutMode, StyleMap};

    fn generate(declarations: &str) -> String {
        ComposeGenerator::new().generate_style(&StyleMap::from_declarations(declarations))
    }

    #[test]
    fn text_styles_become_a_text_call() {
        let code = generate("color: #333; font-size: 14px; font-weight: bold");
        assert!(code.starts_with("Text(\n    modifier = Modifier"));
        assert!(code.contains("text = \"Text\""));
        assert!(code.contains("color = Color(0xFF333333)"));
        assert!(code.contains("fontSize = 14.sp"));
        assert!(code.contains("fontWeight = FontWeight.Bold"));
        // leaf call: no trailing content block
        assert!(code.ends_with(')'));
    }

    #[test]
    fn modifier_is_always_the_first_parameter() {
        let code = generate("width: 100%");
        let first_param = code.lines().nth(1).unwrap();
        assert_eq!(first_param, "    modifier = Modifier");
        assert!(code.contains(".fillMaxWidth()"));
    }

    #[test]
    fn sizes_use_dot_syntax() {
        let code = generate("width: 120px; height: auto");
        assert!(code.contains(".width(120.dp)"));
        assert!(code.contains(".wrapContentHeight()"));
    }

    #[test]
    fn margin_comes_before_background_padding_after() {
        let code = generate(
            "margin: 8px; padding: 16px; background-color: #ffffff; width: 10px",
        );
        let margin = code.find(".padding(8.dp)").unwrap();
        let background = code.find(".background(").unwrap();
        let padding = code.find(".padding(16.dp)").unwrap();
        assert!(margin < background);
        assert!(background < padding);
    }

    #[test]
    fn mixed_padding_lists_named_edges() {
        let code = generate("padding: 4px 8px 12px 16px; width: 10px");
        assert!(code.contains(".padding(start = 16.dp, top = 4.dp, end = 8.dp, bottom = 12.dp)"));
    }

    #[test]
    fn half_radius_clips_to_a_circle() {
        let code = generate("border-radius: 50%; background-color: #000; width: 40px");
        assert!(code.contains(".clip(CircleShape)"));
        let code = generate("border-radius: 8px; background-color: #000; width: 40px");
        assert!(code.contains(".clip(RoundedCornerShape(8.dp))"));
    }

    #[test]
    fn horizontal_gradient_brush() {
        let code = generate("background: linear-gradient(to right, #ff0000, #0000ff); width: 10px");
        assert!(code.contains(
            ".background(Brush.horizontalGradient(listOf(Color(0xFFFF0000), Color(0xFF0000FF))))"
        ));
    }

    #[test]
    fn reversed_gradient_swaps_stops() {
        let code = generate("background: linear-gradient(to top, #ff0000, #0000ff); width: 10px");
        assert!(code.contains(
            ".background(Brush.verticalGradient(listOf(Color(0xFF0000FF), Color(0xFFFF0000))))"
        ));
    }

    #[test]
    fn var_background_paints_a_drawable() {
        let code = generate("background: var(--hero-surface); width: 10px");
        assert!(code.contains(
            ".paint(painterResource(id = R.drawable.hero_surface), contentScale = ContentScale.FillBounds)"
        ));
    }

    #[test]
    fn hidden_and_removed_elements() {
        assert!(generate("display: none; width: 10px").contains(".size(0.dp)"));
        assert!(generate("visibility: hidden; width: 10px").contains(".alpha(0f)"));
    }

    #[test]
    fn border_uses_the_clip_shape() {
        let code = generate("border: 1px solid #e0e0e0; border-radius: 8px; width: 10px");
        assert!(code.contains(
            ".border(1.dp, colorResource(id = R.color.gray_200), RoundedCornerShape(8.dp))"
        ));
        let code = generate("border: 2px solid #123456; width: 10px");
        assert!(code.contains(".border(2.dp, Color(0xFF123456), RectangleShape)"));
    }

    #[test]
    fn card_elevation_from_shadow() {
        let code = generate("box-shadow: 0px 1px 2px rgba(0,0,0,0.3)");
        assert!(code.starts_with("Card("));
        assert!(code.contains("elevation = CardDefaults.cardElevation(defaultElevation = 4.dp)"));
        assert!(code.ends_with("}"));
    }

    #[test]
    fn scroll_modifiers() {
        let code = generate("overflow-y: scroll; width: 10px");
        assert!(code.starts_with("Column("));
        assert!(code.contains(".verticalScroll(rememberScrollState())"));
        let code = generate("overflow-x: auto");
        assert!(code.starts_with("Row("));
        assert!(code.contains(".horizontalScroll(rememberScrollState())"));
    }

    #[test]
    fn flex_alignment_parameters() {
        let code = generate("display: flex; flex-direction: column; justify-content: center; align-items: center");
        assert!(code.starts_with("Column("));
        assert!(code.contains("verticalArrangement = Arrangement.Center"));
        assert!(code.contains("horizontalAlignment = Alignment.CenterHorizontally"));

        let code = generate("display: flex; justify-content: space-between");
        assert!(code.starts_with("Row("));
        assert!(code.contains("horizontalArrangement = Arrangement.SpaceBetween"));
    }

    #[test]
    fn containers_get_a_content_block() {
        let code = generate("background-color: #fff; width: 10px");
        assert!(code.starts_with("Box("));
        assert!(code.ends_with(") {\n    // Content\n}"));
    }

    #[test]
    fn text_decoration_combines() {
        let code = generate("font-size: 12px; text-decoration: underline line-through");
        assert!(code.contains(
            "textDecoration = TextDecoration.combine(listOf(TextDecoration.Underline, TextDecoration.LineThrough))"
        ));
    }

    #[test]
    fn text_shadow_becomes_a_text_style() {
        let code = generate("font-size: 12px; text-shadow: 1px 2px 3px #000");
        assert!(code.contains(
            "style = TextStyle(shadow = Shadow(color = colorResource(id = R.color.black), offset = Offset(1f, 2f), blurRadius = 3f))"
        ));
    }

    #[test]
    fn line_height_units() {
        assert!(generate("font-size: 14px; line-height: 21px").contains("lineHeight = 21.sp"));
        assert!(generate("font-size: 14px; line-height: 1.5").contains("lineHeight = 1.5.em"));
        assert!(generate("font-size: 14px; line-height: 1.2em").contains("lineHeight = 1.2.em"));
    }

    #[test]
    fn tree_renders_nested_calls() {
        let tree = DesignNode::frame("Card")
            .with_layout(LayoutMode::Vertical)
            .with_fill(Fill::solid("#ffffff"))
            .with_child(DesignNode::text("Title", "Hello \"world\""))
            .with_child(
                DesignNode::instance("Primary Button")
                    .with_child(DesignNode::text("Label", "Tap")),
            );
        let code = ComposeGenerator::new().generate_tree(&tree);
        assert!(code.starts_with("Column("));
        assert!(code.contains(".fillMaxSize()"));
        assert!(code.contains(".background(colorResource(id = R.color.white))"));
        assert!(code.contains("    Text(text = \"Hello \\\"world\\\"\")"));
        assert!(code.contains("    PrimaryButton()"));
        assert!(code.ends_with("}"));
    }

    #[test]
    fn unusable_instance_names_keep_their_structure() {
        let tree = DesignNode::frame("Screen").with_child(
            DesignNode::instance("???")
                .with_layout(LayoutMode::Horizontal)
                .with_child(DesignNode::text("Label", "hi")),
        );
        let code = ComposeGenerator::new().generate_tree(&tree);
        assert!(code.contains("Row {"));
        assert!(!code.contains("()()"));
    }

    #[test]
    fn empty_container_emits_the_advisory_comment() {
        let code = ComposeGenerator::new().generate_tree(&DesignNode::frame("Hero"));
        assert_eq!(
            code,
            "// No children were exported for \"Hero\". Convert the layer to a component to make its contents inspectable."
        );
    }

    #[test]
    fn component_wrapper() {
        let node = DesignNode::component("Profile Card")
            .with_layout(LayoutMode::Vertical)
            .with_child(DesignNode::text("Name", "Ada"));
        let code = ComposeGenerator::new().compose_component(&node);
        assert!(code.starts_with("@Composable\nfun ProfileCard() {"));
        assert!(code.contains("\n    Column"));
        assert!(code.ends_with("\n}"));
    }
}
