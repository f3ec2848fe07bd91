//! The two target-notation generators.

mod compose;
mod xml;

pub use compose::ComposeGenerator;
pub use xml::{WidgetMap, XmlGenerator};

use decal_core::{DesignNode, NodeType, StyleMap};

/// Target notation of a generated snippet, used downstream to pick syntax
/// highlighting. The text itself is plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Xml,
    Compose,
}

impl Notation {
    pub fn label(self) -> &'static str {
        match self {
            Notation::Xml => "xml",
            Notation::Compose => "kotlin",
        }
    }
}

/// Generated text tagged with its notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub notation: Notation,
    pub text: String,
}

/// Common surface of the two generators.
///
/// Generation is total: both entry points always return text. Anything the
/// generator cannot express becomes an inline comment in the output, never
/// an error. The receiver is mutable only because generated view IDs draw
/// from an injected suffix source.
pub trait CodeGenerator {
    fn notation(&self) -> Notation;

    /// Code for a single node's style, without visiting children.
    fn generate_style(&mut self, style: &StyleMap) -> String;

    /// Code for a whole subtree.
    fn generate_tree(&mut self, node: &DesignNode) -> String;

    fn snippet_for_style(&mut self, style: &StyleMap) -> GeneratedCode {
        GeneratedCode {
            notation: self.notation(),
            text: self.generate_style(style),
        }
    }

    fn snippet_for_tree(&mut self, node: &DesignNode) -> GeneratedCode {
        GeneratedCode {
            notation: self.notation(),
            text: self.generate_tree(node),
        }
    }
}

/// Hooks a notation plugs into the shared tree walk.
///
/// The walk owns recursion and indentation; implementations only format
/// individual nodes. Lines are emitted relative to the node's own level and
/// the walker prefixes one indent unit per depth.
pub(crate) trait TreeWriter {
    /// One indentation step.
    fn indent_unit(&self) -> &'static str;

    /// Lines for a text leaf.
    fn text_leaf(&mut self, node: &DesignNode) -> Vec<String>;

    /// Lines for a node kind the generator does not understand.
    fn unknown_node(&mut self, node: &DesignNode) -> Vec<String>;

    /// Lines emitted before an instance node, e.g. an identifying comment.
    fn instance_annotation(&mut self, node: &DesignNode) -> Vec<String>;

    /// When `Some`, these lines replace the instance's structural rendering
    /// entirely (a named call in the builder notation). `None` falls through
    /// to the ordinary container path.
    fn instance_replacement(&mut self, node: &DesignNode) -> Option<Vec<String>>;

    /// Lines standing in for a container whose children rendered to nothing.
    fn empty_container(&mut self, node: &DesignNode) -> Vec<String>;

    fn container_open(&mut self, node: &DesignNode, is_root: bool) -> Vec<String>;

    fn container_close(&mut self, node: &DesignNode, is_root: bool) -> Vec<String>;
}

/// Recursive tree walk shared by both generators.
pub(crate) fn walk_tree<W: TreeWriter>(writer: &mut W, root: &DesignNode) -> String {
    let mut lines = Vec::new();
    emit_node(writer, root, true, &mut lines);
    lines.join("\n")
}

fn emit_node<W: TreeWriter>(
    writer: &mut W,
    node: &DesignNode,
    is_root: bool,
    out: &mut Vec<String>,
) {
    match node.node_type {
        NodeType::Text => {
            out.extend(writer.text_leaf(node));
            return;
        }
        NodeType::Unknown => {
            out.extend(writer.unknown_node(node));
            return;
        }
        _ => {}
    }

    if node.node_type == NodeType::Instance {
        out.extend(writer.instance_annotation(node));
        if let Some(call) = writer.instance_replacement(node) {
            out.extend(call);
            return;
        }
    }

    let mut children = Vec::new();
    for child in &node.children {
        emit_node(writer, child, false, &mut children);
    }

    // A container that would come out hollow is useless markup; say why
    // instead.
    if children.is_empty() {
        out.extend(writer.empty_container(node));
        return;
    }

    out.extend(writer.container_open(node, is_root));
    let unit = writer.indent_unit();
    for line in children {
        if line.is_empty() {
            out.push(line);
        } else {
            out.push(format!("{}{}", unit, line));
        }
    }
    out.extend(writer.container_close(node, is_root));
}

/// The advisory sentence both notations embed (as a comment) when a
/// container has nothing to show.
pub(crate) fn empty_children_advisory(name: &str) -> String {
    format!(
        "No children were exported for \"{}\". Convert the layer to a component to make its contents inspectable.",
        name
    )
}

pub(crate) fn unsupported_advisory(name: &str) -> String {
    format!("Unsupported layer \"{}\" skipped", name)
}
