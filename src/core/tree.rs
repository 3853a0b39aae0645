//! Namespace tree for listing secrets.
//!
//! Secret paths are flat branch names; the tree groups them by their
//! slash-separated segments for display. Sibling order follows
//! insertion order, so callers sort the paths first.

use serde::Serialize;

use crate::core::path::SecretPath;

/// One namespace segment and everything below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// The forest of all stored secret names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamespaceTree {
    secrets: Vec<Node>,
}

impl NamespaceTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Top-level nodes.
    pub fn roots(&self) -> &[Node] {
        &self.secrets
    }

    /// Find a top-level node by segment value.
    pub fn find(&self, value: &str) -> Option<&Node> {
        self.secrets.iter().find(|n| n.value == value)
    }

    /// Merge a secret path into the tree, sharing existing prefixes.
    pub fn insert(&mut self, path: &SecretPath) {
        let mut nodes = &mut self.secrets;
        for segment in path.segments() {
            let idx = match nodes.iter().position(|n| n.value == segment) {
                Some(idx) => idx,
                None => {
                    nodes.push(Node::new(segment));
                    nodes.len() - 1
                }
            };
            nodes = &mut nodes[idx].children;
        }
    }

    /// Render with box-drawing connectors, rooted at `.`.
    pub fn render(&self) -> String {
        let mut out = String::from(".\n");
        render_nodes(&mut out, &self.secrets, "");
        out
    }
}

fn render_nodes(out: &mut String, nodes: &[Node], prefix: &str) {
    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(&node.value);
        out.push('\n');

        let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
        render_nodes(out, &node.children, &child_prefix);
    }
}
