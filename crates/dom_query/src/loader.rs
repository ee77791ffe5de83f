//! CDP loader - builds an arena tree from Chrome DevTools Protocol JSON
//!
//! Accepts the `DOM.getDocument` response shape:
//! ```json
//! {
//!   "root": {
//!     "nodeId": 1,
//!     "nodeType": 9,
//!     "nodeName": "#document",
//!     "children": [...]
//!   }
//! }
//! ```
//! or a bare node object. Only the fields the query core needs are read:
//! `nodeType`, `nodeName`, `nodeValue`, `attributes` and `children`.
//! `contentDocument` and `shadowRoots` live outside the child/sibling chain
//! and are skipped.
//!
//! Nesting depth is unbounded: the JSON recursion limit is lifted and the
//! deserializer grows its stack on demand, and the node walk uses an explicit
//! stack.

use crate::arena::{DomArena, NodeSpec};
use crate::error::{DomError, Result};
use crate::types::{Node, NodeKind};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::slice;

/// Converts CDP node JSON into [`NodeSpec`] trees and allocates them
#[derive(Debug, Default, Clone, Copy)]
pub struct CdpLoader;

impl CdpLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse a CDP response (or bare node) into an owned spec
    pub fn parse(&self, cdp_response: &Value) -> Result<NodeSpec> {
        let root = cdp_response.get("root").unwrap_or(cdp_response);
        let spec = self.parse_tree(root)?;

        tracing::debug!(nodes = spec.node_count(), "Parsed CDP document");
        Ok(spec)
    }

    /// Parse and allocate into `arena`, returns the root
    pub fn load<'a>(&self, arena: &'a DomArena, cdp_response: &Value) -> Result<&'a Node<'a>> {
        let spec = self.parse(cdp_response)?;
        Ok(arena.build(&spec))
    }

    pub fn load_str<'a>(&self, arena: &'a DomArena, json: &str) -> Result<&'a Node<'a>> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;
        self.load(arena, &value)
    }

    pub fn load_file<'a>(
        &self,
        arena: &'a DomArena,
        path: impl AsRef<Path>,
    ) -> Result<&'a Node<'a>> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading CDP document");
        let json = std::fs::read_to_string(path)?;
        self.load_str(arena, &json)
    }

    /// Depth-first walk over the CDP tree, children attached in order
    fn parse_tree(&self, cdp_root: &Value) -> Result<NodeSpec> {
        let mut root = self.parse_node(cdp_root)?;
        let mut root_pending = children_of(cdp_root);
        let mut stack: Vec<(NodeSpec, slice::Iter<'_, Value>)> = Vec::new();

        loop {
            let pending = match stack.last_mut() {
                Some((_, pending)) => pending,
                None => &mut root_pending,
            };

            match pending.next() {
                Some(child) => stack.push((self.parse_node(child)?, children_of(child))),
                None => match stack.pop() {
                    Some((spec, _)) => match stack.last_mut() {
                        Some((parent, _)) => parent.children.push(spec),
                        None => root.children.push(spec),
                    },
                    None => return Ok(root),
                },
            }
        }
    }

    /// Parse one CDP node without its children
    fn parse_node(&self, cdp_node: &Value) -> Result<NodeSpec> {
        let node_type_val = cdp_node["nodeType"]
            .as_u64()
            .ok_or(DomError::MissingField("nodeType"))?;

        let kind = u8::try_from(node_type_val)
            .ok()
            .and_then(NodeKind::from_u8)
            .ok_or(DomError::InvalidNodeType(node_type_val))?;

        let node_name = cdp_node["nodeName"]
            .as_str()
            .ok_or(DomError::MissingField("nodeName"))?;

        // Parsers report element names upper-cased; queries use lower case
        let label = match kind {
            NodeKind::Element => node_name.to_ascii_lowercase(),
            kind if kind.carries_data() => {
                cdp_node["nodeValue"].as_str().unwrap_or("").to_string()
            }
            _ => node_name.to_string(),
        };

        let mut spec = NodeSpec::new(kind, label);

        // Attributes arrive flattened: [key, value, key, value, ...]
        if let Some(attrs) = cdp_node["attributes"].as_array() {
            for pair in attrs.chunks(2) {
                match pair {
                    [key, value] => match (key.as_str(), value.as_str()) {
                        (Some(key), Some(value)) => {
                            spec.attributes.push((key.to_string(), value.to_string()));
                        }
                        _ => tracing::warn!(
                            node = node_name,
                            key = %key,
                            value = %value,
                            "Dropping non-string attribute entry"
                        ),
                    },
                    _ => tracing::warn!(node = node_name, "Dropping unpaired attribute entry"),
                }
            }
        }

        Ok(spec)
    }
}

fn children_of(cdp_node: &Value) -> slice::Iter<'_, Value> {
    cdp_node["children"]
        .as_array()
        .map(|children| children.iter())
        .unwrap_or_default()
}
