//! Core tree types
//!
//! Key design principles:
//! 1. Nodes borrow everything from the arena (`&'a str`, `&'a [Attribute]`)
//! 2. Links are shared references fixed at allocation time, never rewritten
//! 3. `Node` holds no interior mutability, so it is `Send + Sync`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Node type, numbered as in the DOM specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeKind {
    Element = 1,
    Text = 3,
    CdataSection = 4,
    ProcessingInstruction = 7,
    Comment = 8,
    Document = 9,
    DocumentType = 10,
    DocumentFragment = 11,
}

impl NodeKind {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(NodeKind::Element),
            3 => Some(NodeKind::Text),
            4 => Some(NodeKind::CdataSection),
            7 => Some(NodeKind::ProcessingInstruction),
            8 => Some(NodeKind::Comment),
            9 => Some(NodeKind::Document),
            10 => Some(NodeKind::DocumentType),
            11 => Some(NodeKind::DocumentFragment),
            _ => None,
        }
    }

    /// Kinds whose label is character data rather than a name
    pub fn carries_data(self) -> bool {
        matches!(
            self,
            NodeKind::Text | NodeKind::Comment | NodeKind::CdataSection
        )
    }
}

/// A single `key="value"` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// A node in an arena-allocated document tree
///
/// Layout mirrors a classic parser tree: one link down (`first_child`) and
/// one link across (`next_sibling`). Children are reached by following the
/// sibling chain of the first child.
#[derive(Debug)]
pub struct Node<'a> {
    pub kind: NodeKind,
    /// Tag name for elements, character data for text-like nodes
    pub label: &'a str,
    /// In source order; keys may repeat
    pub attributes: &'a [Attribute<'a>],
    pub first_child: Option<&'a Node<'a>>,
    pub next_sibling: Option<&'a Node<'a>>,
}

impl<'a> Node<'a> {
    /// Check if node is an element
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Check if node is text
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Get tag name for element nodes
    pub fn tag_name(&self) -> Option<&'a str> {
        if self.is_element() {
            Some(self.label)
        } else {
            None
        }
    }

    /// First value recorded for `key`, if any
    pub fn attr(&self, key: &str) -> Option<&'a str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.key == key)
            .map(|attribute| attribute.value)
    }

    /// Direct children, left to right
    pub fn children(&self) -> Children<'a> {
        Children {
            next: self.first_child,
        }
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Element => {
                write!(f, "<{}", self.label)?;
                for attribute in self.attributes {
                    write!(f, " {}=\"{}\"", attribute.key, attribute.value)?;
                }
                f.write_str(">")
            }
            NodeKind::Comment => write!(f, "<!--{}-->", self.label),
            kind if kind.carries_data() => f.write_str(self.label.trim()),
            _ => f.write_str(self.label),
        }
    }
}

/// Iterator over a node's direct children
#[derive(Debug, Clone)]
pub struct Children<'a> {
    next: Option<&'a Node<'a>>,
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next_sibling;
        Some(node)
    }
}
