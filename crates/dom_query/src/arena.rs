//! Arena-based document storage
//!
//! ## Memory Layout
//!
//! ```text
//! Bump: [Node][Attribute..][str bytes][Node]...
//!         ↑ every link is a plain &'a Node into the same bump
//! ```
//!
//! Trees are described with an owned [`NodeSpec`] and allocated bottom-up:
//! a node's last child is allocated first so that each node already knows
//! its `next_sibling` and `first_child` when it is written. Nothing is
//! patched afterwards, which is also why an arena tree cannot contain a
//! cycle.

use crate::types::{Attribute, Node, NodeKind};
use bumpalo::Bump;
use smallvec::SmallVec;

/// Owned description of a subtree, ready to be allocated into a [`DomArena`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    pub kind: NodeKind,
    pub label: String,
    pub attributes: SmallVec<[(String, String); 4]>, // Most elements carry few attributes
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            attributes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    pub fn document() -> Self {
        Self::new(NodeKind::Document, "#document")
    }

    pub fn element(tag: impl Into<String>) -> Self {
        Self::new(NodeKind::Element, tag)
    }

    pub fn text(data: impl Into<String>) -> Self {
        Self::new(NodeKind::Text, data)
    }

    pub fn comment(data: impl Into<String>) -> Self {
        Self::new(NodeKind::Comment, data)
    }

    /// Append an attribute; repeated keys are kept
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = NodeSpec>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this subtree, root included
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(spec) = stack.pop() {
            count += 1;
            stack.extend(spec.children.iter());
        }
        count
    }
}

impl Drop for NodeSpec {
    fn drop(&mut self) {
        // Flatten before the fields drop so deep specs don't recurse
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut spec) = pending.pop() {
            pending.append(&mut spec.children);
        }
    }
}

/// Bump allocator owning every node of one or more documents
///
/// Nodes handed out by [`DomArena::build`] borrow the arena and are freed
/// all at once when it is dropped.
#[derive(Debug, Default)]
pub struct DomArena {
    bump: Bump,
}

impl DomArena {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create arena with specific capacity in bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocate a whole tree, returns its root
    pub fn build(&self, spec: &NodeSpec) -> &Node<'_> {
        let first_child = self.alloc_siblings(&spec.children);
        self.alloc_node(spec, first_child, None)
    }

    /// Allocate a sequence of siblings, returns the first one
    pub fn build_siblings(&self, specs: &[NodeSpec]) -> Option<&Node<'_>> {
        self.alloc_siblings(specs)
    }

    /// Bytes currently held by the arena
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    fn alloc_node<'a>(
        &'a self,
        spec: &NodeSpec,
        first_child: Option<&'a Node<'a>>,
        next_sibling: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let attributes = self
            .bump
            .alloc_slice_fill_iter(spec.attributes.iter().map(|(key, value)| Attribute {
                key: self.bump.alloc_str(key),
                value: self.bump.alloc_str(value),
            }));

        self.bump.alloc(Node {
            kind: spec.kind,
            label: self.bump.alloc_str(&spec.label),
            attributes,
            first_child,
            next_sibling,
        })
    }

    /// Post-order allocation with an explicit stack, no recursion
    ///
    /// `current` is the sibling list being built right to left: the specs
    /// still to allocate and the head of the chain allocated so far. Entering
    /// a spec with children suspends `current` on the stack together with
    /// that spec; once its children are done the spec is allocated with them
    /// as `first_child`.
    fn alloc_siblings<'a, 's>(&'a self, specs: &'s [NodeSpec]) -> Option<&'a Node<'a>> {
        type Suspended<'s, 'a> = (&'s NodeSpec, &'s [NodeSpec], Option<&'a Node<'a>>);

        let mut current: (&'s [NodeSpec], Option<&'a Node<'a>>) = (specs, None);
        let mut suspended: SmallVec<[Suspended<'s, 'a>; 16]> = SmallVec::new();

        loop {
            let (remaining, built) = current;
            match remaining.split_last() {
                Some((spec, rest)) if !spec.children.is_empty() => {
                    suspended.push((spec, rest, built));
                    current = (spec.children.as_slice(), None);
                }
                Some((spec, rest)) => {
                    current = (rest, Some(self.alloc_node(spec, None, built)));
                }
                None => match suspended.pop() {
                    Some((parent, rest, next_sibling)) => {
                        let node = self.alloc_node(parent, built, next_sibling);
                        current = (rest, Some(node));
                    }
                    None => return built,
                },
            }
        }
    }
}
