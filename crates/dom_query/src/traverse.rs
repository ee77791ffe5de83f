//! Pre-order traversal
//!
//! Everything in this crate walks the tree through [`Descendants`]: an
//! explicit-stack, depth-first, left-to-right iterator. No recursion, so a
//! deep document cannot overflow the call stack.
//!
//! ```text
//!        div            yields: div, span, b, p
//!       /   \
//!    span    p          (root's own siblings are never visited)
//!     |
//!     b
//! ```

use crate::query::Query;
use crate::types::Node;
use smallvec::SmallVec;
use std::ops::ControlFlow;

/// Stack slots kept inline before spilling to the heap
const INLINE_STACK: usize = 16;

/// Lazy pre-order walk over a node and its subtree
///
/// Call [`descendants`] again for a fresh walk; the iterator holds no state
/// beyond its own stack.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    root: &'a Node<'a>,
    stack: SmallVec<[&'a Node<'a>; INLINE_STACK]>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Sibling first so the child subtree is popped before it
        if !std::ptr::eq(node, self.root) {
            if let Some(sibling) = node.next_sibling {
                self.stack.push(sibling);
            }
        }
        if let Some(child) = node.first_child {
            self.stack.push(child);
        }

        Some(node)
    }
}

impl std::iter::FusedIterator for Descendants<'_> {}

/// Walk `root` and everything below it in document order
pub fn descendants<'a>(root: &'a Node<'a>) -> Descendants<'a> {
    let mut stack = SmallVec::new();
    stack.push(root);
    Descendants { root, stack }
}

/// Lazy sequence of the nodes whose attribute `key` contains token `value`
pub fn matching_attr<'q, 'a>(
    key: &'q str,
    value: &'q str,
    root: &'a Node<'a>,
) -> impl Iterator<Item = &'a Node<'a>> + 'q
where
    'a: 'q,
{
    Query::standard().matching_attr(key, value, root)
}

/// Call `visit` once for every match, in document order
pub fn for_each_attr<'a, F>(key: &str, value: &str, root: &'a Node<'a>, visit: F)
where
    F: FnMut(&'a Node<'a>),
{
    Query::standard().for_each_attr(key, value, root, visit)
}

/// Like [`for_each_attr`], but `visit` may stop the walk
pub fn visit_attr<'a, B, F>(
    key: &str,
    value: &str,
    root: &'a Node<'a>,
    visit: F,
) -> ControlFlow<B>
where
    F: FnMut(&'a Node<'a>) -> ControlFlow<B>,
{
    Query::standard().visit_attr(key, value, root, visit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{DomArena, NodeSpec};

    fn sample(arena: &DomArena) -> &Node<'_> {
        // div#outer.some > [span.some > b.some, #text, p.other, div.some]
        let spec = NodeSpec::element("div")
            .attr("id", "outer")
            .attr("class", "some")
            .children([
                NodeSpec::element("span")
                    .attr("id", "s")
                    .attr("class", "some thing")
                    .child(NodeSpec::element("b").attr("id", "b").attr("class", "some")),
                NodeSpec::text("\n"),
                NodeSpec::element("p").attr("id", "p").attr("class", "other"),
                NodeSpec::element("div").attr("id", "inner").attr("class", "some"),
            ]);
        arena.build(&spec)
    }

    fn ids<'a>(nodes: impl IntoIterator<Item = &'a Node<'a>>) -> Vec<&'a str> {
        nodes.into_iter().map(|n| n.attr("id").unwrap_or("#")).collect()
    }

    #[test]
    fn test_descendants_pre_order() {
        let arena = DomArena::new();
        let root = sample(&arena);

        assert_eq!(
            ids(descendants(root)),
            vec!["outer", "s", "b", "#", "p", "inner"]
        );
    }

    #[test]
    fn test_descendants_excludes_root_siblings() {
        let arena = DomArena::new();
        let root = sample(&arena);
        let span = root.first_child.unwrap();

        // span has siblings (#text, p, div) but the walk stays inside span
        assert_eq!(ids(descendants(span)), vec!["s", "b"]);
    }

    #[test]
    fn test_descendants_restartable() {
        let arena = DomArena::new();
        let root = sample(&arena);

        let first: Vec<_> = ids(descendants(root));
        let second: Vec<_> = ids(descendants(root));
        assert_eq!(first, second);
    }

    #[test]
    fn test_for_each_attr_visits_all_in_order() {
        let arena = DomArena::new();
        let root = sample(&arena);

        let mut visited = Vec::new();
        for_each_attr("class", "some", root, |node| visited.push(node));

        // Root and nested matches are all reported
        assert_eq!(ids(visited), vec!["outer", "s", "b", "inner"]);
    }

    #[test]
    fn test_for_each_attr_no_match() {
        let arena = DomArena::new();
        let root = sample(&arena);

        let mut count = 0;
        for_each_attr("class", "missing", root, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_visit_attr_breaks_early() {
        let arena = DomArena::new();
        let root = sample(&arena);

        let mut seen = 0;
        let result = visit_attr("class", "some", root, |node| {
            seen += 1;
            if node.label == "span" {
                ControlFlow::Break(node.attr("id"))
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(result, ControlFlow::Break(Some("s")));
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_matching_attr_is_lazy() {
        let arena = DomArena::new();
        let root = sample(&arena);

        let mut matches = matching_attr("class", "some", root);
        assert_eq!(matches.next().and_then(|n| n.attr("id")), Some("outer"));
        assert_eq!(matches.next().and_then(|n| n.attr("id")), Some("s"));

        assert_eq!(matching_attr("class", "some", root).count(), 4);
    }

    #[test]
    fn test_deep_tree_does_not_recurse() {
        let arena = DomArena::new();
        let mut spec = NodeSpec::element("leaf").attr("class", "deep");
        for _ in 0..2_000 {
            spec = NodeSpec::element("div").child(spec);
        }
        let root = arena.build(&spec);

        assert_eq!(descendants(root).count(), 2_001);
        assert_eq!(matching_attr("class", "deep", root).count(), 1);
    }
}
