//! Helpers for the two attributes queried most: `class` and `id`

use crate::query::Query;
use crate::types::Node;

/// Whether `node` carries the html class `class`
pub fn has_class<'n, 'a: 'n>(class: &str, node: impl Into<Option<&'n Node<'a>>>) -> bool {
    Query::standard().has_class(class, node)
}

/// First node (root included) with the html class `class`
pub fn find_class<'a>(class: &str, root: &'a Node<'a>) -> Option<&'a Node<'a>> {
    Query::standard().find_class(class, root)
}

/// Whether `node` carries the html id `id`
///
/// Ids are split on spaces like classes, so `id="a b"` matches both `a` and `b`.
pub fn has_id<'n, 'a: 'n>(id: &str, node: impl Into<Option<&'n Node<'a>>>) -> bool {
    Query::standard().has_id(id, node)
}

/// First node (root included) with the html id `id`
pub fn find_id<'a>(id: &str, root: &'a Node<'a>) -> Option<&'a Node<'a>> {
    Query::standard().find_id(id, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{DomArena, NodeSpec};
    use crate::matcher::attr;

    fn list(arena: &DomArena) -> &Node<'_> {
        let spec = NodeSpec::element("ul").attr("id", "menu").children([
            NodeSpec::element("li").attr("class", "item"),
            NodeSpec::element("li")
                .attr("class", "item active")
                .attr("id", "current"),
            NodeSpec::element("li").attr("class", "item").attr("id", "multi word"),
        ]);
        arena.build(&spec)
    }

    #[test]
    fn test_has_class() {
        let arena = DomArena::new();
        let root = list(&arena);
        let active = root.children().nth(1).unwrap();

        assert!(has_class("item", active));
        assert!(has_class("active", active));
        assert!(!has_class("item active", active));
        assert!(!has_class("item", root));
        assert!(!has_class("item", None));
    }

    #[test]
    fn test_find_class() {
        let arena = DomArena::new();
        let root = list(&arena);

        let active = find_class("active", root).unwrap();
        assert_eq!(attr("id", active), "current");
        assert!(has_class("active", find_class("active", root)));
        assert!(find_class("missing", root).is_none());
    }

    #[test]
    fn test_has_id_and_find_id() {
        let arena = DomArena::new();
        let root = list(&arena);

        assert!(has_id("menu", root));
        let current = find_id("current", root).unwrap();
        assert!(has_id("current", current));
        assert!(!has_id("menu", current));
        assert!(!has_id("current", None));
    }

    #[test]
    fn test_id_split_on_space() {
        let arena = DomArena::new();
        let root = list(&arena);

        let multi = find_id("word", root).unwrap();
        assert!(has_id("multi", multi));
        assert!(find_id("multi word", root).is_none());
    }
}
