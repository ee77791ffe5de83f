//! First-match tree search
//!
//! All finders consider the supplied node as well as its whole subtree, in
//! document order, and stop at the first hit.

use crate::query::Query;
use crate::traverse::descendants;
use crate::types::Node;

/// First node in pre-order satisfying `predicate`, root included
pub fn find_first<'a, P>(root: &'a Node<'a>, mut predicate: P) -> Option<&'a Node<'a>>
where
    P: FnMut(&Node<'a>) -> bool,
{
    descendants(root).find(|&node| predicate(node))
}

/// First node whose attribute `key` contains token `value`
pub fn find_attr<'a>(key: &str, value: &str, root: &'a Node<'a>) -> Option<&'a Node<'a>> {
    Query::standard().find_attr(key, value, root)
}

/// First element with tag name `label` (exact comparison)
pub fn find_element<'a>(label: &str, root: &'a Node<'a>) -> Option<&'a Node<'a>> {
    find_first(root, |node| node.is_element() && node.label == label)
}
