//! Attribute reading and token matching

use crate::config::DelimiterPolicy;
use crate::query::Query;
use crate::types::Node;

/// The node's value for `key`, or `""` when it has none
pub fn attr<'a>(key: &str, node: &Node<'a>) -> &'a str {
    node.attr(key).unwrap_or("")
}

/// Whether `key` on `node`, split into tokens, contains `value`
///
/// `style` splits on `;`, everything else on a single space. Tokens are
/// compared exactly. An absent node never matches.
pub fn has_attr<'n, 'a: 'n>(
    key: &str,
    value: &str,
    node: impl Into<Option<&'n Node<'a>>>,
) -> bool {
    Query::standard().has_attr(key, value, node)
}

/// Token match under an explicit delimiter policy
pub(crate) fn attr_contains(
    policy: &DelimiterPolicy,
    key: &str,
    value: &str,
    node: Option<&Node<'_>>,
) -> bool {
    let Some(node) = node else {
        return false;
    };
    if node.attributes.is_empty() {
        return false;
    }

    match node.attr(key) {
        Some(raw) => raw.split(policy.delimiter_for(key)).any(|token| token == value),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{DomArena, NodeSpec};

    #[test]
    fn test_attr_missing_is_empty() {
        let arena = DomArena::new();
        let bare = arena.build(&NodeSpec::element("div"));
        let other = arena.build(&NodeSpec::element("div").attr("id", "x"));

        assert_eq!(attr("class", bare), "");
        assert_eq!(attr("class", other), "");
        assert_eq!(attr("id", other), "x");
    }

    #[test]
    fn test_class_tokens_exact() {
        let arena = DomArena::new();
        let node = arena.build(&NodeSpec::element("div").attr("class", "a b"));

        assert!(has_attr("class", "a", node));
        assert!(has_attr("class", "b", node));
        assert!(!has_attr("class", "a b", node));
        assert!(!has_attr("class", "A", node));
        assert!(!has_attr("class", "", node));
    }

    #[test]
    fn test_style_splits_on_semicolon() {
        let arena = DomArena::new();
        let node = arena.build(&NodeSpec::element("div").attr("style", "display:none;color:red"));

        assert!(has_attr("style", "display:none", node));
        assert!(has_attr("style", "color:red", node));
        assert!(!has_attr("style", "display:none;color:red", node));
    }

    #[test]
    fn test_no_trimming() {
        let arena = DomArena::new();
        let spec = NodeSpec::element("div").attr("style", "display: none; color: red");
        let node = arena.build(&spec);

        assert!(has_attr("style", "display: none", node));
        assert!(has_attr("style", " color: red", node));
        assert!(!has_attr("style", "color: red", node));
    }

    #[test]
    fn test_double_space_yields_empty_token() {
        let arena = DomArena::new();
        let node = arena.build(&NodeSpec::element("div").attr("class", "a  b"));

        assert!(has_attr("class", "a", node));
        assert!(has_attr("class", "b", node));
        assert!(has_attr("class", "", node));
    }

    #[test]
    fn test_absent_node_is_false() {
        assert!(!has_attr("class", "a", None));
    }

    #[test]
    fn test_first_duplicate_key_wins() {
        let arena = DomArena::new();
        let spec = NodeSpec::element("div").attr("class", "x").attr("class", "y");
        let node = arena.build(&spec);

        assert!(has_attr("class", "x", node));
        assert!(!has_attr("class", "y", node));
    }

    #[test]
    fn test_custom_policy() {
        let arena = DomArena::new();
        let node = arena.build(&NodeSpec::element("meta").attr("content", "a,b"));
        let policy = DelimiterPolicy::default().with_delimiter("content", ',');

        assert!(attr_contains(&policy, "content", "b", Some(node)));
        assert!(!has_attr("content", "b", node));
    }
}
