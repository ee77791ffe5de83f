//! Query service - configurable entry point for attribute queries
//!
//! The free functions in [`crate::matcher`], [`crate::search`],
//! [`crate::traverse`] and [`crate::semantic`] all delegate to
//! [`Query::standard`]. Build a [`Query`] with a custom [`QueryConfig`] to
//! change how attribute values are tokenized.

use crate::config::{DelimiterPolicy, QueryConfig};
use crate::matcher::attr_contains;
use crate::search::find_first;
use crate::traverse::descendants;
use crate::types::Node;
use std::ops::ControlFlow;
use std::sync::OnceLock;

/// Stateless query engine bound to one delimiter policy
#[derive(Debug, Clone, Default)]
pub struct Query {
    config: QueryConfig,
}

impl Query {
    /// Create query with the standard delimiter policy
    pub fn new() -> Self {
        Self::with_config(QueryConfig::default())
    }

    /// Create query with custom config
    pub fn with_config(config: QueryConfig) -> Self {
        Self { config }
    }

    /// Shared instance with the standard policy
    pub fn standard() -> &'static Query {
        static STANDARD: OnceLock<Query> = OnceLock::new();
        STANDARD.get_or_init(Query::new)
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn delimiters(&self) -> &DelimiterPolicy {
        &self.config.delimiters
    }

    pub fn has_attr<'n, 'a: 'n>(
        &self,
        key: &str,
        value: &str,
        node: impl Into<Option<&'n Node<'a>>>,
    ) -> bool {
        let node: Option<&Node<'_>> = node.into();
        attr_contains(self.delimiters(), key, value, node)
    }

    pub fn find_attr<'a>(
        &self,
        key: &str,
        value: &str,
        root: &'a Node<'a>,
    ) -> Option<&'a Node<'a>> {
        find_first(root, |node| self.has_attr(key, value, node))
    }

    pub fn matching_attr<'s, 'a>(
        &'s self,
        key: &'s str,
        value: &'s str,
        root: &'a Node<'a>,
    ) -> impl Iterator<Item = &'a Node<'a>> + 's
    where
        'a: 's,
    {
        descendants(root).filter(move |&node| self.has_attr(key, value, node))
    }

    pub fn for_each_attr<'a, F>(&self, key: &str, value: &str, root: &'a Node<'a>, visit: F)
    where
        F: FnMut(&'a Node<'a>),
    {
        self.matching_attr(key, value, root).for_each(visit)
    }

    pub fn visit_attr<'a, B, F>(
        &self,
        key: &str,
        value: &str,
        root: &'a Node<'a>,
        visit: F,
    ) -> ControlFlow<B>
    where
        F: FnMut(&'a Node<'a>) -> ControlFlow<B>,
    {
        self.matching_attr(key, value, root).try_for_each(visit)
    }

    pub fn has_class<'n, 'a: 'n>(
        &self,
        class: &str,
        node: impl Into<Option<&'n Node<'a>>>,
    ) -> bool {
        self.has_attr("class", class, node)
    }

    pub fn find_class<'a>(&self, class: &str, root: &'a Node<'a>) -> Option<&'a Node<'a>> {
        self.find_attr("class", class, root)
    }

    pub fn has_id<'n, 'a: 'n>(&self, id: &str, node: impl Into<Option<&'n Node<'a>>>) -> bool {
        self.has_attr("id", id, node)
    }

    pub fn find_id<'a>(&self, id: &str, root: &'a Node<'a>) -> Option<&'a Node<'a>> {
        self.find_attr("id", id, root)
    }
}
