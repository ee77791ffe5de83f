//! DOM Query Library
//!
//! Semantic, attribute-based lookups over an already-parsed document tree.
//!
//! ## Philosophy
//!
//! - **Data structures first**: one link down, one link across, nothing else
//! - **Zero copy**: queries return references into the tree, never clones
//! - **No hidden state**: every query is a pure function of tree and arguments
//!
//! ## Core Design
//!
//! ```text
//! CDP JSON → NodeSpec (owned) → DomArena (bump) → &Node ─┬→ find_*     (first match)
//!                                                        └→ for_each_* (every match)
//! ```
//!
//! All finders consider the supplied node as well as its whole subtree, in
//! document (pre-order) order. Multi-valued attributes are split into tokens
//! before comparison: `class="a b"` has the tokens `a` and `b`, and
//! `style="display:none;color:red"` the tokens `display:none` and `color:red`.
//!
//! ```rust
//! use dom_query::{find_class, find_element, has_id, DomArena, NodeSpec};
//!
//! let arena = DomArena::new();
//! let root = arena.build(
//!     &NodeSpec::element("div")
//!         .child(NodeSpec::element("span").attr("id", "title").attr("class", "big bold")),
//! );
//!
//! let span = find_element("span", root).unwrap();
//! assert!(has_id("title", span));
//! assert!(find_class("bold", root).is_some());
//! assert!(find_class("big bold", root).is_none());
//! ```

pub mod arena;
pub mod config;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod query;
pub mod search;
pub mod semantic;
pub mod traverse;
pub mod types;

pub use arena::{DomArena, NodeSpec};
pub use config::{DelimiterPolicy, QueryConfig};
pub use error::{DomError, Result};
pub use loader::CdpLoader;
pub use matcher::{attr, has_attr};
pub use query::Query;
pub use search::{find_attr, find_element, find_first};
pub use semantic::{find_class, find_id, has_class, has_id};
pub use traverse::{descendants, for_each_attr, matching_attr, visit_attr, Descendants};
pub use types::*;
