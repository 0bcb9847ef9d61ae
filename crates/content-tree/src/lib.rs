//! content-tree - typed article content tree
//!
//! This crate provides the node catalog for articles expressed as a content
//! tree, and decodes it from JSON. It is used by `to-external-bodyxml` to
//! render articles for external distribution.
//!
//! # Architecture
//!
//! ```text
//!                     ┌──────────────┐
//! JSON payload ──────▶│ Root / Body  │ ──▶ NodeRef (uniform borrowed view)
//!  (serde_json)       │ slot enums   │
//!                     └──────────────┘
//! ```
//!
//! Every position in the tree is typed by a slot enum ([`BodyBlock`],
//! [`Phrasing`], ...) that decodes on the `type` field, so a tree that
//! decodes is already constrained to legal child variants.
//!
//! # Example
//!
//! ```rust
//! use content_tree::{NodeRef, NodeType, Root};
//!
//! let root = Root::from_slice(br#"{
//!     "type": "root",
//!     "body": {
//!         "type": "body",
//!         "version": 1,
//!         "children": [
//!             {"type": "paragraph", "children": [{"type": "text", "value": "Hello"}]}
//!         ]
//!     }
//! }"#).unwrap();
//!
//! let body = root.body.as_ref().unwrap();
//! let children = NodeRef::from(body).children().unwrap();
//! assert_eq!(children[0].node_type(), NodeType::Paragraph);
//! ```

mod node_ref;
mod nodes;
mod slots;

pub use node_ref::{NodeRef, NodeType};
pub use nodes::*;
pub use slots::{
    BlockquoteChild, BodyBlock, LayoutChild, LayoutSlotChild, ListItemChild, Phrasing,
    ScrollyCopyChild, ScrollySectionChild, TableChild,
};
