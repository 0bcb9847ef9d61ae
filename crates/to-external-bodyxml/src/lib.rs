//! # to-external-bodyxml
//!
//! Convert content tree articles to the "external" XHTML body format.
//!
//! The output is meant for consumers that only understand widely recognised
//! markup, or that must not receive the internal details carried by the
//! content tree: external users, automated HTML pipelines, republishing
//! platforms.
//!
//! ## Design
//!
//! The engine walks the typed tree from `content-tree` in a single recursive
//! pass. Children are rendered first and concatenated in order; each variant
//! then either wraps that inner content in its own markup or drops it.
//! The first error anywhere aborts the whole conversion, so callers get a
//! complete `<body>` fragment or an error, never partial output.
//!
//! ## Example
//!
//! ```rust
//! let payload = br#"{
//!     "type": "root",
//!     "body": {
//!         "type": "body",
//!         "version": 1,
//!         "children": [
//!             {"type": "paragraph", "children": [{"type": "text", "value": "Hello"}]}
//!         ]
//!     }
//! }"#;
//!
//! let xml = to_external_bodyxml::transform(payload).unwrap();
//! assert_eq!(xml, "<body><p>Hello</p></body>");
//! ```

mod options;
mod service;
mod transform;

pub use content_tree::{NodeRef, NodeType, Root};
pub use options::TransformOptions;
pub use service::BodyXmlService;

/// Error type for body XML conversion
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("failed to instantiate content tree")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Unsupported(#[from] UnsupportedVariantError),

    #[error("failed to transform child node {index} ({node_type}) to external XML")]
    Child {
        index: usize,
        node_type: NodeType,
        source: Box<TransformError>,
    },
}

/// The tree does not have the shape the engine needs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("failed to parse node to root: found type {found:?}")]
    NotRoot { found: String },

    #[error("missing node: {what}")]
    MissingNode { what: &'static str },

    #[error("content tree is nested deeper than {limit} nodes")]
    DepthLimitExceeded { limit: usize },
}

/// A node is well formed but carries a value the external format cannot express
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnsupportedVariantError {
    #[error("failed to transform heading with level {level}")]
    HeadingLevel { level: String },
}

/// Broad category of a [`TransformError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The payload could not be decoded into a content tree
    Decode,
    /// The tree is missing a required node or is not rooted correctly
    Structural,
    /// The tree contains content the external format does not support
    Unsupported,
}

impl TransformError {
    /// The innermost error, looking through child wrappers
    pub fn root_cause(&self) -> &TransformError {
        let mut err = self;
        while let TransformError::Child { source, .. } = err {
            err = source;
        }
        err
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::Decode(_) => ErrorKind::Decode,
            TransformError::Structural(_) => ErrorKind::Structural,
            TransformError::Unsupported(_) => ErrorKind::Unsupported,
            TransformError::Child { source, .. } => source.kind(),
        }
    }

    /// Child indices from the failing node's ancestor down to the failing node
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut err = self;
        while let TransformError::Child { index, source, .. } = err {
            path.push(*index);
            err = source;
        }
        path
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;

/// Convert a JSON content tree payload to external body XML with default options
pub fn transform(payload: &[u8]) -> Result<String> {
    BodyXmlService::new().transform(payload)
}

/// Convert a JSON content tree string to external body XML with default options
pub fn transform_str(payload: &str) -> Result<String> {
    transform(payload.as_bytes())
}
