//! BodyXmlService - the main entry point for content tree to body XML conversion.

use content_tree::{NodeRef, Root};
use tracing::{debug, instrument};

use crate::options::TransformOptions;
use crate::transform::transform;
use crate::{Result, StructuralError};

/// The main service for converting content trees to external body XML
#[derive(Debug, Clone, Default)]
pub struct BodyXmlService {
    options: TransformOptions,
}

impl BodyXmlService {
    /// Create a new BodyXmlService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a BodyXmlService with custom options
    pub fn with_options(options: TransformOptions) -> Self {
        Self { options }
    }

    /// Decode a JSON content tree and convert it to body XML
    #[instrument(skip_all, fields(payload_len = payload.len()))]
    pub fn transform(&self, payload: &[u8]) -> Result<String> {
        let root = Root::from_slice(payload).inspect_err(|err| {
            debug!(error = %err, "content tree decode failed");
        })?;

        self.transform_root(&root)
    }

    /// Convert an already decoded tree
    pub fn transform_root(&self, root: &Root) -> Result<String> {
        if !root.is_root() {
            return Err(StructuralError::NotRoot {
                found: root.node_type.clone(),
            }
            .into());
        }

        let xml = self.transform_node(NodeRef::Root(root))?;
        debug!(output_len = xml.len(), "content tree converted");
        Ok(xml)
    }

    /// Convert any node of a tree, without requiring a root
    pub fn transform_node(&self, node: NodeRef<'_>) -> Result<String> {
        transform(node, &self.options)
    }

    /// Get the current options
    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut TransformOptions {
        &mut self.options
    }
}
