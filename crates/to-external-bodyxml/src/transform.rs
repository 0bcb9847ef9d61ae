//! Content tree to external body XML
//!
//! Every node is handled in two steps: its children (if it has any) are
//! transformed in order and concatenated into the inner content, then the
//! variant's rule wraps that inner content, replaces it, or drops it.

use content_tree::{HeadingLevel, ImageSet, Link, NodeRef, Pullquote};
use tracing::trace;

use crate::options::TransformOptions;
use crate::{Result, StructuralError, TransformError, UnsupportedVariantError};

/// Transform a node and everything below it into a body XML string
pub fn transform(node: NodeRef<'_>, options: &TransformOptions) -> Result<String> {
    let mut out = String::new();
    Transformer { options }.node(node, 0, &mut out)?;
    Ok(out)
}

struct Transformer<'o> {
    options: &'o TransformOptions,
}

impl Transformer<'_> {
    fn node(&self, node: NodeRef<'_>, depth: usize, out: &mut String) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(StructuralError::DepthLimitExceeded {
                limit: self.options.max_depth,
            }
            .into());
        }

        let inner = self.inner(node, depth)?;

        match node {
            NodeRef::Root(root) => {
                let body = root
                    .body
                    .as_ref()
                    .ok_or(StructuralError::MissingNode { what: "body" })?;
                self.node(NodeRef::Body(body), depth + 1, out)?;
            }

            NodeRef::Body(_) => wrap("body", &inner, out),

            NodeRef::Text(text) => out.push_str(&text.value),

            NodeRef::Break(_) => out.push_str("<br>"),

            NodeRef::ThematicBreak(_) => out.push_str("<hr>"),

            NodeRef::Paragraph(_) => wrap("p", &inner, out),

            NodeRef::Heading(heading) => wrap(heading_tag(&heading.level)?, &inner, out),

            NodeRef::Strong(_) => wrap("strong", &inner, out),

            NodeRef::Emphasis(_) => wrap("em", &inner, out),

            NodeRef::Strikethrough(_) => wrap("s", &inner, out),

            NodeRef::Link(link) => self.link(link, &inner, out),

            NodeRef::List(list) => wrap(if list.ordered { "ol" } else { "ul" }, &inner, out),

            NodeRef::ListItem(_) => wrap("li", &inner, out),

            NodeRef::Blockquote(_) => wrap("blockquote", &inner, out),

            NodeRef::Pullquote(pullquote) => push_pullquote(pullquote, out),

            NodeRef::ImageSet(image_set) => self.image_set(image_set, out),

            // Not part of the external format yet: whatever the children
            // rendered to is discarded.
            NodeRef::Table(_)
            | NodeRef::TableCaption(_)
            | NodeRef::TableBody(_)
            | NodeRef::TableFooter(_)
            | NodeRef::TableRow(_)
            | NodeRef::TableCell(_)
            | NodeRef::Video(_)
            | NodeRef::YoutubeVideo(_)
            | NodeRef::ScrollyBlock(_)
            | NodeRef::ScrollySection(_)
            | NodeRef::ScrollyImage(_)
            | NodeRef::ScrollyCopy(_)
            | NodeRef::ScrollyHeading(_) => {
                trace!(node_type = %node.node_type(), dropped = inner.len(), "not rendered externally");
            }

            // Published inside experimental markup internally
            NodeRef::Layout(_) | NodeRef::LayoutSlot(_) | NodeRef::LayoutImage(_) => {
                trace!(node_type = %node.node_type(), dropped = inner.len(), "experimental node skipped");
            }

            // Published as custom tags internally
            NodeRef::Recommended(_)
            | NodeRef::Tweet(_)
            | NodeRef::BigNumber(_)
            | NodeRef::CustomCodeComponent(_)
            | NodeRef::Flourish(_) => {
                trace!(node_type = %node.node_type(), "custom component skipped");
            }

            NodeRef::BodyBlock(slot) => self.node(slot.embedded(), depth + 1, out)?,
            NodeRef::BlockquoteChild(slot) => self.node(slot.embedded(), depth + 1, out)?,
            NodeRef::LayoutChild(slot) => self.node(slot.embedded(), depth + 1, out)?,
            NodeRef::LayoutSlotChild(slot) => self.node(slot.embedded(), depth + 1, out)?,
            NodeRef::ListItemChild(slot) => self.node(slot.embedded(), depth + 1, out)?,
            NodeRef::Phrasing(slot) => self.node(slot.embedded(), depth + 1, out)?,
            NodeRef::ScrollyCopyChild(slot) => self.node(slot.embedded(), depth + 1, out)?,
            NodeRef::ScrollySectionChild(slot) => self.node(slot.embedded(), depth + 1, out)?,
            NodeRef::TableChild(slot) => self.node(slot.embedded(), depth + 1, out)?,

            NodeRef::Unknown => trace!("unknown node skipped"),
        }

        Ok(())
    }

    /// Concatenated output of a node's children, empty for childless nodes
    fn inner(&self, node: NodeRef<'_>, depth: usize) -> Result<String> {
        let Some(children) = node.children() else {
            return Ok(String::new());
        };

        let mut inner = String::new();
        for (index, child) in children.into_iter().enumerate() {
            self.node(child, depth + 1, &mut inner)
                .map_err(|source| TransformError::Child {
                    index,
                    node_type: child.node_type(),
                    source: Box::new(source),
                })?;
        }

        Ok(inner)
    }

    // Only links to articles are modeled: the tree does not yet say what a
    // link points at, so every link is rendered as an article reference.
    fn link(&self, link: &Link, inner: &str, out: &mut String) {
        let id = link.url.rsplit('/').next().unwrap_or_default();

        out.push_str("<ft-content type=\"");
        out.push_str(&self.options.article_type);
        out.push_str("\" url=\"");
        out.push_str(&self.options.content_api_base);
        out.push_str(id);
        out.push_str("\">");
        out.push_str(inner);
        // Closing tag differs from the opening one in the published format.
        out.push_str("</ftcontent>");
    }

    fn image_set(&self, image_set: &ImageSet, out: &mut String) {
        out.push_str("<content data-embedded=\"true\" id=\"");
        out.push_str(&image_set.id);
        out.push_str("\" type=\"");
        out.push_str(&self.options.image_set_type);
        out.push_str("\"></content>");
    }
}

fn wrap(tag: &str, inner: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(inner);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn heading_tag(level: &HeadingLevel) -> Result<&'static str> {
    match level {
        HeadingLevel::Chapter => Ok("h1"),
        HeadingLevel::Subheading => Ok("h2"),
        HeadingLevel::Label => Ok("h4"),
        HeadingLevel::Heading | HeadingLevel::Other(_) => {
            Err(UnsupportedVariantError::HeadingLevel {
                level: level.to_string(),
            }
            .into())
        }
    }
}

// Uses the node's own text and source, never its children.
fn push_pullquote(pullquote: &Pullquote, out: &mut String) {
    out.push_str("<pull-quote><pull-quote-text><p>");
    out.push_str(&pullquote.text);
    out.push_str("</p></pull-quote-text><pull-quote-source>");
    out.push_str(pullquote.source.as_deref().unwrap_or_default());
    out.push_str("</pull-quote-source></pull-quote>");
}
