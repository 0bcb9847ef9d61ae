//! Borrowed, uniform view over any node in a content tree.

use std::fmt;

use crate::nodes::*;
use crate::slots::*;

/// Wire discriminator of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Root,
    Body,
    Text,
    Break,
    ThematicBreak,
    Paragraph,
    Heading,
    Strong,
    Emphasis,
    Strikethrough,
    Link,
    List,
    ListItem,
    Blockquote,
    Pullquote,
    ImageSet,
    Table,
    TableCaption,
    TableBody,
    TableFooter,
    TableRow,
    TableCell,
    Video,
    YoutubeVideo,
    ScrollyBlock,
    ScrollySection,
    ScrollyImage,
    ScrollyCopy,
    ScrollyHeading,
    Layout,
    LayoutSlot,
    LayoutImage,
    Recommended,
    Tweet,
    Flourish,
    BigNumber,
    CustomCodeComponent,
    /// A discriminator the model does not know
    Unknown,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Root => "root",
            NodeType::Body => "body",
            NodeType::Text => "text",
            NodeType::Break => "break",
            NodeType::ThematicBreak => "thematic-break",
            NodeType::Paragraph => "paragraph",
            NodeType::Heading => "heading",
            NodeType::Strong => "strong",
            NodeType::Emphasis => "emphasis",
            NodeType::Strikethrough => "strikethrough",
            NodeType::Link => "link",
            NodeType::List => "list",
            NodeType::ListItem => "list-item",
            NodeType::Blockquote => "blockquote",
            NodeType::Pullquote => "pullquote",
            NodeType::ImageSet => "image-set",
            NodeType::Table => "table",
            NodeType::TableCaption => "table-caption",
            NodeType::TableBody => "table-body",
            NodeType::TableFooter => "table-footer",
            NodeType::TableRow => "table-row",
            NodeType::TableCell => "table-cell",
            NodeType::Video => "video",
            NodeType::YoutubeVideo => "youtube-video",
            NodeType::ScrollyBlock => "scrolly-block",
            NodeType::ScrollySection => "scrolly-section",
            NodeType::ScrollyImage => "scrolly-image",
            NodeType::ScrollyCopy => "scrolly-copy",
            NodeType::ScrollyHeading => "scrolly-heading",
            NodeType::Layout => "layout",
            NodeType::LayoutSlot => "layout-slot",
            NodeType::LayoutImage => "layout-image",
            NodeType::Recommended => "recommended",
            NodeType::Tweet => "tweet",
            NodeType::Flourish => "flourish",
            NodeType::BigNumber => "big-number",
            NodeType::CustomCodeComponent => "custom-code-component",
            NodeType::Unknown => "unknown",
        }
    }

    /// Look up a wire discriminator. Unrecognised values give `None`.
    pub fn from_wire(value: &str) -> Option<NodeType> {
        let node_type = match value {
            "root" => NodeType::Root,
            "body" => NodeType::Body,
            "text" => NodeType::Text,
            "break" => NodeType::Break,
            "thematic-break" => NodeType::ThematicBreak,
            "paragraph" => NodeType::Paragraph,
            "heading" => NodeType::Heading,
            "strong" => NodeType::Strong,
            "emphasis" => NodeType::Emphasis,
            "strikethrough" => NodeType::Strikethrough,
            "link" => NodeType::Link,
            "list" => NodeType::List,
            "list-item" => NodeType::ListItem,
            "blockquote" => NodeType::Blockquote,
            "pullquote" => NodeType::Pullquote,
            "image-set" => NodeType::ImageSet,
            "table" => NodeType::Table,
            "table-caption" => NodeType::TableCaption,
            "table-body" => NodeType::TableBody,
            "table-footer" => NodeType::TableFooter,
            "table-row" => NodeType::TableRow,
            "table-cell" => NodeType::TableCell,
            "video" => NodeType::Video,
            "youtube-video" => NodeType::YoutubeVideo,
            "scrolly-block" => NodeType::ScrollyBlock,
            "scrolly-section" => NodeType::ScrollySection,
            "scrolly-image" => NodeType::ScrollyImage,
            "scrolly-copy" => NodeType::ScrollyCopy,
            "scrolly-heading" => NodeType::ScrollyHeading,
            "layout" => NodeType::Layout,
            "layout-slot" => NodeType::LayoutSlot,
            "layout-image" => NodeType::LayoutImage,
            "recommended" => NodeType::Recommended,
            "tweet" => NodeType::Tweet,
            "flourish" => NodeType::Flourish,
            "big-number" => NodeType::BigNumber,
            "custom-code-component" => NodeType::CustomCodeComponent,
            _ => return None,
        };
        Some(node_type)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to any node of the tree.
///
/// Concrete variants borrow the node struct. Slot variants (`BodyBlock`,
/// `Phrasing`, ...) are indirections that own exactly one embedded node and
/// report that node's discriminator.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Root(&'a Root),
    Body(&'a Body),
    Text(&'a Text),
    Break(&'a Break),
    ThematicBreak(&'a ThematicBreak),
    Paragraph(&'a Paragraph),
    Heading(&'a Heading),
    Strong(&'a Strong),
    Emphasis(&'a Emphasis),
    Strikethrough(&'a Strikethrough),
    Link(&'a Link),
    List(&'a List),
    ListItem(&'a ListItem),
    Blockquote(&'a Blockquote),
    Pullquote(&'a Pullquote),
    ImageSet(&'a ImageSet),
    Table(&'a Table),
    TableCaption(&'a TableCaption),
    TableBody(&'a TableBody),
    TableFooter(&'a TableFooter),
    TableRow(&'a TableRow),
    TableCell(&'a TableCell),
    Video(&'a Video),
    YoutubeVideo(&'a YoutubeVideo),
    ScrollyBlock(&'a ScrollyBlock),
    ScrollySection(&'a ScrollySection),
    ScrollyImage(&'a ScrollyImage),
    ScrollyCopy(&'a ScrollyCopy),
    ScrollyHeading(&'a ScrollyHeading),
    Layout(&'a Layout),
    LayoutSlot(&'a LayoutSlot),
    LayoutImage(&'a LayoutImage),
    Recommended(&'a Recommended),
    Tweet(&'a Tweet),
    Flourish(&'a Flourish),
    BigNumber(&'a BigNumber),
    CustomCodeComponent(&'a CustomCodeComponent),

    BodyBlock(&'a BodyBlock),
    BlockquoteChild(&'a BlockquoteChild),
    LayoutChild(&'a LayoutChild),
    LayoutSlotChild(&'a LayoutSlotChild),
    ListItemChild(&'a ListItemChild),
    Phrasing(&'a Phrasing),
    ScrollyCopyChild(&'a ScrollyCopyChild),
    ScrollySectionChild(&'a ScrollySectionChild),
    TableChild(&'a TableChild),

    Unknown,
}

macro_rules! node_ref_from {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for NodeRef<'a> {
                fn from(node: &'a $ty) -> Self {
                    NodeRef::$ty(node)
                }
            }
        )+
    };
}

node_ref_from!(
    Root,
    Body,
    Text,
    Break,
    ThematicBreak,
    Paragraph,
    Heading,
    Strong,
    Emphasis,
    Strikethrough,
    Link,
    List,
    ListItem,
    Blockquote,
    Pullquote,
    ImageSet,
    Table,
    TableCaption,
    TableBody,
    TableFooter,
    TableRow,
    TableCell,
    Video,
    YoutubeVideo,
    ScrollyBlock,
    ScrollySection,
    ScrollyImage,
    ScrollyCopy,
    ScrollyHeading,
    Layout,
    LayoutSlot,
    LayoutImage,
    Recommended,
    Tweet,
    Flourish,
    BigNumber,
    CustomCodeComponent,
    BodyBlock,
    BlockquoteChild,
    LayoutChild,
    LayoutSlotChild,
    ListItemChild,
    Phrasing,
    ScrollyCopyChild,
    ScrollySectionChild,
    TableChild,
);

fn refs<'a, T>(nodes: &'a [T]) -> Vec<NodeRef<'a>>
where
    &'a T: Into<NodeRef<'a>>,
{
    nodes.iter().map(Into::into).collect()
}

impl<'a> NodeRef<'a> {
    /// Discriminator of this node. Slots report the embedded node's type.
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeRef::Root(_) => NodeType::Root,
            NodeRef::Body(_) => NodeType::Body,
            NodeRef::Text(_) => NodeType::Text,
            NodeRef::Break(_) => NodeType::Break,
            NodeRef::ThematicBreak(_) => NodeType::ThematicBreak,
            NodeRef::Paragraph(_) => NodeType::Paragraph,
            NodeRef::Heading(_) => NodeType::Heading,
            NodeRef::Strong(_) => NodeType::Strong,
            NodeRef::Emphasis(_) => NodeType::Emphasis,
            NodeRef::Strikethrough(_) => NodeType::Strikethrough,
            NodeRef::Link(_) => NodeType::Link,
            NodeRef::List(_) => NodeType::List,
            NodeRef::ListItem(_) => NodeType::ListItem,
            NodeRef::Blockquote(_) => NodeType::Blockquote,
            NodeRef::Pullquote(_) => NodeType::Pullquote,
            NodeRef::ImageSet(_) => NodeType::ImageSet,
            NodeRef::Table(_) => NodeType::Table,
            NodeRef::TableCaption(_) => NodeType::TableCaption,
            NodeRef::TableBody(_) => NodeType::TableBody,
            NodeRef::TableFooter(_) => NodeType::TableFooter,
            NodeRef::TableRow(_) => NodeType::TableRow,
            NodeRef::TableCell(_) => NodeType::TableCell,
            NodeRef::Video(_) => NodeType::Video,
            NodeRef::YoutubeVideo(_) => NodeType::YoutubeVideo,
            NodeRef::ScrollyBlock(_) => NodeType::ScrollyBlock,
            NodeRef::ScrollySection(_) => NodeType::ScrollySection,
            NodeRef::ScrollyImage(_) => NodeType::ScrollyImage,
            NodeRef::ScrollyCopy(_) => NodeType::ScrollyCopy,
            NodeRef::ScrollyHeading(_) => NodeType::ScrollyHeading,
            NodeRef::Layout(_) => NodeType::Layout,
            NodeRef::LayoutSlot(_) => NodeType::LayoutSlot,
            NodeRef::LayoutImage(_) => NodeType::LayoutImage,
            NodeRef::Recommended(_) => NodeType::Recommended,
            NodeRef::Tweet(_) => NodeType::Tweet,
            NodeRef::Flourish(_) => NodeType::Flourish,
            NodeRef::BigNumber(_) => NodeType::BigNumber,
            NodeRef::CustomCodeComponent(_) => NodeType::CustomCodeComponent,
            NodeRef::Unknown => NodeType::Unknown,
            slot => match slot.embedded() {
                Some(node) => node.node_type(),
                None => NodeType::Unknown,
            },
        }
    }

    /// Ordered children of a parent node, `None` for anything else.
    ///
    /// Slots are not parents: their single node comes from [`NodeRef::embedded`].
    /// The root's body is reached through the root itself, not as a child.
    pub fn children(&self) -> Option<Vec<NodeRef<'a>>> {
        let children = match *self {
            NodeRef::Body(n) => refs(&n.children),
            NodeRef::Paragraph(n) => refs(&n.children),
            NodeRef::Heading(n) => refs(&n.children),
            NodeRef::Strong(n) => refs(&n.children),
            NodeRef::Emphasis(n) => refs(&n.children),
            NodeRef::Strikethrough(n) => refs(&n.children),
            NodeRef::Link(n) => refs(&n.children),
            NodeRef::List(n) => refs(&n.children),
            NodeRef::ListItem(n) => refs(&n.children),
            NodeRef::Blockquote(n) => refs(&n.children),
            NodeRef::Table(n) => refs(&n.children),
            NodeRef::TableCaption(n) => refs(&n.children),
            NodeRef::TableBody(n) => refs(&n.children),
            NodeRef::TableFooter(n) => refs(&n.children),
            NodeRef::TableRow(n) => refs(&n.children),
            NodeRef::TableCell(n) => refs(&n.children),
            NodeRef::ScrollyBlock(n) => refs(&n.children),
            NodeRef::ScrollySection(n) => refs(&n.children),
            NodeRef::ScrollyCopy(n) => refs(&n.children),
            NodeRef::ScrollyHeading(n) => refs(&n.children),
            NodeRef::Layout(n) => refs(&n.children),
            NodeRef::LayoutSlot(n) => refs(&n.children),
            _ => return None,
        };
        Some(children)
    }

    /// The node embedded in a slot, `None` for anything that is not a slot.
    pub fn embedded(&self) -> Option<NodeRef<'a>> {
        match *self {
            NodeRef::BodyBlock(slot) => Some(slot.embedded()),
            NodeRef::BlockquoteChild(slot) => Some(slot.embedded()),
            NodeRef::LayoutChild(slot) => Some(slot.embedded()),
            NodeRef::LayoutSlotChild(slot) => Some(slot.embedded()),
            NodeRef::ListItemChild(slot) => Some(slot.embedded()),
            NodeRef::Phrasing(slot) => Some(slot.embedded()),
            NodeRef::ScrollyCopyChild(slot) => Some(slot.embedded()),
            NodeRef::ScrollySectionChild(slot) => Some(slot.embedded()),
            NodeRef::TableChild(slot) => Some(slot.embedded()),
            _ => None,
        }
    }
}
