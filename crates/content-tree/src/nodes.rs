//! Content tree node definitions
//!
//! One struct per node variant. The `type` discriminator is not stored on the
//! structs themselves; it is consumed by the slot enums in [`crate::slots`],
//! which decide which variants may appear at a given position.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::slots::{
    BlockquoteChild, BodyBlock, LayoutChild, LayoutSlotChild, ListItemChild, Phrasing,
    ScrollyCopyChild, ScrollySectionChild, TableChild,
};

/// Discriminator value carried by a well-formed root node
pub const ROOT_TYPE: &str = "root";

/// Entry point of a content tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Root {
    /// Wire discriminator, kept as decoded so the root shape can be checked
    #[serde(rename = "type")]
    pub node_type: String,

    pub body: Option<Body>,
}

impl Root {
    pub fn new(body: Body) -> Self {
        Self {
            node_type: ROOT_TYPE.to_string(),
            body: Some(body),
        }
    }

    /// Decode a tree from a JSON byte payload
    pub fn from_slice(payload: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(payload)
    }

    /// Whether the decoded discriminator names a root node
    pub fn is_root(&self) -> bool {
        self.node_type == ROOT_TYPE
    }
}

impl FromStr for Root {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// Article body, the sole child of [`Root`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub version: u32,

    #[serde(default)]
    pub children: Vec<BodyBlock>,
}

impl Body {
    pub fn new(children: Vec<BodyBlock>) -> Self {
        Self {
            version: 1,
            children,
        }
    }
}

/// Literal text
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

/// Hard line break
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Break {}

/// Horizontal rule between blocks
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThematicBreak {}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub children: Vec<Phrasing>,
}

impl Paragraph {
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }
}

/// Named heading rank
///
/// Decoding never fails on the level: values outside the named set are kept
/// in [`HeadingLevel::Other`] so consumers can decide how to reject them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum HeadingLevel {
    Chapter,
    Heading,
    Subheading,
    Label,
    Other(String),
}

impl HeadingLevel {
    pub fn as_str(&self) -> &str {
        match self {
            HeadingLevel::Chapter => "chapter",
            HeadingLevel::Heading => "heading",
            HeadingLevel::Subheading => "subheading",
            HeadingLevel::Label => "label",
            HeadingLevel::Other(level) => level,
        }
    }
}

impl From<String> for HeadingLevel {
    fn from(level: String) -> Self {
        match level.as_str() {
            "chapter" => HeadingLevel::Chapter,
            "heading" => HeadingLevel::Heading,
            "subheading" => HeadingLevel::Subheading,
            "label" => HeadingLevel::Label,
            _ => HeadingLevel::Other(level),
        }
    }
}

impl From<&str> for HeadingLevel {
    fn from(level: &str) -> Self {
        HeadingLevel::from(level.to_string())
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,

    #[serde(default)]
    pub children: Vec<Text>,
}

impl Heading {
    pub fn new(level: impl Into<HeadingLevel>, children: Vec<Text>) -> Self {
        Self {
            level: level.into(),
            children,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Strong {
    #[serde(default)]
    pub children: Vec<Phrasing>,
}

impl Strong {
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Emphasis {
    #[serde(default)]
    pub children: Vec<Phrasing>,
}

impl Emphasis {
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Strikethrough {
    #[serde(default)]
    pub children: Vec<Phrasing>,
}

impl Strikethrough {
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Link {
    pub url: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub children: Vec<Phrasing>,
}

impl Link {
    pub fn new(url: &str, children: Vec<Phrasing>) -> Self {
        Self {
            url: url.to_string(),
            title: String::new(),
            children,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct List {
    pub ordered: bool,

    #[serde(default)]
    pub children: Vec<ListItem>,
}

impl List {
    pub fn new(ordered: bool, children: Vec<ListItem>) -> Self {
        Self { ordered, children }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub children: Vec<ListItemChild>,
}

impl ListItem {
    pub fn new(children: Vec<ListItemChild>) -> Self {
        Self { children }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Blockquote {
    #[serde(default)]
    pub children: Vec<BlockquoteChild>,
}

impl Blockquote {
    pub fn new(children: Vec<BlockquoteChild>) -> Self {
        Self { children }
    }
}

/// Quotation set apart from the running text
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pullquote {
    pub text: String,
    pub source: Option<String>,
}

impl Pullquote {
    pub fn new(text: &str, source: Option<&str>) -> Self {
        Self {
            text: text.to_string(),
            source: source.map(str::to_string),
        }
    }
}

/// Reference to an externally stored set of image renditions
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSet {
    pub id: String,
    pub picture: Option<Value>,
    pub fragment_identifier: Option<String>,
}

impl ImageSet {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumnSettings {
    #[serde(default)]
    pub hide_on_mobile: bool,
    #[serde(default)]
    pub sortable: bool,
    pub sort_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub stripes: bool,
    #[serde(default)]
    pub compact: bool,
    #[serde(default)]
    pub layout_width: String,
    pub collapse_after_how_many_rows: Option<u32>,
    #[serde(default)]
    pub responsive_style: String,
    #[serde(default)]
    pub column_settings: Vec<TableColumnSettings>,
    #[serde(default)]
    pub children: Vec<TableChild>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableCaption {
    #[serde(default)]
    pub children: Vec<Phrasing>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableBody {
    #[serde(default)]
    pub children: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableFooter {
    #[serde(default)]
    pub children: Vec<Phrasing>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub children: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub heading: bool,
    #[serde(default)]
    pub children: Vec<Phrasing>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub embedded: bool,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct YoutubeVideo {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScrollyBlock {
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub children: Vec<ScrollySection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollySection {
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub no_box: bool,
    #[serde(default)]
    pub position: String,
    pub transition: Option<String>,
    #[serde(default)]
    pub children: Vec<ScrollySectionChild>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScrollyImage {
    pub id: String,
    pub picture: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScrollyCopy {
    #[serde(default)]
    pub children: Vec<ScrollyCopyChild>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrollyHeading {
    pub level: HeadingLevel,
    #[serde(default)]
    pub children: Vec<Text>,
}

/// Experimental multi-slot arrangement
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default)]
    pub layout_name: String,
    #[serde(default)]
    pub layout_width: String,
    #[serde(default)]
    pub children: Vec<LayoutChild>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LayoutSlot {
    #[serde(default)]
    pub children: Vec<LayoutSlotChild>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LayoutImage {
    pub id: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub credit: String,
    pub picture: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommended {
    pub id: String,
    pub heading: Option<String>,
    pub teaser_title_override: Option<String>,
    pub teaser: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub html: Option<String>,
}

/// Flourish visualisation embed
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flourish {
    pub id: String,
    #[serde(default)]
    pub layout_width: String,
    #[serde(default)]
    pub flourish_type: String,
    pub description: Option<String>,
    pub timestamp: Option<String>,
    pub fallback_image: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BigNumber {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCodeComponent {
    pub id: String,
    #[serde(default)]
    pub layout_width: String,
    pub path: Option<String>,
    pub version_range: Option<String>,
    pub attributes_last_modified: Option<String>,
    pub attributes: Option<Value>,
}
