//! Slot enums
//!
//! A slot enum constrains which node variants may appear at a position in the
//! tree. Each one decodes on the `type` field and embeds exactly one node.
//! Discriminators the model does not know decode to `Unknown`; a known node
//! type that is not allowed in the slot is a decode error.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::node_ref::{NodeRef, NodeType};
use crate::nodes::*;

macro_rules! slot {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $($variant($variant),)+
            Unknown,
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                #[derive(Deserialize)]
                #[serde(tag = "type", rename_all = "kebab-case")]
                enum Allowed {
                    $($variant($variant),)+
                }

                let value = Value::deserialize(deserializer)?;
                if let Some(tag) = value.get("type").and_then(Value::as_str) {
                    if NodeType::from_wire(tag).is_none() {
                        return Ok($name::Unknown);
                    }
                }

                match Allowed::deserialize(value).map_err(<D::Error as serde::de::Error>::custom)? {
                    $(Allowed::$variant(node) => Ok($name::$variant(node)),)+
                }
            }
        }

        impl $name {
            /// The single node held in this slot
            pub fn embedded(&self) -> NodeRef<'_> {
                match self {
                    $($name::$variant(node) => NodeRef::$variant(node),)+
                    $name::Unknown => NodeRef::Unknown,
                }
            }
        }

        $(
            impl From<$variant> for $name {
                fn from(node: $variant) -> Self {
                    $name::$variant(node)
                }
            }
        )+
    };
}

slot! {
    /// Block-level content directly under the body
    BodyBlock {
        Paragraph,
        Heading,
        ImageSet,
        BigNumber,
        CustomCodeComponent,
        Layout,
        List,
        Blockquote,
        Pullquote,
        ScrollyBlock,
        ThematicBreak,
        Table,
        Recommended,
        Tweet,
        Video,
        YoutubeVideo,
        Flourish,
        Text,
    }
}

slot! {
    /// Inline content permitted inside running text
    Phrasing {
        Text,
        Break,
        Strong,
        Emphasis,
        Strikethrough,
        Link,
    }
}

slot! {
    ListItemChild {
        Paragraph,
        Text,
        Break,
        Strong,
        Emphasis,
        Strikethrough,
        Link,
    }
}

slot! {
    BlockquoteChild {
        Paragraph,
        Text,
        Break,
        Strong,
        Emphasis,
        Strikethrough,
        Link,
    }
}

slot! {
    LayoutChild {
        Heading,
        LayoutImage,
        LayoutSlot,
    }
}

slot! {
    LayoutSlotChild {
        Heading,
        Paragraph,
        LayoutImage,
    }
}

slot! {
    ScrollySectionChild {
        ScrollyImage,
        ScrollyCopy,
    }
}

slot! {
    ScrollyCopyChild {
        ScrollyHeading,
        Paragraph,
    }
}

slot! {
    TableChild {
        TableCaption,
        TableBody,
        TableFooter,
    }
}
