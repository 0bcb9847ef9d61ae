//! Configuration options for body XML conversion

/// Options for [`crate::BodyXmlService`]
///
/// The defaults produce the external body XML format exactly; the URIs only
/// need changing when targeting a different content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Maximum nesting of nodes, slots included, before conversion is refused
    ///
    /// This bounds trees handed to [`crate::BodyXmlService::transform_root`]
    /// and `transform_node`. Payloads decoded from JSON hit `serde_json`'s
    /// nesting limit of 128 levels first: every node takes an object and a
    /// `children` array, so roughly 60 nested nodes decode and deeper
    /// payloads fail as [`crate::ErrorKind::Decode`].
    pub max_depth: usize,

    /// Ontology type written on links to articles
    pub article_type: String,

    /// Prefix joined with the article identifier on links
    pub content_api_base: String,

    /// Ontology type written on embedded image sets
    pub image_set_type: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            max_depth: 512,
            article_type: "http://www.ft.com/ontology/content/Article".to_string(),
            content_api_base: "http://api.ft.com/content/".to_string(),
            image_set_type: "http://www.ft.com/ontology/content/ImageSet".to_string(),
        }
    }
}
