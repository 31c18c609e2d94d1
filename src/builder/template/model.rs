use std::collections::HashMap;

use crate::front_matter::Metadata;

/// A layout template: raw HTML with `{{placeholder}}` tokens
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    /// Template body with includes resolved; never markdown-converted as a whole
    pub html: String,
    /// Front matter of the template file
    pub metadata: Metadata,
}

impl Template {
    pub fn new(html: impl Into<String>) -> Self {
        Template {
            html: html.into(),
            metadata: Metadata::new(),
        }
    }
}

/// Templates keyed by file name without extension
pub type TemplateMap = HashMap<String, Template>;
