use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::deserializers::deserialize_scalar_string;

/// Free-form front matter, used as template metadata
pub type Metadata = BTreeMap<String, serde_yaml::Value>;

/// Front matter of a content page
///
/// The keys the site understands are typed; everything else lands in
/// `extra` and is carried through to the page untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FrontMatter {
    /// URL slug, overriding the one derived from the file path
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub slug: Option<String>,

    /// Name of the template to render the page with
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub template: Option<String>,

    /// Page title
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub title: Option<String>,

    /// Navigation bar color scheme ("black" or anything else)
    #[serde(default, rename = "navColor", deserialize_with = "deserialize_scalar_string")]
    pub nav_color: Option<String>,

    /// Background image URL
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub background: Option<String>,

    /// Any other keys
    #[serde(flatten)]
    pub extra: Metadata,
}
