pub mod yaml_parser;

use serde::de::DeserializeOwned;

use crate::utils::error::{SiteError, SiteResult};

/// Front matter delimiter line
pub const DELIMITER: &str = "---";

/// Check if content opens with a front matter delimiter line
pub fn has_front_matter(content: &str) -> bool {
    opening_rest(content).is_some()
}

/// Split a document into its front matter and body
///
/// Without an opening delimiter the whole text is the body and the front
/// matter is `T::default()`. An unclosed block is an error.
pub fn split<T: DeserializeOwned + Default>(content: &str) -> SiteResult<(T, String)> {
    let rest = match opening_rest(content) {
        Some(rest) => rest,
        None => return Ok((T::default(), content.to_string())),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == DELIMITER {
            let front_matter = yaml_parser::parse_yaml(&rest[..offset])?;
            let body = &rest[offset + line.len()..];
            return Ok((front_matter, body.to_string()));
        }
        offset += line.len();
    }

    Err(SiteError::FrontMatter("missing closing delimiter".to_string()))
}

/// Return only the body of a document, discarding its front matter
pub fn strip(content: &str) -> SiteResult<String> {
    let (_, body) = split::<serde_yaml::Value>(content)?;
    Ok(body)
}

/// Text following the opening delimiter line, if there is one
fn opening_rest(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}
