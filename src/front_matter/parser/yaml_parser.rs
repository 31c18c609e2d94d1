use serde::de::DeserializeOwned;

use crate::utils::error::{SiteError, SiteResult};

/// Parse the YAML text between the front matter delimiters
///
/// An empty block or an explicit `null` document yields `T::default()`.
/// Anything other than a mapping is rejected.
pub fn parse_yaml<T: DeserializeOwned + Default>(yaml: &str) -> SiteResult<T> {
    if yaml.trim().is_empty() {
        return Ok(T::default());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(yaml)
        .map_err(|e| SiteError::FrontMatter(format!("invalid YAML: {}", e)))?;

    match value {
        serde_yaml::Value::Null => Ok(T::default()),
        serde_yaml::Value::Mapping(_) => serde_yaml::from_value(value)
            .map_err(|e| SiteError::FrontMatter(format!("unexpected value: {}", e))),
        _ => Err(SiteError::FrontMatter("expected a mapping of keys to values".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_matter::types::{FrontMatter, Metadata};

    #[test]
    fn test_parse_mapping() {
        let fm: FrontMatter = parse_yaml("title: Home\ntemplate: plain\n").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Home"));
        assert_eq!(fm.template.as_deref(), Some("plain"));
    }

    #[test]
    fn test_blank_and_null_blocks() {
        let blank: Metadata = parse_yaml("  \n").unwrap();
        assert!(blank.is_empty());

        let null: Metadata = parse_yaml("~\n").unwrap();
        assert!(null.is_empty());
    }

    #[test]
    fn test_rejects_scalars_and_bad_yaml() {
        assert!(parse_yaml::<Metadata>("just a string\n").is_err());
        assert!(parse_yaml::<Metadata>("title: [unclosed\n").is_err());
    }
}
