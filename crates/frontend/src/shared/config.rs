//! Page-level configuration for the responses display.
//!
//! Options come from the query string, e.g. `?compare=true&data=answers`.
//! The initial `ResponseSet` is read from a `<script type="application/json">`
//! element whose id is given by `data`.

use contracts::domain::a001_model_response::ResponseSet;
use serde::Deserialize;

pub const DEFAULT_DATA_ELEMENT: &str = "ai-responses";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Start in side-by-side comparison mode
    pub compare: bool,
    /// Id of the element carrying the initial responses as JSON
    pub data: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            compare: false,
            data: DEFAULT_DATA_ELEMENT.to_string(),
        }
    }
}

impl DisplayConfig {
    /// Parse a query string (leading `?` allowed). Falls back to defaults.
    pub fn parse_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Self::default();
        }
        serde_qs::from_str(query).unwrap_or_else(|e| {
            log::warn!("Invalid display options '{}': {}", query, e);
            Self::default()
        })
    }

    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::parse_query(&search)
    }
}

/// Read the initial responses embedded in the page.
///
/// A missing element yields an empty set; malformed JSON is an error.
pub fn read_embedded_responses(element_id: &str) -> Result<ResponseSet, String> {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id));

    let Some(element) = element else {
        log::debug!("No #{} element, starting with empty responses", element_id);
        return Ok(ResponseSet::new());
    };

    let json = element.text_content().unwrap_or_default();
    if json.trim().is_empty() {
        return Ok(ResponseSet::new());
    }

    ResponseSet::from_json(&json).map_err(|e| format!("#{}: {:#}", element_id, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_query() {
        assert_eq!(DisplayConfig::parse_query(""), DisplayConfig::default());
        assert_eq!(DisplayConfig::parse_query("?"), DisplayConfig::default());
    }

    #[test]
    fn test_parse_all_options() {
        let config = DisplayConfig::parse_query("?compare=true&data=answers");
        assert!(config.compare);
        assert_eq!(config.data, "answers");
    }

    #[test]
    fn test_partial_query_keeps_other_defaults() {
        let config = DisplayConfig::parse_query("compare=true");
        assert!(config.compare);
        assert_eq!(config.data, DEFAULT_DATA_ELEMENT);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = DisplayConfig::parse_query("?tab=2&data=x");
        assert!(!config.compare);
        assert_eq!(config.data, "x");
    }

    #[test]
    fn test_malformed_value_falls_back() {
        let config = DisplayConfig::parse_query("?compare=maybe");
        assert_eq!(config, DisplayConfig::default());
    }
}
