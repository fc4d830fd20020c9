//! JSON and YAML output formatters
//!
//! Structured formats print the API objects as received; --cols is only validated.

use serde::Serialize;

use crate::error::{IonosError, Result};

/// Render any serializable value as pretty JSON
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render any serializable value as YAML
pub fn render_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_yml::to_string(value).map_err(|e| IonosError::Json(format!("YAML error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::Row;

    #[test]
    fn test_render_json_list() {
        let rows = vec![Row::new("id-1", "alpha")];
        let json = render_json(&rows).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"id\": \"id-1\""));
    }

    #[test]
    fn test_render_yaml_single() {
        let yaml = render_yaml(&Row::new("id-1", "alpha")).unwrap();
        assert!(yaml.contains("id: id-1"));
        assert!(yaml.contains("name: alpha"));
    }
}
