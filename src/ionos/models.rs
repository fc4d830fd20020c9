//! Shared API data models: entity and collection envelopes, metadata,
//! list queries and parent scopes

use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::error::{IonosError, Result};

/// Server-managed metadata of a resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    /// Lifecycle state: AVAILABLE, BUSY, DESTROYING, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// A single API resource: server-assigned id, metadata and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity<P> {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub properties: P,
}

impl<P> Entity<P> {
    /// Lifecycle state from metadata
    pub fn state(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.state.as_deref())
    }

    /// Creation timestamp from metadata
    pub fn created_date(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.created_date.as_deref())
    }
}

/// A list response; `items` may be missing entirely
#[derive(Debug, Clone, Deserialize)]
pub struct Collection<T> {
    pub items: Option<Vec<T>>,
}

impl<T> Collection<T> {
    /// Items, treating a missing list as empty
    pub fn into_items(self) -> Vec<T> {
        self.items.unwrap_or_default()
    }
}

/// Request body wrapping desired properties
#[derive(Debug, Clone, Serialize)]
pub struct PropertiesBody<P> {
    pub properties: P,
}

impl<P> PropertiesBody<P> {
    pub fn new(properties: P) -> Self {
        Self { properties }
    }
}

/// Query parameters of list requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub depth: u32,
    /// `filter.<key>=<value>` pairs
    pub filters: Vec<(String, String)>,
    pub order_by: Option<String>,
    pub max_results: Option<u32>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            depth: api::DEFAULT_DEPTH,
            filters: Vec::new(),
            order_by: None,
            max_results: None,
        }
    }
}

impl ListQuery {
    /// Parse `KEY=VALUE` filter expressions
    pub fn parse_filters(raw: &[String]) -> Result<Vec<(String, String)>> {
        raw.iter()
            .map(|expr| match expr.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    Ok((key.trim().to_string(), value.trim().to_string()))
                }
                _ => Err(IonosError::Precondition(format!(
                    "Invalid filter '{}': expected KEY=VALUE",
                    expr
                ))),
            })
            .collect()
    }

    /// Render as a URL query string including the leading `?`
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![format!("depth={}", self.depth)];
        for (key, value) in &self.filters {
            parts.push(format!(
                "filter.{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }
        if let Some(order_by) = &self.order_by {
            parts.push(format!("orderBy={}", urlencoding::encode(order_by)));
        }
        if let Some(max) = self.max_results {
            parts.push(format!("maxResults={}", max));
        }
        format!("?{}", parts.join("&"))
    }
}

/// A datacenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatacenterScope {
    pub datacenter_id: String,
}

impl DatacenterScope {
    pub fn path(&self) -> String {
        format!("/datacenters/{}", self.datacenter_id)
    }
}

/// A server inside a datacenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerScope {
    pub datacenter_id: String,
    pub server_id: String,
}

impl ServerScope {
    pub fn path(&self) -> String {
        format!(
            "/datacenters/{}/servers/{}",
            self.datacenter_id, self.server_id
        )
    }
}

/// A NIC attached to a server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicScope {
    pub datacenter_id: String,
    pub server_id: String,
    pub nic_id: String,
}

impl NicScope {
    pub fn path(&self) -> String {
        format!(
            "/datacenters/{}/servers/{}/nics/{}",
            self.datacenter_id, self.server_id, self.nic_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct TestProps {
        name: Option<String>,
    }

    #[test]
    fn test_entity_state_from_metadata() {
        let entity: Entity<TestProps> = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "type": "nic",
            "metadata": { "state": "BUSY", "createdDate": "2024-01-01T00:00:00Z" },
            "properties": { "name": "eth0" }
        }))
        .unwrap();
        assert_eq!(entity.state(), Some("BUSY"));
        assert_eq!(entity.created_date(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(entity.kind.as_deref(), Some("nic"));
        assert_eq!(entity.properties.name.as_deref(), Some("eth0"));
    }

    #[test]
    fn test_entity_without_metadata_or_properties() {
        let entity: Entity<TestProps> =
            serde_json::from_value(serde_json::json!({ "id": "abc" })).unwrap();
        assert!(entity.state().is_none());
        assert!(entity.properties.name.is_none());
    }

    #[test]
    fn test_collection_missing_items_is_empty() {
        let collection: Collection<Entity<TestProps>> =
            serde_json::from_value(serde_json::json!({ "id": "x", "type": "collection" }))
                .unwrap();
        assert!(collection.into_items().is_empty());
    }

    #[test]
    fn test_query_string_defaults() {
        assert_eq!(ListQuery::default().to_query_string(), "?depth=1");
    }

    #[test]
    fn test_query_string_with_filters_and_order() {
        let query = ListQuery {
            depth: 2,
            filters: vec![("name".to_string(), "web server".to_string())],
            order_by: Some("name".to_string()),
            max_results: Some(5),
        };
        assert_eq!(
            query.to_query_string(),
            "?depth=2&filter.name=web%20server&orderBy=name&maxResults=5"
        );
    }

    #[test]
    fn test_parse_filters() {
        let parsed =
            ListQuery::parse_filters(&["name=web".to_string(), "state = BUSY".to_string()])
                .unwrap();
        assert_eq!(
            parsed,
            vec![
                ("name".to_string(), "web".to_string()),
                ("state".to_string(), "BUSY".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_filters_rejects_missing_equals() {
        let err = ListQuery::parse_filters(&["name".to_string()]).unwrap_err();
        assert!(matches!(err, IonosError::Precondition(_)));
    }

    #[test]
    fn test_scope_paths() {
        let nic = NicScope {
            datacenter_id: "dc".to_string(),
            server_id: "srv".to_string(),
            nic_id: "nic".to_string(),
        };
        assert_eq!(nic.path(), "/datacenters/dc/servers/srv/nics/nic");

        let server = ServerScope {
            datacenter_id: "dc".to_string(),
            server_id: "srv".to_string(),
        };
        assert_eq!(server.path(), "/datacenters/dc/servers/srv");

        let dc = DatacenterScope {
            datacenter_id: "dc".to_string(),
        };
        assert_eq!(dc.path(), "/datacenters/dc");
    }
}
