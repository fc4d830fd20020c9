//! Resource API operations

use crate::config::api;
use crate::error::Result;
use crate::ionos::models::ListQuery;
use crate::ionos::IonosClient;

use super::models::Resource;

/// Which resources to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceFilter {
    All,
    OfType(String),
    OfGroup(String),
}

impl ResourceFilter {
    pub fn new(resource_type: Option<&str>, group_id: Option<&str>) -> Self {
        match (resource_type, group_id) {
            (_, Some(group_id)) => ResourceFilter::OfGroup(group_id.to_string()),
            (Some(kind), None) => ResourceFilter::OfType(kind.to_string()),
            (None, None) => ResourceFilter::All,
        }
    }

    fn path(&self) -> String {
        match self {
            ResourceFilter::All => format!("/{}", api::UM_RESOURCES),
            ResourceFilter::OfType(kind) => format!("/{}/{}", api::UM_RESOURCES, kind),
            ResourceFilter::OfGroup(group_id) => {
                format!("/{}/{}/{}", api::UM_GROUPS, group_id, api::RESOURCES)
            }
        }
    }
}

impl IonosClient {
    pub async fn list_resources(
        &self,
        filter: &ResourceFilter,
        query: &ListQuery,
    ) -> Result<Vec<Resource>> {
        self.fetch_collection(&filter.path(), query, "resources")
            .await
    }

    pub async fn get_resource(&self, resource_type: &str, resource_id: &str) -> Result<Resource> {
        self.require_resource(
            &format!("/{}/{}/{}", api::UM_RESOURCES, resource_type, resource_id),
            "resource",
        )
        .await
    }
}
