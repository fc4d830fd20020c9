//! NIC API operations

use crate::config::api;
use crate::error::Result;
use crate::ionos::bulk::BulkDeletable;
use crate::ionos::models::{ListQuery, PropertiesBody, ServerScope};
use crate::ionos::{Accepted, IonosClient};

use super::models::{Nic, NicProperties};

fn nics_path(scope: &ServerScope) -> String {
    format!("{}/{}", scope.path(), api::NICS)
}

impl IonosClient {
    pub async fn list_nics(&self, scope: &ServerScope, query: &ListQuery) -> Result<Vec<Nic>> {
        self.fetch_collection(&nics_path(scope), query, "NICs").await
    }

    pub async fn get_nic(&self, scope: &ServerScope, nic_id: &str) -> Result<Nic> {
        self.require_resource(&format!("{}/{}", nics_path(scope), nic_id), "NIC")
            .await
    }

    pub async fn create_nic(
        &self,
        scope: &ServerScope,
        properties: NicProperties,
    ) -> Result<Accepted<Nic>> {
        self.post_json(
            &nics_path(scope),
            &PropertiesBody::new(properties),
            "Failed to create NIC",
        )
        .await
    }

    pub async fn update_nic(
        &self,
        scope: &ServerScope,
        nic_id: &str,
        properties: &NicProperties,
    ) -> Result<Accepted<Nic>> {
        self.patch_json(
            &format!("{}/{}", nics_path(scope), nic_id),
            properties,
            "Failed to update NIC",
        )
        .await
    }

    pub async fn delete_nic(&self, scope: &ServerScope, nic_id: &str) -> Result<Option<String>> {
        self.delete_path(&format!("{}/{}", nics_path(scope), nic_id), "Failed to delete NIC")
            .await
    }
}

/// The NICs of one server
pub struct NicSet {
    pub scope: ServerScope,
}

impl BulkDeletable for NicSet {
    type Item = Nic;
    const KIND: &'static str = "NIC";
    const KIND_PLURAL: &'static str = "NICs";

    async fn list(&self, client: &IonosClient) -> Result<Vec<Nic>> {
        client.list_nics(&self.scope, &ListQuery::default()).await
    }

    async fn delete(&self, client: &IonosClient, id: &str) -> Result<Option<String>> {
        client.delete_nic(&self.scope, id).await
    }
}
