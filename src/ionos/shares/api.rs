//! Group share API operations

use crate::config::api;
use crate::error::Result;
use crate::ionos::bulk::BulkDeletable;
use crate::ionos::models::{ListQuery, PropertiesBody};
use crate::ionos::{Accepted, IonosClient};

use super::models::{Share, ShareProperties};

fn shares_path(group_id: &str) -> String {
    format!("/{}/{}/{}", api::UM_GROUPS, group_id, api::SHARES)
}

fn share_path(group_id: &str, resource_id: &str) -> String {
    format!("{}/{}", shares_path(group_id), resource_id)
}

impl IonosClient {
    pub async fn list_shares(&self, group_id: &str, query: &ListQuery) -> Result<Vec<Share>> {
        self.fetch_collection(&shares_path(group_id), query, "group shares")
            .await
    }

    pub async fn get_share(&self, group_id: &str, resource_id: &str) -> Result<Share> {
        self.require_resource(&share_path(group_id, resource_id), "share")
            .await
    }

    pub async fn create_share(
        &self,
        group_id: &str,
        resource_id: &str,
        properties: ShareProperties,
    ) -> Result<Accepted<Share>> {
        self.post_json(
            &share_path(group_id, resource_id),
            &PropertiesBody::new(properties),
            "Failed to create share",
        )
        .await
    }

    pub async fn replace_share(
        &self,
        group_id: &str,
        resource_id: &str,
        properties: ShareProperties,
    ) -> Result<Accepted<Share>> {
        self.put_json(
            &share_path(group_id, resource_id),
            &PropertiesBody::new(properties),
            "Failed to update share",
        )
        .await
    }

    pub async fn delete_share(&self, group_id: &str, resource_id: &str) -> Result<Option<String>> {
        self.delete_path(&share_path(group_id, resource_id), "Failed to delete share")
            .await
    }
}

/// Every resource shared with one group
pub struct ShareSet {
    pub group_id: String,
}

impl BulkDeletable for ShareSet {
    type Item = Share;
    const KIND: &'static str = "share";
    const KIND_PLURAL: &'static str = "shares";

    async fn list(&self, client: &IonosClient) -> Result<Vec<Share>> {
        client.list_shares(&self.group_id, &ListQuery::default()).await
    }

    async fn delete(&self, client: &IonosClient, id: &str) -> Result<Option<String>> {
        client.delete_share(&self.group_id, id).await
    }
}
