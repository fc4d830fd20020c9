//! S3 key API operations

use crate::config::api;
use crate::error::Result;
use crate::ionos::bulk::BulkDeletable;
use crate::ionos::models::{ListQuery, PropertiesBody};
use crate::ionos::{Accepted, IonosClient};

use super::models::{S3Key, S3KeyProperties};

fn keys_path(user_id: &str) -> String {
    format!("/{}/{}/{}", api::UM_USERS, user_id, api::S3KEYS)
}

fn key_path(user_id: &str, key_id: &str) -> String {
    format!("{}/{}", keys_path(user_id), key_id)
}

impl IonosClient {
    pub async fn list_s3keys(&self, user_id: &str, query: &ListQuery) -> Result<Vec<S3Key>> {
        self.fetch_collection(&keys_path(user_id), query, "S3 keys")
            .await
    }

    pub async fn get_s3key(&self, user_id: &str, key_id: &str) -> Result<S3Key> {
        self.require_resource(&key_path(user_id, key_id), "S3 key")
            .await
    }

    /// Generate a new key; the API takes no body
    pub async fn create_s3key(&self, user_id: &str) -> Result<Accepted<S3Key>> {
        self.post_empty(&keys_path(user_id), "Failed to create S3 key")
            .await
    }

    pub async fn replace_s3key(
        &self,
        user_id: &str,
        key_id: &str,
        properties: S3KeyProperties,
    ) -> Result<Accepted<S3Key>> {
        self.put_json(
            &key_path(user_id, key_id),
            &PropertiesBody::new(properties),
            "Failed to update S3 key",
        )
        .await
    }

    pub async fn delete_s3key(&self, user_id: &str, key_id: &str) -> Result<Option<String>> {
        self.delete_path(&key_path(user_id, key_id), "Failed to delete S3 key")
            .await
    }
}

/// Every S3 key of one user
pub struct S3KeySet {
    pub user_id: String,
}

impl BulkDeletable for S3KeySet {
    type Item = S3Key;
    const KIND: &'static str = "S3 key";
    const KIND_PLURAL: &'static str = "S3 keys";

    async fn list(&self, client: &IonosClient) -> Result<Vec<S3Key>> {
        client.list_s3keys(&self.user_id, &ListQuery::default()).await
    }

    async fn delete(&self, client: &IonosClient, id: &str) -> Result<Option<String>> {
        client.delete_s3key(&self.user_id, id).await
    }
}
