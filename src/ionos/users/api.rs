//! User API operations

use crate::config::api;
use crate::error::Result;
use crate::ionos::bulk::BulkDeletable;
use crate::ionos::models::{ListQuery, PropertiesBody};
use crate::ionos::{Accepted, IonosClient};

use super::models::{User, UserProperties};

fn user_path(user_id: &str) -> String {
    format!("/{}/{}", api::UM_USERS, user_id)
}

impl IonosClient {
    pub async fn list_users(&self, query: &ListQuery) -> Result<Vec<User>> {
        self.fetch_collection(&format!("/{}", api::UM_USERS), query, "users")
            .await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        self.require_resource(&user_path(user_id), "user").await
    }

    pub async fn create_user(&self, properties: UserProperties) -> Result<Accepted<User>> {
        self.post_json(
            &format!("/{}", api::UM_USERS),
            &PropertiesBody::new(properties),
            "Failed to create user",
        )
        .await
    }

    /// Replace every property of a user
    pub async fn replace_user(
        &self,
        user_id: &str,
        properties: UserProperties,
    ) -> Result<Accepted<User>> {
        self.put_json(
            &user_path(user_id),
            &PropertiesBody::new(properties),
            "Failed to update user",
        )
        .await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<Option<String>> {
        self.delete_path(&user_path(user_id), "Failed to delete user")
            .await
    }
}

/// Every user of the contract
pub struct UserSet;

impl BulkDeletable for UserSet {
    type Item = User;
    const KIND: &'static str = "user";
    const KIND_PLURAL: &'static str = "users";

    async fn list(&self, client: &IonosClient) -> Result<Vec<User>> {
        client.list_users(&ListQuery::default()).await
    }

    async fn delete(&self, client: &IonosClient, id: &str) -> Result<Option<String>> {
        client.delete_user(id).await
    }
}
