//! Group API operations

use serde::Serialize;

use crate::config::api;
use crate::error::Result;
use crate::ionos::bulk::BulkDeletable;
use crate::ionos::models::{ListQuery, PropertiesBody};
use crate::ionos::users::User;
use crate::ionos::{Accepted, IonosClient};

use super::models::{Group, GroupProperties};

fn group_path(group_id: &str) -> String {
    format!("/{}/{}", api::UM_GROUPS, group_id)
}

fn members_path(group_id: &str) -> String {
    format!("{}/{}", group_path(group_id), api::USERS)
}

#[derive(Serialize)]
struct MemberBody<'a> {
    id: &'a str,
}

impl IonosClient {
    pub async fn list_groups(&self, query: &ListQuery) -> Result<Vec<Group>> {
        self.fetch_collection(&format!("/{}", api::UM_GROUPS), query, "groups")
            .await
    }

    pub async fn get_group(&self, group_id: &str) -> Result<Group> {
        self.require_resource(&group_path(group_id), "group").await
    }

    pub async fn create_group(&self, properties: GroupProperties) -> Result<Accepted<Group>> {
        self.post_json(
            &format!("/{}", api::UM_GROUPS),
            &PropertiesBody::new(properties),
            "Failed to create group",
        )
        .await
    }

    /// Replace every property of a group
    pub async fn replace_group(
        &self,
        group_id: &str,
        properties: GroupProperties,
    ) -> Result<Accepted<Group>> {
        self.put_json(
            &group_path(group_id),
            &PropertiesBody::new(properties),
            "Failed to update group",
        )
        .await
    }

    pub async fn delete_group(&self, group_id: &str) -> Result<Option<String>> {
        self.delete_path(&group_path(group_id), "Failed to delete group")
            .await
    }

    pub async fn list_group_users(&self, group_id: &str) -> Result<Vec<User>> {
        self.fetch_collection(
            &members_path(group_id),
            &ListQuery::default(),
            "group users",
        )
        .await
    }

    pub async fn add_group_user(&self, group_id: &str, user_id: &str) -> Result<Accepted<User>> {
        self.post_json(
            &members_path(group_id),
            &MemberBody { id: user_id },
            "Failed to add user to group",
        )
        .await
    }

    pub async fn remove_group_user(&self, group_id: &str, user_id: &str) -> Result<Option<String>> {
        self.delete_path(
            &format!("{}/{}", members_path(group_id), user_id),
            "Failed to remove user from group",
        )
        .await
    }
}

/// Every group of the contract
pub struct GroupSet;

impl BulkDeletable for GroupSet {
    type Item = Group;
    const KIND: &'static str = "group";
    const KIND_PLURAL: &'static str = "groups";

    async fn list(&self, client: &IonosClient) -> Result<Vec<Group>> {
        client.list_groups(&ListQuery::default()).await
    }

    async fn delete(&self, client: &IonosClient, id: &str) -> Result<Option<String>> {
        client.delete_group(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_add_group_user_posts_user_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/um/groups/g-1/users"))
            .and(body_json(serde_json::json!({"id": "u-1"})))
            .respond_with(
                ResponseTemplate::new(202)
                    .insert_header("Location", "https://host/cloudapi/v6/requests/r-9/status")
                    .set_body_json(serde_json::json!({
                        "id": "u-1",
                        "properties": {"email": "ada@example.com"}
                    })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let accepted = client.add_group_user("g-1", "u-1").await.unwrap();
        assert_eq!(accepted.body.id, "u-1");
        assert_eq!(accepted.request_id.as_deref(), Some("r-9"));
    }

    #[tokio::test]
    async fn test_remove_group_user_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/um/groups/g-1/users/u-1"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        assert_eq!(client.remove_group_user("g-1", "u-1").await.unwrap(), None);
    }
}
