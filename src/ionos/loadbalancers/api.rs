//! Load balancer API operations

use crate::config::api;
use crate::error::Result;
use crate::ionos::bulk::BulkDeletable;
use crate::ionos::models::{DatacenterScope, ListQuery, PropertiesBody};
use crate::ionos::{Accepted, IonosClient};

use super::models::{Loadbalancer, LoadbalancerProperties};

fn loadbalancers_path(scope: &DatacenterScope) -> String {
    format!("{}/{}", scope.path(), api::LOADBALANCERS)
}

impl IonosClient {
    pub async fn list_loadbalancers(
        &self,
        scope: &DatacenterScope,
        query: &ListQuery,
    ) -> Result<Vec<Loadbalancer>> {
        self.fetch_collection(&loadbalancers_path(scope), query, "load balancers")
            .await
    }

    pub async fn get_loadbalancer(&self, scope: &DatacenterScope, id: &str) -> Result<Loadbalancer> {
        self.require_resource(
            &format!("{}/{}", loadbalancers_path(scope), id),
            "load balancer",
        )
        .await
    }

    pub async fn create_loadbalancer(
        &self,
        scope: &DatacenterScope,
        properties: LoadbalancerProperties,
    ) -> Result<Accepted<Loadbalancer>> {
        self.post_json(
            &loadbalancers_path(scope),
            &PropertiesBody::new(properties),
            "Failed to create load balancer",
        )
        .await
    }

    pub async fn update_loadbalancer(
        &self,
        scope: &DatacenterScope,
        id: &str,
        properties: &LoadbalancerProperties,
    ) -> Result<Accepted<Loadbalancer>> {
        self.patch_json(
            &format!("{}/{}", loadbalancers_path(scope), id),
            properties,
            "Failed to update load balancer",
        )
        .await
    }

    pub async fn delete_loadbalancer(&self, scope: &DatacenterScope, id: &str) -> Result<Option<String>> {
        self.delete_path(
            &format!("{}/{}", loadbalancers_path(scope), id),
            "Failed to delete load balancer",
        )
        .await
    }
}

/// The load balancers of one datacenter
pub struct LoadbalancerSet {
    pub scope: DatacenterScope,
}

impl BulkDeletable for LoadbalancerSet {
    type Item = Loadbalancer;
    const KIND: &'static str = "load balancer";
    const KIND_PLURAL: &'static str = "load balancers";

    async fn list(&self, client: &IonosClient) -> Result<Vec<Loadbalancer>> {
        client
            .list_loadbalancers(&self.scope, &ListQuery::default())
            .await
    }

    async fn delete(&self, client: &IonosClient, id: &str) -> Result<Option<String>> {
        client.delete_loadbalancer(&self.scope, id).await
    }
}
