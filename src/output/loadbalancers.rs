//! Load balancer columns

use super::common::{cell, cell_str};
use super::TableRow;
use crate::ionos::loadbalancers::Loadbalancer;

impl TableRow for Loadbalancer {
    const ALL_COLUMNS: &'static [&'static str] = &["LoadBalancerId", "Name", "Ip", "Dhcp", "State"];
    const DEFAULT_COLUMNS: &'static [&'static str] = Self::ALL_COLUMNS;

    fn cell(&self, column: &str) -> String {
        match column {
            "LoadBalancerId" => self.id.clone(),
            "Name" => cell(&self.properties.name),
            "Ip" => cell(&self.properties.ip),
            "Dhcp" => cell(&self.properties.dhcp),
            "State" => cell_str(self.state()),
            _ => String::new(),
        }
    }
}
