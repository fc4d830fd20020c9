//! Resource columns

use super::common::{cell, cell_str};
use super::TableRow;
use crate::ionos::resources::Resource;

impl TableRow for Resource {
    const ALL_COLUMNS: &'static [&'static str] =
        &["ResourceId", "Name", "SecAuthProtection", "Type", "State"];
    const DEFAULT_COLUMNS: &'static [&'static str] =
        &["ResourceId", "Name", "SecAuthProtection", "Type", "State"];

    fn cell(&self, column: &str) -> String {
        match column {
            "ResourceId" => self.id.clone(),
            "Name" => cell(&self.properties.name),
            "SecAuthProtection" => cell(&self.properties.sec_auth_protection),
            "Type" => cell(&self.kind),
            "State" => cell_str(self.state()),
            _ => String::new(),
        }
    }
}
