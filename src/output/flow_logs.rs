//! Flow log columns

use super::common::{cell, cell_str};
use super::TableRow;
use crate::ionos::flow_logs::FlowLog;

impl TableRow for FlowLog {
    const ALL_COLUMNS: &'static [&'static str] =
        &["FlowLogId", "Name", "Action", "Direction", "Bucket", "State"];
    const DEFAULT_COLUMNS: &'static [&'static str] = Self::ALL_COLUMNS;

    fn cell(&self, column: &str) -> String {
        match column {
            "FlowLogId" => self.id.clone(),
            "Name" => cell(&self.properties.name),
            "Action" => cell(&self.properties.action),
            "Direction" => cell(&self.properties.direction),
            "Bucket" => cell(&self.properties.bucket),
            "State" => cell_str(self.state()),
            _ => String::new(),
        }
    }
}
