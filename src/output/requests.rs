//! Request columns

use super::common::{cell, format_timestamp};
use super::TableRow;
use crate::ionos::requests::Request;

impl TableRow for Request {
    const ALL_COLUMNS: &'static [&'static str] = &[
        "RequestId",
        "CreatedDate",
        "CreatedBy",
        "Method",
        "Status",
        "Url",
        "Body",
        "Targets",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] =
        &["RequestId", "CreatedDate", "Method", "Status", "Targets"];

    fn cell(&self, column: &str) -> String {
        match column {
            "RequestId" => self.id.clone(),
            "CreatedDate" => format_timestamp(self.metadata.created_date.as_deref()),
            "CreatedBy" => cell(&self.metadata.created_by),
            "Method" => cell(&self.properties.method),
            "Status" => self
                .status()
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            "Url" => cell(&self.properties.url),
            "Body" => cell(&self.properties.body),
            "Targets" => self.target_ids().join(","),
            _ => String::new(),
        }
    }
}
