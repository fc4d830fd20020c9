//! S3 key columns

use super::common::cell;
use super::TableRow;
use crate::ionos::s3keys::S3Key;

impl TableRow for S3Key {
    const ALL_COLUMNS: &'static [&'static str] = &["S3KeyId", "Active", "SecretKey"];
    const DEFAULT_COLUMNS: &'static [&'static str] = &["S3KeyId", "Active"];

    fn cell(&self, column: &str) -> String {
        match column {
            "S3KeyId" => self.id.clone(),
            "Active" => cell(&self.properties.active),
            "SecretKey" => cell(&self.properties.secret_key),
            _ => String::new(),
        }
    }
}
