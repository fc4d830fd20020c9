//! Share columns

use super::common::cell;
use super::TableRow;
use crate::ionos::shares::Share;

impl TableRow for Share {
    const ALL_COLUMNS: &'static [&'static str] =
        &["ShareId", "EditPrivilege", "SharePrivilege", "Type"];
    const DEFAULT_COLUMNS: &'static [&'static str] =
        &["ShareId", "EditPrivilege", "SharePrivilege", "Type"];

    fn cell(&self, column: &str) -> String {
        match column {
            "ShareId" => self.id.clone(),
            "EditPrivilege" => cell(&self.properties.edit_privilege),
            "SharePrivilege" => cell(&self.properties.share_privilege),
            "Type" => cell(&self.kind),
            _ => String::new(),
        }
    }
}
