//! User columns

use super::common::{cell, format_timestamp};
use super::TableRow;
use crate::ionos::users::User;

impl TableRow for User {
    const ALL_COLUMNS: &'static [&'static str] = &[
        "UserId",
        "Firstname",
        "Lastname",
        "Email",
        "Administrator",
        "ForceSecAuth",
        "SecAuthActive",
        "S3CanonicalUserId",
        "Active",
        "CreatedDate",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "UserId",
        "Firstname",
        "Lastname",
        "Email",
        "Administrator",
        "ForceSecAuth",
        "SecAuthActive",
        "Active",
    ];

    fn cell(&self, column: &str) -> String {
        let p = &self.properties;
        match column {
            "UserId" => self.id.clone(),
            "Firstname" => cell(&p.firstname),
            "Lastname" => cell(&p.lastname),
            "Email" => cell(&p.email),
            "Administrator" => cell(&p.administrator),
            "ForceSecAuth" => cell(&p.force_sec_auth),
            "SecAuthActive" => cell(&p.sec_auth_active),
            "S3CanonicalUserId" => cell(&p.s3_canonical_user_id),
            "Active" => cell(&p.active),
            "CreatedDate" => format_timestamp(self.created_date()),
            _ => String::new(),
        }
    }
}
