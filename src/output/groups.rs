//! Group columns

use super::common::cell;
use super::TableRow;
use crate::ionos::groups::Group;

impl TableRow for Group {
    const ALL_COLUMNS: &'static [&'static str] = &[
        "GroupId",
        "Name",
        "CreateDataCenter",
        "CreateSnapshot",
        "ReserveIp",
        "AccessActivityLog",
        "CreatePcc",
        "S3Privilege",
        "CreateBackupUnit",
        "CreateInternetAccess",
        "CreateK8s",
        "CreateFlowLog",
        "AccessAndManageMonitoring",
        "AccessAndManageCertificates",
        "ManageDBaaS",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "GroupId",
        "Name",
        "CreateDataCenter",
        "CreateSnapshot",
        "ReserveIp",
        "AccessActivityLog",
        "CreatePcc",
        "S3Privilege",
        "CreateBackupUnit",
        "CreateInternetAccess",
        "CreateK8s",
    ];

    fn cell(&self, column: &str) -> String {
        let p = &self.properties;
        match column {
            "GroupId" => self.id.clone(),
            "Name" => cell(&p.name),
            "CreateDataCenter" => cell(&p.create_data_center),
            "CreateSnapshot" => cell(&p.create_snapshot),
            "ReserveIp" => cell(&p.reserve_ip),
            "AccessActivityLog" => cell(&p.access_activity_log),
            "CreatePcc" => cell(&p.create_pcc),
            "S3Privilege" => cell(&p.s3_privilege),
            "CreateBackupUnit" => cell(&p.create_backup_unit),
            "CreateInternetAccess" => cell(&p.create_internet_access),
            "CreateK8s" => cell(&p.create_k8s_cluster),
            "CreateFlowLog" => cell(&p.create_flow_log),
            "AccessAndManageMonitoring" => cell(&p.access_and_manage_monitoring),
            "AccessAndManageCertificates" => cell(&p.access_and_manage_certificates),
            "ManageDBaaS" => cell(&p.manage_dbaas),
            _ => String::new(),
        }
    }
}
