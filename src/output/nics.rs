//! NIC columns

use super::common::{cell, cell_list, cell_str};
use super::TableRow;
use crate::ionos::nics::Nic;

impl TableRow for Nic {
    const ALL_COLUMNS: &'static [&'static str] = &[
        "NicId",
        "Name",
        "Dhcp",
        "LanId",
        "Ips",
        "FirewallActive",
        "FirewallType",
        "Mac",
        "DeviceNumber",
        "PciSlot",
        "State",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] =
        &["NicId", "Name", "Dhcp", "LanId", "Ips", "State"];

    fn cell(&self, column: &str) -> String {
        let p = &self.properties;
        match column {
            "NicId" => self.id.clone(),
            "Name" => cell(&p.name),
            "Dhcp" => cell(&p.dhcp),
            "LanId" => cell(&p.lan),
            "Ips" => cell_list(&p.ips),
            "FirewallActive" => cell(&p.firewall_active),
            "FirewallType" => cell(&p.firewall_type),
            "Mac" => cell(&p.mac),
            "DeviceNumber" => cell(&p.device_number),
            "PciSlot" => cell(&p.pci_slot),
            "State" => cell_str(self.state()),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::output::{render_items, OutputOptions};

    #[test]
    fn test_csv_quotes_ip_list() {
        let nic: Nic = serde_json::from_value(serde_json::json!({
            "id": "nic-1",
            "properties": {"ips": ["10.0.0.5", "10.0.0.6"]}
        }))
        .unwrap();
        let options = OutputOptions {
            format: OutputFormat::Csv,
            cols: Some(vec!["NicId".to_string(), "Ips".to_string()]),
            no_headers: true,
            quiet: false,
        };
        assert_eq!(
            render_items(&[nic], &options).unwrap(),
            "nic-1,\"10.0.0.5,10.0.0.6\""
        );
    }
}
