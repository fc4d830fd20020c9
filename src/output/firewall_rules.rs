//! Firewall rule columns

use super::common::{cell, cell_str};
use super::TableRow;
use crate::ionos::firewall_rules::FirewallRule;

impl TableRow for FirewallRule {
    const ALL_COLUMNS: &'static [&'static str] = &[
        "FirewallRuleId",
        "Name",
        "Protocol",
        "SourceMac",
        "SourceIP",
        "DestinationIP",
        "PortRangeStart",
        "PortRangeEnd",
        "IcmpCode",
        "IcmpType",
        "Direction",
        "IPVersion",
        "State",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "FirewallRuleId",
        "Name",
        "Protocol",
        "PortRangeStart",
        "PortRangeEnd",
        "Direction",
        "State",
    ];

    fn cell(&self, column: &str) -> String {
        let p = &self.properties;
        match column {
            "FirewallRuleId" => self.id.clone(),
            "Name" => cell(&p.name),
            "Protocol" => cell(&p.protocol),
            "SourceMac" => cell(&p.source_mac),
            "SourceIP" => cell(&p.source_ip),
            "DestinationIP" => cell(&p.destination_ip),
            "PortRangeStart" => cell(&p.port_range_start),
            "PortRangeEnd" => cell(&p.port_range_end),
            "IcmpCode" => cell(&p.icmp_code),
            "IcmpType" => cell(&p.icmp_type),
            "Direction" => cell(&p.rule_type),
            "IPVersion" => cell(&p.ip_version),
            "State" => cell_str(self.state()),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{render_items, OutputOptions};

    fn rule() -> FirewallRule {
        serde_json::from_value(serde_json::json!({
            "id": "fw-1",
            "metadata": {"state": "AVAILABLE"},
            "properties": {"name": "ssh", "protocol": "TCP", "portRangeStart": 22, "type": "INGRESS"}
        }))
        .unwrap()
    }

    #[test]
    fn test_every_column_has_a_cell() {
        let rule = rule();
        assert_eq!(rule.cell("FirewallRuleId"), "fw-1");
        assert_eq!(rule.cell("PortRangeStart"), "22");
        assert_eq!(rule.cell("PortRangeEnd"), "");
        assert_eq!(rule.cell("Direction"), "INGRESS");
        assert_eq!(rule.cell("State"), "AVAILABLE");
    }

    #[test]
    fn test_default_columns_render() {
        let out = render_items(&[rule()], &OutputOptions::default()).unwrap();
        let header = out.lines().next().unwrap();
        assert!(header.contains("FirewallRuleId"));
        assert!(header.contains("Direction"));
        assert!(!header.contains("SourceMac"));
    }
}
