//! Firewall rule command handlers

use std::io::BufRead;

use log::debug;

use crate::cli::{FirewallRuleCommand, FirewallRuleFields};
use crate::error::IonosError;
use crate::ionos::bulk::run_delete;
use crate::ionos::models::NicScope;
use crate::ionos::requests::complete_mutation;
use crate::ionos::IonosClient;
use crate::output::{print_item, print_items};
use crate::settings::{Settings, WaitOptions};
use crate::ui::{clear_spinner, create_spinner};

use super::api::FirewallRuleSet;
use super::models::FirewallRuleProperties;

/// Properties explicitly given on the command line
fn properties_from_flags(
    protocol: Option<&str>,
    fields: &FirewallRuleFields,
) -> FirewallRuleProperties {
    FirewallRuleProperties {
        name: fields.name.clone(),
        protocol: protocol.map(str::to_string),
        source_mac: fields.source_mac.clone(),
        source_ip: fields.source_ip.clone(),
        destination_ip: fields.destination_ip.clone(),
        icmp_code: fields.icmp_code,
        icmp_type: fields.icmp_type,
        port_range_start: fields.port_range_start,
        port_range_end: fields.port_range_end,
        rule_type: fields.direction.clone(),
        ip_version: fields.ip_version.clone(),
    }
}

/// Run `ionosctl firewallrule ...`
pub async fn run_firewallrule_command(
    client: &IonosClient,
    settings: &Settings,
    command: &FirewallRuleCommand,
    input: &mut dyn BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        FirewallRuleCommand::List(args) => {
            let scope = NicScope::from(&args.nic);
            let query = args.list.to_query()?;

            let spinner = create_spinner("Fetching firewall rules...", settings.output.quiet);
            let rules = client.list_firewall_rules(&scope, &query).await;
            clear_spinner(spinner);

            print_items(&rules?, &settings.output)?;
        }
        FirewallRuleCommand::Get(args) => {
            let scope = NicScope::from(&args.nic);
            let rule = client
                .get_firewall_rule(&scope, &args.firewall_rule_id)
                .await?;
            print_item(&rule, &settings.output)?;
        }
        FirewallRuleCommand::Create(args) => {
            let scope = NicScope::from(&args.nic);
            let properties =
                properties_from_flags(Some(&args.protocol), &args.fields).with_create_defaults();
            debug!("Creating firewall rule on NIC {}: {:?}", scope.nic_id, properties);

            let accepted = client.create_firewall_rule(&scope, properties).await?;
            let message = format!("✓ Firewall rule {} created", accepted.body.id);
            complete_mutation(
                client,
                accepted,
                settings,
                &WaitOptions::from(&args.wait),
                &message,
            )
            .await?;
        }
        FirewallRuleCommand::Update(args) => {
            let scope = NicScope::from(&args.nic);
            let properties = properties_from_flags(args.protocol.as_deref(), &args.fields);
            if properties == FirewallRuleProperties::default() {
                return Err(IonosError::Precondition(
                    "Nothing to update: set at least one firewall rule property".to_string(),
                )
                .into());
            }

            let accepted = client
                .update_firewall_rule(&scope, &args.firewall_rule_id, &properties)
                .await?;
            let message = format!("✓ Firewall rule {} updated", args.firewall_rule_id);
            complete_mutation(
                client,
                accepted,
                settings,
                &WaitOptions::from(&args.wait),
                &message,
            )
            .await?;
        }
        FirewallRuleCommand::Delete(args) => {
            let set = FirewallRuleSet {
                scope: NicScope::from(&args.nic),
            };
            run_delete(
                client,
                &set,
                args.firewall_rule_id.as_deref(),
                args.all,
                settings,
                &WaitOptions::from(&args.wait),
                input,
            )
            .await?;
        }
    }

    Ok(())
}
