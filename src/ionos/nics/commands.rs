//! NIC command handlers

use std::io::BufRead;

use crate::cli::{NicCommand, NicFields};
use crate::error::IonosError;
use crate::ionos::bulk::run_delete;
use crate::ionos::models::ServerScope;
use crate::ionos::requests::complete_mutation;
use crate::ionos::IonosClient;
use crate::output::{print_item, print_items};
use crate::settings::{Settings, WaitOptions};
use crate::ui::{clear_spinner, create_spinner};

use super::api::NicSet;
use super::models::NicProperties;

fn properties_from_flags(fields: &NicFields) -> NicProperties {
    NicProperties {
        name: fields.name.clone(),
        ips: fields.ips.clone(),
        dhcp: fields.dhcp,
        lan: fields.lan,
        firewall_active: fields.firewall_active,
        firewall_type: fields.firewall_type.clone(),
        ..Default::default()
    }
}

/// Run `ionosctl nic ...`
pub async fn run_nic_command(
    client: &IonosClient,
    settings: &Settings,
    command: &NicCommand,
    input: &mut dyn BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        NicCommand::List(args) => {
            let query = args.list.to_query()?;
            let spinner = create_spinner("Fetching NICs...", settings.output.quiet);
            let nics = client.list_nics(&ServerScope::from(&args.server), &query).await;
            clear_spinner(spinner);
            print_items(&nics?, &settings.output)?;
        }
        NicCommand::Get(args) => {
            let nic = client
                .get_nic(&ServerScope::from(&args.server), &args.nic_id)
                .await?;
            print_item(&nic, &settings.output)?;
        }
        NicCommand::Create(args) => {
            let properties = properties_from_flags(&args.fields).with_create_defaults();
            let accepted = client
                .create_nic(&ServerScope::from(&args.server), properties)
                .await?;
            let message = format!("✓ NIC {} created", accepted.body.id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        NicCommand::Update(args) => {
            let properties = properties_from_flags(&args.fields);
            if properties == NicProperties::default() {
                return Err(IonosError::Precondition(
                    "Nothing to update: set at least one NIC property".to_string(),
                )
                .into());
            }
            let accepted = client
                .update_nic(&ServerScope::from(&args.server), &args.nic_id, &properties)
                .await?;
            let message = format!("✓ NIC {} updated", args.nic_id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        NicCommand::Delete(args) => {
            let set = NicSet {
                scope: ServerScope::from(&args.server),
            };
            run_delete(
                client,
                &set,
                args.nic_id.as_deref(),
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
