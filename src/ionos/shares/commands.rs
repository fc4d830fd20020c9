//! Group share command handlers

use std::io::BufRead;

use crate::cli::{ShareCommand, ShareWriteArgs};
use crate::ionos::bulk::run_delete;
use crate::ionos::requests::complete_mutation;
use crate::ionos::IonosClient;
use crate::output::{print_item, print_items};
use crate::settings::{Settings, WaitOptions};
use crate::ui::{clear_spinner, create_spinner};

use super::api::ShareSet;
use super::models::{merged, ShareProperties};

fn properties_from_flags(args: &ShareWriteArgs) -> ShareProperties {
    ShareProperties {
        edit_privilege: args.edit_privilege,
        share_privilege: args.share_privilege,
    }
}

/// Run `ionosctl share ...`
pub async fn run_share_command(
    client: &IonosClient,
    settings: &Settings,
    command: &ShareCommand,
    input: &mut dyn BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ShareCommand::List(args) => {
            let query = args.list.to_query()?;
            let spinner = create_spinner("Fetching shares...", settings.output.quiet);
            let shares = client.list_shares(&args.group_id, &query).await;
            clear_spinner(spinner);
            print_items(&shares?, &settings.output)?;
        }
        ShareCommand::Get(args) => {
            let share = client.get_share(&args.group_id, &args.resource_id).await?;
            print_item(&share, &settings.output)?;
        }
        ShareCommand::Create(args) => {
            let accepted = client
                .create_share(&args.group_id, &args.resource_id, properties_from_flags(args))
                .await?;
            let message = format!(
                "✓ Resource {} shared with group {}",
                args.resource_id, args.group_id
            );
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        ShareCommand::Update(args) => {
            let current = client.get_share(&args.group_id, &args.resource_id).await?;
            let body = merged(&current.properties, &properties_from_flags(args));
            let accepted = client
                .replace_share(&args.group_id, &args.resource_id, body)
                .await?;
            let message = format!("✓ Share {} updated", args.resource_id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        ShareCommand::Delete(args) => {
            let set = ShareSet {
                group_id: args.group_id.clone(),
            };
            run_delete(
                client,
                &set,
                args.resource_id.as_deref(),
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
