//! Request command handlers

use log::debug;
use std::time::Duration;

use crate::cli::RequestCommand;
use crate::ionos::IonosClient;
use crate::output::{print_item, print_items, print_status};
use crate::settings::{Settings, WaitOptions};
use crate::ui::{clear_spinner, create_spinner};

use super::waiter::wait_for_request;

/// Run `ionosctl request <list|get|wait>`
pub async fn run_request_command(
    client: &IonosClient,
    settings: &Settings,
    command: &RequestCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        RequestCommand::List(args) => {
            let query = args.to_query()?;
            debug!("Listing requests with {:?}", query);

            let spinner = create_spinner("Fetching requests...", settings.output.quiet);
            let requests = client.list_requests(&query).await;
            clear_spinner(spinner);

            print_items(&requests?, &settings.output)?;
        }
        RequestCommand::Get(args) => {
            let request = client.get_request(&args.request_id).await?;
            print_item(&request, &settings.output)?;
        }
        RequestCommand::Wait(args) => {
            let options = WaitOptions::waiting(Duration::from_secs(args.timeout));
            let status =
                wait_for_request(client, &args.request_id, &options, settings.output.quiet)
                    .await?;
            print_status(
                &settings.output,
                &format!(
                    "✓ Request {} finished: {}",
                    args.request_id,
                    status.message()
                ),
            );
        }
    }

    Ok(())
}
