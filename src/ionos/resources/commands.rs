//! Resource command handlers

use crate::cli::ResourceCommand;
use crate::ionos::IonosClient;
use crate::output::{print_item, print_items};
use crate::settings::Settings;
use crate::ui::{clear_spinner, create_spinner};

use super::api::ResourceFilter;

/// Run `ionosctl resource ...`
pub async fn run_resource_command(
    client: &IonosClient,
    settings: &Settings,
    command: &ResourceCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ResourceCommand::List(args) => {
            let query = args.list.to_query()?;
            let filter =
                ResourceFilter::new(args.resource_type.as_deref(), args.group_id.as_deref());
            let spinner = create_spinner("Fetching resources...", settings.output.quiet);
            let resources = client.list_resources(&filter, &query).await;
            clear_spinner(spinner);
            print_items(&resources?, &settings.output)?;
        }
        ResourceCommand::Get(args) => {
            let resource = client
                .get_resource(&args.resource_type, &args.resource_id)
                .await?;
            print_item(&resource, &settings.output)?;
        }
    }

    Ok(())
}
