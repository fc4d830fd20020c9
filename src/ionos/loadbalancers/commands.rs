//! Load balancer command handlers

use std::io::BufRead;

use crate::cli::{LoadbalancerCommand, LoadbalancerFields};
use crate::error::IonosError;
use crate::ionos::bulk::run_delete;
use crate::ionos::models::DatacenterScope;
use crate::ionos::requests::complete_mutation;
use crate::ionos::IonosClient;
use crate::output::{print_item, print_items};
use crate::settings::{Settings, WaitOptions};
use crate::ui::{clear_spinner, create_spinner};

use super::api::LoadbalancerSet;
use super::models::LoadbalancerProperties;

fn properties_from_flags(fields: &LoadbalancerFields) -> LoadbalancerProperties {
    LoadbalancerProperties {
        name: fields.name.clone(),
        ip: fields.ip.clone(),
        dhcp: fields.dhcp,
    }
}

/// Run `ionosctl loadbalancer ...`
pub async fn run_loadbalancer_command(
    client: &IonosClient,
    settings: &Settings,
    command: &LoadbalancerCommand,
    input: &mut dyn BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        LoadbalancerCommand::List(args) => {
            let query = args.list.to_query()?;
            let spinner = create_spinner("Fetching load balancers...", settings.output.quiet);
            let loadbalancers = client
                .list_loadbalancers(&DatacenterScope::from(&args.datacenter), &query)
                .await;
            clear_spinner(spinner);
            print_items(&loadbalancers?, &settings.output)?;
        }
        LoadbalancerCommand::Get(args) => {
            let loadbalancer = client
                .get_loadbalancer(&DatacenterScope::from(&args.datacenter), &args.loadbalancer_id)
                .await?;
            print_item(&loadbalancer, &settings.output)?;
        }
        LoadbalancerCommand::Create(args) => {
            let properties = properties_from_flags(&args.fields).with_create_defaults();
            let accepted = client
                .create_loadbalancer(&DatacenterScope::from(&args.datacenter), properties)
                .await?;
            let message = format!("✓ Load balancer {} created", accepted.body.id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        LoadbalancerCommand::Update(args) => {
            let properties = properties_from_flags(&args.fields);
            if properties == LoadbalancerProperties::default() {
                return Err(IonosError::Precondition(
                    "Nothing to update: set at least one load balancer property".to_string(),
                )
                .into());
            }
            let accepted = client
                .update_loadbalancer(
                    &DatacenterScope::from(&args.datacenter),
                    &args.loadbalancer_id,
                    &properties,
                )
                .await?;
            let message = format!("✓ Load balancer {} updated", args.loadbalancer_id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        LoadbalancerCommand::Delete(args) => {
            let set = LoadbalancerSet {
                scope: DatacenterScope::from(&args.datacenter),
            };
            run_delete(
                client,
                &set,
                args.loadbalancer_id.as_deref(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::io::Cursor;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn parse(argv: &[&str]) -> LoadbalancerCommand {
        match Cli::parse_from(argv).command {
            Command::Loadbalancer { command } => command,
            _ => panic!("Expected loadbalancer command"),
        }
    }

    fn quiet_settings() -> Settings {
        let mut settings = Settings::default();
        settings.output.quiet = true;
        settings
    }

    #[tokio::test]
    async fn test_create_defaults_in_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/datacenters/dc/loadbalancers"))
            .and(body_json(serde_json::json!({
                "properties": {"name": "Unnamed Load Balancer", "dhcp": true}
            })))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(serde_json::json!({"id": "lb-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let command = parse(&["ionosctl", "loadbalancer", "create", "--datacenter-id", "dc"]);
        run_loadbalancer_command(&client, &quiet_settings(), &command, &mut Cursor::new(""))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_patches_only_given_flags() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/datacenters/dc/loadbalancers/lb-1"))
            .and(body_json(serde_json::json!({"dhcp": false})))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(serde_json::json!({"id": "lb-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let command = parse(&[
            "ionosctl",
            "loadbalancer",
            "update",
            "--datacenter-id",
            "dc",
            "--loadbalancer-id",
            "lb-1",
            "--dhcp=false",
        ]);
        run_loadbalancer_command(&client, &quiet_settings(), &command, &mut Cursor::new(""))
            .await
            .unwrap();
    }
}
