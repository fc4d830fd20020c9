//! Flow log command handlers

use std::io::BufRead;

use crate::cli::{FlowLogCommand, FlowLogFields};
use crate::error::IonosError;
use crate::ionos::bulk::run_delete;
use crate::ionos::models::NicScope;
use crate::ionos::requests::complete_mutation;
use crate::ionos::IonosClient;
use crate::output::{print_item, print_items};
use crate::settings::{Settings, WaitOptions};
use crate::ui::{clear_spinner, create_spinner};

use super::api::FlowLogSet;
use super::models::FlowLogProperties;

fn properties_from_flags(bucket: Option<&str>, fields: &FlowLogFields) -> FlowLogProperties {
    FlowLogProperties {
        name: fields.name.clone(),
        action: fields.action.clone(),
        direction: fields.direction.clone(),
        bucket: bucket.map(str::to_string),
    }
}

/// Run `ionosctl flowlog ...`
pub async fn run_flowlog_command(
    client: &IonosClient,
    settings: &Settings,
    command: &FlowLogCommand,
    input: &mut dyn BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        FlowLogCommand::List(args) => {
            let query = args.list.to_query()?;
            let spinner = create_spinner("Fetching flow logs...", settings.output.quiet);
            let flow_logs = client
                .list_flow_logs(&NicScope::from(&args.nic), &query)
                .await;
            clear_spinner(spinner);
            print_items(&flow_logs?, &settings.output)?;
        }
        FlowLogCommand::Get(args) => {
            let flow_log = client
                .get_flow_log(&NicScope::from(&args.nic), &args.flow_log_id)
                .await?;
            print_item(&flow_log, &settings.output)?;
        }
        FlowLogCommand::Create(args) => {
            let properties =
                properties_from_flags(Some(&args.bucket), &args.fields).with_create_defaults();
            let accepted = client
                .create_flow_log(&NicScope::from(&args.nic), properties)
                .await?;
            let message = format!("✓ Flow log {} created", accepted.body.id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        FlowLogCommand::Update(args) => {
            let properties = properties_from_flags(args.bucket.as_deref(), &args.fields);
            if properties == FlowLogProperties::default() {
                return Err(IonosError::Precondition(
                    "Nothing to update: set at least one flow log property".to_string(),
                )
                .into());
            }
            let accepted = client
                .update_flow_log(&NicScope::from(&args.nic), &args.flow_log_id, &properties)
                .await?;
            let message = format!("✓ Flow log {} updated", args.flow_log_id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        FlowLogCommand::Delete(args) => {
            let set = FlowLogSet {
                scope: NicScope::from(&args.nic),
            };
            run_delete(
                client,
                &set,
                args.flow_log_id.as_deref(),
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

    const FLOW_LOGS: &str = "/datacenters/dc/servers/srv/nics/nic/flowlogs";

    fn parse(extra: &[&str]) -> FlowLogCommand {
        let mut argv = vec!["ionosctl", "flowlog"];
        argv.extend_from_slice(extra);
        argv.extend(["--datacenter-id", "dc", "--server-id", "srv", "--nic-id", "nic"]);
        match Cli::parse_from(argv).command {
            Command::Flowlog { command } => command,
            _ => panic!("Expected flowlog command"),
        }
    }

    fn quiet_settings() -> Settings {
        let mut settings = Settings::default();
        settings.output.quiet = true;
        settings
    }

    #[tokio::test]
    async fn test_update_patches_only_given_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(format!("{}/fl-1", FLOW_LOGS)))
            .and(body_json(serde_json::json!({
                "name": "audit",
                "bucket": "logs/nic"
            })))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(serde_json::json!({"id": "fl-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let command = parse(&[
            "update",
            "--flowlog-id",
            "fl-1",
            "--name",
            "audit",
            "--s3bucket",
            "logs/nic",
        ]);
        run_flowlog_command(&client, &quiet_settings(), &command, &mut Cursor::new(""))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_without_flags_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(202))
            .expect(0)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let command = parse(&["update", "--flowlog-id", "fl-1"]);
        let err = run_flowlog_command(&client, &quiet_settings(), &command, &mut Cursor::new(""))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Nothing to update"));
    }

    #[tokio::test]
    async fn test_delete_all_lists_once_and_deletes_each() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(FLOW_LOGS))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    {"id": "fl-1", "properties": {"name": "audit"}},
                    {"id": "fl-2"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("{}/fl-1", FLOW_LOGS)))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("{}/fl-2", FLOW_LOGS)))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let command = parse(&["delete", "--all"]);
        run_flowlog_command(&client, &quiet_settings(), &command, &mut Cursor::new("YES\n"))
            .await
            .unwrap();
    }
}
