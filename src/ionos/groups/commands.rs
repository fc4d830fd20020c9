//! Group command handlers

use std::io::BufRead;

use log::debug;

use crate::cli::{GroupCommand, GroupFields, GroupUserCommand};
use crate::ionos::bulk::run_delete;
use crate::ionos::requests::{complete_mutation, finish_request};
use crate::ionos::IonosClient;
use crate::output::{print_item, print_items, print_status};
use crate::settings::{Settings, WaitOptions};
use crate::ui::{clear_spinner, confirm_action, create_spinner};

use super::api::GroupSet;
use super::models::{merged, GroupProperties};

fn properties_from_flags(fields: &GroupFields) -> GroupProperties {
    GroupProperties {
        name: fields.name.clone(),
        create_data_center: fields.create_data_center,
        create_snapshot: fields.create_snapshot,
        reserve_ip: fields.reserve_ip,
        access_activity_log: fields.access_activity_log,
        create_pcc: fields.create_pcc,
        s3_privilege: fields.s3_privilege,
        create_backup_unit: fields.create_backup_unit,
        create_internet_access: fields.create_internet_access,
        create_k8s_cluster: fields.create_k8s_cluster,
        create_flow_log: fields.create_flow_log,
        access_and_manage_monitoring: fields.access_and_manage_monitoring,
        access_and_manage_certificates: fields.access_and_manage_certificates,
        manage_dbaas: fields.manage_dbaas,
    }
}

/// Run `ionosctl group ...`
pub async fn run_group_command(
    client: &IonosClient,
    settings: &Settings,
    command: &GroupCommand,
    input: &mut dyn BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        GroupCommand::List(args) => {
            let query = args.to_query()?;
            let spinner = create_spinner("Fetching groups...", settings.output.quiet);
            let groups = client.list_groups(&query).await;
            clear_spinner(spinner);
            print_items(&groups?, &settings.output)?;
        }
        GroupCommand::Get(args) => {
            let group = client.get_group(&args.group_id).await?;
            print_item(&group, &settings.output)?;
        }
        GroupCommand::Create(args) => {
            let properties = properties_from_flags(&args.fields).with_create_defaults();
            let accepted = client.create_group(properties).await?;
            let message = format!("✓ Group {} created", accepted.body.id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        GroupCommand::Update(args) => {
            let current = client.get_group(&args.group_id).await?;
            debug!("Merging group {} update over current properties", args.group_id);
            let body = merged(&current.properties, &properties_from_flags(&args.fields));

            let accepted = client.replace_group(&args.group_id, body).await?;
            let message = format!("✓ Group {} updated", args.group_id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        GroupCommand::Delete(args) => {
            run_delete(
                client,
                &GroupSet,
                args.group_id.as_deref(),
                args.all,
                settings,
                &WaitOptions::from(&args.wait),
                input,
            )
            .await?;
        }
        GroupCommand::User(user_command) => {
            run_group_user_command(client, settings, user_command, input).await?;
        }
    }

    Ok(())
}

async fn run_group_user_command(
    client: &IonosClient,
    settings: &Settings,
    command: &GroupUserCommand,
    input: &mut dyn BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        GroupUserCommand::List(args) => {
            let spinner = create_spinner("Fetching group users...", settings.output.quiet);
            let users = client.list_group_users(&args.group_id).await;
            clear_spinner(spinner);
            print_items(&users?, &settings.output)?;
        }
        GroupUserCommand::Add(args) => {
            let accepted = client.add_group_user(&args.group_id, &args.user_id).await?;
            let message = format!("✓ User {} added to group {}", args.user_id, args.group_id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        GroupUserCommand::Remove(args) => {
            confirm_action(
                &format!("remove user {} from group {}", args.user_id, args.group_id),
                settings.force,
                input,
            )?;
            let request_id = client
                .remove_group_user(&args.group_id, &args.user_id)
                .await?;
            finish_request(
                client,
                request_id.as_deref(),
                &WaitOptions::from(&args.wait),
                settings.output.quiet,
            )
            .await?;
            print_status(
                &settings.output,
                &format!("✓ User {} removed from group {}", args.user_id, args.group_id),
            );
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
    use wiremock::matchers::{body_json, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn parse(argv: &[&str]) -> GroupCommand {
        match Cli::parse_from(argv).command {
            Command::Group { command } => command,
            _ => panic!("Expected group command"),
        }
    }

    fn quiet_settings() -> Settings {
        let mut settings = Settings::default();
        settings.output.quiet = true;
        settings
    }

    #[tokio::test]
    async fn test_create_uses_default_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/um/groups"))
            .and(body_json(serde_json::json!({
                "properties": {"name": "Unnamed Group", "createSnapshot": true}
            })))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(serde_json::json!({"id": "g-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let command = parse(&["ionosctl", "group", "create", "--create-snapshot"]);
        run_group_command(&client, &quiet_settings(), &command, &mut Cursor::new(""))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_keeps_unset_privileges() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/um/groups/g-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "g-1",
                "properties": {
                    "name": "ops",
                    "createDataCenter": true,
                    "reserveIp": true,
                    "manageDBaaS": false
                }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/um/groups/g-1"))
            .and(body_partial_json(serde_json::json!({
                "properties": {
                    "name": "ops",
                    "createDataCenter": true,
                    "reserveIp": false,
                    "manageDBaaS": true,
                    "createPcc": false
                }
            })))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(serde_json::json!({"id": "g-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let command = parse(&[
            "ionosctl",
            "group",
            "update",
            "--group-id",
            "g-1",
            "--reserve-ip=false",
            "--manage-dbaas",
        ]);
        run_group_command(&client, &quiet_settings(), &command, &mut Cursor::new(""))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_remove_member_declined() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(202))
            .expect(0)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let command = parse(&[
            "ionosctl",
            "group",
            "user",
            "remove",
            "--group-id",
            "g-1",
            "--user-id",
            "u-1",
        ]);
        let err = run_group_command(&client, &quiet_settings(), &command, &mut Cursor::new("n\n"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Operation cancelled"));
    }

    #[tokio::test]
    async fn test_list_members() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/um/groups/g-1/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{"id": "u-1", "properties": {"email": "ada@example.com"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let command = parse(&["ionosctl", "group", "user", "list", "--group-id", "g-1"]);
        run_group_command(&client, &quiet_settings(), &command, &mut Cursor::new(""))
            .await
            .unwrap();
    }
}
