//! S3 key command handlers

use std::io::BufRead;

use crate::cli::S3KeyCommand;
use crate::ionos::bulk::run_delete;
use crate::ionos::requests::complete_mutation;
use crate::ionos::IonosClient;
use crate::output::{print_item, print_items};
use crate::settings::{Settings, WaitOptions};
use crate::ui::{clear_spinner, create_spinner};

use super::api::S3KeySet;
use super::models::{merged, S3KeyProperties};

/// Run `ionosctl s3key ...`
pub async fn run_s3key_command(
    client: &IonosClient,
    settings: &Settings,
    command: &S3KeyCommand,
    input: &mut dyn BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        S3KeyCommand::List(args) => {
            let query = args.list.to_query()?;
            let spinner = create_spinner("Fetching S3 keys...", settings.output.quiet);
            let keys = client.list_s3keys(&args.user_id, &query).await;
            clear_spinner(spinner);
            print_items(&keys?, &settings.output)?;
        }
        S3KeyCommand::Get(args) => {
            let key = client.get_s3key(&args.user_id, &args.s3key_id).await?;
            print_item(&key, &settings.output)?;
        }
        S3KeyCommand::Create(args) => {
            let accepted = client.create_s3key(&args.user_id).await?;
            let message = format!("✓ S3 key {} created", accepted.body.id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        S3KeyCommand::Update(args) => {
            let current = client.get_s3key(&args.user_id, &args.s3key_id).await?;
            let overrides = S3KeyProperties {
                active: args.active,
                ..Default::default()
            };
            let body = merged(&current.properties, &overrides);
            let accepted = client
                .replace_s3key(&args.user_id, &args.s3key_id, body)
                .await?;
            let message = format!("✓ S3 key {} updated", args.s3key_id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        S3KeyCommand::Delete(args) => {
            let set = S3KeySet {
                user_id: args.user_id.clone(),
            };
            run_delete(
                client,
                &set,
                args.s3key_id.as_deref(),
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

    fn parse(argv: &[&str]) -> S3KeyCommand {
        match Cli::parse_from(argv).command {
            Command::S3key { command } => command,
            _ => panic!("Expected s3key command"),
        }
    }

    fn quiet_settings() -> Settings {
        let mut settings = Settings::default();
        settings.output.quiet = true;
        settings
    }

    #[tokio::test]
    async fn test_create_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/um/users/u-1/s3keys"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "AKIA1",
                "properties": {"secretKey": "s3cr3t", "active": true}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let command = parse(&["ionosctl", "s3key", "create", "--user-id", "u-1"]);
        run_s3key_command(&client, &quiet_settings(), &command, &mut Cursor::new(""))
            .await
            .unwrap();

        let received = server.received_requests().await.unwrap();
        assert!(received[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_deactivate_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/um/users/u-1/s3keys/AKIA1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "AKIA1",
                "properties": {"active": true}
            })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/um/users/u-1/s3keys/AKIA1"))
            .and(body_json(serde_json::json!({"properties": {"active": false}})))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(serde_json::json!({"id": "AKIA1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let command = parse(&[
            "ionosctl",
            "s3key",
            "update",
            "--user-id",
            "u-1",
            "--s3key-id",
            "AKIA1",
            "--s3key-active=false",
        ]);
        run_s3key_command(&client, &quiet_settings(), &command, &mut Cursor::new(""))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_all_with_no_keys() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/um/users/u-1/s3keys"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let command = parse(&["ionosctl", "s3key", "delete", "--user-id", "u-1", "--all"]);
        let err = run_s3key_command(&client, &quiet_settings(), &command, &mut Cursor::new(""))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No S3 keys found to delete");
    }
}
