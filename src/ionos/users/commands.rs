//! User command handlers

use std::io::BufRead;

use log::debug;

use crate::cli::{UserCommand, UserFields};
use crate::ionos::bulk::run_delete;
use crate::ionos::requests::complete_mutation;
use crate::ionos::IonosClient;
use crate::output::{print_item, print_items};
use crate::settings::{Settings, WaitOptions};
use crate::ui::{clear_spinner, create_spinner};

use super::api::UserSet;
use super::models::{merged, UserProperties};

fn apply_fields(properties: &mut UserProperties, fields: &UserFields) {
    properties.administrator = fields.administrator;
    properties.force_sec_auth = fields.force_sec_auth;
    properties.active = fields.active;
}

/// Run `ionosctl user ...`
pub async fn run_user_command(
    client: &IonosClient,
    settings: &Settings,
    command: &UserCommand,
    input: &mut dyn BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        UserCommand::List(args) => {
            let query = args.to_query()?;
            let spinner = create_spinner("Fetching users...", settings.output.quiet);
            let users = client.list_users(&query).await;
            clear_spinner(spinner);
            print_items(&users?, &settings.output)?;
        }
        UserCommand::Get(args) => {
            let user = client.get_user(&args.user_id).await?;
            print_item(&user, &settings.output)?;
        }
        UserCommand::Create(args) => {
            let mut properties = UserProperties {
                firstname: Some(args.first_name.clone()),
                lastname: Some(args.last_name.clone()),
                email: Some(args.email.clone()),
                password: Some(args.password.clone()),
                ..Default::default()
            };
            apply_fields(&mut properties, &args.fields);

            let accepted = client.create_user(properties).await?;
            let message = format!("✓ User {} created", accepted.body.id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        UserCommand::Update(args) => {
            let mut overrides = UserProperties {
                firstname: args.first_name.clone(),
                lastname: args.last_name.clone(),
                email: args.email.clone(),
                password: args.password.clone(),
                ..Default::default()
            };
            apply_fields(&mut overrides, &args.fields);

            let current = client.get_user(&args.user_id).await?;
            debug!("Merging user {} update over current properties", args.user_id);
            let body = merged(&current.properties, &overrides);

            let accepted = client.replace_user(&args.user_id, body).await?;
            let message = format!("✓ User {} updated", args.user_id);
            complete_mutation(client, accepted, settings, &WaitOptions::from(&args.wait), &message)
                .await?;
        }
        UserCommand::Delete(args) => {
            run_delete(
                client,
                &UserSet,
                args.user_id.as_deref(),
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
