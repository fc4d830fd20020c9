//! Generic delete workflow shared by every deletable resource
//!
//! A resource plugs in by implementing [`BulkDeletable`] on its scope
//! struct. Bulk deletion lists the scope, shows what will go, asks once
//! for the whole batch and deletes items one after another, waiting for
//! each request when asked to. Per-item failures do not stop the loop;
//! they are collected into a [`BulkDeleteReport`].

use std::io::BufRead;

use log::{debug, warn};

use crate::error::{IonosError, Result};
use crate::ionos::requests::finish_request;
use crate::ionos::traits::ApiResource;
use crate::ionos::IonosClient;
use crate::output::print_status;
use crate::settings::{Settings, WaitOptions};
use crate::ui::{clear_spinner, confirm_action, create_spinner};

/// A scoped collection whose items can be deleted by id
#[allow(async_fn_in_trait)]
pub trait BulkDeletable {
    type Item: ApiResource;

    /// Singular name used in prompts, e.g. `firewall rule`
    const KIND: &'static str;
    /// Plural name used in messages, e.g. `firewall rules`
    const KIND_PLURAL: &'static str;

    /// List every item in scope
    async fn list(&self, client: &IonosClient) -> Result<Vec<Self::Item>>;

    /// Delete one item, returning the id of the request tracking it
    async fn delete(&self, client: &IonosClient, id: &str) -> Result<Option<String>>;
}

/// Result of deleting one item
#[derive(Debug)]
pub struct DeleteOutcome {
    pub id: String,
    pub name: String,
    pub result: Result<()>,
}

/// Per-item results of a bulk delete
#[derive(Debug)]
pub struct BulkDeleteReport {
    pub kind: &'static str,
    pub outcomes: Vec<DeleteOutcome>,
}

impl BulkDeleteReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// `Ok` when every item was deleted, otherwise one error listing all failures
    pub fn into_result(self) -> Result<()> {
        let total = self.total();
        let details: Vec<String> = self
            .outcomes
            .into_iter()
            .filter_map(|o| match o.result {
                Ok(()) => None,
                Err(e) => Some(format!("{} ({}): {}", o.id, o.name, e)),
            })
            .collect();

        if details.is_empty() {
            Ok(())
        } else {
            Err(IonosError::BulkDelete {
                kind: self.kind.to_string(),
                failed: details.len(),
                total,
                details,
            })
        }
    }
}

/// Delete one item and wait for its request if asked to
async fn delete_and_wait<S: BulkDeletable>(
    client: &IonosClient,
    set: &S,
    id: &str,
    wait: &WaitOptions,
    quiet: bool,
) -> Result<()> {
    let request_id = set.delete(client, id).await?;
    finish_request(client, request_id.as_deref(), wait, quiet).await
}

/// Delete every item of a scope after a single confirmation
pub async fn delete_all<S: BulkDeletable>(
    client: &IonosClient,
    set: &S,
    settings: &Settings,
    wait: &WaitOptions,
    input: &mut dyn BufRead,
) -> Result<BulkDeleteReport> {
    let quiet = settings.output.quiet;

    let spinner = create_spinner(&format!("Fetching {}...", S::KIND_PLURAL), quiet);
    let items = set.list(client).await;
    clear_spinner(spinner);
    let items = items?;

    if items.is_empty() {
        return Err(IonosError::NothingToDelete(S::KIND_PLURAL.to_string()));
    }

    eprintln!("{} to be deleted:", capitalize(S::KIND_PLURAL));
    for item in &items {
        eprintln!("  {}  {}", item.id(), item.name().unwrap_or("-"));
    }

    confirm_action(
        &format!("delete all {} {}", items.len(), S::KIND_PLURAL),
        settings.force,
        input,
    )?;

    let mut outcomes = Vec::with_capacity(items.len());
    for item in &items {
        debug!("Deleting {} {}", S::KIND, item.id());
        let result = delete_and_wait(client, set, item.id(), wait, quiet).await;
        match &result {
            Ok(()) => print_status(
                &settings.output,
                &format!("✓ Deleted {} {}", S::KIND, item.id()),
            ),
            Err(e) => warn!("Failed to delete {} {}: {}", S::KIND, item.id(), e),
        }
        outcomes.push(DeleteOutcome {
            id: item.id().to_string(),
            name: item.display_name().to_string(),
            result,
        });
    }

    Ok(BulkDeleteReport {
        kind: S::KIND_PLURAL,
        outcomes,
    })
}

/// Delete a single item after confirmation
pub async fn delete_single<S: BulkDeletable>(
    client: &IonosClient,
    set: &S,
    id: &str,
    settings: &Settings,
    wait: &WaitOptions,
    input: &mut dyn BufRead,
) -> Result<()> {
    confirm_action(&format!("delete {} {}", S::KIND, id), settings.force, input)?;
    delete_and_wait(client, set, id, wait, settings.output.quiet).await?;
    print_status(&settings.output, &format!("✓ Deleted {} {}", S::KIND, id));
    Ok(())
}

/// Entry point of every `delete` subcommand: one id or `--all`
pub async fn run_delete<S>(
    client: &IonosClient,
    set: &S,
    id: Option<&str>,
    all: bool,
    settings: &Settings,
    wait: &WaitOptions,
    input: &mut dyn BufRead,
) -> Result<()>
where
    S: BulkDeletable,
{
    match (id, all) {
        (_, true) => delete_all(client, set, settings, wait, input)
            .await?
            .into_result(),
        (Some(id), false) => delete_single(client, set, id, settings, wait, input).await,
        (None, false) => Err(IonosError::Precondition(format!(
            "Either a {} id or --all is required",
            S::KIND
        ))),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
