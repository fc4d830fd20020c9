//! Polling of asynchronous requests until they finish

use indicatif::ProgressBar;
use log::debug;
use std::time::Duration;

use crate::error::{IonosError, Result};
use crate::ionos::{Accepted, IonosClient};
use crate::output::{print_item, print_status, TableRow};
use crate::settings::{Settings, WaitOptions};
use crate::ui::{clear_spinner, create_spinner, finish_spinner};

use super::models::{RequestState, RequestStatus};

/// Poll a request until it is DONE, FAILED or the timeout elapses
pub async fn wait_for_request(
    client: &IonosClient,
    request_id: &str,
    options: &WaitOptions,
    quiet: bool,
) -> Result<RequestStatus> {
    let spinner = create_spinner(&format!("Waiting for request {}...", request_id), quiet);

    let polled = tokio::time::timeout(
        options.timeout,
        poll_until_finished(client, request_id, options.interval, &spinner),
    )
    .await;

    match polled {
        Ok(Ok(status)) => {
            finish_spinner(spinner, &format!("Request {} DONE", request_id));
            Ok(status)
        }
        Ok(Err(e)) => {
            clear_spinner(spinner);
            Err(e)
        }
        Err(_) => {
            clear_spinner(spinner);
            Err(IonosError::WaitTimeout {
                request_id: request_id.to_string(),
                seconds: options.timeout.as_secs(),
            })
        }
    }
}

async fn poll_until_finished(
    client: &IonosClient,
    request_id: &str,
    interval: Duration,
    spinner: &Option<ProgressBar>,
) -> Result<RequestStatus> {
    loop {
        let status = client.get_request_status(request_id).await?;
        debug!("Request {} is {}", request_id, status.state().as_str());

        match status.state() {
            RequestState::Done => return Ok(status),
            RequestState::Failed => {
                return Err(IonosError::RequestFailed {
                    request_id: request_id.to_string(),
                    message: status.message().to_string(),
                })
            }
            state => {
                if let Some(s) = spinner {
                    s.set_message(format!(
                        "Waiting for request {} ({})...",
                        request_id,
                        state.as_str()
                    ));
                }
                tokio::time::sleep(interval).await;
            }
        }
    }
}

/// Finish a mutation: wait for its request when asked to
///
/// Does nothing when waiting is disabled. Waiting without a request id is
/// an error since there is nothing to poll.
pub async fn finish_request(
    client: &IonosClient,
    request_id: Option<&str>,
    options: &WaitOptions,
    quiet: bool,
) -> Result<()> {
    if !options.enabled {
        return Ok(());
    }
    let request_id = request_id.ok_or(IonosError::MissingRequestId)?;
    wait_for_request(client, request_id, options, quiet).await?;
    Ok(())
}

/// Finish an accepted mutation and print the object the API returned
pub async fn complete_mutation<T: TableRow>(
    client: &IonosClient,
    accepted: Accepted<T>,
    settings: &Settings,
    wait: &WaitOptions,
    success: &str,
) -> Result<()> {
    if let Some(id) = &accepted.request_id {
        debug!("Mutation accepted as request {}", id);
    }
    finish_request(
        client,
        accepted.request_id.as_deref(),
        wait,
        settings.output.quiet,
    )
    .await?;
    print_item(&accepted.body, &settings.output)?;
    print_status(&settings.output, success);
    Ok(())
}
