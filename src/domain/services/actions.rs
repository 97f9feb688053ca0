#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Api;
use crate::domain::models::ApiBox;
use crate::domain::models::ApiError;
use crate::domain::models::Event;
use crate::domain::models::Failure;

fn to_failure<T>(res: Result<T, ApiError>, failure: Failure) -> Result<T, Failure> {
    return res.map_err(|err| {
        tracing::error!(error = %err, failure = %failure, "Request failed");
        return failure;
    });
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs one action against the API and turns the outcome into the event
    /// the UI applies. Every error is collapsed into the operation's fixed
    /// failure.
    pub async fn perform(api: &(dyn Api + Send + Sync), action: Action) -> Event {
        match action {
            Action::Login(credentials) => {
                tracing::debug!(username = %credentials.username, "Logging in");
                let res = api.login(&credentials).await;
                return Event::LoginResponse(to_failure(res, Failure::Auth));
            }
            Action::ListRecords(token) => {
                let res = api.list_records(&token).await;
                return Event::RecordsLoaded(to_failure(res, Failure::Fetch));
            }
            Action::CreateRecord(token, draft) => {
                let res = api.create_record(&token, &draft).await;
                return Event::RecordCreated(to_failure(res, Failure::Save));
            }
            Action::UpdateRecord(token, id, draft) => {
                let res = api.update_record(&token, id, &draft).await;
                return Event::RecordUpdated(id, to_failure(res, Failure::Save));
            }
            Action::DeleteRecord(token, id) => {
                let res = api.delete_record(&token, id).await;
                return Event::RecordDeleted(id, to_failure(res, Failure::Delete));
            }
        }
    }

    /// Each action runs on its own task, so overlapping requests race and the
    /// last response to arrive wins.
    pub async fn start(
        api: ApiBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let api: Arc<dyn Api + Send + Sync> = Arc::from(api);

        while let Some(action) = rx.recv().await {
            let worker_api = api.clone();
            let worker_tx = tx.clone();
            tokio::spawn(async move {
                let event = ActionsService::perform(worker_api.as_ref(), action).await;
                if let Err(err) = worker_tx.send(event) {
                    tracing::warn!(error = %err, "UI is gone, dropping response");
                }
            });
        }

        return Ok(());
    }
}
