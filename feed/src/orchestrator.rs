use payloads::{APIClient, ClientError, FeedResponse, FetchKind, JobQuery};
use std::cell::Cell;
use std::future::Future;

use crate::{FeedAction, KeyValueStore, PositionStore, ViewState};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no stored position to search nearby")]
    MissingPosition,
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// The job listing endpoints, as seen by the orchestrator.
pub trait JobsApi {
    fn fetch_jobs(
        &self,
        query: &JobQuery,
    ) -> impl Future<Output = Result<FeedResponse, ClientError>>;
}

impl JobsApi for APIClient {
    fn fetch_jobs(
        &self,
        query: &JobQuery,
    ) -> impl Future<Output = Result<FeedResponse, ClientError>> {
        self.jobs(query)
    }
}

/// A request whose query was built from the state at dispatch time.
#[derive(Debug)]
pub struct PendingFetch {
    pub kind: FetchKind,
    pub query: Result<JobQuery, FetchError>,
}

/// Builds and issues the homepage's job listing requests.
pub struct Orchestrator<A, S> {
    api: A,
    positions: PositionStore<S>,
    /// Set once the homepage is torn down.
    closed: Cell<bool>,
}

impl<A: JobsApi, S: KeyValueStore> Orchestrator<A, S> {
    pub fn new(api: A, positions: PositionStore<S>) -> Self {
        Self {
            api,
            positions,
            closed: Cell::new(false),
        }
    }

    /// Stop delivering completions. Requests already in flight still run,
    /// but their outcomes are discarded.
    pub fn close(&self) {
        self.closed.set(true);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn positions(&self) -> &PositionStore<S> {
        &self.positions
    }

    /// Build the query for `kind` from the current state. Nearby searches
    /// read the stored position here, synchronously.
    pub fn prepare(&self, kind: FetchKind, state: &ViewState) -> PendingFetch {
        let query = match kind {
            FetchKind::Nearby => self
                .positions
                .load()
                .map(JobQuery::Nearby)
                .ok_or(FetchError::MissingPosition),
            FetchKind::Search => Ok(JobQuery::Search(state.search_params())),
            FetchKind::Recommend => Ok(JobQuery::Recommend),
        };
        PendingFetch { kind, query }
    }

    /// Issue a prepared request and turn its outcome into the action that
    /// reconciles it. Returns `None` if [`close`](Self::close) was called
    /// before the outcome arrived.
    pub async fn fetch(&self, pending: PendingFetch) -> Option<FeedAction> {
        let result = match pending.query {
            Ok(query) => {
                self.api.fetch_jobs(&query).await.map_err(FetchError::from)
            }
            Err(e) => Err(e),
        };
        if self.is_closed() {
            tracing::debug!("dropping {} response after close", pending.kind);
            return None;
        }
        Some(FeedAction::Completed(pending.kind, result))
    }
}
