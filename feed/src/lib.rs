//! Homepage state for the job search front end.
//!
//! Everything here is free of browser APIs: the `ui` crate owns the event
//! loop, storage and geolocation, and feeds their results in as
//! [`FeedAction`]s.

pub mod orchestrator;
pub mod position;
pub mod routing;
pub mod slot;
pub mod state;

pub use orchestrator::{FetchError, JobsApi, Orchestrator, PendingFetch};
pub use position::{KeyValueStore, MemoryStore, POSITION_KEY, PositionStore};
pub use slot::{JobSlot, SlotKind};
pub use state::{FeedAction, GeolocationError, ViewState};

use std::time::Duration;

pub const FETCHING_MESSAGE: &str = "Fetching Job Data...";
pub const FETCH_FAILED_MESSAGE: &str = "Fail to fetch data!";
pub const TIMEOUT_MESSAGE: &str =
    "Failed to fetch job data! Please Refresh the Page!";

/// When the homepage leaves its loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPolicy {
    /// Stop loading as soon as any request parses successfully, showing
    /// partial data while the rest of the batch is still in flight.
    #[default]
    FirstResponse,
    /// Stop loading once every request of the batch has settled and at
    /// least one of them succeeded.
    AllSettled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    pub loading_policy: LoadingPolicy,
    /// Delay after mount before the "please refresh" status is shown.
    pub status_timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            loading_policy: LoadingPolicy::default(),
            status_timeout: Duration::from_secs(8),
        }
    }
}
