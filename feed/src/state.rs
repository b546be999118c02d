use payloads::{FeedResponse, FetchKind, FullTime, SearchParams};

use crate::{
    FETCH_FAILED_MESSAGE, FETCHING_MESSAGE, FetchError, JobSlot, LoadingPolicy,
    SlotKind, TIMEOUT_MESSAGE,
};

/// Why the device position could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("Your browser does not support geolocation.")]
    Unsupported,
    #[error("Failed to load geolocation.")]
    Denied,
    #[error("Failed to load geolocation.")]
    Unavailable,
}

/// Everything that can happen to the homepage.
#[derive(Debug)]
pub enum FeedAction {
    QueryChanged(String),
    LocationChanged(String),
    FullTimeChanged(FullTime),
    SearchPressed,
    Dispatched(FetchKind),
    /// A request issued outside any user-visible batch, such as the nearby
    /// refresh after a position fix. It never raises the loading flag.
    Refreshed(FetchKind),
    Completed(FetchKind, Result<FeedResponse, FetchError>),
    StatusTimedOut,
    GeolocationRequested,
    GeolocationSucceeded,
    GeolocationFailed(GeolocationError),
}

/// State of one homepage session, created on mount.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub location: String,
    pub full_time: FullTime,
    pub nearby: JobSlot,
    pub search: JobSlot,
    pub recommend: JobSlot,
    pub is_loading: bool,
    pub has_searched: bool,
    pub status_message: String,
    pub locating: bool,
    pub geolocation_error: Option<String>,
    /// Requests of the current batch still in flight.
    pub pending: u8,
    /// A request of the current batch parsed successfully.
    pub batch_succeeded: bool,
    /// Any request has parsed successfully since mount.
    pub loaded_once: bool,
    pub loading_policy: LoadingPolicy,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(LoadingPolicy::default())
    }
}

impl ViewState {
    pub fn new(loading_policy: LoadingPolicy) -> Self {
        Self {
            query: String::new(),
            location: String::new(),
            full_time: FullTime::default(),
            nearby: JobSlot::Empty,
            search: JobSlot::Empty,
            recommend: JobSlot::Empty,
            is_loading: true,
            has_searched: false,
            status_message: FETCHING_MESSAGE.to_string(),
            locating: false,
            geolocation_error: None,
            pending: 0,
            batch_succeeded: false,
            loaded_once: false,
            loading_policy,
        }
    }

    /// Search parameters from the current form fields.
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            description: self.query.clone(),
            location: self.location.clone(),
            full_time: self.full_time,
        }
    }

    /// The slot to render: search results once a search was issued,
    /// otherwise recommendations for signed-in users and nearby jobs for
    /// everyone else.
    pub fn active_slot(&self, is_logged_in: bool) -> SlotKind {
        if self.has_searched {
            SlotKind::Search
        } else if is_logged_in {
            SlotKind::Recommend
        } else {
            SlotKind::Nearby
        }
    }

    pub fn slot(&self, kind: SlotKind) -> &JobSlot {
        match kind {
            SlotKind::Nearby => &self.nearby,
            SlotKind::Search => &self.search,
            SlotKind::Recommend => &self.recommend,
        }
    }

    pub fn apply(&mut self, action: FeedAction) {
        match action {
            FeedAction::QueryChanged(query) => self.query = query,
            FeedAction::LocationChanged(location) => self.location = location,
            FeedAction::FullTimeChanged(full_time) => {
                self.full_time = full_time
            }
            FeedAction::SearchPressed => {
                self.has_searched = true;
                self.status_message = FETCHING_MESSAGE.to_string();
            }
            FeedAction::Dispatched(_) => {
                if self.pending == 0 {
                    self.batch_succeeded = false;
                }
                self.pending = self.pending.saturating_add(1);
                self.is_loading = true;
            }
            FeedAction::Refreshed(_) => {
                self.pending = self.pending.saturating_add(1);
            }
            FeedAction::Completed(kind, result) => {
                self.pending = self.pending.saturating_sub(1);
                match result {
                    Ok(response) => self.reconcile(kind, response),
                    // Expected before the first position fix
                    Err(FetchError::MissingPosition) => {
                        tracing::debug!("{kind} skipped, no stored position");
                    }
                    Err(e) => {
                        tracing::warn!("{kind} request failed: {e}");
                        self.status_message = FETCH_FAILED_MESSAGE.to_string();
                    }
                }
                self.settle_loading();
            }
            FeedAction::StatusTimedOut => {
                if !self.loaded_once {
                    self.status_message = TIMEOUT_MESSAGE.to_string();
                }
            }
            FeedAction::GeolocationRequested => {
                self.locating = true;
                self.geolocation_error = None;
            }
            FeedAction::GeolocationSucceeded => {
                self.locating = false;
                self.geolocation_error = None;
            }
            FeedAction::GeolocationFailed(e) => {
                self.locating = false;
                self.geolocation_error = Some(e.to_string());
            }
        }
    }

    fn reconcile(&mut self, kind: FetchKind, response: FeedResponse) {
        self.batch_succeeded = true;
        self.loaded_once = true;

        match (kind, response) {
            (FetchKind::Recommend, FeedResponse::Notice { message }) => {
                tracing::debug!("recommendations not applicable: {message}");
            }
            (kind, FeedResponse::Notice { message }) => {
                tracing::warn!("{kind} returned a notice: {message}");
                *self.slot_mut(kind) = JobSlot::Empty;
            }
            (kind, FeedResponse::Jobs(jobs)) => {
                *self.slot_mut(kind) = JobSlot::from(jobs);
            }
        }

        if self.loading_policy == LoadingPolicy::FirstResponse {
            self.is_loading = false;
        }
    }

    fn settle_loading(&mut self) {
        if self.loading_policy == LoadingPolicy::AllSettled
            && self.pending == 0
            && self.batch_succeeded
        {
            self.is_loading = false;
        }
    }

    fn slot_mut(&mut self, kind: FetchKind) -> &mut JobSlot {
        match kind {
            FetchKind::Nearby => &mut self.nearby,
            FetchKind::Search => &mut self.search,
            FetchKind::Recommend => &mut self.recommend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{ClientError, Job};
    use serde_json::json;

    fn jobs(ids: &[&str]) -> FeedResponse {
        FeedResponse::Jobs(
            ids.iter()
                .map(|id| serde_json::from_value::<Job>(json!({ "id": id })))
                .collect::<Result<_, _>>()
                .unwrap(),
        )
    }

    fn failure() -> FetchError {
        let e = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err();
        FetchError::Client(ClientError::Malformed(e))
    }

    fn notice() -> FeedResponse {
        FeedResponse::Notice {
            message: json!("not personalized"),
        }
    }

    fn mounted(policy: LoadingPolicy) -> ViewState {
        let mut state = ViewState::new(policy);
        for kind in FetchKind::ALL {
            state.apply(FeedAction::Dispatched(kind));
        }
        state
    }

    #[test]
    fn starts_loading_with_fetching_status() {
        let state = ViewState::default();
        assert!(state.is_loading);
        assert!(!state.has_searched);
        assert_eq!(state.status_message, FETCHING_MESSAGE);
        assert_eq!(state.nearby, JobSlot::Empty);
        assert_eq!(state.search, JobSlot::Empty);
        assert_eq!(state.recommend, JobSlot::Empty);
    }

    #[test]
    fn empty_responses_leave_sentinel_in_every_slot() {
        let mut state = mounted(LoadingPolicy::FirstResponse);
        state.apply(FeedAction::Completed(FetchKind::Nearby, Ok(jobs(&["a"]))));
        state.apply(FeedAction::Completed(FetchKind::Search, Ok(jobs(&["b"]))));
        state.apply(FeedAction::Completed(
            FetchKind::Recommend,
            Ok(jobs(&["c"])),
        ));

        for kind in FetchKind::ALL {
            state.apply(FeedAction::Dispatched(kind));
            state.apply(FeedAction::Completed(kind, Ok(jobs(&[]))));
            assert_eq!(state.slot(kind.into()), &JobSlot::Empty, "{kind}");
        }
    }

    #[test]
    fn recommend_notice_never_overwrites() {
        let mut state = mounted(LoadingPolicy::FirstResponse);
        state.apply(FeedAction::Completed(
            FetchKind::Recommend,
            Ok(jobs(&["r1", "r2"])),
        ));
        let before = state.recommend.clone();
        assert_eq!(before.jobs().len(), 2);

        state.apply(FeedAction::Dispatched(FetchKind::Recommend));
        state.apply(FeedAction::Completed(FetchKind::Recommend, Ok(notice())));
        assert_eq!(state.recommend, before);
        // The response still counts as a successful parse
        assert!(!state.is_loading);
    }

    #[test]
    fn nearby_notice_clears_to_sentinel() {
        let mut state = mounted(LoadingPolicy::FirstResponse);
        state.apply(FeedAction::Completed(FetchKind::Nearby, Ok(jobs(&["n"]))));
        state.apply(FeedAction::Dispatched(FetchKind::Nearby));
        state.apply(FeedAction::Completed(FetchKind::Nearby, Ok(notice())));
        assert_eq!(state.nearby, JobSlot::Empty);
    }

    #[test]
    fn first_success_ends_loading_and_later_failure_keeps_it_ended() {
        let mut state = mounted(LoadingPolicy::FirstResponse);
        state.apply(FeedAction::Completed(FetchKind::Search, Ok(jobs(&["s"]))));
        assert!(!state.is_loading);

        state.apply(FeedAction::Completed(FetchKind::Nearby, Err(failure())));
        assert!(!state.is_loading);
        assert_eq!(state.status_message, FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn failure_alone_does_not_end_loading() {
        let mut state = mounted(LoadingPolicy::FirstResponse);
        state.apply(FeedAction::Completed(FetchKind::Search, Err(failure())));
        assert!(state.is_loading);
        assert_eq!(state.status_message, FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn all_settled_waits_for_the_whole_batch() {
        let mut state = mounted(LoadingPolicy::AllSettled);
        state.apply(FeedAction::Completed(FetchKind::Search, Ok(jobs(&["s"]))));
        assert!(state.is_loading);
        state.apply(FeedAction::Completed(
            FetchKind::Nearby,
            Err(FetchError::MissingPosition),
        ));
        assert!(state.is_loading);
        state.apply(FeedAction::Completed(FetchKind::Recommend, Ok(notice())));
        assert!(!state.is_loading);
        assert_eq!(state.pending, 0);
    }

    #[test]
    fn all_settled_keeps_loading_when_every_request_failed() {
        let mut state = mounted(LoadingPolicy::AllSettled);
        for kind in FetchKind::ALL {
            state.apply(FeedAction::Completed(kind, Err(failure())));
        }
        assert!(state.is_loading);
        assert_eq!(state.status_message, FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn missing_position_leaves_status_alone() {
        let mut state = mounted(LoadingPolicy::FirstResponse);
        state.apply(FeedAction::Completed(
            FetchKind::Nearby,
            Err(FetchError::MissingPosition),
        ));
        assert!(state.is_loading);
        assert_eq!(state.status_message, FETCHING_MESSAGE);
        assert_eq!(state.pending, 2);
    }

    #[test]
    fn refresh_after_settled_batch_keeps_results_visible() {
        let mut state = mounted(LoadingPolicy::FirstResponse);
        state.apply(FeedAction::Completed(
            FetchKind::Nearby,
            Err(FetchError::MissingPosition),
        ));
        state.apply(FeedAction::Completed(FetchKind::Search, Ok(jobs(&["s"]))));
        state.apply(FeedAction::Completed(
            FetchKind::Recommend,
            Ok(jobs(&["r"])),
        ));
        assert!(!state.is_loading);

        state.apply(FeedAction::GeolocationSucceeded);
        state.apply(FeedAction::Refreshed(FetchKind::Nearby));
        assert!(!state.is_loading);
        assert_eq!(state.pending, 1);

        state.apply(FeedAction::Completed(FetchKind::Nearby, Err(failure())));
        assert!(!state.is_loading);
        assert_eq!(state.pending, 0);
        assert_eq!(state.status_message, FETCH_FAILED_MESSAGE);
        assert_eq!(state.search.jobs().len(), 1);

        state.apply(FeedAction::Refreshed(FetchKind::Nearby));
        state.apply(FeedAction::Completed(FetchKind::Nearby, Ok(jobs(&["n"]))));
        assert!(!state.is_loading);
        assert_eq!(state.nearby.jobs().len(), 1);
    }

    #[test]
    fn all_settled_refresh_does_not_reopen_loading() {
        let mut state = mounted(LoadingPolicy::AllSettled);
        for kind in FetchKind::ALL {
            state.apply(FeedAction::Completed(kind, Ok(jobs(&["x"]))));
        }
        assert!(!state.is_loading);

        state.apply(FeedAction::Refreshed(FetchKind::Nearby));
        state.apply(FeedAction::Completed(FetchKind::Nearby, Err(failure())));
        assert!(!state.is_loading);
    }

    #[test]
    fn timeout_only_reports_when_nothing_loaded() {
        let mut state = mounted(LoadingPolicy::FirstResponse);
        state.apply(FeedAction::StatusTimedOut);
        assert_eq!(state.status_message, TIMEOUT_MESSAGE);

        let mut state = mounted(LoadingPolicy::FirstResponse);
        for kind in FetchKind::ALL {
            state.apply(FeedAction::Completed(kind, Ok(jobs(&["x"]))));
        }
        state.apply(FeedAction::StatusTimedOut);
        assert_eq!(state.status_message, FETCHING_MESSAGE);
    }

    #[test]
    fn search_press_switches_active_slot() {
        let mut state = mounted(LoadingPolicy::FirstResponse);
        assert_eq!(state.active_slot(false), SlotKind::Nearby);
        assert_eq!(state.active_slot(true), SlotKind::Recommend);

        state.apply(FeedAction::Completed(
            FetchKind::Nearby,
            Err(FetchError::MissingPosition),
        ));
        state.apply(FeedAction::SearchPressed);
        assert!(state.has_searched);
        assert_eq!(state.status_message, FETCHING_MESSAGE);
        assert_eq!(state.active_slot(false), SlotKind::Search);
        assert_eq!(state.active_slot(true), SlotKind::Search);
    }

    #[test]
    fn form_edits_feed_search_params() {
        let mut state = ViewState::default();
        state.apply(FeedAction::QueryChanged("engineer".into()));
        state.apply(FeedAction::LocationChanged("NYC".into()));
        state.apply(FeedAction::FullTimeChanged(FullTime::Yes));
        assert_eq!(
            state.search_params(),
            SearchParams {
                description: "engineer".into(),
                location: "NYC".into(),
                full_time: FullTime::Yes,
            }
        );
    }

    #[test]
    fn geolocation_failure_sets_inline_error() {
        let mut state = ViewState::default();
        state.apply(FeedAction::GeolocationRequested);
        assert!(state.locating);

        state.apply(FeedAction::GeolocationFailed(
            GeolocationError::Unsupported,
        ));
        assert!(!state.locating);
        assert_eq!(
            state.geolocation_error.as_deref(),
            Some("Your browser does not support geolocation.")
        );

        state.apply(FeedAction::GeolocationRequested);
        assert_eq!(state.geolocation_error, None);
        state.apply(FeedAction::GeolocationFailed(GeolocationError::Denied));
        assert_eq!(
            state.geolocation_error.as_deref(),
            Some("Failed to load geolocation.")
        );
        state.apply(FeedAction::GeolocationSucceeded);
        assert_eq!(state.geolocation_error, None);
    }
}
