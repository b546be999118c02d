use feed::{FeedAction, Orchestrator, PositionStore, ViewState};
use gloo_timers::callback::Timeout;
use payloads::{APIClient, FetchKind, FullTime};
use std::cell::RefCell;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::geolocation::current_position;
use crate::storage::BrowserStore;
use crate::{get_api_client, get_feed_config};

type JobOrchestrator = Orchestrator<APIClient, BrowserStore>;

/// Reducer wrapper so `ViewState` can live in `use_reducer`.
pub struct FeedStore(pub ViewState);

impl Reducible for FeedStore {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(FeedStore(state))
    }
}

pub struct JobFeedHandle {
    pub state: ViewState,
    pub on_query_change: Callback<String>,
    pub on_location_change: Callback<String>,
    pub on_full_time_change: Callback<FullTime>,
    pub on_search: Callback<()>,
}

/// Everything a request needs to land safely back in the reducer.
#[derive(Clone)]
struct FetchContext {
    feed: UseReducerHandle<FeedStore>,
    orchestrator: Rc<JobOrchestrator>,
}

impl FetchContext {
    /// Build the request from `state` now, then issue it in the
    /// background.
    fn dispatch(&self, kind: FetchKind, state: &ViewState) {
        self.spawn(kind, state, FeedAction::Dispatched(kind));
    }

    /// Like [`dispatch`](Self::dispatch), but results already on screen
    /// stay visible while it runs.
    fn refresh(&self, kind: FetchKind, state: &ViewState) {
        self.spawn(kind, state, FeedAction::Refreshed(kind));
    }

    fn spawn(&self, kind: FetchKind, state: &ViewState, issued: FeedAction) {
        let pending = self.orchestrator.prepare(kind, state);
        self.feed.dispatch(issued);

        let this = self.clone();
        spawn_local(async move {
            if let Some(action) = this.orchestrator.fetch(pending).await {
                this.feed.dispatch(action);
            }
        });
    }

    fn locate(&self) {
        self.feed.dispatch(FeedAction::GeolocationRequested);

        let this = self.clone();
        spawn_local(async move {
            let result = current_position().await;
            if this.orchestrator.is_closed() {
                return;
            }
            match result {
                Ok(position) => {
                    tracing::debug!(?position, "geolocation succeeded");
                    this.orchestrator.positions().save(&position);
                    this.feed.dispatch(FeedAction::GeolocationSucceeded);
                    let state = this.feed.0.clone();
                    this.refresh(FetchKind::Nearby, &state);
                }
                Err(e) => {
                    this.feed.dispatch(FeedAction::GeolocationFailed(e));
                }
            }
        });
    }
}

/// Drives the homepage: geolocation and the initial nearby, search and
/// recommend batch on mount, then searches on demand.
#[hook]
pub fn use_job_feed() -> JobFeedHandle {
    let config = get_feed_config();
    let feed =
        use_reducer(|| FeedStore(ViewState::new(config.loading_policy)));
    let orchestrator = use_memo((), |_| {
        let positions = PositionStore::new(BrowserStore::open());
        Orchestrator::new(get_api_client(), positions)
    });
    let status_timer = use_mut_ref(|| None::<Timeout>);

    let context = FetchContext {
        feed: feed.clone(),
        orchestrator,
    };

    {
        let context = context.clone();
        let status_timer = status_timer.clone();

        use_effect_with((), move |_| {
            context.locate();

            let state = context.feed.0.clone();
            for kind in FetchKind::ALL {
                context.dispatch(kind, &state);
            }

            let feed = context.feed.clone();
            let timeout_ms = config.status_timeout.as_millis() as u32;
            let timer = Timeout::new(timeout_ms, move || {
                tracing::warn!("no job data after {timeout_ms}ms");
                feed.dispatch(FeedAction::StatusTimedOut);
            });
            *status_timer.borrow_mut() = Some(timer);

            let orchestrator = context.orchestrator.clone();
            move || {
                orchestrator.close();
                cancel(&status_timer);
            }
        });
    }

    // Nothing to warn about once data has arrived
    {
        let status_timer = status_timer.clone();
        use_effect_with(feed.0.loaded_once, move |loaded_once| {
            if *loaded_once {
                cancel(&status_timer);
            }
        });
    }

    let on_query_change = {
        let feed = feed.clone();
        Callback::from(move |query: String| {
            feed.dispatch(FeedAction::QueryChanged(query));
        })
    };

    let on_location_change = {
        let feed = feed.clone();
        Callback::from(move |location: String| {
            feed.dispatch(FeedAction::LocationChanged(location));
        })
    };

    let on_full_time_change = {
        let feed = feed.clone();
        Callback::from(move |full_time: FullTime| {
            feed.dispatch(FeedAction::FullTimeChanged(full_time));
        })
    };

    let on_search = {
        let context = context.clone();
        Callback::from(move |_| {
            let state = context.feed.0.clone();
            context.dispatch(FetchKind::Search, &state);
            context.feed.dispatch(FeedAction::SearchPressed);
        })
    };

    JobFeedHandle {
        state: feed.0.clone(),
        on_query_change,
        on_location_change,
        on_full_time_change,
        on_search,
    }
}

fn cancel(timer: &Rc<RefCell<Option<Timeout>>>) {
    if timer.borrow_mut().take().is_some() {
        tracing::debug!("status timer cancelled");
    }
}
