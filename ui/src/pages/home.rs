use yew::prelude::*;
use yewdux::prelude::*;

use crate::Session;
use crate::components::{Filter, Loading, SearchBar, TabContainer};
use crate::hooks::use_job_feed;

#[function_component]
pub fn HomePage() -> Html {
    let (session, _) = use_store::<Session>();
    let feed = use_job_feed();
    let state = &feed.state;

    html! {
        <div class="space-y-4">
            <SearchBar
                on_description_change={feed.on_query_change.clone()}
                on_location_change={feed.on_location_change.clone()}
                on_search={feed.on_search.clone()}
            />
            <Filter on_select={feed.on_full_time_change.clone()} />

            if let Some(error) = &state.geolocation_error {
                <div class="bg-yellow-50 dark:bg-yellow-900/20 border border-yellow-200 dark:border-yellow-800 text-yellow-700 dark:text-yellow-400 px-4 py-3 rounded text-sm">
                    {error}
                </div>
            }

            if state.is_loading {
                <Loading
                    message={state.status_message.clone()}
                    is_searched={state.has_searched}
                    is_logged_in={session.is_logged_in}
                />
            } else {
                <TabContainer
                    nearby={state.nearby.clone()}
                    search={state.search.clone()}
                    recommend={state.recommend.clone()}
                    active={state.active_slot(session.is_logged_in)}
                    is_searched={state.has_searched}
                    is_logged_in={session.is_logged_in}
                />
            }
        </div>
    }
}
