use feed::PositionStore;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::Session;
use crate::hooks::use_logout;
use crate::storage::BrowserStore;

#[function_component]
pub fn ProfilePage() -> Html {
    let (session, _) = use_store::<Session>();
    let on_logout = use_logout();
    let position = use_memo((), |_| {
        PositionStore::new(BrowserStore::open()).load()
    });

    html! {
        <div class="max-w-xl space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                {"My Profile"}
            </h1>
            <dl class="space-y-2 text-sm">
                <div class="flex gap-2">
                    <dt class="text-neutral-600 dark:text-neutral-400">{"Username"}</dt>
                    <dd>{session.user_id.clone().unwrap_or_default()}</dd>
                </div>
                <div class="flex gap-2">
                    <dt class="text-neutral-600 dark:text-neutral-400">{"Last known location"}</dt>
                    <dd>
                        {match *position {
                            Some(p) => format!("{:.4}, {:.4}", p.latitude, p.longitude),
                            None => "Unknown".to_string(),
                        }}
                    </dd>
                </div>
            </dl>
            <button
                onclick={on_logout}
                class="px-4 py-2 text-sm font-medium rounded-md border border-gray-300 dark:border-gray-600 hover:bg-gray-100 dark:hover:bg-gray-800"
            >
                {"Logout"}
            </button>
        </div>
    }
}
