use feed::{JobSlot, SlotKind};
use yew::prelude::*;

use crate::components::JobCard;

#[derive(Properties, PartialEq)]
pub struct TabContainerProps {
    pub nearby: JobSlot,
    pub search: JobSlot,
    pub recommend: JobSlot,
    /// The tab shown until the user picks another.
    pub active: SlotKind,
    pub is_searched: bool,
    pub is_logged_in: bool,
}

#[function_component]
pub fn TabContainer(props: &TabContainerProps) -> Html {
    let selected = use_state(|| props.active);

    // Follow the homepage when its choice changes, e.g. after a search
    {
        let selected = selected.clone();
        use_effect_with(props.active, move |active| {
            selected.set(*active);
        });
    }

    let mut tabs = Vec::with_capacity(3);
    if props.is_searched {
        tabs.push(SlotKind::Search);
    }
    if props.is_logged_in {
        tabs.push(SlotKind::Recommend);
    }
    tabs.push(SlotKind::Nearby);

    let slot = match *selected {
        SlotKind::Nearby => &props.nearby,
        SlotKind::Search => &props.search,
        SlotKind::Recommend => &props.recommend,
    };

    html! {
        <div class="mt-6">
            <div class="border-b border-gray-200 dark:border-gray-700">
                <nav class="-mb-px flex space-x-8">
                    {for tabs.into_iter().map(|tab| {
                        let is_active = tab == *selected;
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(tab))
                        };
                        html! {
                            <button
                                key={tab.label()}
                                {onclick}
                                class={classes!(
                                    "py-2", "px-1", "border-b-2", "font-medium", "text-sm",
                                    if is_active {
                                        "border-blue-500 text-blue-600 dark:text-blue-400"
                                    } else {
                                        "border-transparent text-gray-500 hover:text-gray-700 dark:text-gray-400"
                                    }
                                )}
                            >
                                {tab.label()}
                            </button>
                        }
                    })}
                </nav>
            </div>
            {render_slot(slot)}
        </div>
    }
}

fn render_slot(slot: &JobSlot) -> Html {
    match slot {
        JobSlot::Empty => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"No jobs found"}
                </p>
            </div>
        },
        JobSlot::Jobs(jobs) => html! {
            <ul class="mt-4 space-y-3">
                {for jobs.iter().enumerate().map(|(i, job)| {
                    let key = job.key().unwrap_or_else(|| i.to_string());
                    html! { <JobCard key={key} job={job.clone()} /> }
                })}
            </ul>
        },
    }
}
