use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub message: AttrValue,
    pub is_searched: bool,
    pub is_logged_in: bool,
}

#[function_component]
pub fn Loading(props: &LoadingProps) -> Html {
    let context = if props.is_searched {
        "Looking for jobs matching your search"
    } else if props.is_logged_in {
        "Gathering recommendations and jobs near you"
    } else {
        "Looking for jobs near you"
    };

    html! {
        <div class="text-center space-y-4 py-12">
            <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-neutral-900 dark:border-neutral-100"></div>
            <p class="text-neutral-900 dark:text-white">{props.message.clone()}</p>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">{context}</p>
        </div>
    }
}
