use payloads::FullTime;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterProps {
    pub on_select: Callback<FullTime>,
}

#[function_component]
pub fn Filter(props: &FilterProps) -> Html {
    let on_change = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(FullTime::from_query_value(&select.value()));
        })
    };

    html! {
        <div class="flex items-center gap-2 mt-3">
            <label for="full-time" class="text-sm text-gray-600 dark:text-gray-400">
                {"Employment"}
            </label>
            <select
                id="full-time"
                class="px-2 py-1 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-700 text-sm"
                onchange={on_change}
            >
                <option value="" selected=true>{"Any"}</option>
                <option value="true">{"Full time"}</option>
                <option value="false">{"Part time"}</option>
            </select>
        </div>
    }
}
