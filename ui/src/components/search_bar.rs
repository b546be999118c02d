use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub on_description_change: Callback<String>,
    pub on_location_change: Callback<String>,
    pub on_search: Callback<()>,
}

/// Keyword and location inputs. Every edit is reported upward; the
/// homepage reads the values back when the search is submitted.
#[function_component]
pub fn SearchBar(props: &SearchBarProps) -> Html {
    let on_description_input = {
        let on_change = props.on_description_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_location_input = {
        let on_change = props.on_location_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_search.emit(());
        })
    };

    let input_class = "flex-1 px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-700 text-gray-900 dark:text-white placeholder-gray-500 dark:placeholder-gray-400 focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm";

    html! {
        <form class="flex flex-col sm:flex-row gap-3" onsubmit={on_submit}>
            <input
                type="text"
                name="description"
                class={input_class}
                placeholder="Job title, keywords or company"
                oninput={on_description_input}
            />
            <input
                type="text"
                name="location"
                class={input_class}
                placeholder="City, state or zip code"
                oninput={on_location_input}
            />
            <button
                type="submit"
                class="px-4 py-2 text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500"
            >
                {"Search"}
            </button>
        </form>
    }
}
