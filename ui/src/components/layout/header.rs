use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::{Route, Session};

#[function_component]
pub fn Header() -> Html {
    let (session, _) = use_store::<Session>();
    let on_logout = use_logout();

    let link_class = "text-sm font-medium text-gray-600 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white";

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <Link<Route> to={Route::Home} classes="text-xl font-semibold text-gray-900 dark:text-white">
                            {"Job Search"}
                        </Link<Route>>
                    </div>
                    <nav class="flex items-center space-x-4">
                        if session.is_logged_in {
                            <Link<Route> to={Route::Home} classes={link_class}>{"Home"}</Link<Route>>
                            <Link<Route> to={Route::Profile} classes={link_class}>{"My Profile"}</Link<Route>>
                            <button onclick={on_logout} class={link_class}>{"Logout"}</button>
                        } else {
                            <Link<Route> to={Route::Login} classes={link_class}>{"Login"}</Link<Route>>
                            <Link<Route> to={Route::Register} classes={link_class}>{"Register"}</Link<Route>>
                        }
                    </nav>
                </div>
            </div>
        </header>
    }
}
