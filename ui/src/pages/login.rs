use payloads::requests::LoginCredentials;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, Session, get_api_client};

#[derive(Default, Clone, PartialEq)]
struct LoginForm {
    user_id: String,
    password: String,
    is_loading: bool,
    error: Option<String>,
}

#[function_component]
pub fn LoginPage() -> Html {
    let navigator = use_navigator().unwrap();
    let form = use_state(LoginForm::default);
    let (_, dispatch) = use_store::<Session>();

    let on_user_id_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form_data = (*form).clone();
            form_data.user_id = input.value();
            form.set(form_data);
        })
    };

    let on_password_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form_data = (*form).clone();
            form_data.password = input.value();
            form.set(form_data);
        })
    };

    let on_submit = {
        let form = form.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form_data = (*form).clone();
            if form_data.user_id.is_empty() || form_data.password.is_empty() {
                let mut new_form = form_data;
                new_form.error = Some("Please fill in all fields".to_string());
                form.set(new_form);
                return;
            }

            let form = form.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                {
                    let mut new_form = form_data.clone();
                    new_form.is_loading = true;
                    new_form.error = None;
                    form.set(new_form);
                }

                let credentials = LoginCredentials {
                    user_id: form_data.user_id.clone(),
                    password: form_data.password.clone(),
                };

                match get_api_client().login(&credentials).await {
                    Ok(()) => {
                        tracing::info!("signed in as {}", credentials.user_id);
                        dispatch.reduce_mut(|session| {
                            session.login(credentials.user_id)
                        });
                        navigator.push(&Route::Home);
                    }
                    Err(e) => {
                        let mut new_form = form_data;
                        new_form.error = Some(format!("Login failed: {e}"));
                        form.set(new_form);
                    }
                }
            });
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900 dark:text-white">
                        {"Sign in to your account"}
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600 dark:text-gray-400">
                        {"Or "}
                        <Link<Route> to={Route::Register} classes="font-medium text-blue-600 hover:text-blue-500 dark:text-blue-400">
                            {"create a new account"}
                        </Link<Route>>
                    </p>
                </div>
                <form class="mt-8 space-y-6" onsubmit={on_submit}>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <input
                            id="user-id"
                            type="text"
                            required=true
                            class="appearance-none rounded-none rounded-t-md relative block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white bg-white dark:bg-gray-700 sm:text-sm"
                            placeholder="Username"
                            value={form.user_id.clone()}
                            onchange={on_user_id_change}
                            disabled={form.is_loading}
                        />
                        <input
                            id="password"
                            type="password"
                            required=true
                            class="appearance-none rounded-none rounded-b-md relative block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white bg-white dark:bg-gray-700 sm:text-sm"
                            placeholder="Password"
                            value={form.password.clone()}
                            onchange={on_password_change}
                            disabled={form.is_loading}
                        />
                    </div>

                    if let Some(error) = &form.error {
                        <div class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 text-red-600 dark:text-red-400 px-4 py-3 rounded">
                            {error}
                        </div>
                    }

                    <button
                        type="submit"
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={form.is_loading}
                    >
                        if form.is_loading { {"Signing in..."} } else { {"Sign in"} }
                    </button>
                </form>
            </div>
        </div>
    }
}
