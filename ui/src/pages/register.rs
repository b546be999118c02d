use payloads::requests::Signup;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, get_api_client};

#[derive(Default, Clone, PartialEq)]
struct RegisterForm {
    user_id: String,
    password: String,
    first_name: String,
    last_name: String,
    is_loading: bool,
    error: Option<String>,
}

#[function_component]
pub fn RegisterPage() -> Html {
    let navigator = use_navigator().unwrap();
    let form = use_state(RegisterForm::default);

    let field = |apply: fn(&mut RegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form_data = (*form).clone();
            apply(&mut form_data, input.value());
            form.set(form_data);
        })
    };

    let on_user_id_change = field(|f, v| f.user_id = v);
    let on_password_change = field(|f, v| f.password = v);
    let on_first_name_change = field(|f, v| f.first_name = v);
    let on_last_name_change = field(|f, v| f.last_name = v);

    let on_submit = {
        let form = form.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form_data = (*form).clone();
            if form_data.user_id.is_empty()
                || form_data.password.is_empty()
                || form_data.first_name.is_empty()
                || form_data.last_name.is_empty()
            {
                let mut new_form = form_data;
                new_form.error = Some("Please fill in all fields".to_string());
                form.set(new_form);
                return;
            }

            let form = form.clone();
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                {
                    let mut new_form = form_data.clone();
                    new_form.is_loading = true;
                    new_form.error = None;
                    form.set(new_form);
                }

                let details = Signup {
                    user_id: form_data.user_id.clone(),
                    password: form_data.password.clone(),
                    first_name: form_data.first_name.clone(),
                    last_name: form_data.last_name.clone(),
                };

                match get_api_client().signup(&details).await {
                    Ok(()) => {
                        tracing::info!("registered {}", details.user_id);
                        navigator.push(&Route::Login);
                    }
                    Err(e) => {
                        let mut new_form = form_data;
                        new_form.error =
                            Some(format!("Registration failed: {e}"));
                        form.set(new_form);
                    }
                }
            });
        })
    };

    let input_class = "appearance-none relative block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md text-gray-900 dark:text-white bg-white dark:bg-gray-700 sm:text-sm";

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900 dark:text-white">
                        {"Create your account"}
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600 dark:text-gray-400">
                        {"Already registered? "}
                        <Link<Route> to={Route::Login} classes="font-medium text-blue-600 hover:text-blue-500 dark:text-blue-400">
                            {"Sign in"}
                        </Link<Route>>
                    </p>
                </div>
                <form class="mt-8 space-y-4" onsubmit={on_submit}>
                    <input type="text" class={input_class} placeholder="Username"
                        value={form.user_id.clone()} onchange={on_user_id_change}
                        disabled={form.is_loading} />
                    <input type="password" class={input_class} placeholder="Password"
                        value={form.password.clone()} onchange={on_password_change}
                        disabled={form.is_loading} />
                    <div class="flex gap-3">
                        <input type="text" class={input_class} placeholder="First name"
                            value={form.first_name.clone()} onchange={on_first_name_change}
                            disabled={form.is_loading} />
                        <input type="text" class={input_class} placeholder="Last name"
                            value={form.last_name.clone()} onchange={on_last_name_change}
                            disabled={form.is_loading} />
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
                        if form.is_loading { {"Creating account..."} } else { {"Register"} }
                    </button>
                </form>
            </div>
        </div>
    }
}
