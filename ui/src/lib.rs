use feed::routing::{self, Page, Resolution};
use feed::{FeedConfig, LoadingPolicy};
use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

mod components;
mod geolocation;
mod hooks;
pub mod logs;
mod pages;
mod state;
mod storage;

pub use state::Session;

use components::layout::MainLayout;
use pages::{HomePage, LoginPage, ProfilePage, RegisterPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

/// Homepage behaviour, chosen at build time. `LOADING_POLICY=all-settled`
/// waits for the whole initial batch before showing results.
pub fn get_feed_config() -> FeedConfig {
    let loading_policy = match option_env!("LOADING_POLICY") {
        Some("all-settled") => LoadingPolicy::AllSettled,
        _ => LoadingPolicy::FirstResponse,
    };

    FeedConfig {
        loading_policy,
        ..FeedConfig::default()
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/home")]
    Home,
    #[at("/myprofile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The page a route selects. Unknown paths show the homepage.
    pub fn page(&self) -> Page {
        match self {
            Route::Root => Page::Root,
            Route::Login => Page::Login,
            Route::Register => Page::Register,
            Route::Home | Route::NotFound => Page::Home,
            Route::Profile => Page::Profile,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Root => Route::Root,
            Page::Login => Route::Login,
            Page::Register => Route::Register,
            Page::Home => Route::Home,
            Page::Profile => Route::Profile,
        }
    }
}

fn switch(route: Route) -> Html {
    html! { <Gate page={route.page()} /> }
}

#[derive(Properties, PartialEq)]
struct GateProps {
    page: Page,
}

/// Renders a page or redirects, depending on the session.
#[function_component]
fn Gate(props: &GateProps) -> Html {
    let (session, _) = use_store::<Session>();

    match routing::resolve(props.page, session.is_logged_in) {
        Resolution::Redirect(page) => {
            tracing::debug!("redirecting {:?} to {:?}", props.page, page);
            html! { <Redirect<Route> to={Route::from(page)} /> }
        }
        Resolution::Render(Page::Login) => html! { <LoginPage /> },
        Resolution::Render(Page::Register) => html! { <RegisterPage /> },
        Resolution::Render(Page::Profile) => html! { <ProfilePage /> },
        Resolution::Render(Page::Home | Page::Root) => html! { <HomePage /> },
    }
}
