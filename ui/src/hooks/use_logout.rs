use crate::{Route, Session, get_api_client};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<Session>();
    let navigator = use_navigator().unwrap();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();

        yew::platform::spawn_local(async move {
            // The local session ends even if the backend call fails
            if let Err(e) = get_api_client().logout().await {
                tracing::warn!("logout request failed: {e}");
            }

            dispatch.reduce_mut(|session| session.logout());
            navigator.push(&Route::Login);
        });
    })
}
