use serde::{Deserialize, Serialize};
use yewdux::prelude::*;

/// The signed-in capability the router gates on. Persisted in
/// `localStorage` so a refresh keeps the user signed in.
#[derive(Default, Clone, PartialEq, Serialize, Deserialize, Store)]
#[store(storage = "local")]
pub struct Session {
    pub is_logged_in: bool,
    pub user_id: Option<String>,
}

impl Session {
    pub fn login(&mut self, user_id: String) {
        self.is_logged_in = true;
        self.user_id = Some(user_id);
    }

    pub fn logout(&mut self) {
        self.is_logged_in = false;
        self.user_id = None;
    }
}
