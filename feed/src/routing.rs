//! Capability-gated routing table.

/// The views a path can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Root,
    Login,
    Register,
    Home,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Open to everyone.
    Public,
    /// Open to visitors only; signed-in users are sent home.
    GuestOnly,
    /// Signed-in users only; visitors are sent to login.
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    Redirect(Page),
}

impl Page {
    pub fn access(&self) -> Access {
        match self {
            Page::Register => Access::Public,
            Page::Login => Access::GuestOnly,
            Page::Root | Page::Home | Page::Profile => Access::Protected,
        }
    }
}

pub fn resolve(page: Page, is_logged_in: bool) -> Resolution {
    match (page.access(), is_logged_in) {
        (Access::Protected, false) => Resolution::Redirect(Page::Login),
        (Access::GuestOnly, true) => Resolution::Redirect(Page::Home),
        // The root has no view of its own
        _ if page == Page::Root => Resolution::Redirect(Page::Home),
        _ => Resolution::Render(page),
    }
}
