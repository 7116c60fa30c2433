//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only state that
//! outlives a single section lives here; views keep their own signals.

use leptos::prelude::*;
use reactive_stores::Store;
use group_admin_core::NoticeBoard;

use crate::models::Section;

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Section shown in the main area
    pub section: Section,
    /// Toasts currently on screen
    pub notices: NoticeBoard,
    /// Sidebar drawer on narrow screens
    pub menu_open: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
