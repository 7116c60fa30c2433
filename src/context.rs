//! Application Context
//!
//! Gateway handle, configuration and app-wide actions provided via the
//! Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use group_admin_core::{DashboardConfig, NoticeKind};

use crate::api::HttpGateway;
use crate::models::Section;
use crate::store::{AppStore, AppStateStoreFields};

/// Resolve configuration from the build environment
pub fn load_config() -> DashboardConfig {
    DashboardConfig::from_lookup(|key| {
        let value = match key {
            "GROUP_ADMIN_API_BASE_URL" => option_env!("GROUP_ADMIN_API_BASE_URL"),
            "GROUP_ADMIN_EXPIRY_DAYS" => option_env!("GROUP_ADMIN_EXPIRY_DAYS"),
            "GROUP_ADMIN_NOTICE_MS" => option_env!("GROUP_ADMIN_NOTICE_MS"),
            "GROUP_ADMIN_LOG" => option_env!("GROUP_ADMIN_LOG"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    gateway: StoredValue<HttpGateway>,
    notice_timeout_ms: u32,
    /// Expiry preset for new messages
    pub default_expiry_days: u32,
}

impl AppContext {
    pub fn new(config: &DashboardConfig, store: AppStore) -> Self {
        Self {
            store,
            gateway: StoredValue::new(HttpGateway::from_config(config)),
            notice_timeout_ms: config.notice_timeout_ms,
            default_expiry_days: config.default_expiry_days,
        }
    }

    /// Gateway handle to move into a spawned request
    pub fn gateway(&self) -> HttpGateway {
        self.gateway.get_value()
    }

    pub fn navigate(&self, section: Section) {
        log::debug!("[APP] navigate to {}", section.id());
        *self.store.section().write() = section;
        *self.store.menu_open().write() = false;
    }

    pub fn notify_success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(NoticeKind::Success, title.into(), description.into());
    }

    pub fn notify_error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(NoticeKind::Error, title.into(), description.into());
    }

    fn notify(&self, kind: NoticeKind, title: String, description: String) {
        let id = self.store.notices().write().push(kind, title, description);
        let store = self.store;
        let timeout = self.notice_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            store.notices().write().dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.store.notices().write().dismiss(id);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
