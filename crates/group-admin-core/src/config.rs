//! Dashboard Configuration
//!
//! Resolved once at startup from key lookups (build-time env in the browser).

/// Backend base URL used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_EXPIRY_DAYS: u32 = 7;
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 4000;

pub const KEY_API_BASE_URL: &str = "GROUP_ADMIN_API_BASE_URL";
pub const KEY_EXPIRY_DAYS: &str = "GROUP_ADMIN_EXPIRY_DAYS";
pub const KEY_NOTICE_MS: &str = "GROUP_ADMIN_NOTICE_MS";
pub const KEY_LOG: &str = "GROUP_ADMIN_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Backend root, without trailing slash
    pub api_base_url: String,
    /// Expiry applied to newly sent messages
    pub default_expiry_days: u32,
    /// How long a notice stays on screen
    pub notice_timeout_ms: u32,
    pub log_level: log::LevelFilter,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_expiry_days: DEFAULT_EXPIRY_DAYS,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl DashboardConfig {
    /// Build config from a key lookup, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup(KEY_API_BASE_URL)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let default_expiry_days = lookup(KEY_EXPIRY_DAYS)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(defaults.default_expiry_days);

        let notice_timeout_ms = lookup(KEY_NOTICE_MS)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(defaults.notice_timeout_ms);

        let log_level = lookup(KEY_LOG)
            .and_then(|v| v.trim().parse::<log::LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base_url,
            default_expiry_days,
            notice_timeout_ms,
            log_level,
        }
    }

    /// Join an endpoint path (starting with `/`) onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
