use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "stayease_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Rental API host; empty means "same origin as the page"
    pub api_host: String,

    /// Rental API port, ignored for same-origin requests
    pub api_port: u16,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Use HTTPS for cross-origin API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: String::new(),
            api_port: 3000,
            api_path: "/api".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            let read = |name: &str| {
                storage
                    .get_item(&format!("{STORAGE_PREFIX}{name}"))
                    .ok()
                    .flatten()
            };

            if let Some(api_host) = read("api_host") {
                settings.api_host = api_host;
            }
            if let Some(port) = read("api_port").and_then(|v| v.parse::<u16>().ok()) {
                settings.api_port = port;
            }
            if let Some(api_path) = read("api_path") {
                settings.api_path = api_path;
            }
            if let Some(use_https) = read("api_use_https") {
                settings.api_use_https = use_https.eq_ignore_ascii_case("true");
            }
            if let Some(level) = read("log_level").as_deref().and_then(parse_level) {
                settings.log_level = level;
            }
            if let Some(ms) = read("toast_duration_ms").and_then(|v| v.parse::<u32>().ok()) {
                settings.toast_duration_ms = ms;
            }
        }

        settings
    }

    /// Get the base API URL; relative to the page origin when no host is set
    pub fn api_base_url(&self) -> String {
        let path = self.api_path.trim_end_matches('/');
        if self.api_host.is_empty() {
            return path.to_string();
        }
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    let settings = AppSettings::from_environment();
    update_settings(|current| *current = settings);
}
