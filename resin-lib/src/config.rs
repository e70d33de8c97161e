//! SDK configuration

use std::env;
use std::path::PathBuf;

use log::debug;

use crate::util::Guarded;
use crate::util::only_if;

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.resin.io";

/// Environment variable overriding [`SdkConfig::api_url`].
pub const API_URL_VAR: &str = "RESIN_API_URL";

/// Environment variable setting [`SdkConfig::data_directory`].
pub const DATA_DIRECTORY_VAR: &str = "RESIN_DATA_DIRECTORY";

/// Environment variable marking a browser-like environment.
pub const BROWSER_VAR: &str = "RESIN_BROWSER";

/// Configuration for an SDK instance.
///
/// # Example
///
/// ```
/// use resin_lib::SdkConfig;
///
/// let config = SdkConfig::default()
///     .with_api_url("https://api.example.com")
///     .with_data_directory("/var/lib/resin");
///
/// assert!(config.capabilities().filesystem);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Base URL of the API.
    ///
    /// Default: `https://api.resin.io`
    pub api_url: String,

    /// Directory for persisted SDK data (tokens, downloaded images).
    ///
    /// Default: none
    pub data_directory: Option<PathBuf>,

    /// Whether the SDK runs without filesystem or process access.
    ///
    /// Default: `false`
    pub is_browser: bool,
}

/// What the current environment allows the SDK to do.
///
/// Resolved once from [`SdkConfig`]; guarded entry points are built from it
/// with [`Capabilities::guard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Local files can be read and written.
    pub filesystem: bool,
    /// Device images can be built locally.
    pub image_maker: bool,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_directory: None,
            is_browser: false,
        }
    }
}

impl SdkConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from a variable lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(API_URL_VAR).filter(|url| !url.is_empty()) {
            config.api_url = url;
        }
        if let Some(dir) = lookup(DATA_DIRECTORY_VAR).filter(|dir| !dir.is_empty()) {
            config.data_directory = Some(PathBuf::from(dir));
        }
        if let Some(flag) = lookup(BROWSER_VAR) {
            config.is_browser = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        debug!("Loaded SDK config: {:?}", config);
        config
    }

    /// Sets the API URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Sets the data directory.
    pub fn with_data_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_directory = Some(dir.into());
        self
    }

    /// Marks the environment as browser-like.
    pub fn with_browser(mut self, is_browser: bool) -> Self {
        self.is_browser = is_browser;
        self
    }

    /// Derives the environment capabilities.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            filesystem: !self.is_browser && self.data_directory.is_some(),
            image_maker: !self.is_browser,
        }
    }
}

impl Capabilities {
    /// Guards an entry point on a capability flag.
    pub fn guard<F>(&self, capability: impl Fn(&Self) -> bool, f: F) -> Guarded<F> {
        only_if(capability(self), f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::SdkError;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SdkConfig::from_lookup(lookup(&[]));
        assert_eq!(config, SdkConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(
            config.capabilities(),
            Capabilities {
                filesystem: false,
                image_maker: true,
            }
        );
    }

    #[test]
    fn test_from_lookup() {
        let config = SdkConfig::from_lookup(lookup(&[
            (API_URL_VAR, "https://api.staging.example.com"),
            (DATA_DIRECTORY_VAR, "/tmp/resin"),
            (BROWSER_VAR, "TRUE"),
        ]));
        assert_eq!(config.api_url, "https://api.staging.example.com");
        assert_eq!(config.data_directory, Some(PathBuf::from("/tmp/resin")));
        assert!(config.is_browser);
    }

    #[test]
    fn test_empty_values_ignored() {
        let config = SdkConfig::from_lookup(lookup(&[(API_URL_VAR, ""), (DATA_DIRECTORY_VAR, "")]));
        assert_eq!(config, SdkConfig::default());
    }

    #[test]
    fn test_browser_disables_everything() {
        let caps = SdkConfig::new()
            .with_data_directory("/tmp/resin")
            .with_browser(true)
            .capabilities();
        assert!(!caps.filesystem);
        assert!(!caps.image_maker);
    }

    #[test]
    fn test_guarded_method_table() {
        struct Settings {
            get: Guarded<fn(&str) -> Option<String>>,
        }

        fn read_setting(key: &str) -> Option<String> {
            Some(format!("value of {key}"))
        }

        let browser = SdkConfig::new().with_browser(true).capabilities();
        let settings = Settings {
            get: browser.guard(|c| c.filesystem, read_setting as fn(&str) -> Option<String>),
        };
        assert!(matches!(settings.get.get(), Err(SdkError::NotImplemented)));

        let node = SdkConfig::new().with_data_directory("/tmp/resin").capabilities();
        let settings = Settings {
            get: node.guard(|c| c.filesystem, read_setting as fn(&str) -> Option<String>),
        };
        let get = settings.get.get().unwrap();
        assert_eq!(get("apiUrl").as_deref(), Some("value of apiUrl"));
    }
}
