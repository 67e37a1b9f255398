//! Application Configuration
//!
//! Defaults, overridable at build time through `CATALOG_*` environment variables.

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "https://api.escuelajs.co/api/v1/products";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 20, 50];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Collection endpoint, without trailing slash
    pub api_base: String,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Configuration baked in at compile time.
    pub fn load() -> Self {
        Self::from_lookup(|key| match key {
            "CATALOG_API_BASE" => option_env!("CATALOG_API_BASE").map(str::to_string),
            "CATALOG_PAGE_SIZE" => option_env!("CATALOG_PAGE_SIZE").map(str::to_string),
            "CATALOG_LOG_LEVEL" => option_env!("CATALOG_LOG_LEVEL").map(str::to_string),
            _ => None,
        })
    }

    /// Build from an arbitrary key lookup; bad values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = lookup("CATALOG_API_BASE") {
            let base = base.trim().trim_end_matches('/');
            if base.is_empty() {
                log::warn!("CATALOG_API_BASE is empty, using {}", config.api_base);
            } else {
                config.api_base = base.to_string();
            }
        }

        if let Some(raw) = lookup("CATALOG_PAGE_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => log::warn!("Invalid CATALOG_PAGE_SIZE {:?}, using {}", raw, config.page_size),
            }
        }

        if let Some(raw) = lookup("CATALOG_LOG_LEVEL") {
            match raw.trim().parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("Invalid CATALOG_LOG_LEVEL {:?}", raw),
            }
        }

        if !config.page_size_options.contains(&config.page_size) {
            config.page_size_options.push(config.page_size);
            config.page_size_options.sort_unstable();
        }

        config
    }
}
