use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Number of entries requested from the location history endpoint
    pub history_limit: u32,
    /// Show demonstration data when a location history or stays request fails.
    /// Simulated predictions and local SOS outcomes do not depend on it.
    pub demo_fallbacks: bool,
    pub toast_duration_ms: u32,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            history_limit: 50,
            demo_fallbacks: true,
            toast_duration_ms: 4000,
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        // New York, same place the demo history lives
        Self {
            default_center_lat: 40.7128,
            default_center_lng: -74.0060,
            default_zoom: 13.0,
        }
    }
}

impl AppConfig {
    /// Reads `SAFETRAVEL_*` variables captured at compile time
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("SAFETRAVEL_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("SAFETRAVEL_ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: parse_or(option_env!("SAFETRAVEL_ENABLE_LOGGING"), defaults.enable_logging),
            history_limit: parse_or(option_env!("SAFETRAVEL_HISTORY_LIMIT"), defaults.history_limit),
            demo_fallbacks: parse_or(option_env!("SAFETRAVEL_DEMO_FALLBACKS"), defaults.demo_fallbacks),
            toast_duration_ms: parse_or(option_env!("SAFETRAVEL_TOAST_DURATION_MS"), defaults.toast_duration_ms),
            map_config: MapConfig {
                default_center_lat: parse_or(
                    option_env!("SAFETRAVEL_MAP_CENTER_LAT"),
                    defaults.map_config.default_center_lat,
                ),
                default_center_lng: parse_or(
                    option_env!("SAFETRAVEL_MAP_CENTER_LNG"),
                    defaults.map_config.default_center_lng,
                ),
                default_zoom: parse_or(option_env!("SAFETRAVEL_MAP_ZOOM"), defaults.map_config.default_zoom),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, fallback: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(fallback)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(Some("25"), 50u32), 25);
        assert_eq!(parse_or(Some("lots"), 50u32), 50);
        assert!(!parse_or(Some(" false "), true));
        assert_eq!(parse_or::<f64>(None, 13.0), 13.0);
    }

    #[test]
    fn logging_flag_selects_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
        assert!(!config.is_production());
    }
}
