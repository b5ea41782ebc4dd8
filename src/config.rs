use serde::Deserialize;

use crate::services::sizing_calculator::SizingParams;

fn default_port() -> u16 {
    8000
}

/// Origins the bundled front-ends are served from. Anything else is
/// refused by the CORS layer.
fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
        "https://panel-solar.vercel.app".to_string(),
        "https://panel-solar.onrender.com".to_string(),
    ]
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    /// Sizing parameter table. Fixed for the lifetime of the process;
    /// overriding it here is a deployment decision, not a runtime one.
    pub sizing: SizingParams,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.cors.allowed_origins.len(), 5);
        assert_eq!(config.sizing.panel_power_w, 550.0);
    }

    #[test]
    fn test_partial_override() {
        let config: Config = serde_json::from_str(
            r#"{"server": {"port": 9090}, "sizing": {"sun_hours_per_day": 4.5}}"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.sizing.sun_hours_per_day, 4.5);
        // untouched fields keep their defaults
        assert_eq!(config.sizing.performance_ratio, 0.8);
    }
}
