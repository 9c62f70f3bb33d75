use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Plain,
    Json,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Namespace used when building profile document paths.
    pub app_id: String,
    pub broadcast_capacity: usize,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            app_id: "skill-swap".to_string(),
            broadcast_capacity: 100,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            app_id: env::var("APP_ID")
                .ok()
                .filter(|id| !id.trim().is_empty())
                .unwrap_or(defaults.app_id),
            broadcast_capacity: env::var("BROADCAST_CAPACITY")
                .ok()
                .and_then(|c| c.parse().ok())
                .filter(|c| *c > 0)
                .unwrap_or(defaults.broadcast_capacity),
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") | Ok("JSON") => LogFormat::Json,
                _ => defaults.log_format,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_prototype_port() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.log_format, LogFormat::Plain);
    }
}
