use serde::{Deserialize, Serialize};

/// Configuration for the HTTP surface of the exporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ApplicationConfig {
    /// Host address the metrics endpoint binds to.
    pub host: String,
    /// Port the metrics endpoint binds to.
    pub port: u16,
}

impl ApplicationConfig {
    /// Returns the `host:port` address to bind the listener to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::ApplicationConfig;

    #[test]
    fn address_joins_host_and_port() {
        let config = ApplicationConfig {
            host: "0.0.0.0".to_owned(),
            port: 8080,
        };

        assert_eq!(config.address(), "0.0.0.0:8080");
    }
}
