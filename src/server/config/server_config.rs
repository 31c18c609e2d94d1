use crate::config::Config;

/// Options for the development server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1", "0.0.0.0")
    pub address: String,

    /// Port to listen on
    pub port: u16,

    /// Whether to reload the site when markdown sources change
    pub watch: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig::from_config(&Config::default())
    }
}

impl ServerConfig {
    /// Create a new server configuration with basic options
    pub fn new(address: &str, port: u16, watch: bool) -> Self {
        ServerConfig {
            address: address.to_string(),
            port,
            watch,
        }
    }

    /// Take the server settings from the site configuration
    pub fn from_config(config: &Config) -> Self {
        ServerConfig::new(&config.server.host, config.server.port, config.server.watch)
    }

    /// Get the full address string (e.g., "127.0.0.1:3000")
    pub fn address_string(&self) -> String {
        if self.address.contains(':') {
            format!("[{}]:{}", self.address, self.port)
        } else {
            format!("{}:{}", self.address, self.port)
        }
    }

    /// Get the full URL (e.g., "http://localhost:3000/")
    pub fn url(&self) -> String {
        let address = if self.address == "127.0.0.1" {
            "localhost".to_string()
        } else if self.address.contains(':') {
            format!("[{}]", self.address)
        } else {
            self.address.clone()
        };

        format!("http://{}:{}/", address, self.port)
    }
}
