//! Server Config

use clap::Args;

/// Listening address of the HTTP server.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to bind
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "PORT", default_value_t = 4000)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port` string accepted by the listener.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
