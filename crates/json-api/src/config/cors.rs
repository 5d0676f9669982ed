//! CORS Config

use clap::Args;

/// Cross-origin settings.
#[derive(Debug, Args)]
pub struct CorsConfig {
    /// The only origin allowed to call the API
    #[arg(long, env = "FRONTEND_URL")]
    pub frontend_url: Option<String>,
}
