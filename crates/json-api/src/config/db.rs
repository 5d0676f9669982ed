//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,
}

impl DatabaseConfig {
    /// Connection string with any credentials removed, safe to log.
    #[must_use]
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.database_url.split_once("://") else {
            return "<unparsed database url>".to_string();
        };

        match rest.rsplit_once('@') {
            Some((_credentials, target)) => format!("{scheme}://***@{target}"),
            None => format!("{scheme}://{rest}"),
        }
    }
}
