//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;
use tracing::{error, info};

use crate::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("invalid database configuration: {0}")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    /// Build application context backed by `PostgreSQL`.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgProductsService::new(Db::new(pool))))
    }

    /// Build application context from a database URL.
    ///
    /// An unreachable database is logged and tolerated: the context is still
    /// returned and store calls fail individually until the database is back.
    ///
    /// # Errors
    ///
    /// Returns an error when the database URL is malformed.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect_lazy(url).map_err(AppInitError::Database)?;

        match database::prepare(&pool).await {
            Ok(()) => info!("database ready"),
            Err(prepare_error) => error!("failed to prepare database: {prepare_error}"),
        }

        Ok(Self::from_pool(pool))
    }
}
