//! Shared request state

use std::sync::Arc;

use inventory_app::{context::AppContext, domain::products::ProductsService};

/// Application state handed to every request through the depot.
#[derive(Clone)]
pub(crate) struct State {
    app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }

    /// Record store for products.
    pub(crate) fn products(&self) -> &dyn ProductsService {
        self.app.products.as_ref()
    }
}
