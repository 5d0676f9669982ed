//! Depot helper extensions.

use std::{any::Any, sync::Arc};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::{state::State, validation::RequestInput};

/// Typed depot lookups that fail with an internal server error.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Shared application state injected at the root router.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain_or_500::<Arc<State>>()
    }

    /// Input stored by the validation hoop of the current route.
    fn input_or_500(&self) -> Result<&RequestInput, StatusError> {
        self.obtain_or_500::<RequestInput>()
    }
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!("depot is missing {}", std::any::type_name::<T>());

            StatusError::internal_server_error()
        })
    }
}
