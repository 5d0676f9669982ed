//! List Products Handler

use salvo::prelude::*;

use crate::{errors::ApiError, extensions::*, products::responses::ProductsDataResponse};

/// List Products Handler
///
/// Returns every product, newest id first.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsDataResponse>, ApiError> {
    let state = depot.state_or_500()?;

    let products = state.products().list_products().await?;

    Ok(Json(ProductsDataResponse {
        data: products.into_iter().map(Into::into).collect(),
    }))
}
