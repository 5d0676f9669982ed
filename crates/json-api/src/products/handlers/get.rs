//! Get Product Handler

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{requests::product_id, responses::ProductDataResponse},
};

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductDataResponse>, ApiError> {
    let state = depot.state_or_500()?;
    let id = product_id(depot.input_or_500()?)?;

    let product = state
        .products()
        .find_product(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(product.into()))
}
