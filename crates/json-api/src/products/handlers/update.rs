//! Update Product Handler

use salvo::prelude::*;
use tracing::info;

use inventory_app::domain::products::data::ProductUpdate;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{requests::product_id, responses::ProductDataResponse},
};

/// Update Product Handler
///
/// Replaces name, price and availability of an existing product.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(depot),
    fields(product_id = tracing::field::Empty)
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductDataResponse>, ApiError> {
    let state = depot.state_or_500()?;
    let input = depot.input_or_500()?;

    let id = product_id(input)?;

    tracing::Span::current().record("product_id", id.into_inner());

    let update = ProductUpdate::try_from(input)?;

    if state.products().find_product(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    let updated = state.products().update_product(id, update).await?;

    info!(product_id = %id, "updated product");

    Ok(Json(updated.into()))
}
