//! Toggle Product Availability Handler

use salvo::prelude::*;
use tracing::info;

use inventory_app::domain::products::data::ProductUpdate;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{requests::product_id, responses::ProductDataResponse},
};

/// Toggle Product Availability Handler
///
/// Flips the availability of an existing product. The request body is ignored.
#[endpoint(
    tags("products"),
    summary = "Toggle Product Availability",
    responses(
        (status_code = StatusCode::OK, description = "Availability toggled"),
    ),
)]
#[tracing::instrument(
    name = "products.toggle_availability",
    skip(depot),
    fields(product_id = tracing::field::Empty)
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductDataResponse>, ApiError> {
    let state = depot.state_or_500()?;
    let id = product_id(depot.input_or_500()?)?;

    tracing::Span::current().record("product_id", id.into_inner());

    let product = state
        .products()
        .find_product(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let update = ProductUpdate {
        name: product.name,
        price: product.price,
        availability: !product.availability,
    };

    let updated = state.products().update_product(id, update).await?;

    info!(
        product_id = %id,
        availability = updated.availability,
        "toggled product availability"
    );

    Ok(Json(updated.into()))
}
