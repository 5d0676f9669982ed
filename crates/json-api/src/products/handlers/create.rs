//! Create Product Handler

use salvo::{http::header::LOCATION, prelude::*};
use tracing::info;

use inventory_app::domain::products::data::NewProduct;

use crate::{errors::ApiError, extensions::*, products::responses::ProductDataResponse};

/// Create Product Handler
///
/// Expects a JSON body with `name` and `price`. New products start available.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductDataResponse>, ApiError> {
    let state = depot.state_or_500()?;
    let product = NewProduct::try_from(depot.input_or_500()?)?;

    let created = state.products().create_product(product).await?;

    info!(product_id = %created.id, "created product");

    res.add_header(LOCATION, format!("/api/products/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
