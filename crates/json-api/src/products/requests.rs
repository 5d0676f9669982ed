//! Product Requests
//!
//! Conversions from validated request input into store data.

use salvo::http::StatusError;

use inventory_app::domain::products::{
    data::{NewProduct, ProductUpdate},
    models::ProductId,
};

use crate::{
    errors::ApiError,
    products::rules::ID_PARAM,
    validation::{RequestInput, loose_bool, loose_number, string_view},
};

/// Product id from the route. Integers outside the key range cannot name a
/// stored product and are reported as not found.
pub(crate) fn product_id(input: &RequestInput) -> Result<ProductId, ApiError> {
    input
        .param(ID_PARAM)
        .and_then(|raw| raw.parse::<i32>().ok())
        .map(ProductId::new)
        .ok_or(ApiError::NotFound)
}

fn name(input: &RequestInput) -> String {
    string_view(input.body_field("name"))
}

fn price(input: &RequestInput) -> Result<f64, ApiError> {
    let price = loose_number(input.body_field("price"));

    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(invalid_payload())
    }
}

fn availability(input: &RequestInput) -> Result<bool, ApiError> {
    loose_bool(input.body_field("availability")).ok_or_else(invalid_payload)
}

fn invalid_payload() -> ApiError {
    StatusError::bad_request()
        .brief("Invalid product payload")
        .into()
}

impl TryFrom<&RequestInput> for NewProduct {
    type Error = ApiError;

    fn try_from(input: &RequestInput) -> Result<Self, Self::Error> {
        Ok(NewProduct {
            name: name(input),
            price: price(input)?,
        })
    }
}

impl TryFrom<&RequestInput> for ProductUpdate {
    type Error = ApiError;

    fn try_from(input: &RequestInput) -> Result<Self, Self::Error> {
        Ok(ProductUpdate {
            name: name(input),
            price: price(input)?,
            availability: availability(input)?,
        })
    }
}
