//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use inventory_app::{
    context::AppContext,
    domain::products::{
        MockProductsService,
        models::{Product, ProductId},
    },
};

use crate::{router::app_router, state::State};

pub(crate) fn make_product(id: i32) -> Product {
    Product {
        id: ProductId::new(id),
        name: "Mouse - Testing".to_string(),
        price: 50.0,
        availability: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(products)))
}

/// Product routes backed by the given mock.
pub(crate) fn products_service(products: MockProductsService) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(app_router()),
    )
}
