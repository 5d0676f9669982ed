//! Delete Product Handler

use salvo::prelude::*;
use tracing::info;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{requests::product_id, responses::MessageDataResponse},
};

pub(crate) const PRODUCT_DELETED: &str = "Producto eliminado correctamente";

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<MessageDataResponse>, ApiError> {
    let state = depot.state_or_500()?;
    let id = product_id(depot.input_or_500()?)?;

    if state.products().find_product(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    state.products().delete_product(id).await?;

    info!(product_id = %id, "deleted product");

    Ok(Json(MessageDataResponse {
        data: PRODUCT_DELETED.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use inventory_app::domain::products::{MockProductsService, models::ProductId};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    #[tokio::test]
    async fn test_delete_then_get_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();
        let mut seq = Sequence::new();

        repo.expect_find_product()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_| Ok(Some(make_product(1))));

        repo.expect_delete_product()
            .once()
            .in_sequence(&mut seq)
            .withf(|id| *id == ProductId::new(1))
            .return_once(|_| Ok(()));

        repo.expect_find_product()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_| Ok(None));

        let service = products_service(repo);

        let mut res = TestClient::delete("http://example.com/api/products/1")
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, json!({ "data": "Producto eliminado correctamente" }));

        let res = TestClient::get("http://example.com/api/products/1")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_product_returns_404() {
        let mut repo = MockProductsService::new();

        repo.expect_find_product().once().return_once(|_| Ok(None));
        repo.expect_delete_product().never();

        let res = TestClient::delete("http://example.com/api/products/2000")
            .send(&products_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_delete_invalid_id_returns_400() {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product().never();

        let res = TestClient::delete("http://example.com/api/products/uno")
            .send(&products_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
