//! App Router

use salvo::Router;

use crate::{
    products::{self, rules},
    validation::{HandleInputErrors, RuleChain},
};

/// Validated route: the rule chain runs as a hoop ahead of the handler.
fn validated(chain: RuleChain) -> Router {
    Router::new().hoop(HandleInputErrors::new(chain))
}

pub(crate) fn app_router() -> Router {
    Router::with_path("api/products")
        .get(products::index::handler)
        .push(validated(rules::create_product()).post(products::create::handler))
        .push(
            Router::with_path("{id}")
                .push(validated(rules::product_id()).get(products::get::handler))
                .push(validated(rules::update_product()).put(products::update::handler))
                .push(validated(rules::product_id()).patch(products::availability::handler))
                .push(validated(rules::product_id()).delete(products::delete::handler)),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use inventory_app::domain::products::MockProductsService;

    use crate::test_helpers::products_service;

    #[tokio::test]
    async fn test_unknown_method_is_not_routed() {
        let res = TestClient::post("http://example.com/api/products/1")
            .json(&json!({ "name": "Monitor", "price": 10 }))
            .send(&products_service(MockProductsService::new()))
            .await;

        assert!(
            res.status_code.is_some_and(|status| status.is_client_error()),
            "POST on a single product should not be routed, got {:?}",
            res.status_code
        );
    }

    #[tokio::test]
    async fn test_update_validates_id_and_body_together() -> TestResult {
        let mut res = TestClient::put("http://example.com/api/products/abc")
            .json(&json!({}))
            .send(&products_service(MockProductsService::new()))
            .await;

        let body: Value = res.take_json().await?;

        let locations: Vec<&str> = body["errors"]
            .as_array()
            .map(|errors| errors.iter().filter_map(|e| e["location"].as_str()).collect())
            .unwrap_or_default();

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(locations, vec!["params", "body", "body", "body", "body", "body"]);
        assert_eq!(body["errors"][0]["msg"], json!("ID no válido"));

        Ok(())
    }
}
