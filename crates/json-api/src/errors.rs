//! HTTP error responses.

use salvo::{
    http::{StatusCode, StatusError},
    oapi::{self, Components, EndpointOutRegister, Operation},
    prelude::{Json, Response},
    writing::Scribe,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use inventory_app::domain::products::ProductsServiceError;

use crate::validation::ValidationFailure;

pub(crate) const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";

pub(crate) const MALFORMED_BODY: &str = "JSON no válido";

/// Errors a product route can answer with.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// One or more field checks failed.
    #[error("request failed {} field check(s)", .0.len())]
    Validation(Vec<ValidationFailure>),

    /// No product has the requested id.
    #[error("{}", PRODUCT_NOT_FOUND)]
    NotFound,

    /// The body claimed to be JSON but could not be parsed.
    #[error("malformed JSON body")]
    MalformedBody,

    #[error(transparent)]
    Status(#[from] StatusError),
}

#[derive(Debug, Serialize)]
struct ValidationErrorsBody {
    errors: Vec<ValidationFailure>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        match self {
            Self::Validation(errors) => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(ValidationErrorsBody { errors }));
            }
            Self::NotFound => {
                res.status_code(StatusCode::NOT_FOUND);
                res.render(Json(ErrorBody {
                    error: PRODUCT_NOT_FOUND,
                }));
            }
            Self::MalformedBody => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(ErrorBody {
                    error: MALFORMED_BODY,
                }));
            }
            Self::Status(status) => res.render(status),
        }
    }
}

impl EndpointOutRegister for ApiError {
    fn register(_components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            StatusCode::BAD_REQUEST.as_str(),
            oapi::Response::new("Invalid route parameter or request body"),
        );
        operation.responses.insert(
            StatusCode::NOT_FOUND.as_str(),
            oapi::Response::new("Product not found"),
        );
        operation.responses.insert(
            StatusCode::INTERNAL_SERVER_ERROR.as_str(),
            oapi::Response::new("Internal Server Error"),
        );
    }
}

impl From<ProductsServiceError> for ApiError {
    fn from(error: ProductsServiceError) -> Self {
        match error {
            ProductsServiceError::NotFound => Self::NotFound,
            ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
                StatusError::bad_request()
                    .brief("Invalid product payload")
                    .into()
            }
            ProductsServiceError::Sql(source) => {
                error!("product store failure: {source}");

                StatusError::internal_server_error().into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::validation::{RequestInput, RuleChain, body};

    use super::*;

    #[handler]
    async fn not_found() -> Result<&'static str, ApiError> {
        Err(ApiError::NotFound)
    }

    #[handler]
    async fn invalid() -> Result<&'static str, ApiError> {
        let failures = RuleChain::new()
            .field(body("name").not_blank("El Nombre de producto no puede ir vacio"))
            .evaluate(&RequestInput::default());

        Err(ApiError::Validation(failures))
    }

    #[handler]
    async fn store_down() -> Result<&'static str, ApiError> {
        Err(ProductsServiceError::Sql(sqlx::Error::PoolClosed).into())
    }

    fn make_service() -> Service {
        Service::new(
            Router::new()
                .push(Router::with_path("missing").get(not_found))
                .push(Router::with_path("invalid").get(invalid))
                .push(Router::with_path("down").get(store_down)),
        )
    }

    #[tokio::test]
    async fn test_not_found_body() -> TestResult {
        let mut res = TestClient::get("http://example.com/missing")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(
            res.take_json::<Value>().await?,
            json!({ "error": "Producto no encontrado" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_validation_body() -> TestResult {
        let mut res = TestClient::get("http://example.com/invalid")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            res.take_json::<Value>().await?,
            json!({
                "errors": [{
                    "type": "field",
                    "msg": "El Nombre de producto no puede ir vacio",
                    "path": "name",
                    "location": "body"
                }]
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_store_failure_is_500() {
        let res = TestClient::get("http://example.com/down")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_payload_rejections_map_to_400() {
        for error in [
            ProductsServiceError::InvalidData,
            ProductsServiceError::MissingRequiredData,
        ] {
            let mapped = ApiError::from(error);

            assert!(
                matches!(&mapped, ApiError::Status(status) if status.code == StatusCode::BAD_REQUEST),
                "expected 400, got {mapped:?}"
            );
        }
    }

    #[test]
    fn test_errors_describe_themselves() {
        let failures = RuleChain::new()
            .field(body("name").not_blank("vacio"))
            .field(body("price").not_empty("vacio"))
            .evaluate(&RequestInput::default());

        assert_eq!(
            ApiError::Validation(failures).to_string(),
            "request failed 2 field check(s)"
        );
        assert_eq!(ApiError::NotFound.to_string(), "Producto no encontrado");
        assert_eq!(ApiError::MalformedBody.to_string(), "malformed JSON body");
    }

    #[test]
    fn test_errors_convert_into_boxed_errors() {
        let error = Box::<dyn std::error::Error + Send + Sync>::from(ApiError::NotFound);

        assert_eq!(error.to_string(), PRODUCT_NOT_FOUND);
    }
}
