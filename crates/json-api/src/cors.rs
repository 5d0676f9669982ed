//! Cross-origin request guard.

use salvo::{
    cors::{AllowHeaders, Cors, CorsHandler},
    handler,
    http::{Method, StatusError, header::ORIGIN},
    prelude::{Depot, FlowCtrl, Request, Response},
};
use tracing::warn;

/// Admits a request only when its `Origin` header equals the configured
/// frontend origin exactly.
///
/// Requests without an `Origin` header are admitted only when no frontend
/// origin is configured. Rejected requests get a bare `403` before routing.
/// Admitted requests still need [`OriginGuard::cors_handler`] for their
/// response headers and preflight replies.
#[derive(Debug, Clone)]
pub(crate) struct OriginGuard {
    allowed_origin: Option<String>,
}

impl OriginGuard {
    #[must_use]
    pub(crate) fn new(allowed_origin: Option<String>) -> Self {
        Self { allowed_origin }
    }

    pub(crate) fn is_allowed(&self, origin: Option<&str>) -> bool {
        origin == self.allowed_origin.as_deref()
    }

    /// CORS headers and preflight answers for the admitted origin.
    ///
    /// With no frontend origin configured no origin is allowed, so browsers
    /// only ever see same-origin responses.
    #[must_use]
    pub(crate) fn cors_handler(&self) -> CorsHandler {
        let cors = Cors::new()
            .allow_methods(vec![
                Method::GET,
                Method::HEAD,
                Method::PUT,
                Method::PATCH,
                Method::POST,
                Method::DELETE,
            ])
            .allow_headers(AllowHeaders::mirror_request());

        match self.allowed_origin.as_deref() {
            Some(origin) => cors.allow_origin(origin).into_handler(),
            None => cors.into_handler(),
        }
    }
}

#[handler]
impl OriginGuard {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let origin = req.headers().get(ORIGIN).and_then(|value| value.to_str().ok());

        if !self.is_allowed(origin) {
            warn!(
                origin = origin.unwrap_or("<none>"),
                "rejected cross-origin request"
            );

            res.render(StatusError::forbidden().brief("Error de CORS"));
            ctrl.skip_rest();

            return;
        }

        ctrl.call_next(req, depot, res).await;
    }
}
