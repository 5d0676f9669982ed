//! Validation hoop.

use salvo::{
    handler,
    http::header::CONTENT_TYPE,
    prelude::{Depot, FlowCtrl, Request, Response},
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    errors::ApiError,
    validation::{RequestInput, RuleChain},
};

/// Runs a [`RuleChain`] before the route handler.
///
/// Failing requests are answered with `400` and every failure; the handler
/// never runs. Passing requests find their [`RequestInput`] in the depot.
#[derive(Debug)]
pub(crate) struct HandleInputErrors {
    chain: RuleChain,
}

impl HandleInputErrors {
    #[must_use]
    pub(crate) fn new(chain: RuleChain) -> Self {
        Self { chain }
    }
}

#[handler]
impl HandleInputErrors {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let input = match read_input(&self.chain, req).await {
            Ok(input) => input,
            Err(error) => {
                res.render(error);
                ctrl.skip_rest();

                return;
            }
        };

        let failures = self.chain.evaluate(&input);

        if !failures.is_empty() {
            debug!(failures = failures.len(), "request rejected by validation");

            res.render(ApiError::Validation(failures));
            ctrl.skip_rest();

            return;
        }

        depot.inject(input);

        ctrl.call_next(req, depot, res).await;
    }
}

async fn read_input(chain: &RuleChain, req: &mut Request) -> Result<RequestInput, ApiError> {
    let mut input = RequestInput::default();

    for name in chain.param_names() {
        if let Some(value) = req.param::<String>(name) {
            input = input.with_param(name, value);
        }
    }

    if !chain.reads_body() || !is_json(req) {
        return Ok(input);
    }

    let payload = req.payload().await.map_err(|source| {
        warn!("could not read request body: {source}");

        ApiError::MalformedBody
    })?;

    if payload.is_empty() {
        return Ok(input);
    }

    let body = serde_json::from_slice::<Value>(payload).map_err(|source| {
        debug!("rejected malformed JSON body: {source}");

        ApiError::MalformedBody
    })?;

    Ok(input.with_body(body))
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.to_ascii_lowercase().contains("json"))
}
