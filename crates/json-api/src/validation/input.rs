//! Request input captured for validation.

use serde_json::{Map, Value};

use crate::validation::Location;

/// Route parameters and JSON body of a request, as seen by the field checks.
///
/// Stored in the depot once a request passes validation so handlers read the
/// same values that were checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RequestInput {
    params: Map<String, Value>,
    body: Map<String, Value>,
}

impl RequestInput {
    #[must_use]
    pub(crate) fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params
            .insert(name.to_string(), Value::String(value.into()));

        self
    }

    /// Use a parsed JSON document as the body. Documents that are not objects
    /// expose no fields.
    #[must_use]
    pub(crate) fn with_body(mut self, body: Value) -> Self {
        self.body = match body {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };

        self
    }

    pub(crate) fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(Value::as_str)
    }

    pub(crate) fn body_field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    pub(crate) fn field(&self, location: Location, name: &str) -> Option<&Value> {
        match location {
            Location::Params => self.params.get(name),
            Location::Body => self.body.get(name),
        }
    }
}
