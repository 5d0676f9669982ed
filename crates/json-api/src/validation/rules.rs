//! Declarative field rules.

use serde::Serialize;
use serde_json::Value;

use crate::validation::{RequestInput, value};

/// Where a checked field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Location {
    Params,
    Body,
}

/// A single predicate over a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Check {
    /// String view is an optionally signed run of digits.
    Int,
    /// String view is an optionally signed decimal.
    Numeric,
    /// String view is non-empty.
    NotEmpty,
    /// String view is non-empty once surrounding whitespace is trimmed.
    NotBlank,
    /// String view is one of `true`, `false`, `1` or `0`.
    Boolean,
    /// Loose numeric conversion is finite and strictly greater than zero.
    Positive,
}

impl Check {
    pub(crate) fn passes(self, field: Option<&Value>) -> bool {
        match self {
            Self::Int => value::is_int(&value::string_view(field)),
            Self::Numeric => value::is_numeric(&value::string_view(field)),
            Self::NotEmpty => !value::string_view(field).is_empty(),
            Self::NotBlank => !value::string_view(field).trim().is_empty(),
            Self::Boolean => value::is_boolean(&value::string_view(field)),
            Self::Positive => {
                let number = value::loose_number(field);

                number.is_finite() && number > 0.0
            }
        }
    }
}

/// One rejected check, in the shape returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ValidationFailure {
    #[serde(rename = "type")]
    pub(crate) kind: &'static str,

    /// The offending value, omitted when the field was absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) value: Option<Value>,

    pub(crate) msg: &'static str,

    pub(crate) path: &'static str,

    pub(crate) location: Location,
}

/// Checks declared for one field, evaluated in declaration order.
#[derive(Debug, Clone)]
pub(crate) struct FieldRules {
    location: Location,
    field: &'static str,
    checks: Vec<(Check, &'static str)>,
}

/// Rules for a route parameter.
pub(crate) fn param(field: &'static str) -> FieldRules {
    FieldRules::new(Location::Params, field)
}

/// Rules for a JSON body field.
pub(crate) fn body(field: &'static str) -> FieldRules {
    FieldRules::new(Location::Body, field)
}

impl FieldRules {
    fn new(location: Location, field: &'static str) -> Self {
        Self {
            location,
            field,
            checks: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn check(mut self, check: Check, message: &'static str) -> Self {
        self.checks.push((check, message));

        self
    }

    #[must_use]
    pub(crate) fn is_int(self, message: &'static str) -> Self {
        self.check(Check::Int, message)
    }

    #[must_use]
    pub(crate) fn is_numeric(self, message: &'static str) -> Self {
        self.check(Check::Numeric, message)
    }

    #[must_use]
    pub(crate) fn not_empty(self, message: &'static str) -> Self {
        self.check(Check::NotEmpty, message)
    }

    #[must_use]
    pub(crate) fn not_blank(self, message: &'static str) -> Self {
        self.check(Check::NotBlank, message)
    }

    #[must_use]
    pub(crate) fn is_boolean(self, message: &'static str) -> Self {
        self.check(Check::Boolean, message)
    }

    #[must_use]
    pub(crate) fn positive(self, message: &'static str) -> Self {
        self.check(Check::Positive, message)
    }

    fn evaluate<'a>(
        &'a self,
        input: &'a RequestInput,
    ) -> impl Iterator<Item = ValidationFailure> + 'a {
        let field = input.field(self.location, self.field);

        self.checks
            .iter()
            .filter(move |(check, _)| !check.passes(field))
            .map(move |(_, message)| ValidationFailure {
                kind: "field",
                value: field.cloned(),
                msg: *message,
                path: self.field,
                location: self.location,
            })
    }
}

/// Ordered field rules for one route.
///
/// Every check runs; a failing check does not stop later checks on the same
/// field or on other fields.
#[derive(Debug, Clone, Default)]
pub(crate) struct RuleChain {
    fields: Vec<FieldRules>,
}

impl RuleChain {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub(crate) fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);

        self
    }

    /// All failures, ordered by field declaration then check declaration.
    pub(crate) fn evaluate(&self, input: &RequestInput) -> Vec<ValidationFailure> {
        self.fields
            .iter()
            .flat_map(|rules| rules.evaluate(input))
            .collect()
    }

    /// Names of the route parameters this chain reads.
    pub(crate) fn param_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|rules| rules.location == Location::Params)
            .map(|rules| rules.field)
    }

    pub(crate) fn reads_body(&self) -> bool {
        self.fields
            .iter()
            .any(|rules| rules.location == Location::Body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn price_chain() -> RuleChain {
        RuleChain::new().field(
            body("price")
                .is_numeric("not a number")
                .not_empty("required")
                .positive("must be positive"),
        )
    }

    fn messages(failures: &[ValidationFailure]) -> Vec<&'static str> {
        failures.iter().map(|failure| failure.msg).collect()
    }

    #[test]
    fn test_every_failing_check_is_reported() {
        let failures = price_chain().evaluate(&RequestInput::default());

        assert_eq!(
            messages(&failures),
            vec!["not a number", "required", "must be positive"]
        );
    }

    #[test]
    fn test_only_failing_checks_are_reported() {
        let input = RequestInput::default().with_body(json!({ "price": 0 }));

        let failures = price_chain().evaluate(&input);

        assert_eq!(messages(&failures), vec!["must be positive"]);
    }

    #[test]
    fn test_passing_input_has_no_failures() {
        let input = RequestInput::default().with_body(json!({ "price": "12.5" }));

        assert!(price_chain().evaluate(&input).is_empty());
    }

    #[test]
    fn test_failures_follow_field_declaration_order() {
        let chain = RuleChain::new()
            .field(param("id").is_int("bad id"))
            .field(body("name").not_blank("bad name"))
            .field(body("availability").is_boolean("bad availability"));

        let input = RequestInput::default()
            .with_param("id", "abc")
            .with_body(json!({ "name": "   ", "availability": "yes" }));

        let failures = chain.evaluate(&input);

        assert_eq!(
            messages(&failures),
            vec!["bad id", "bad name", "bad availability"]
        );
        assert_eq!(failures.first().map(|f| f.location), Some(Location::Params));
        assert_eq!(failures.last().map(|f| f.path), Some("availability"));
    }

    #[test]
    fn test_failure_serialization() -> serde_json::Result<()> {
        let input = RequestInput::default().with_body(json!({ "price": "Hola" }));

        let failures = RuleChain::new()
            .field(body("price").is_numeric("Valor no válido"))
            .field(body("name").not_blank("Nombre vacío"))
            .evaluate(&input);

        assert_eq!(
            serde_json::to_value(&failures)?,
            json!([
                {
                    "type": "field",
                    "value": "Hola",
                    "msg": "Valor no válido",
                    "path": "price",
                    "location": "body"
                },
                {
                    "type": "field",
                    "msg": "Nombre vacío",
                    "path": "name",
                    "location": "body"
                }
            ])
        );

        Ok(())
    }

    #[test]
    fn test_param_names_and_body_usage() {
        let chain = RuleChain::new().field(param("id").is_int("bad id"));

        assert_eq!(chain.param_names().collect::<Vec<_>>(), vec!["id"]);
        assert!(!chain.reads_body(), "param-only chains skip the body");
        assert!(price_chain().reads_body(), "body rules need the body");
    }

    #[test]
    fn test_positive_check_uses_loose_numbers() {
        assert!(Check::Positive.passes(Some(&json!("0.01"))));
        assert!(Check::Positive.passes(Some(&json!(true))));
        assert!(!Check::Positive.passes(Some(&json!("-3"))));
        assert!(!Check::Positive.passes(Some(&json!(null))));
        assert!(!Check::Positive.passes(None));
    }

    #[test]
    fn test_positive_check_rejects_overflowing_numbers() {
        let huge = format!("1{}", "0".repeat(400));

        assert!(Check::Numeric.passes(Some(&json!(huge))));
        assert!(!Check::Positive.passes(Some(&json!(huge))));
    }
}
