//! Request validation
//!
//! Routes declare a [`RuleChain`] of field checks against route parameters
//! and the JSON body. [`HandleInputErrors`] evaluates the chain before the
//! handler and answers `400` with every failing check.

mod input;
mod middleware;
mod rules;
mod value;

pub(crate) use input::RequestInput;
pub(crate) use middleware::HandleInputErrors;
pub(crate) use rules::{FieldRules, Location, RuleChain, ValidationFailure, body, param};
pub(crate) use value::{loose_bool, loose_number, string_view};
