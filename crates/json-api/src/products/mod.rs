//! Products

mod handlers;
pub(crate) mod requests;
pub(crate) mod responses;
pub(crate) mod rules;

pub(crate) use handlers::*;
