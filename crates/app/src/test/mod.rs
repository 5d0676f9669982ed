//! Shared test infrastructure for store-level tests.


pub(crate) use context::TestContext;
