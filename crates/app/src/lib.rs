//! Product catalog domain and persistence.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
