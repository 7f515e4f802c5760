//! Core domain concepts: models, queries, errors

pub mod error;
pub mod model;
pub mod query;
