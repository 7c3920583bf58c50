//! Shared data contracts between the marketplace frontend and the REST backend.

pub mod domain;
