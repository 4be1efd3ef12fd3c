//! Credential module

mod api;
mod models;

pub use models::Credential;
