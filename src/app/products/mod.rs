//! Product resource: model, store and HTTP handlers.

pub mod handler;
pub mod model;
pub mod service;
