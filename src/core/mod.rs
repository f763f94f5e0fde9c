//! Core error handling and request interceptors.

pub mod error;
pub mod middleware;
