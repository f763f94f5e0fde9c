//! Process-level infrastructure.

pub mod logger;
