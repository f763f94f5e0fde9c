//! Application modules, one per resource.

pub mod products;
