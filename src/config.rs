//! Environment configuration.

use std::env;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Reads `PORT`, falling back to 3000 when unset or unparseable.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_port() {
        env::remove_var("PORT");
        assert_eq!(Config::from_env().port, DEFAULT_PORT);
    }
}
