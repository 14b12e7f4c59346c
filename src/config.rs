//! Configuration Module
//!
//! Handles loading the cache and workload configuration from environment variables.

use std::env;

/// Cache and demo workload configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of keys resident in the cache
    pub capacity: usize,
    /// Capacity applied before the final workload phase
    pub resized_capacity: usize,
    /// Number of rounds per workload phase
    pub rounds: usize,
    /// Seed for the workload generator, random when None
    pub seed: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Resident key limit (default: 20)
    /// - `RESIZED_CAPACITY` - Resident key limit for the last phase (default: 50)
    /// - `WORKLOAD_ROUNDS` - Rounds per phase (default: 100)
    /// - `WORKLOAD_SEED` - Generator seed (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.capacity),
            resized_capacity: parse_var("RESIZED_CAPACITY").unwrap_or(defaults.resized_capacity),
            rounds: parse_var("WORKLOAD_ROUNDS").unwrap_or(defaults.rounds),
            seed: parse_var("WORKLOAD_SEED"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 20,
            resized_capacity: 50,
            rounds: 100,
            seed: None,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
