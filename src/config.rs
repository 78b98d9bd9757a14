//! # Global runtime configuration.
//!
//! [`Config`] defines the session's fixed parameters: party-slot count, event
//! bus capacity, and the directive queue depth of the runtime loop.
//!
//! Role capacities (tank 1, dps 4, healer 1) are part of the data model, not
//! configuration; see [`Role::capacity`](crate::Role::capacity).
//!
//! # Example
//! ```
//! use warparty::Config;
//!
//! let mut cfg = Config::default();
//! cfg.party_count = 8;
//!
//! assert_eq!(cfg.party_count, 8);
//! ```

/// Global configuration for the session and runtime.
#[derive(Clone, Debug)]
pub struct Config {
    /// Number of party slots; fixed for the lifetime of each session.
    pub party_count: usize,
    /// Capacity of the event bus channel.
    pub bus_capacity: usize,
    /// Capacity of the runtime's directive queue.
    pub queue_capacity: usize,
}

impl Default for Config {
    /// Provides a default configuration:
    /// - `party_count = 12`
    /// - `bus_capacity = 1024`
    /// - `queue_capacity = 256`
    fn default() -> Self {
        Self {
            party_count: 12,
            bus_capacity: 1024,
            queue_capacity: 256,
        }
    }
}
