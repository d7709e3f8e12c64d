//! Currency data and the read-only lookups over it

pub mod config;
pub mod currency;
pub mod log;
pub mod registry;
mod table;

// Re-export main types for cleaner imports
pub use currency::Currency;
pub use registry::{Registry, all, check_table, lookup_by_code, lookup_by_number};
