//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types (errors, config, stream items).
//! - `adapters`: runtime specific implementations (config IO, async matching).

pub mod adapters;
pub mod ports;
