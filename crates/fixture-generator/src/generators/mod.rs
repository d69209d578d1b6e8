//! Individual value generators.
//!
//! Each module takes an explicit RNG so callers choose between a seeded
//! generator and the thread-local one.

pub mod boolean;
pub mod collection;
pub mod string;
pub mod temporal;
pub mod uuid;

pub use boolean::weighted_bool;
pub use collection::{collect_entries, collect_list, collect_map, collect_set, pick, RETRY_FACTOR};
pub use string::{generate_string, generate_string_between};
pub use uuid::generate_uuid_v4;
