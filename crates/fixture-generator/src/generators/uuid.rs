//! UUID value generator.

use rand::Rng;
use uuid::{Builder, Uuid};

/// Version 4 UUID built from sixteen bytes drawn from `rng`.
pub fn generate_uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.random()).into_uuid()
}
