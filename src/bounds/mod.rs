//! Bounding regions used as partition domains.

mod aabb;
mod square;

pub use aabb::Aabb2;
pub use square::{working_domain, Square2, WORKING_DOMAIN_SIZE};
