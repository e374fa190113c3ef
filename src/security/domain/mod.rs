//! Domain model for authenticated principals and their group memberships.

mod error;
mod ids;
mod principal;

pub use error::SecurityDomainError;
pub use ids::{GroupId, UserId};
pub use principal::Principal;
