//! Task lifecycle management.
//!
//! Tasks are created standalone, offered to candidate groups and users,
//! claimed, assigned, completed, updated, or soft-deleted. Every operation
//! runs on behalf of an explicit principal and is subject to the visibility
//! and authorization rules in [`policy`]. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Visibility and authorization rules in [`policy`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services and runtime facades in [`services`]

pub mod adapters;
pub mod domain;
pub mod policy;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
