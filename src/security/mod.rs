//! Security context for the task runtime.
//!
//! The runtime never reads an ambient "current user". Callers resolve a
//! [`domain::Principal`] through the [`ports::PrincipalProvider`] port and
//! pass it explicitly to every task operation. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
