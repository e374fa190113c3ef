//! Port contracts for principal resolution.

pub mod principal_provider;

pub use principal_provider::{PrincipalProvider, SecurityError, SecurityResult};
