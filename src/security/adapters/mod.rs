//! Adapter implementations for the principal provider port.

pub mod memory;
