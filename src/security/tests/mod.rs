//! Unit tests for the security module.
