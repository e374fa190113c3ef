//! In-memory adapter implementations.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! tests and embedded use without a database.

mod store;

pub use store::InMemoryTaskStore;
