//! Taskward: a task runtime for process orchestration engines.
//!
//! This crate manages human and work tasks: creating them, offering them to
//! candidate groups, claiming, assigning, completing, and soft-deleting
//! them, all under a visibility model that distinguishes ordinary users from
//! administrators.
//!
//! # Architecture
//!
//! Taskward follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`security`]: Authenticated principals and their resolution
//! - [`task`]: Task lifecycle, visibility, and runtime facades

pub mod security;
pub mod task;
