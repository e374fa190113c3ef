//! Step definitions for task runtime BDD scenarios.

mod given;
mod then;
pub mod world;
