//! Visibility and authorization rules for tasks.
//!
//! Both are pure functions of `(principal, task)` so they can be tested
//! without the lifecycle engine or a store.

mod authorization;
mod visibility;

pub use authorization::{AuthorizationPolicy, UnclaimedDeletionPolicy, is_candidate};
pub use visibility::{AccessScope, Caller, TaskVisibility, is_offered_to, is_visible};
