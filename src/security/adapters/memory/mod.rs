//! In-memory principal provider.

mod user_directory;

pub use user_directory::InMemoryUserDirectory;
