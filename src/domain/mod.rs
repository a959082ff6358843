//! Domain logic - pure values independent of git, files and processes

pub mod repository;
pub mod version;

pub use repository::RepositoryId;
pub use version::{BumpKind, Version};
