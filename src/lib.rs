pub mod analyzer;
pub mod atomic;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod git;
pub mod manifest;
pub mod template;
pub mod ui;

pub use error::{ReleaseError, Result};
