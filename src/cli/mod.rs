//! Command workflows behind the `release-kit` binary

pub mod orchestration;
