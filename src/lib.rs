pub mod accumulate;
pub mod classify;
pub mod config;
pub mod error;
pub mod git_ops;
pub mod ui;
pub mod version;

pub use accumulate::{accumulate, AccumulationResult, BumpCounts, CommitRecord};
pub use classify::{classify, Bump};
pub use error::{GitSemverError, Result};
pub use version::Version;
