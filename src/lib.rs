//! cfbridge: Version-Bridging Orchestration
//!
//! Presents one view of platform applications by combining the legacy (v2)
//! and current (v3) API generations, keeps every warning the backends return,
//! and tells operators when their CLI or the server API is out of date.

pub mod actor;
pub mod cli;
pub mod compat;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod summary;
pub mod version;
pub mod warnings;
