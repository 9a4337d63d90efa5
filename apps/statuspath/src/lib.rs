//! # statuspath
//!
//! Library half of the statuspath binary: configuration, record files,
//! renderers and CLI commands. The projection itself lives in
//! `statuspath-core`.

pub mod cli;
pub mod config;
pub mod records;
pub mod render;
