//! Configuration module for workforce-table
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WorkforcePaths;
pub use settings::Settings;
