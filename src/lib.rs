//! textsmith - Elm-style text manipulation workspace
//!
//! This crate provides the core types and logic for a tabbed text workspace
//! with undo history, find/replace and one-shot transforms, implementing the
//! Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod export;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod search;
pub mod stats;
pub mod tracing;
pub mod transform;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
