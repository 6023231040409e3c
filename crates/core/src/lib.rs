//! ReelDeck core data models.
//!
//! This crate defines the fundamental data structures that power the
//! local video production workflow.

#![warn(missing_docs)]

// Core identities
mod id;

// Assets and their checklists
mod asset;
mod task;

// Ingest surface
mod source;

// Agent activity feed
mod log;

// Re-exports
pub use id::{AssetId, LogEntryId, TaskId};

// Asset & Task
pub use asset::{AssetStatus, MediaMetadata, VideoAsset};
pub use task::{ProductionTask, TaskStatus};

// Ingest
pub use source::{MediaStream, SourceFile};

// Activity feed
pub use log::{AgentLog, LogEntry, Severity, LOG_CAPACITY};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
