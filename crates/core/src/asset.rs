//! Video asset model - the core unit of the production library.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::id::{AssetId, TaskId};
use crate::source::{MediaStream, SourceFile};
use crate::task::{ProductionTask, TaskStatus};
use crate::Time;

/// One ingested video file and everything the workflow knows about it.
#[derive(Clone)]
pub struct VideoAsset {
    /// Unique identifier
    pub id: AssetId,

    /// Original file name
    pub name: String,

    /// Declared MIME type
    pub content_type: String,

    /// Size in bytes
    pub size_bytes: u64,

    /// Ingest timestamp
    pub ingested_at: Time,

    /// Playable byte stream, shared with the rendered player
    pub stream: Arc<dyn MediaStream>,

    /// Probe result. `None` until the metadata probe resolves; duration
    /// and dimensions are only ever set together.
    pub metadata: Option<MediaMetadata>,

    /// Free-form tags, deduplicated, insertion-ordered
    pub tags: Vec<String>,

    /// Workflow status
    pub status: AssetStatus,

    /// Free-text notes
    pub notes: String,

    /// Task checklist
    pub tasks: Vec<ProductionTask>,

    /// Human-readable strings written once when metadata resolves,
    /// distinct from the global insight feed
    pub derived_notes: Vec<String>,
}

impl VideoAsset {
    /// Build a fresh backlog asset from an ingested file.
    pub fn from_source(file: SourceFile) -> Self {
        Self {
            id: AssetId::new(),
            name: file.name,
            content_type: file.content_type,
            size_bytes: file.size_bytes,
            ingested_at: chrono::Utc::now(),
            stream: file.stream,
            metadata: None,
            tags: Vec::new(),
            status: AssetStatus::Backlog,
            notes: String::new(),
            tasks: Vec::new(),
            derived_notes: Vec::new(),
        }
    }

    /// Add a tag. Empty (after trimming) or duplicate tags are ignored;
    /// matching is case-sensitive and exact.
    pub fn add_tag(&mut self, text: &str) {
        let tag = text.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return;
        }
        self.tags.push(tag.to_string());
    }

    /// Remove an exact-match tag if present.
    pub fn remove_tag(&mut self, text: &str) {
        self.tags.retain(|t| t != text);
    }

    /// Append a new `Todo` task. Returns the new id, or `None` if the
    /// title is empty after trimming.
    pub fn add_task(&mut self, title: &str) -> Option<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let task = ProductionTask::new(title);
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Replace the status of the matching task. No-op if absent.
    pub fn set_task_status(&mut self, task_id: TaskId, status: TaskStatus) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
            task.status = status;
        }
    }

    /// Remove the matching task. No-op if absent.
    pub fn remove_task(&mut self, task_id: TaskId) {
        self.tasks.retain(|t| t.id != task_id);
    }

    /// Record the probe result and its derived notes in one write.
    pub fn attach_metadata(
        &mut self,
        metadata: MediaMetadata,
        notes: impl IntoIterator<Item = String>,
    ) {
        self.metadata = Some(metadata);
        self.derived_notes.extend(notes);
    }

    /// Resolved duration in seconds, or 0 while unresolved.
    pub fn duration_secs(&self) -> f64 {
        self.metadata.map(|m| m.duration_secs).unwrap_or(0.0)
    }
}

impl std::fmt::Debug for VideoAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoAsset")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size_bytes", &self.size_bytes)
            .field("stream", &self.stream.locator())
            .field("metadata", &self.metadata)
            .field("tags", &self.tags)
            .field("status", &self.status)
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

/// Intrinsic media properties resolved by a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MediaMetadata {
    /// Decoded duration in seconds, may be fractional
    pub duration_secs: f64,

    /// Intrinsic width in pixels
    pub width: u32,

    /// Intrinsic height in pixels
    pub height: u32,
}

/// Workflow status of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetStatus {
    /// Waiting for an owner
    Backlog,
    /// Prepared for assembly
    Ready,
    /// Out the door
    Published,
}

impl AssetStatus {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Backlog => "backlog",
            AssetStatus::Ready => "ready",
            AssetStatus::Published => "published",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullStream;

    impl MediaStream for NullStream {
        fn locator(&self) -> &str {
            "mem://null"
        }

        fn release(&self) {}
    }

    fn asset() -> VideoAsset {
        VideoAsset::from_source(SourceFile {
            name: "take-01.mp4".to_string(),
            content_type: "video/mp4".to_string(),
            size_bytes: 1_000_000,
            stream: Arc::new(NullStream),
        })
    }

    #[test]
    fn fresh_asset_lands_in_backlog() {
        let a = asset();
        assert_eq!(a.status, AssetStatus::Backlog);
        assert!(a.tags.is_empty());
        assert!(a.tasks.is_empty());
        assert!(a.metadata.is_none());
        assert_eq!(a.duration_secs(), 0.0);
    }

    #[test]
    fn tags_are_trimmed_and_deduplicated() {
        let mut a = asset();
        a.add_tag("  b-roll  ");
        a.add_tag("b-roll");
        a.add_tag("B-Roll");
        assert_eq!(a.tags, vec!["b-roll", "B-Roll"]);
    }

    #[test]
    fn blank_tag_is_a_no_op() {
        let mut a = asset();
        a.add_tag("");
        a.add_tag("   ");
        assert!(a.tags.is_empty());
    }

    #[test]
    fn remove_tag_is_exact_match() {
        let mut a = asset();
        a.add_tag("intro");
        a.remove_tag("Intro");
        assert_eq!(a.tags, vec!["intro"]);
        a.remove_tag("intro");
        assert!(a.tags.is_empty());
    }

    #[test]
    fn blank_task_title_is_rejected() {
        let mut a = asset();
        assert!(a.add_task("   ").is_none());
        assert!(a.tasks.is_empty());
    }

    #[test]
    fn task_lifecycle() {
        let mut a = asset();
        let id = a.add_task(" color grade ").unwrap();
        assert_eq!(a.tasks[0].title, "color grade");
        assert_eq!(a.tasks[0].status, TaskStatus::Todo);

        a.set_task_status(id, TaskStatus::Done);
        assert_eq!(a.tasks[0].status, TaskStatus::Done);

        a.set_task_status(TaskId::new(), TaskStatus::InProgress);
        assert_eq!(a.tasks[0].status, TaskStatus::Done);

        a.remove_task(id);
        assert!(a.tasks.is_empty());
        a.remove_task(id);
    }

    #[test]
    fn metadata_attaches_atomically_with_notes() {
        let mut a = asset();
        a.attach_metadata(
            MediaMetadata {
                duration_secs: 12.5,
                width: 1920,
                height: 1080,
            },
            ["Resolution 1920×1080".to_string()],
        );
        assert_eq!(a.duration_secs(), 12.5);
        assert_eq!(a.metadata.unwrap().width, 1920);
        assert_eq!(a.derived_notes.len(), 1);
    }
}
