//! Playable media handles supplied by the ingest collaborator.

use std::sync::Arc;

/// A locally-resolvable playable byte stream backing one asset.
///
/// The embedding shell supplies the implementation (an object URL, a
/// temp-file path, a mapped buffer). The handle is shared with whatever
/// player is currently rendering the asset, so `release` must be
/// idempotent; the registry's remove path is the only caller.
pub trait MediaStream: Send + Sync {
    /// Locator the player and the metadata probe can resolve.
    fn locator(&self) -> &str;

    /// Reclaim the underlying resource. Called exactly once per asset,
    /// when the asset is removed; repeated calls must be no-ops.
    fn release(&self);
}

/// One file handed over by the drag-and-drop or file-picker collaborator.
pub struct SourceFile {
    /// Original file name
    pub name: String,

    /// Declared MIME type
    pub content_type: String,

    /// Size in bytes
    pub size_bytes: u64,

    /// Playable handle for the player and the metadata probe
    pub stream: Arc<dyn MediaStream>,
}

impl SourceFile {
    /// Whether the declared type marks this file as video content.
    pub fn is_video(&self) -> bool {
        self.content_type.starts_with("video/")
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size_bytes", &self.size_bytes)
            .field("stream", &self.stream.locator())
            .finish()
    }
}
