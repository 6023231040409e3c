//! Read-model projections for the rendering shell.

use reeldeck_core::{
    AssetId, AssetStatus, LogEntry, MediaMetadata, ProductionTask, Time, VideoAsset,
};
use serde::Serialize;

use crate::desk::StudioDesk;

/// Owned, serializable copy of the full dashboard state at one instant.
/// The shell renders from this and issues commands back into the desk.
#[derive(Debug, Clone, Serialize)]
pub struct StudioSnapshot {
    /// Assets, newest-first
    pub assets: Vec<AssetView>,

    /// Active selection, auto-resolved
    pub selected: Option<AssetId>,

    /// Agent briefing lines
    pub insights: Vec<String>,

    /// Activity feed, newest-first
    pub log: Vec<LogEntry>,
}

/// One asset as the shell sees it. The stream handle is projected down
/// to its locator; ownership stays with the registry.
#[derive(Debug, Clone, Serialize)]
pub struct AssetView {
    /// Asset id
    pub id: AssetId,
    /// Original file name
    pub name: String,
    /// Declared MIME type
    pub content_type: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Ingest timestamp
    pub ingested_at: Time,
    /// Playable locator for the shell's player
    pub locator: String,
    /// Probe result, if resolved
    pub metadata: Option<MediaMetadata>,
    /// Tags, insertion-ordered
    pub tags: Vec<String>,
    /// Workflow status
    pub status: AssetStatus,
    /// Free-text notes
    pub notes: String,
    /// Task checklist
    pub tasks: Vec<ProductionTask>,
    /// Notes derived from the metadata probe
    pub derived_notes: Vec<String>,
}

impl From<&VideoAsset> for AssetView {
    fn from(asset: &VideoAsset) -> Self {
        Self {
            id: asset.id,
            name: asset.name.clone(),
            content_type: asset.content_type.clone(),
            size_bytes: asset.size_bytes,
            ingested_at: asset.ingested_at,
            locator: asset.stream.locator().to_string(),
            metadata: asset.metadata,
            tags: asset.tags.clone(),
            status: asset.status,
            notes: asset.notes.clone(),
            tasks: asset.tasks.clone(),
            derived_notes: asset.derived_notes.clone(),
        }
    }
}

impl StudioSnapshot {
    pub(crate) fn capture(desk: &StudioDesk) -> Self {
        Self {
            assets: desk.registry().iter().map(AssetView::from).collect(),
            selected: desk.selected(),
            insights: desk.insights().to_vec(),
            log: desk.log().iter().cloned().collect(),
        }
    }
}
