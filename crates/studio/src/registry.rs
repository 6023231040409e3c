//! In-memory asset registry, newest ingested first.

use reeldeck_core::{AssetId, VideoAsset};

/// Ordered collection of every asset in the library.
///
/// Each mutation replaces the affected slot (or the whole order) in one
/// step; the registry is owned by the single-threaded controller, so no
/// reader can observe a half-applied change.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    assets: Vec<VideoAsset>,
}

impl AssetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a batch, preserving its internal order.
    pub fn insert_many(&mut self, batch: Vec<VideoAsset>) {
        let mut assets = batch;
        assets.append(&mut self.assets);
        self.assets = assets;
    }

    /// Replace the matching asset with `f(asset)`. No-op if absent.
    pub fn update(&mut self, id: AssetId, f: impl FnOnce(VideoAsset) -> VideoAsset) {
        if let Some(pos) = self.assets.iter().position(|a| a.id == id) {
            let asset = self.assets.remove(pos);
            self.assets.insert(pos, f(asset));
        }
    }

    /// Remove and return the matching asset so the caller can release
    /// its stream. `None` if absent.
    pub fn remove(&mut self, id: AssetId) -> Option<VideoAsset> {
        let pos = self.assets.iter().position(|a| a.id == id)?;
        Some(self.assets.remove(pos))
    }

    /// Look up an asset by id.
    pub fn get(&self, id: AssetId) -> Option<&VideoAsset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Iterate assets newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &VideoAsset> {
        self.assets.iter()
    }

    /// Assets as a slice, newest-first.
    pub fn as_slice(&self) -> &[VideoAsset] {
        &self.assets
    }

    /// Number of assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
