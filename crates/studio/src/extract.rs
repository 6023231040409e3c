//! Drives metadata probes for assets that still lack a resolution.

use std::collections::HashSet;
use std::sync::Arc;

use reeldeck_core::AssetId;
use reeldeck_insight::probe_notes;
use reeldeck_probe::MediaProbe;
use tracing::debug;

use crate::registry::AssetRegistry;

/// Resolves duration and dimensions for unprobed assets.
///
/// Each asset is probed at most once for its whole lifetime: a failed or
/// timed-out probe leaves it permanently unresolved, and the attempted
/// set keeps later passes from retrying it.
pub struct MetadataExtractor {
    probe: Arc<dyn MediaProbe>,
    attempted: HashSet<AssetId>,
}

impl MetadataExtractor {
    /// Create an extractor backed by the given probe.
    pub fn new(probe: Arc<dyn MediaProbe>) -> Self {
        Self {
            probe,
            attempted: HashSet::new(),
        }
    }

    /// Probe every asset whose metadata is unset and not yet attempted.
    /// Returns how many assets were resolved in this pass.
    pub async fn resolve(&mut self, registry: &mut AssetRegistry) -> usize {
        let pending: Vec<(AssetId, String)> = registry
            .iter()
            .filter(|a| a.metadata.is_none() && !self.attempted.contains(&a.id))
            .map(|a| (a.id, a.stream.locator().to_string()))
            .collect();

        let mut resolved = 0;
        for (id, locator) in pending {
            self.attempted.insert(id);
            match self.probe.probe(&locator).await {
                Ok(metadata) => {
                    registry.update(id, |mut asset| {
                        asset.attach_metadata(metadata, probe_notes(&metadata));
                        asset
                    });
                    resolved += 1;
                    debug!(asset = %id, duration = metadata.duration_secs, "metadata resolved");
                }
                Err(err) => {
                    // Unresolvable stays unresolved; the feed never hears of it.
                    debug!(asset = %id, error = %err, "metadata probe failed");
                }
            }
        }

        resolved
    }
}
