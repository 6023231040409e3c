//! Per-asset notes derived from a resolved metadata probe.

use reeldeck_core::MediaMetadata;

/// The strings written into an asset when its probe resolves: the
/// resolution first, then the runtime in minutes to one decimal.
pub fn probe_notes(metadata: &MediaMetadata) -> Vec<String> {
    vec![
        format!("Resolution {}×{}", metadata.width, metadata.height),
        format!("Runtime {:.1} min", metadata.duration_secs / 60.0),
    ]
}
