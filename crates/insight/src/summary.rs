//! Summarizes the asset collection into the agent's briefing lines.

use reeldeck_core::{AssetStatus, VideoAsset};

/// Derives the agent's summary lines from the current asset collection.
///
/// Rules apply in a fixed order and each contributes at most one line, so
/// the same collection always produces the same briefing.
pub struct Summarizer;

impl Summarizer {
    /// Create a new summarizer.
    pub fn new() -> Self {
        Self
    }

    /// Produce the briefing for the given collection.
    pub fn summarize(&self, assets: &[VideoAsset]) -> Vec<String> {
        if assets.is_empty() {
            return vec!["Upload your first clip to start building the production queue.".to_string()];
        }

        let mut lines = Vec::new();

        let total_bytes: u64 = assets.iter().map(|a| a.size_bytes).sum();
        lines.push(format!(
            "{} in the library, {:.1} MB total.",
            count_clips(assets.len()),
            total_bytes as f64 / 1_000_000.0
        ));

        let backlog = count_status(assets, AssetStatus::Backlog);
        if backlog > 0 {
            lines.push(format!(
                "{} in the backlog waiting for an owner.",
                count_clips(backlog)
            ));
        } else {
            lines.push("Backlog is clear.".to_string());
        }

        let ready = count_status(assets, AssetStatus::Ready);
        let published = count_status(assets, AssetStatus::Published);
        if ready > 0 && published == 0 {
            lines.push(format!(
                "{} ready to cut. Time for an assembly session.",
                count_clips(ready)
            ));
        }

        if published > 0 {
            lines.push("Published clips on the board. Consider cutting a highlight compilation.".to_string());
        }

        let total_secs: f64 = assets.iter().map(|a| a.duration_secs()).sum();
        if total_secs > 0.0 {
            lines.push(format!("Total footage runs {}.", format_runtime(total_secs)));
        }

        lines
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

fn count_status(assets: &[VideoAsset], status: AssetStatus) -> usize {
    assets.iter().filter(|a| a.status == status).count()
}

fn count_clips(n: usize) -> String {
    if n == 1 {
        "1 clip".to_string()
    } else {
        format!("{n} clips")
    }
}

/// Format a duration in seconds as zero-padded `HH:MM:SS`.
pub(crate) fn format_runtime(total_secs: f64) -> String {
    let secs = total_secs as u64;
    format!("{:02}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}
