//! The studio controller - commands in, read-only state out.

use std::sync::Arc;

use reeldeck_core::{AgentLog, AssetId, AssetStatus, SourceFile, TaskId, TaskStatus, VideoAsset};
use reeldeck_insight::Summarizer;
use reeldeck_probe::MediaProbe;
use tracing::{info, warn};

use crate::extract::MetadataExtractor;
use crate::registry::AssetRegistry;
use crate::snapshot::StudioSnapshot;

/// Owns the full dashboard state and applies every workflow command.
///
/// All commands are synchronous and run to completion; the only await
/// point is [`StudioDesk::resolve_metadata`]. Commands never fail:
/// invalid input is either a logged warning (ingest with no videos, a
/// bulk move nothing qualifies for) or a silent no-op (blank text,
/// missing ids).
pub struct StudioDesk {
    registry: AssetRegistry,
    log: AgentLog,
    selected: Option<AssetId>,
    insights: Vec<String>,
    summarizer: Summarizer,
    extractor: MetadataExtractor,
}

impl StudioDesk {
    /// Create an empty desk backed by the given metadata probe.
    pub fn new(probe: Arc<dyn MediaProbe>) -> Self {
        let summarizer = Summarizer::new();
        let insights = summarizer.summarize(&[]);
        Self {
            registry: AssetRegistry::new(),
            log: AgentLog::new(),
            selected: None,
            insights,
            summarizer,
            extractor: MetadataExtractor::new(probe),
        }
    }

    // === Commands ===

    /// Ingest a batch of files, keeping only those whose declared type is
    /// video. Returns the new asset ids, newest-first; empty if nothing
    /// qualified (which leaves the registry untouched and logs a warning).
    pub fn ingest(&mut self, files: Vec<SourceFile>) -> Vec<AssetId> {
        let clips: Vec<SourceFile> = files.into_iter().filter(SourceFile::is_video).collect();
        if clips.is_empty() {
            warn!("ingest batch contained no video files");
            self.log.warning("No video files in that batch. Nothing was added.");
            return Vec::new();
        }

        let assets: Vec<VideoAsset> = clips.into_iter().map(VideoAsset::from_source).collect();
        let ids: Vec<AssetId> = assets.iter().map(|a| a.id).collect();
        let count = assets.len();

        self.registry.insert_many(assets);
        info!(count, "ingested clips");
        self.log.success(format!(
            "Ingested {count} {} into the backlog.",
            noun(count)
        ));
        self.selected = ids.first().copied();
        self.refresh_insights();
        ids
    }

    /// Add a tag to an asset. Blank or duplicate tags are ignored.
    pub fn add_tag(&mut self, asset_id: AssetId, text: &str) {
        self.registry.update(asset_id, |mut asset| {
            asset.add_tag(text);
            asset
        });
        self.refresh_insights();
    }

    /// Remove an exact-match tag from an asset.
    pub fn remove_tag(&mut self, asset_id: AssetId, text: &str) {
        self.registry.update(asset_id, |mut asset| {
            asset.remove_tag(text);
            asset
        });
        self.refresh_insights();
    }

    /// Append a `Todo` task to an asset. Blank titles are ignored.
    pub fn add_task(&mut self, asset_id: AssetId, title: &str) {
        self.registry.update(asset_id, |mut asset| {
            asset.add_task(title);
            asset
        });
        self.refresh_insights();
    }

    /// Replace a task's status. No-op if the asset or task is missing.
    pub fn set_task_status(&mut self, asset_id: AssetId, task_id: TaskId, status: TaskStatus) {
        self.registry.update(asset_id, |mut asset| {
            asset.set_task_status(task_id, status);
            asset
        });
        self.refresh_insights();
    }

    /// Remove a task. No-op if the asset or task is missing.
    pub fn remove_task(&mut self, asset_id: AssetId, task_id: TaskId) {
        self.registry.update(asset_id, |mut asset| {
            asset.remove_task(task_id);
            asset
        });
        self.refresh_insights();
    }

    /// Replace an asset's free-text notes.
    pub fn set_notes(&mut self, asset_id: AssetId, text: &str) {
        let text = text.to_string();
        self.registry.update(asset_id, |mut asset| {
            asset.notes = text;
            asset
        });
        self.refresh_insights();
    }

    /// Set one asset's workflow status directly.
    pub fn set_status(&mut self, asset_id: AssetId, status: AssetStatus) {
        self.registry.update(asset_id, |mut asset| {
            asset.status = status;
            asset
        });
        self.refresh_insights();
    }

    /// Remove an asset, releasing its stream. Idempotent: a missing id is
    /// a silent no-op. Clears the selection iff it pointed at this asset.
    pub fn remove_asset(&mut self, asset_id: AssetId) {
        let Some(asset) = self.registry.remove(asset_id) else {
            return;
        };
        asset.stream.release();
        info!(asset = %asset_id, name = %asset.name, "removed clip");
        self.log
            .info(format!("Removed \"{}\" from the library.", asset.name));
        if self.selected == Some(asset_id) {
            self.selected = None;
        }
        self.refresh_insights();
    }

    /// Move every eligible asset to `target`. An asset is eligible iff
    /// its status differs and, when the target is `Published`, it carries
    /// at least one task.
    pub fn bulk_assign(&mut self, target: AssetStatus) {
        let eligible: Vec<AssetId> = self
            .registry
            .iter()
            .filter(|a| {
                a.status != target && (target != AssetStatus::Published || !a.tasks.is_empty())
            })
            .map(|a| a.id)
            .collect();

        for id in &eligible {
            self.registry.update(*id, |mut asset| {
                asset.status = target;
                asset
            });
        }

        let updated = eligible.len();
        if updated > 0 {
            info!(updated, %target, "bulk status move");
            self.log
                .success(format!("Moved {updated} {} to {target}.", noun(updated)));
        } else {
            self.log
                .warning(format!("No clips qualified for a move to {target}."));
        }
        self.refresh_insights();
    }

    /// Probe every asset still lacking metadata, once each. Returns how
    /// many resolved in this pass.
    pub async fn resolve_metadata(&mut self) -> usize {
        let resolved = self.extractor.resolve(&mut self.registry).await;
        if resolved > 0 {
            self.refresh_insights();
        }
        resolved
    }

    // === Selection ===

    /// Explicitly select an asset. Unknown ids are ignored.
    pub fn select(&mut self, asset_id: AssetId) {
        if self.registry.get(asset_id).is_some() {
            self.selected = Some(asset_id);
        }
    }

    /// Drop the explicit selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The active asset id. Falls back to the newest registry entry when
    /// nothing is explicitly selected.
    pub fn selected(&self) -> Option<AssetId> {
        self.selected
            .or_else(|| self.registry.iter().next().map(|a| a.id))
    }

    // === Read surface ===

    /// The asset registry, newest-first.
    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// The agent's current briefing lines.
    pub fn insights(&self) -> &[String] {
        &self.insights
    }

    /// The activity feed, newest-first.
    pub fn log(&self) -> &AgentLog {
        &self.log
    }

    /// Owned, serializable projection of the full state.
    pub fn snapshot(&self) -> StudioSnapshot {
        StudioSnapshot::capture(self)
    }

    fn refresh_insights(&mut self) {
        self.insights = self.summarizer.summarize(self.registry.as_slice());
    }
}

fn noun(count: usize) -> &'static str {
    if count == 1 {
        "clip"
    } else {
        "clips"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use reeldeck_core::{MediaMetadata, MediaStream, Severity};
    use reeldeck_probe::{ProbeError, Result as ProbeResult};

    use super::*;

    struct CountedStream {
        locator: String,
        releases: Arc<AtomicUsize>,
    }

    impl MediaStream for CountedStream {
        fn locator(&self) -> &str {
            &self.locator
        }

        fn release(&self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct StubProbe;

    #[async_trait]
    impl MediaProbe for StubProbe {
        async fn probe(&self, _locator: &str) -> ProbeResult<MediaMetadata> {
            Err(ProbeError::Backend("no backend in tests".to_string()))
        }
    }

    struct FixedProbe(MediaMetadata);

    #[async_trait]
    impl MediaProbe for FixedProbe {
        async fn probe(&self, _locator: &str) -> ProbeResult<MediaMetadata> {
            Ok(self.0)
        }
    }

    fn desk() -> StudioDesk {
        StudioDesk::new(Arc::new(StubProbe))
    }

    fn file(name: &str, content_type: &str) -> SourceFile {
        file_with_releases(name, content_type, Arc::new(AtomicUsize::new(0)))
    }

    fn file_with_releases(
        name: &str,
        content_type: &str,
        releases: Arc<AtomicUsize>,
    ) -> SourceFile {
        SourceFile {
            name: name.to_string(),
            content_type: content_type.to_string(),
            size_bytes: 2_000_000,
            stream: Arc::new(CountedStream {
                locator: format!("mem://{name}"),
                releases,
            }),
        }
    }

    #[test]
    fn new_desk_starts_with_the_invitation() {
        let desk = desk();
        assert_eq!(desk.insights().len(), 1);
        assert!(desk.insights()[0].contains("first clip"));
        assert!(desk.log().is_empty());
        assert_eq!(desk.selected(), None);
    }

    #[test]
    fn ingest_drops_non_video_files() {
        let mut desk = desk();
        let ids = desk.ingest(vec![
            file("notes.txt", "text/plain"),
            file("cover.png", "image/png"),
        ]);

        assert!(ids.is_empty());
        assert!(desk.registry().is_empty());
        assert_eq!(desk.log().latest().unwrap().severity, Severity::Warning);
    }

    #[test]
    fn ingest_keeps_videos_newest_first_and_selects_the_first() {
        let mut desk = desk();
        desk.ingest(vec![file("old.mp4", "video/mp4")]);
        let ids = desk.ingest(vec![
            file("a.mp4", "video/mp4"),
            file("skip.pdf", "application/pdf"),
            file("b.webm", "video/webm"),
        ]);

        assert_eq!(ids.len(), 2);
        let names: Vec<&str> = desk.registry().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a.mp4", "b.webm", "old.mp4"]);
        assert!(desk
            .registry()
            .iter()
            .all(|a| a.status == AssetStatus::Backlog));
        assert_eq!(desk.selected(), Some(ids[0]));
        assert_eq!(desk.log().latest().unwrap().severity, Severity::Success);
        assert!(desk.log().latest().unwrap().message.contains("2 clips"));
    }

    #[test]
    fn tag_commands_delegate_with_dedup() {
        let mut desk = desk();
        let ids = desk.ingest(vec![file("a.mp4", "video/mp4")]);
        let id = ids[0];

        desk.add_tag(id, "drone");
        desk.add_tag(id, "drone");
        desk.add_tag(id, "   ");
        assert_eq!(desk.registry().get(id).unwrap().tags, vec!["drone"]);

        desk.remove_tag(id, "drone");
        assert!(desk.registry().get(id).unwrap().tags.is_empty());

        // Unknown asset ids are silent no-ops.
        desk.add_tag(AssetId::new(), "ghost");
    }

    #[test]
    fn bulk_publish_requires_at_least_one_task() {
        let mut desk = desk();
        let ids = desk.ingest(vec![
            file("tasked.mp4", "video/mp4"),
            file("bare.mp4", "video/mp4"),
        ]);
        desk.add_task(ids[0], "trim the intro");

        desk.bulk_assign(AssetStatus::Published);

        assert_eq!(
            desk.registry().get(ids[0]).unwrap().status,
            AssetStatus::Published
        );
        assert_eq!(
            desk.registry().get(ids[1]).unwrap().status,
            AssetStatus::Backlog
        );
        assert_eq!(desk.log().latest().unwrap().severity, Severity::Success);
        assert!(desk.log().latest().unwrap().message.contains("1 clip"));
    }

    #[test]
    fn bulk_assign_warns_when_nothing_qualifies() {
        let mut desk = desk();
        let ids = desk.ingest(vec![file("bare.mp4", "video/mp4")]);

        desk.bulk_assign(AssetStatus::Published);
        assert_eq!(
            desk.registry().get(ids[0]).unwrap().status,
            AssetStatus::Backlog
        );
        assert_eq!(desk.log().latest().unwrap().severity, Severity::Warning);
    }

    #[test]
    fn bulk_assign_to_ready_needs_no_tasks() {
        let mut desk = desk();
        let ids = desk.ingest(vec![file("a.mp4", "video/mp4"), file("b.mp4", "video/mp4")]);

        desk.bulk_assign(AssetStatus::Ready);
        assert!(ids
            .iter()
            .all(|id| desk.registry().get(*id).unwrap().status == AssetStatus::Ready));
        assert!(desk.log().latest().unwrap().message.contains("2 clips"));
    }

    #[test]
    fn remove_asset_releases_the_stream_exactly_once() {
        let releases = Arc::new(AtomicUsize::new(0));
        let mut desk = desk();
        let ids = desk.ingest(vec![file_with_releases(
            "a.mp4",
            "video/mp4",
            releases.clone(),
        )]);
        let id = ids[0];
        desk.select(id);

        desk.remove_asset(id);
        assert!(desk.registry().is_empty());
        assert_eq!(releases.load(Ordering::SeqCst), 1);
        assert_eq!(desk.selected(), None);
        assert_eq!(desk.log().latest().unwrap().severity, Severity::Info);

        // Idempotent: the second call touches nothing.
        let entries = desk.log().len();
        desk.remove_asset(id);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
        assert_eq!(desk.log().len(), entries);
    }

    #[test]
    fn removal_keeps_unrelated_selection() {
        let mut desk = desk();
        let ids = desk.ingest(vec![file("a.mp4", "video/mp4"), file("b.mp4", "video/mp4")]);
        desk.select(ids[1]);

        desk.remove_asset(ids[0]);
        assert_eq!(desk.selected(), Some(ids[1]));
    }

    #[test]
    fn selection_auto_resolves_to_the_newest_entry() {
        let mut desk = desk();
        let ids = desk.ingest(vec![file("a.mp4", "video/mp4")]);
        desk.clear_selection();

        assert_eq!(desk.selected(), Some(ids[0]));
        desk.select(AssetId::new());
        assert_eq!(desk.selected(), Some(ids[0]));
    }

    #[test]
    fn production_scenario_end_to_end() {
        let mut desk = desk();
        let ids = desk.ingest(vec![file("a.mp4", "video/mp4"), file("b.mp4", "video/mp4")]);
        assert_eq!(desk.registry().len(), 2);

        desk.clear_selection();
        assert_eq!(desk.selected(), Some(ids[0]));

        desk.add_task(ids[0], "rough cut");
        desk.bulk_assign(AssetStatus::Published);

        assert_eq!(
            desk.registry().get(ids[0]).unwrap().status,
            AssetStatus::Published
        );
        assert_eq!(
            desk.registry().get(ids[1]).unwrap().status,
            AssetStatus::Backlog
        );
        assert!(desk
            .insights()
            .iter()
            .any(|l| l.contains("highlight compilation")));
    }

    #[tokio::test]
    async fn resolving_metadata_refreshes_the_briefing() {
        let mut desk = StudioDesk::new(Arc::new(FixedProbe(MediaMetadata {
            duration_secs: 3725.0,
            width: 1920,
            height: 1080,
        })));
        desk.ingest(vec![file("a.mp4", "video/mp4")]);
        assert!(!desk.insights().iter().any(|l| l.contains("01:02:05")));

        assert_eq!(desk.resolve_metadata().await, 1);
        assert!(desk.insights().iter().any(|l| l.contains("01:02:05")));

        let asset = desk.registry().iter().next().unwrap();
        assert_eq!(asset.derived_notes[0], "Resolution 1920×1080");
    }
}
