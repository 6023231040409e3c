//! ReelDeck studio - the controller layer.
//!
//! One [`StudioDesk`] owns the asset registry, the selection, the agent
//! activity feed, and the cached briefing; an embedding shell renders
//! [`StudioSnapshot`] projections and feeds commands back in.

mod desk;
mod extract;
mod registry;
mod snapshot;

pub use desk::StudioDesk;
pub use extract::MetadataExtractor;
pub use registry::AssetRegistry;
pub use snapshot::{AssetView, StudioSnapshot};
