//! Metadata probe abstraction.
//!
//! The embedding shell owns the actual media backend (a player element, a
//! decoder, ffprobe); ReelDeck only needs one capability from it: given a
//! playable locator, resolve the stream's duration and intrinsic pixel
//! dimensions. This trait is that seam.

use std::time::Duration;

use async_trait::async_trait;
use reeldeck_core::MediaMetadata;
use tracing::debug;

/// Error type for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Errors that can occur while probing a media stream.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The backend could not decode the stream (corrupt or unsupported file)
    #[error("media not readable: {0}")]
    Unreadable(String),

    /// The probe did not resolve within the configured limit
    #[error("probe timed out after {0:?}")]
    TimedOut(Duration),

    /// Any other backend failure
    #[error("{0}")]
    Backend(String),
}

/// Asynchronous metadata probe capability.
///
/// Implementations must resolve duration, width, and height from a single
/// inspection of the stream; partial results are not representable.
#[async_trait]
pub trait MediaProbe: Send + Sync {
    /// Probe the stream behind `locator` once.
    async fn probe(&self, locator: &str) -> Result<MediaMetadata>;
}

/// Wraps a probe with an explicit timeout.
///
/// A backend that never signals readiness would otherwise hang its caller
/// forever; the wrapper converts that into [`ProbeError::TimedOut`].
pub struct ProbeTimeout<P> {
    inner: P,
    limit: Duration,
}

impl<P> ProbeTimeout<P> {
    /// Wrap `inner`, failing any probe that exceeds `limit`.
    pub fn new(inner: P, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl<P: MediaProbe> MediaProbe for ProbeTimeout<P> {
    async fn probe(&self, locator: &str) -> Result<MediaMetadata> {
        match tokio::time::timeout(self.limit, self.inner.probe(locator)).await {
            Ok(result) => result,
            Err(_) => {
                debug!(locator, limit = ?self.limit, "metadata probe timed out");
                Err(ProbeError::TimedOut(self.limit))
            }
        }
    }
}
