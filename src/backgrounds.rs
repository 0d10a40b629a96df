//! Background-asset resolution for the active slide.

use tracing::warn;

use crate::error::Error;

/// Resolves an item index to a displayable background asset (a URL, a file
/// path, a texture handle). Preloading and caching strategy live behind this
/// seam, outside the core.
pub trait BackgroundSource {
    type Asset;

    /// # Errors
    /// Returns [`Error::Preload`] when the asset cannot be fetched.
    fn resolve(&self, index: usize) -> Result<Self::Asset, Error>;
}

impl<A, F> BackgroundSource for F
where
    F: Fn(usize) -> Result<A, Error>,
{
    type Asset = A;

    fn resolve(&self, index: usize) -> Result<A, Error> {
        self(index)
    }
}

/// Keeps the last successfully resolved background on hand so a failed
/// preload degrades to a stale image instead of a missing one.
pub struct Backgrounds<S: BackgroundSource> {
    source: S,
    current: Option<(usize, S::Asset)>,
}

impl<S: BackgroundSource> Backgrounds<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: None,
        }
    }

    /// Switch to the asset for `active_index`. A no-op when that item is
    /// already active. On failure the previous asset stays active and the
    /// error is surfaced for reporting.
    ///
    /// # Errors
    /// Returns [`Error::Preload`] (or whatever the source raises) when the
    /// asset cannot be resolved.
    pub fn activate(&mut self, active_index: usize) -> Result<(), Error> {
        if matches!(self.current, Some((index, _)) if index == active_index) {
            return Ok(());
        }
        match self.source.resolve(active_index) {
            Ok(asset) => {
                self.current = Some((active_index, asset));
                Ok(())
            }
            Err(err) => {
                warn!(index = active_index, %err, "background preload failed; keeping previous asset");
                Err(err)
            }
        }
    }

    /// The asset that should be on screen right now, if any resolved yet.
    #[must_use]
    pub fn active(&self) -> Option<&S::Asset> {
        self.current.as_ref().map(|(_, asset)| asset)
    }

    /// The item index of the asset on screen.
    #[must_use]
    pub fn active_item(&self) -> Option<usize> {
        self.current.as_ref().map(|(index, _)| *index)
    }
}
