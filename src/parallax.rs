//! Scroll-linked parallax tracks.
//!
//! Each tracked element zooms from `from-scale` to `to-scale` as the page
//! scrolls from its top to the element's bottom offset. Progress outside
//! `[0, 1]` is gated: the track holds its last applied value instead of
//! extrapolating.

use crate::config::ParallaxOptions;
use crate::events::ScrollSample;
use crate::tween::lerp;

/// One scroll-driven element.
#[derive(Debug, Clone, Copy)]
pub struct Track {
    bottom: f64,
    from_scale: f64,
    to_scale: f64,
    scale: f64,
}

impl Track {
    /// `bottom_offset` is the element's bottom edge in page coordinates,
    /// reported by the scroll library when the element enters the viewport.
    #[must_use]
    pub fn new(bottom_offset: f64, opts: &ParallaxOptions) -> Self {
        Self {
            bottom: bottom_offset,
            from_scale: opts.from_scale,
            to_scale: opts.to_scale,
            scale: opts.from_scale,
        }
    }

    /// Scroll progress through this track's range, or `None` outside it.
    #[must_use]
    pub fn progress(&self, scroll_y: f64) -> Option<f64> {
        let p = scroll_y / self.bottom;
        (0.0..=1.0).contains(&p).then_some(p)
    }

    /// Apply a scroll position; returns the scale to render with.
    pub fn update(&mut self, scroll_y: f64) -> f64 {
        if let Some(p) = self.progress(scroll_y) {
            self.scale = lerp(self.from_scale, self.to_scale, p);
        }
        self.scale
    }

    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }
}

/// All registered tracks on one page.
#[derive(Debug, Default)]
pub struct Scene {
    tracks: Vec<Track>,
}

impl Scene {
    /// Register a new tracked element; returns its track id.
    pub fn register(&mut self, bottom_offset: f64, opts: &ParallaxOptions) -> usize {
        self.tracks.push(Track::new(bottom_offset, opts));
        self.tracks.len() - 1
    }

    /// Update every track from one scroll sample.
    pub fn on_scroll(&mut self, sample: ScrollSample) {
        for track in &mut self.tracks {
            track.update(sample.y);
        }
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
